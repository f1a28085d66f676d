use companion_entity::topic::{Entity as TopicEntity, Model as Topic};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get_topics<C: ConnectionTrait>(conn: &C) -> Result<Vec<Topic>, DbErr> {
        TopicEntity::find().all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load topics");
        })
    }

    pub async fn find_topic_by_id<C: ConnectionTrait>(conn: &C, topic_id: i32) -> Result<Option<Topic>, DbErr> {
        TopicEntity::find_by_id(topic_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, topic_id, "failed to load topic");
        })
    }

    pub async fn count_topics<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        TopicEntity::find().count(conn).await
    }
}
