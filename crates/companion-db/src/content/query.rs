use companion_entity::content::{self, Entity as ContentEntity, Model as Content};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get_content_by_topic<C: ConnectionTrait>(conn: &C, topic_id: i32) -> Result<Vec<Content>, DbErr> {
        ContentEntity::find()
            .filter(content::Column::TopicId.eq(topic_id))
            .order_by_asc(content::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, topic_id, "failed to load content");
            })
    }
}
