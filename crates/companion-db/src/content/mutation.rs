use companion_entity::content::{ActiveModel, Model};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::prelude::*;

pub struct Mutation;

impl Mutation {
    pub async fn create_content<C: ConnectionTrait>(conn: &C, topic_id: i32, summary_text: &str) -> Result<Model, DbErr> {
        let content = ActiveModel {
            id: NotSet,
            topic_id: Set(topic_id),
            summary_text: Set(summary_text.to_owned()),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        content.insert(conn).await
    }
}
