use companion_entity::topic::{ActiveModel, Model};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::prelude::*;

pub struct Mutation;

impl Mutation {
    pub async fn create_topic<C: ConnectionTrait>(
        conn: &C,
        title: &str,
        description: Option<&str>,
    ) -> Result<Model, DbErr> {
        let topic = ActiveModel {
            id: NotSet,
            title: Set(title.to_owned()),
            description: Set(description.map(ToOwned::to_owned)),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        topic.insert(conn).await
    }
}
