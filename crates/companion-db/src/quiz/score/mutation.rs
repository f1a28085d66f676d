use companion_entity::quiz::score::{ActiveModel, Model};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::prelude::*;

pub struct Mutation;

impl Mutation {
    pub async fn create_score<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        topic_id: i32,
        score: i32,
        total_questions: i32,
    ) -> Result<Model, DbErr> {
        let score = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            topic_id: Set(topic_id),
            score: Set(score),
            total_questions: Set(total_questions),
            timestamp: Set(chrono::Utc::now().naive_utc()),
        };
        score.insert(conn).await
    }
}
