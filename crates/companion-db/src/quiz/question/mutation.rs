use companion_entity::quiz::question::{ActiveModel, Model, Options};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::prelude::*;

pub struct Mutation;

impl Mutation {
    /// Inserts a question. `options` is stored JSON-encoded.
    ///
    /// The caller is responsible for `correct_option` pointing into `options`.
    pub async fn create_question<C: ConnectionTrait>(
        conn: &C,
        topic_id: i32,
        question: &str,
        options: Vec<String>,
        correct_option: i32,
    ) -> Result<Model, DbErr> {
        let options = Options(options)
            .encode()
            .map_err(|error| DbErr::Json(error.to_string()))?;

        let question = ActiveModel {
            id: NotSet,
            topic_id: Set(topic_id),
            question: Set(question.to_owned()),
            options: Set(options),
            correct_option: Set(correct_option),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        question.insert(conn).await
    }
}
