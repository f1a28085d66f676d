use companion_entity::quiz::question::{self, Entity as Question, Model as QuestionModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;

// stays below the bind variable limit of every supported backend
const MAX_IDS_PER_QUERY: usize = 500;

pub struct Query;

impl Query {
    pub async fn get_questions_by_topic<C: ConnectionTrait>(
        conn: &C,
        topic_id: i32,
    ) -> Result<Vec<QuestionModel>, DbErr> {
        Question::find()
            .filter(question::Column::TopicId.eq(topic_id))
            .order_by_asc(question::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, topic_id, "failed to load questions");
            })
    }

    /// Loads all questions whose id is in `ids`. Unknown ids are silently missing from the result and every
    /// question is returned once, no matter how often its id is repeated.
    ///
    /// Large id lists are split into several queries.
    pub async fn get_questions_by_ids<C: ConnectionTrait>(
        conn: &C,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<Vec<QuestionModel>, DbErr> {
        let mut ids: Vec<i32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        let mut questions = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(MAX_IDS_PER_QUERY) {
            let loaded = Question::find()
                .filter(question::Column::Id.is_in(chunk.iter().copied()))
                .all(conn)
                .await
                .inspect_err(|error| {
                    tracing::error!(error = error as &dyn Error, ids = chunk.len(), "failed to load questions by id");
                })?;
            questions.extend(loaded);
        }
        Ok(questions)
    }
}
