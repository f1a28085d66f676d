use crate::quiz::error::QuizError;
use companion_db::util::FlattenTransactionResultExt;
use companion_entity::quiz::{question, score};
use companion_model::quiz::question::QuizQuestion;
use companion_model::quiz::submission::QuizSubmission;
use companion_model_tools::convert::TryIntoModel;
use sea_orm::{ConnectionTrait, TransactionTrait};
use std::collections::HashMap;
use tracing::instrument;

pub mod error;

async fn require_topic<C: ConnectionTrait>(conn: &C, topic_id: i32) -> Result<(), QuizError> {
    match companion_db::topic::Query::find_topic_by_id(conn, topic_id).await? {
        Some(_) => Ok(()),
        None => Err(QuizError::TopicNotFound(topic_id)),
    }
}

/// All questions of a topic without their solutions.
#[instrument(skip(conn))]
pub async fn get_quiz_questions<C: ConnectionTrait>(conn: &C, topic_id: i32) -> Result<Vec<QuizQuestion>, QuizError> {
    require_topic(conn, topic_id).await?;

    companion_db::quiz::question::Query::get_questions_by_topic(conn, topic_id)
        .await?
        .into_iter()
        .map(|question| TryIntoModel::<QuizQuestion>::try_into_model(question).map_err(QuizError::from))
        .collect()
}

/// Counts the submissions that picked the correct option. Submissions for unknown questions count as wrong.
#[must_use]
pub fn count_correct(questions: &[question::Model], submissions: &[QuizSubmission]) -> usize {
    let correct_options: HashMap<i32, i32> = questions.iter().map(|q| (q.id, q.correct_option)).collect();
    submissions
        .iter()
        .filter(|submission| correct_options.get(&submission.quiz_id) == Some(&submission.selected_option))
        .count()
}

/// Scores a quiz attempt and records it.
///
/// `total_questions` is the number of submissions. The questions are not required to belong to `topic_id`.
#[instrument(skip(conn, submissions), fields(submissions = submissions.len()))]
pub async fn submit<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: i32,
    topic_id: i32,
    submissions: Vec<QuizSubmission>,
) -> Result<score::Model, QuizError> {
    conn.transaction(|txn| {
        Box::pin(async move {
            require_topic(txn, topic_id).await?;

            let questions = companion_db::quiz::question::Query::get_questions_by_ids(
                txn,
                submissions.iter().map(|submission| submission.quiz_id),
            )
            .await?;
            if questions.len() < submissions.len() {
                tracing::debug!(found = questions.len(), "submission references unknown or repeated questions");
            }

            let score = i32::try_from(count_correct(&questions, &submissions)).unwrap_or(i32::MAX);
            let total = i32::try_from(submissions.len()).unwrap_or(i32::MAX);

            let score = companion_db::quiz::score::Mutation::create_score(txn, user_id, topic_id, score, total).await?;
            tracing::info!(user_id, topic_id, score = score.score, total, "quiz submitted");
            Ok::<_, QuizError>(score)
        })
    })
    .await
    .flatten_res()
}
