//! Content generation on top of a [`TextGenerator`].
//!
//! Quiz generation extracts a JSON array from the generated text, drops every element that is not a usable
//! multiple-choice question and stores the rest in one transaction. Explanations are stored as content as they
//! are. Tutor answers are not stored at all.

use companion_db::util::FlattenTransactionResultExt;
use companion_entity::{content, quiz::question, topic};
use sea_orm::{ConnectionTrait, TransactionTrait};
use std::error::Error;
use tracing::instrument;

pub mod error;
pub mod extract;
pub mod generator;
mod prompt;
pub mod validate;

use error::GenerationError;
pub use generator::{OpenAiGenerator, TextGenerator};
use validate::GeneratedQuestion;

async fn load_topic<C: ConnectionTrait>(conn: &C, topic_id: i32) -> Result<topic::Model, GenerationError> {
    companion_db::topic::Query::find_topic_by_id(conn, topic_id)
        .await?
        .ok_or(GenerationError::TopicNotFound(topic_id))
}

/// Generates `num_questions` questions for a topic and stores the usable ones.
///
/// Returns the stored rows. Fewer rows than requested are returned if the provider produced malformed elements.
#[instrument(skip(conn, generator))]
pub async fn generate_quiz<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    generator: &dyn TextGenerator,
    topic_id: i32,
    num_questions: u32,
) -> Result<Vec<question::Model>, GenerationError> {
    let topic = load_topic(conn, topic_id).await?;

    let text = generator.generate(&prompt::quiz_prompt(&topic, num_questions)).await?;
    let elements = extract::parse_question_array(&text).inspect_err(|error| {
        tracing::warn!(error = error as &dyn Error, response = %text, "unusable quiz response");
    })?;

    let valid: Vec<_> = elements
        .iter()
        .enumerate()
        .filter_map(|(position, element)| match GeneratedQuestion::classify(element) {
            GeneratedQuestion::Valid {
                question,
                options,
                correct_index,
            } => Some((question, options, correct_index)),
            GeneratedQuestion::Malformed { reason } => {
                tracing::warn!(position, reason, "dropping malformed generated question");
                None
            }
        })
        .collect();
    tracing::debug!(generated = elements.len(), valid = valid.len(), "classified generated questions");

    conn.transaction(|txn| {
        Box::pin(async move {
            let mut stored = Vec::with_capacity(valid.len());
            for (text, options, correct_index) in valid {
                // the index points into options, so it always fits
                let correct_option = i32::try_from(correct_index).unwrap_or_default();
                stored.push(
                    companion_db::quiz::question::Mutation::create_question(
                        txn,
                        topic_id,
                        &text,
                        options,
                        correct_option,
                    )
                    .await?,
                );
            }
            Ok::<_, GenerationError>(stored)
        })
    })
    .await
    .flatten_res()
}

/// Generates an explanation of a topic and stores it as a content entry.
#[instrument(skip(conn, generator))]
pub async fn explain_topic<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    generator: &dyn TextGenerator,
    topic_id: i32,
) -> Result<content::Model, GenerationError> {
    let topic = load_topic(conn, topic_id).await?;

    let text = generator.generate(&prompt::explanation_prompt(&topic)).await?;
    Ok(companion_db::content::Mutation::create_content(conn, topic.id, &text).await?)
}

/// Answers a free-form learner question.
#[instrument(skip_all)]
pub async fn tutor(generator: &dyn TextGenerator, prompt: &str) -> Result<String, GenerationError> {
    generator.generate(&prompt::tutor_prompt(prompt)).await
}
