use crate::openai::error::OpenAiError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("llm service error: {0}")]
    OpenAi(#[from] OpenAiError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("topic {0} not found")]
    TopicNotFound(i32),

    #[error("no JSON array found in the generated text")]
    NoJsonFound,

    #[error("generated JSON is invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
