use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("topic {0} not found")]
    TopicNotFound(i32),

    #[error(transparent)]
    Conversion(#[from] companion_model_tools::error::Error),
}
