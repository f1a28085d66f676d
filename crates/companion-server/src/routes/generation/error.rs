use crate::routes::error::{GetStatusCode, INTERNAL_ERROR, PublicDetail, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use companion_core::generation::error::GenerationError as CoreGenerationError;
use http::StatusCode;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum GenerationError {
    #[error(transparent)]
    Generation(#[from] CoreGenerationError),

    #[error(transparent)]
    Conversion(#[from] companion_model_tools::error::Error),
}

impl GetStatusCode for GenerationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Generation(CoreGenerationError::TopicNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Generation(_) | Self::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl PublicDetail for GenerationError {
    fn public_detail(&self) -> Cow<'static, str> {
        match self {
            Self::Generation(CoreGenerationError::TopicNotFound(_)) => "Topic not found".into(),
            Self::Generation(CoreGenerationError::NoJsonFound | CoreGenerationError::InvalidJson(_)) => {
                "Error parsing generated quiz".into()
            }
            Self::Generation(CoreGenerationError::OpenAi(_)) => "Error generating response".into(),
            Self::Generation(_) | Self::Conversion(_) => INTERNAL_ERROR.into(),
        }
    }
}

impl IntoResponse for GenerationError {
    fn into_response(self) -> Response {
        error_to_axum_response(&self)
    }
}
