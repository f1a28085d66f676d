use crate::routes::error::{GetStatusCode, INTERNAL_ERROR, PublicDetail, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use companion_core::quiz::error::QuizError as CoreQuizError;
use http::StatusCode;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum QuizError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error(transparent)]
    QuizError(#[from] CoreQuizError),
}

impl GetStatusCode for QuizError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::QuizError(CoreQuizError::TopicNotFound(_)) => StatusCode::NOT_FOUND,
            Self::SeaOrmError(_) | Self::QuizError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl PublicDetail for QuizError {
    fn public_detail(&self) -> Cow<'static, str> {
        match self {
            Self::QuizError(CoreQuizError::TopicNotFound(_)) => "Topic not found".into(),
            Self::SeaOrmError(_) | Self::QuizError(_) => INTERNAL_ERROR.into(),
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        error_to_axum_response(&self)
    }
}
