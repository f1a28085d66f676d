use crate::routes::error::{GetStatusCode, INTERNAL_ERROR, PublicDetail, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum TopicError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("topic {0} not found")]
    TopicNotFound(i32),
}

impl GetStatusCode for TopicError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::SeaOrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TopicNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl PublicDetail for TopicError {
    fn public_detail(&self) -> Cow<'static, str> {
        match self {
            Self::SeaOrmError(_) => INTERNAL_ERROR.into(),
            Self::TopicNotFound(_) => "Topic not found".into(),
        }
    }
}

impl IntoResponse for TopicError {
    fn into_response(self) -> Response {
        error_to_axum_response(&self)
    }
}
