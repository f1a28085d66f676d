use crate::routes::error::{GetStatusCode, INTERNAL_ERROR, PublicDetail, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use sea_orm::DbErr;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum LoginError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Database Error")]
    DatabaseError(#[from] DbErr),

    #[error(transparent)]
    Auth(#[from] crate::auth::AuthError),
}

impl GetStatusCode for LoginError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::DatabaseError(_) | Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl PublicDetail for LoginError {
    fn public_detail(&self) -> Cow<'static, str> {
        match self {
            Self::EmailTaken | Self::InvalidCredentials => self.to_string().into(),
            Self::DatabaseError(_) | Self::Auth(_) => INTERNAL_ERROR.into(),
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        error_to_axum_response(&self)
    }
}
