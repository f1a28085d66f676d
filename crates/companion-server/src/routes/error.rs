use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use std::borrow::Cow;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorDetail {
    pub(crate) detail: Cow<'static, str>,
}

impl ErrorDetail {
    pub fn new<A: Into<Cow<'static, str>>>(detail: A) -> Self {
        Self { detail: detail.into() }
    }
}

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> StatusCode;
}

/// Message shown to the client. Internal failures get a generic text, their details only go to the log.
pub(crate) trait PublicDetail {
    fn public_detail(&self) -> Cow<'static, str>;
}

pub(crate) fn error_to_axum_response<T>(error: &T) -> Response
where
    T: GetStatusCode + PublicDetail + std::error::Error + 'static,
{
    let status_code = error.status_code();
    if status_code.is_server_error() {
        tracing::error!(error = error as &dyn std::error::Error, %status_code, "request failed");
    } else {
        tracing::debug!(error = error as &dyn std::error::Error, %status_code, "request rejected");
    }
    (status_code, Json(ErrorDetail::new(error.public_detail()))).into_response()
}

pub(crate) const INTERNAL_ERROR: &str = "Internal server error";
