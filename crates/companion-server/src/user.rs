use crate::app::AuthConfig;
use crate::routes::error::ErrorDetail;
use axum::extract::FromRequestParts;
use axum::{Extension, Json, RequestPartsExt};
use axum_auth::AuthBearer;
use axum_extra::extract::Cached;
use companion_db::user;
use companion_model::user::User;
use companion_model_tools::convert::IntoModel;
use http::request::Parts;
use http::{StatusCode, header};
use sea_orm::DatabaseConnection;
use std::error::Error;

type Rejection = (StatusCode, [(header::HeaderName, &'static str); 1], Json<ErrorDetail>);

fn reject(status: StatusCode, detail: &'static str) -> Rejection {
    (status, [(header::WWW_AUTHENTICATE, "Bearer")], Json(ErrorDetail::new(detail)))
}

fn unauthorized(detail: &'static str) -> Rejection {
    reject(StatusCode::UNAUTHORIZED, detail)
}

fn internal(detail: &'static str) -> Rejection {
    reject(StatusCode::INTERNAL_SERVER_ERROR, detail)
}

#[derive(Clone)]
struct Session {
    user: User,
}

/// The user the bearer token was issued for.
#[derive(Clone)]
pub(crate) struct ExtractUser(pub User);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Ok(AuthBearer(token)) = parts.extract::<AuthBearer>().await else {
            return Err(unauthorized("Not authenticated"));
        };

        let Extension::<AuthConfig>(auth_config) = parts.extract::<Extension<AuthConfig>>().await.map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "auth config not found in app data");
            internal("Auth configuration not found")
        })?;
        let Extension::<DatabaseConnection>(conn) =
            parts
                .extract::<Extension<DatabaseConnection>>()
                .await
                .map_err(|error| {
                    tracing::error!(
                        error = &error as &dyn Error,
                        "database connection not found in app data"
                    );
                    internal("Database Connection not found")
                })?;

        let user_id = auth_config.as_ref().keys().validate(&token).map_err(|error| {
            tracing::debug!(error = &error as &dyn Error, "rejecting token");
            unauthorized("Could not validate credentials")
        })?;

        let user = user::Query::find_user_by_id(&conn, user_id)
            .await
            .map_err(|error| {
                tracing::error!(error = &error as &dyn Error, user_id, "failed to load user");
                internal("Error loading user")
            })?
            .ok_or_else(|| {
                tracing::debug!(user_id, "token subject does not exist");
                unauthorized("Could not validate credentials")
            })?;

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(user.id.to_string()),
                ..Default::default()
            }));
        });

        Ok(Self {
            user: user.into_model(),
        })
    }
}

impl<S> FromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session: Session = Cached::<Session>::from_request_parts(parts, state).await?.0;
        Ok(Self(session.user))
    }
}
