use crate::app::AuthConfig;
use crate::auth::{hash_password, verify_password};
use crate::routes::auth::error::LoginError;
use crate::routes::error::ErrorDetail;
use crate::user::ExtractUser;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use companion_db::user;
use companion_db::util::is_unique_violation;
use companion_model::login::{Credentials, Registration, Token};
use companion_model::user::User;
use companion_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = Registration,
    responses(
        (status = OK, body = User, description = "the new account"),
        (status = CONFLICT, body = ErrorDetail, description = "the email is already registered"),
    ),
    tag = "auth"
)]
pub(crate) async fn register(
    Extension(conn): Extension<DatabaseConnection>,
    Json(registration): Json<Registration>,
) -> Result<Json<User>, LoginError> {
    let Registration { name, email, password } = registration;

    if user::Query::find_user_by_email(&conn, &email).await?.is_some() {
        return Err(LoginError::EmailTaken);
    }

    let password_hash = hash_password(&password)?;
    // a concurrent registration can still win between the check and the insert
    let user = user::Mutation::create_user(&conn, &name, &email, &password_hash)
        .await
        .map_err(|error| {
            if is_unique_violation(&error) {
                LoginError::EmailTaken
            } else {
                error.into()
            }
        })?;

    tracing::info!(user_id = user.id, "registered user");
    Ok(Json(user.into_model()))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = Credentials,
    responses(
        (status = OK, body = Token, description = "bearer token for the user"),
        (status = UNAUTHORIZED, body = ErrorDetail, description = "unknown email or wrong password"),
    ),
    tag = "auth"
)]
pub(crate) async fn login(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(auth_config): Extension<AuthConfig>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Token>, LoginError> {
    let Some(user) = user::Query::find_user_by_email(&conn, &credentials.email).await? else {
        return Err(LoginError::InvalidCredentials);
    };
    if !verify_password(&credentials.password, &user.password_hash)? {
        return Err(LoginError::InvalidCredentials);
    }

    let auth = auth_config.as_ref();
    let access_token = auth.keys().issue(user.id, auth.token_ttl())?;
    Ok(Json(Token::bearer(access_token)))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = OK, body = User, description = "the authenticated user"),
        (status = UNAUTHORIZED, body = ErrorDetail),
    ),
    tag = "auth",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn me(ExtractUser(user): ExtractUser) -> Json<User> {
    Json(user)
}
