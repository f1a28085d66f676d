use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use companion_core::status::get_sea_orm_db_status;
use companion_model::service::ServiceInfo;
use companion_model::status::Health;
use sea_orm::DatabaseConnection;

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = OK, body = ServiceInfo, description = "name and version of the service")
    ),
    tag = "util"
)]
pub(crate) async fn service_info() -> impl IntoResponse {
    Json(ServiceInfo {
        message: "AI Learning Companion API".to_owned(),
        version: "1.0.0".to_owned(),
        description: "API for learning AI/ML concepts with Gemini Pro".to_owned(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = OK, body = Health, description = "service and database are available"),
        (status = SERVICE_UNAVAILABLE, body = Health, description = "database is not reachable"),
    ),
    tag = "util"
)]
pub(crate) async fn health(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    let health = Health::new(get_sea_orm_db_status(&conn, None).await);
    (health.status_code(), Json(health))
}
