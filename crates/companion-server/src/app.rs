use crate::auth::TokenKeys;
use crate::opt::Auth;
use crate::{AppConfig, routes};
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{HeaderValue, Method, header};
use sea_orm::DatabaseConnection;
use sentry_tower::{NewSentryLayer, SentryHttpLayer};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

#[cfg(test)]
mod tests;

pub(crate) struct InnerAuthConfig {
    keys: TokenKeys,
    token_ttl: chrono::Duration,
}

impl InnerAuthConfig {
    pub(crate) fn keys(&self) -> &TokenKeys {
        &self.keys
    }

    pub(crate) fn token_ttl(&self) -> chrono::Duration {
        self.token_ttl
    }
}

#[derive(Clone)]
pub(crate) struct AuthConfig(Arc<InnerAuthConfig>);

impl AuthConfig {
    pub(crate) fn new(secret: &str, token_ttl: chrono::Duration) -> Self {
        Self(Arc::new(InnerAuthConfig {
            keys: TokenKeys::from_secret(secret),
            token_ttl,
        }))
    }
}

impl AsRef<InnerAuthConfig> for AuthConfig {
    fn as_ref(&self) -> &InnerAuthConfig {
        &self.0
    }
}

/// All routes with their shared state, without the process wide layers.
pub(crate) fn build_router(app_config: AppConfig, auth_config: AuthConfig, conn: DatabaseConnection) -> Router {
    Router::new()
        .merge(routes::swagger::create_router())
        .merge(routes::global::create_router())
        .nest("/auth", routes::auth::create_router())
        .nest("/topics", routes::topics::create_router())
        // nesting does not match the trailing slash form clients use
        .route(
            "/topics/",
            get(routes::topics::get_topics).post(routes::topics::create_topic),
        )
        .nest("/quiz", routes::quiz::create_router())
        .nest("/gemini", routes::generation::create_router())
        .layer(
            ServiceBuilder::new()
                .layer(Extension(app_config))
                .layer(Extension(auth_config))
                .layer(Extension(conn)),
        )
}

pub(crate) fn create_app(app_config: AppConfig, auth: &Auth, conn: DatabaseConnection) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("api")
        .with_default_metrics()
        .build_pair();

    tracing::info!(origins = ?auth.origins, "allowing origins");
    let cors = CorsLayer::new()
        .allow_origin(
            auth.origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<HeaderValue>, _>>()?,
        )
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let auth_config = AuthConfig::new(&auth.jwt_secret, chrono::Duration::minutes(auth.token_ttl_minutes));

    let app = build_router(app_config, auth_config, conn)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(SentryHttpLayer::with_transaction())
                .layer(prometheus_layer)
                .layer(cors),
        );
    Ok(app)
}
