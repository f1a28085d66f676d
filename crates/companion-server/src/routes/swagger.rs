use super::{auth, generation, global, quiz, topics};

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    info(title = "AI Learning Companion API", version = "1.0.0"),
    paths(
        global::service_info,
        global::health,
        auth::register,
        auth::login,
        auth::me,
        topics::get_topics,
        topics::create_topic,
        topics::get_topic,
        topics::get_topic_content,
        topics::create_content,
        quiz::get_quiz_questions,
        quiz::submit_quiz,
        quiz::get_scores,
        quiz::get_progress,
        generation::query,
        generation::generate_quiz,
        generation::explain_topic,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
pub(crate) struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // we can unwrap safely, since there already are components registered.
        let components = openapi.components.as_mut().expect("components not registered");
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token from /auth/login"))
                    .build(),
            ),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // rapidoc points at the document served by swagger ui
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}
