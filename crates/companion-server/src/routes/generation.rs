use crate::AppConfig;
use crate::routes::error::ErrorDetail;
use crate::routes::generation::error::GenerationError;
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::routing::post;
use axum::{Extension, Json, Router};
use companion_core::generation;
use companion_model::generation::{GenerationResponse, QuizGenerationRequest, TutorQuery};
use companion_model::quiz::question::Quiz;
use companion_model_tools::convert::TryIntoModel;
use sea_orm::DatabaseConnection;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/query", post(query))
        .route("/generate-quiz", post(generate_quiz))
        .route("/explain-topic/{topic_id}", post(explain_topic))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/gemini/query",
    request_body = TutorQuery,
    responses(
        (status = OK, body = GenerationResponse, description = "answer of the tutor"),
        (status = UNAUTHORIZED, body = ErrorDetail),
        (status = INTERNAL_SERVER_ERROR, body = ErrorDetail, description = "the llm service failed"),
    ),
    tag = "gemini",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn query(
    ExtractUser(user): ExtractUser,
    Extension(app_config): Extension<AppConfig>,
    Json(tutor_query): Json<TutorQuery>,
) -> Result<Json<GenerationResponse>, GenerationError> {
    let TutorQuery { prompt, topic_id } = tutor_query;
    tracing::debug!(user_id = user.id, topic_id, "tutor query");
    let response = generation::tutor(app_config.generator(), &prompt).await?;
    Ok(Json(GenerationResponse { response, topic_id }))
}

#[utoipa::path(
    post,
    path = "/gemini/generate-quiz",
    request_body = QuizGenerationRequest,
    responses(
        (status = OK, body = Vec<Quiz>, description = "the stored questions including their solutions"),
        (status = UNAUTHORIZED, body = ErrorDetail),
        (status = NOT_FOUND, body = ErrorDetail, description = "Topic not found"),
        (status = INTERNAL_SERVER_ERROR, body = ErrorDetail, description = "the llm service failed or returned no usable questions"),
    ),
    tag = "gemini",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn generate_quiz(
    ExtractUser(user): ExtractUser,
    Extension(app_config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(request): Json<QuizGenerationRequest>,
) -> Result<Json<Vec<Quiz>>, GenerationError> {
    let questions =
        generation::generate_quiz(&conn, app_config.generator(), request.topic_id, request.num_questions).await?;
    tracing::info!(
        user_id = user.id,
        topic_id = request.topic_id,
        stored = questions.len(),
        "generated quiz"
    );

    let quizzes = questions
        .into_iter()
        .map(TryIntoModel::<Quiz>::try_into_model)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(quizzes))
}

#[utoipa::path(
    post,
    path = "/gemini/explain-topic/{topic_id}",
    params(
        ("topic_id" = i32, Path, description = "id of the topic"),
    ),
    responses(
        (status = OK, body = GenerationResponse, description = "the explanation, also stored as topic content"),
        (status = UNAUTHORIZED, body = ErrorDetail),
        (status = NOT_FOUND, body = ErrorDetail, description = "Topic not found"),
        (status = INTERNAL_SERVER_ERROR, body = ErrorDetail, description = "the llm service failed"),
    ),
    tag = "gemini",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn explain_topic(
    ExtractUser(_user): ExtractUser,
    Extension(app_config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<Json<GenerationResponse>, GenerationError> {
    let content = generation::explain_topic(&conn, app_config.generator(), topic_id).await?;
    Ok(Json(GenerationResponse {
        response: content.summary_text,
        topic_id: Some(content.topic_id),
    }))
}
