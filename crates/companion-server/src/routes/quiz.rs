use crate::routes::error::ErrorDetail;
use crate::routes::quiz::error::QuizError;
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use companion_model::quiz::question::QuizQuestion;
use companion_model::quiz::score::UserScore;
use companion_model::quiz::submission::QuizSubmissionList;
use companion_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/submit", post(submit_quiz))
        .route("/progress", get(get_progress))
        .route("/progress/", get(get_progress))
        .route("/scores/{topic_id}", get(get_scores))
        .route("/{topic_id}", get(get_quiz_questions))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/quiz/{topic_id}",
    params(
        ("topic_id" = i32, Path, description = "id of the topic"),
    ),
    responses(
        (status = OK, body = Vec<QuizQuestion>, description = "questions of the topic without their solutions"),
        (status = NOT_FOUND, body = ErrorDetail, description = "Topic not found"),
    ),
    tag = "quiz"
)]
pub(crate) async fn get_quiz_questions(
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<Json<Vec<QuizQuestion>>, QuizError> {
    Ok(Json(companion_core::quiz::get_quiz_questions(&conn, topic_id).await?))
}

#[utoipa::path(
    post,
    path = "/quiz/submit",
    request_body = QuizSubmissionList,
    responses(
        (status = OK, body = UserScore, description = "the recorded score"),
        (status = UNAUTHORIZED, body = ErrorDetail),
        (status = NOT_FOUND, body = ErrorDetail, description = "Topic not found"),
    ),
    tag = "quiz",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn submit_quiz(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(submission): Json<QuizSubmissionList>,
) -> Result<Json<UserScore>, QuizError> {
    let QuizSubmissionList { topic_id, submissions } = submission;
    let score = companion_core::quiz::submit(&conn, user.id, topic_id, submissions).await?;
    Ok(Json(score.into_model()))
}

#[utoipa::path(
    get,
    path = "/quiz/scores/{topic_id}",
    params(
        ("topic_id" = i32, Path, description = "id of the topic"),
    ),
    responses(
        (status = OK, body = Vec<UserScore>, description = "scores of the current user for the topic"),
        (status = UNAUTHORIZED, body = ErrorDetail),
    ),
    tag = "quiz",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_scores(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<Json<Vec<UserScore>>, QuizError> {
    let scores = companion_db::quiz::score::Query::get_scores_by_topic(&conn, user.id, topic_id).await?;
    Ok(Json(scores.into_iter().map(IntoModel::into_model).collect()))
}

#[utoipa::path(
    get,
    path = "/quiz/progress",
    responses(
        (status = OK, body = Vec<UserScore>, description = "all scores of the current user"),
        (status = UNAUTHORIZED, body = ErrorDetail),
    ),
    tag = "quiz",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_progress(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<UserScore>>, QuizError> {
    let scores = companion_db::quiz::score::Query::get_scores(&conn, user.id).await?;
    Ok(Json(scores.into_iter().map(IntoModel::into_model).collect()))
}
