use crate::routes::error::ErrorDetail;
use crate::routes::topics::error::TopicError;
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use companion_db::{content, topic};
use companion_entity::topic::Model as TopicModel;
use companion_model::content::{Content, NewContent};
use companion_model::topic::{NewTopic, Topic};
use companion_model_tools::convert::IntoModel;
use sea_orm::{ConnectionTrait, DatabaseConnection};

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_topics).post(create_topic))
        .nest(
            "/{topic_id}",
            Router::new().route("/", get(get_topic)).route(
                "/content",
                get(get_topic_content).post(create_content),
            ),
        )
        .with_state(())
}

async fn require_topic<C: ConnectionTrait>(conn: &C, topic_id: i32) -> Result<TopicModel, TopicError> {
    topic::Query::find_topic_by_id(conn, topic_id)
        .await?
        .ok_or(TopicError::TopicNotFound(topic_id))
}

#[utoipa::path(
    get,
    path = "/topics",
    responses(
        (status = OK, body = Vec<Topic>, description = "all topics"),
    ),
    tag = "topics"
)]
pub(crate) async fn get_topics(Extension(conn): Extension<DatabaseConnection>) -> Result<Json<Vec<Topic>>, TopicError> {
    let topics = topic::Query::get_topics(&conn).await?;
    Ok(Json(topics.into_iter().map(IntoModel::into_model).collect()))
}

#[utoipa::path(
    post,
    path = "/topics",
    request_body = NewTopic,
    responses(
        (status = OK, body = Topic, description = "the created topic"),
        (status = UNAUTHORIZED, body = ErrorDetail),
    ),
    tag = "topics",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_topic(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_topic): Json<NewTopic>,
) -> Result<Json<Topic>, TopicError> {
    let topic = topic::Mutation::create_topic(&conn, &new_topic.title, new_topic.description.as_deref()).await?;
    tracing::info!(user_id = user.id, topic_id = topic.id, "created topic");
    Ok(Json(topic.into_model()))
}

#[utoipa::path(
    get,
    path = "/topics/{topic_id}",
    params(
        ("topic_id" = i32, Path, description = "id of the topic"),
    ),
    responses(
        (status = OK, body = Topic),
        (status = NOT_FOUND, body = ErrorDetail, description = "Topic not found"),
    ),
    tag = "topics"
)]
pub(crate) async fn get_topic(
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<Json<Topic>, TopicError> {
    Ok(Json(require_topic(&conn, topic_id).await?.into_model()))
}

#[utoipa::path(
    get,
    path = "/topics/{topic_id}/content",
    params(
        ("topic_id" = i32, Path, description = "id of the topic"),
    ),
    responses(
        (status = OK, body = Vec<Content>, description = "all content entries of the topic"),
        (status = NOT_FOUND, body = ErrorDetail, description = "Topic not found"),
    ),
    tag = "topics"
)]
pub(crate) async fn get_topic_content(
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<Json<Vec<Content>>, TopicError> {
    require_topic(&conn, topic_id).await?;
    let content = content::Query::get_content_by_topic(&conn, topic_id).await?;
    Ok(Json(content.into_iter().map(IntoModel::into_model).collect()))
}

#[utoipa::path(
    post,
    path = "/topics/{topic_id}/content",
    params(
        ("topic_id" = i32, Path, description = "id of the topic"),
    ),
    request_body = NewContent,
    responses(
        (status = OK, body = Content, description = "the stored content entry"),
        (status = UNAUTHORIZED, body = ErrorDetail),
        (status = NOT_FOUND, body = ErrorDetail, description = "Topic not found"),
    ),
    tag = "topics",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_content(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
    Json(new_content): Json<NewContent>,
) -> Result<Json<Content>, TopicError> {
    require_topic(&conn, topic_id).await?;
    let content = content::Mutation::create_content(&conn, topic_id, &new_content.summary_text).await?;
    Ok(Json(content.into_model()))
}
