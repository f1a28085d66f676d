use super::{AuthConfig, build_router};
use crate::AppConfig;
use crate::auth::TokenKeys;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use companion_core::generation::TextGenerator;
use companion_core::generation::error::GenerationError;
use companion_core::openai::error::OpenAiError;
use companion_test_helpers::SqliteDb;
use http::{Method, Request, StatusCode, header};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use test_log::test;
use tower::ServiceExt;

const SECRET: &str = "test-secret";

const TWO_QUESTIONS: &str = r#"Sure!
[
  {"question": "What is overfitting?", "options": ["Memorizing noise", "Underfitting", "Scaling", "Sorting"], "correct_answer": "A"},
  {"question": "Which one is a loss?", "options": ["relu", "cross entropy"], "correct_answer": "cross entropy"}
]"#;

struct FakeGenerator {
    response: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.response
            .clone()
            .ok_or(GenerationError::OpenAi(OpenAiError::Timeout))
    }
}

struct TestApp {
    _db: SqliteDb,
    conn: DatabaseConnection,
    router: Router,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_response(Some(TWO_QUESTIONS)).await
    }

    async fn with_response(response: Option<&str>) -> Self {
        let db = SqliteDb::new().unwrap();
        let conn = db.connect().await.unwrap();
        let prompts = Arc::new(Mutex::default());
        let generator = FakeGenerator {
            response: response.map(ToOwned::to_owned),
            prompts: Arc::clone(&prompts),
        };
        let router = build_router(
            AppConfig::new(generator),
            AuthConfig::new(SECRET, chrono::Duration::minutes(30)),
            conn.clone(),
        );
        Self {
            _db: db,
            conn,
            router,
            prompts,
        }
    }

    async fn request(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    /// Registers a user and returns its id and a fresh token.
    async fn login(&self, email: &str) -> (i32, String) {
        let (status, user) = self
            .post(
                "/auth/register",
                None,
                json!({"name": "Ada", "email": email, "password": "hunter22"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let (status, token) = self
            .post("/auth/login", None, json!({"email": email, "password": "hunter22"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        (
            i32::try_from(user["id"].as_i64().unwrap()).unwrap(),
            token["access_token"].as_str().unwrap().to_owned(),
        )
    }

    async fn create_topic(&self, title: &str) -> i32 {
        companion_db::topic::Mutation::create_topic(&self.conn, title, Some("description"))
            .await
            .unwrap()
            .id
    }

    fn provider_calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[test(tokio::test)]
async fn test_service_info_and_health() {
    let app = TestApp::new().await;

    let (status, info) = app.get("/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["message"], "AI Learning Companion API");
    assert_eq!(info["version"], "1.0.0");

    let (status, health) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, json!({"status": "healthy", "database": "ok"}));
}

#[test(tokio::test)]
async fn test_openapi_document() {
    let app = TestApp::new().await;

    let (status, doc) = app.get("/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/quiz/submit"]["post"].is_object());
    assert!(doc["components"]["securitySchemes"]["token"].is_object());
}

#[test(tokio::test)]
async fn test_register_twice_conflicts() {
    let app = TestApp::new().await;
    let registration = json!({"name": "Ada", "email": "ada@example.com", "password": "hunter22"});

    let (status, user) = app.post("/auth/register", None, registration.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["email"], "ada@example.com");
    assert!(user.get("password_hash").is_none());
    assert!(user["created_at"].is_string());

    let (status, error) = app.post("/auth/register", None, registration).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["detail"], "Email already registered");
}

#[test(tokio::test)]
async fn test_login() {
    let app = TestApp::new().await;
    let (user_id, token) = app.login("ada@example.com").await;

    let (status, error) = app
        .post(
            "/auth/login",
            None,
            json!({"email": "ada@example.com", "password": "wrong"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["detail"], "Incorrect email or password");

    let (status, _) = app
        .post(
            "/auth/login",
            None,
            json!({"email": "bob@example.com", "password": "hunter22"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, me) = app.get("/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], user_id);
    assert_eq!(me["email"], "ada@example.com");
}

#[test(tokio::test)]
async fn test_token_type() {
    let app = TestApp::new().await;
    app.login("ada@example.com").await;

    let (_, token) = app
        .post(
            "/auth/login",
            None,
            json!({"email": "ada@example.com", "password": "hunter22"}),
        )
        .await;
    assert_eq!(token["token_type"], "bearer");
}

#[test(tokio::test)]
async fn test_protected_without_token() {
    let app = TestApp::new().await;

    let (status, error) = app.post("/topics", None, json!({"title": "Sneaky"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["detail"], "Not authenticated");

    let (status, error) = app
        .post("/topics", Some("not-a-token"), json!({"title": "Sneaky"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["detail"], "Could not validate credentials");

    assert_eq!(
        companion_entity::topic::Entity::find().count(&app.conn).await.unwrap(),
        0
    );

    for uri in ["/auth/me", "/quiz/progress", "/quiz/scores/1"] {
        let (status, _) = app.get(uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[test(tokio::test)]
async fn test_token_of_deleted_user() {
    let app = TestApp::new().await;
    let (user_id, token) = app.login("ada@example.com").await;
    companion_db::user::Mutation::delete_user(&app.conn, user_id)
        .await
        .unwrap();

    let (status, error) = app.get("/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["detail"], "Could not validate credentials");
}

#[test(tokio::test)]
async fn test_expired_token() {
    let app = TestApp::new().await;
    let (user_id, _) = app.login("ada@example.com").await;
    let expired = TokenKeys::from_secret(SECRET)
        .issue(user_id, chrono::Duration::hours(-2))
        .unwrap();

    let (status, _) = app.get("/auth/me", Some(&expired)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[test(tokio::test)]
async fn test_token_with_other_secret() {
    let app = TestApp::new().await;
    let (user_id, _) = app.login("ada@example.com").await;
    let forged = TokenKeys::from_secret("other-secret")
        .issue(user_id, chrono::Duration::minutes(5))
        .unwrap();

    let (status, _) = app.get("/auth/me", Some(&forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[test(tokio::test)]
async fn test_topics() {
    let app = TestApp::new().await;
    let (_, token) = app.login("ada@example.com").await;

    let (status, topics) = app.get("/topics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(topics, json!([]));

    let (status, created) = app
        .post(
            "/topics",
            Some(&token),
            json!({"title": "Computer Vision", "description": "Seeing machines"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let topic_id = created["id"].as_i64().unwrap();
    assert!(created["created_at"].is_string());

    let (status, topic) = app.get(&format!("/topics/{topic_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(topic, created);
    assert_eq!(topic["title"], "Computer Vision");
    assert_eq!(topic["description"], "Seeing machines");

    let (_, untitled) = app
        .post("/topics", Some(&token), json!({"title": "No description"}))
        .await;
    assert_eq!(untitled["description"], Value::Null);

    let (_, topics) = app.get("/topics", None).await;
    assert_eq!(topics.as_array().unwrap().len(), 2);
}

#[test(tokio::test)]
async fn test_trailing_slash_routes() {
    let app = TestApp::new().await;
    let (_, token) = app.login("ada@example.com").await;

    let (status, created) = app
        .post("/topics/", Some(&token), json!({"title": "Robotics"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["title"], "Robotics");

    for uri in ["/topics", "/topics/"] {
        let (status, topics) = app.get(uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(topics, json!([created]), "{uri}");
    }

    for uri in ["/quiz/progress", "/quiz/progress/"] {
        let (status, progress) = app.get(uri, Some(&token)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(progress, json!([]), "{uri}");
    }

    let (status, _) = app.get("/quiz/progress/", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[test(tokio::test)]
async fn test_topic_content() {
    let app = TestApp::new().await;
    let (_, token) = app.login("ada@example.com").await;
    let topic_id = app.create_topic("Neural Networks").await;

    let (status, content) = app.get(&format!("/topics/{topic_id}/content"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content, json!([]));

    let (status, created) = app
        .post(
            &format!("/topics/{topic_id}/content"),
            Some(&token),
            json!({"summary_text": "Layers of neurons"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["topic_id"], topic_id);

    let (_, content) = app.get(&format!("/topics/{topic_id}/content"), None).await;
    assert_eq!(content.as_array().unwrap().len(), 1);
    assert_eq!(content[0]["summary_text"], "Layers of neurons");

    let (status, _) = app
        .post(
            &format!("/topics/{topic_id}/content"),
            None,
            json!({"summary_text": "anonymous"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[test(tokio::test)]
async fn test_absent_topic_is_not_found() {
    let app = TestApp::new().await;
    let (_, token) = app.login("ada@example.com").await;

    for uri in ["/topics/42", "/topics/42/content", "/quiz/42"] {
        let (status, error) = app.get(uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(error["detail"], "Topic not found");
    }

    let (status, _) = app
        .post("/topics/42/content", Some(&token), json!({"summary_text": "x"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post("/quiz/submit", Some(&token), json!({"topic_id": 42, "submissions": []}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post("/gemini/generate-quiz", Some(&token), json!({"topic_id": 42}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.post("/gemini/explain-topic/42", Some(&token), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(app.provider_calls(), 0);
}

#[test(tokio::test)]
async fn test_malformed_body() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test(tokio::test)]
async fn test_quiz_flow() {
    let app = TestApp::new().await;
    let (user_id, token) = app.login("ada@example.com").await;
    let topic_id = app.create_topic("Supervised Learning").await;
    let other_topic_id = app.create_topic("Unsupervised Learning").await;

    let first = companion_db::quiz::question::Mutation::create_question(
        &app.conn,
        topic_id,
        "What is a label?",
        vec!["The target".to_owned(), "A feature".to_owned()],
        0,
    )
    .await
    .unwrap();
    let second = companion_db::quiz::question::Mutation::create_question(
        &app.conn,
        topic_id,
        "Which task predicts a number?",
        vec!["Classification".to_owned(), "Regression".to_owned()],
        1,
    )
    .await
    .unwrap();

    let (status, questions) = app.get(&format!("/quiz/{topic_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 2);
    for question in questions {
        assert!(question.get("correct_option").is_none());
        assert_eq!(question["options"].as_array().unwrap().len(), 2);
    }

    let (status, score) = app
        .post(
            "/quiz/submit",
            Some(&token),
            json!({
                "topic_id": topic_id,
                "submissions": [
                    {"quiz_id": first.id, "selected_option": 0},
                    {"quiz_id": second.id, "selected_option": 1}
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(score["score"], 2);
    assert_eq!(score["total_questions"], 2);
    assert_eq!(score["user_id"], user_id);

    let (_, score) = app
        .post(
            "/quiz/submit",
            Some(&token),
            json!({"topic_id": topic_id, "submissions": [{"quiz_id": 9999, "selected_option": 0}]}),
        )
        .await;
    assert_eq!(score["score"], 0);
    assert_eq!(score["total_questions"], 1);

    let (status, score) = app
        .post(
            "/quiz/submit",
            Some(&token),
            json!({"topic_id": other_topic_id, "submissions": []}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(score["score"], 0);
    assert_eq!(score["total_questions"], 0);

    let (status, scores) = app.get(&format!("/quiz/scores/{topic_id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores.as_array().unwrap().len(), 2);

    let (status, progress) = app.get("/quiz/progress", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress.as_array().unwrap().len(), 3);

    let (_, other_token) = app.login("bob@example.com").await;
    let (_, progress) = app.get("/quiz/progress", Some(&other_token)).await;
    assert_eq!(progress, json!([]));
}

#[test(tokio::test)]
async fn test_generate_quiz() {
    let app = TestApp::new().await;
    let (_, token) = app.login("ada@example.com").await;
    let topic_id = app.create_topic("Machine Learning Fundamentals").await;

    let (status, quizzes) = app
        .post(
            "/gemini/generate-quiz",
            Some(&token),
            json!({"topic_id": topic_id, "num_questions": 2}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let quizzes = quizzes.as_array().unwrap();
    assert_eq!(quizzes.len(), 2);
    assert_eq!(quizzes[0]["correct_option"], 0);
    assert_eq!(quizzes[1]["correct_option"], 1);
    assert_eq!(quizzes[1]["topic_id"], topic_id);
    assert_eq!(app.provider_calls(), 1);

    let (_, questions) = app.get(&format!("/quiz/{topic_id}"), None).await;
    assert_eq!(questions.as_array().unwrap().len(), 2);
}

#[test(tokio::test)]
async fn test_generate_quiz_requires_auth() {
    let app = TestApp::new().await;
    let topic_id = app.create_topic("Decision Trees").await;

    let (status, _) = app
        .post("/gemini/generate-quiz", None, json!({"topic_id": topic_id}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.provider_calls(), 0);
    assert_eq!(
        companion_entity::quiz::question::Entity::find()
            .count(&app.conn)
            .await
            .unwrap(),
        0
    );
}

#[test(tokio::test)]
async fn test_generate_quiz_without_json() {
    let app = TestApp::with_response(Some("I cannot help with that.")).await;
    let (_, token) = app.login("ada@example.com").await;
    let topic_id = app.create_topic("Decision Trees").await;

    let (status, error) = app
        .post("/gemini/generate-quiz", Some(&token), json!({"topic_id": topic_id}))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["detail"], "Error parsing generated quiz");
}

#[test(tokio::test)]
async fn test_provider_failure() {
    let app = TestApp::with_response(None).await;
    let (_, token) = app.login("ada@example.com").await;
    let topic_id = app.create_topic("Computer Vision").await;

    let (status, error) = app
        .post("/gemini/query", Some(&token), json!({"prompt": "What is a CNN?"}))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["detail"], "Error generating response");

    let (status, _) = app
        .post(&format!("/gemini/explain-topic/{topic_id}"), Some(&token), json!({}))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        companion_entity::content::Entity::find().count(&app.conn).await.unwrap(),
        0
    );
}

#[test(tokio::test)]
async fn test_explain_topic_stores_content() {
    let app = TestApp::with_response(Some("Reinforcement learning is learning from rewards.")).await;
    let (_, token) = app.login("ada@example.com").await;
    let topic_id = app.create_topic("Reinforcement Learning").await;

    let (status, response) = app
        .post(&format!("/gemini/explain-topic/{topic_id}"), Some(&token), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response,
        json!({"response": "Reinforcement learning is learning from rewards.", "topic_id": topic_id})
    );

    let (_, content) = app.get(&format!("/topics/{topic_id}/content"), None).await;
    assert_eq!(
        content[0]["summary_text"],
        "Reinforcement learning is learning from rewards."
    );
}

#[test(tokio::test)]
async fn test_tutor_query() {
    let app = TestApp::with_response(Some("A gradient points uphill.")).await;
    let (_, token) = app.login("ada@example.com").await;

    let (status, response) = app
        .post(
            "/gemini/query",
            Some(&token),
            json!({"prompt": "What is a gradient?", "topic_id": 3}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"response": "A gradient points uphill.", "topic_id": 3}));

    let prompts = app.prompts.lock().unwrap();
    assert!(prompts[0].contains("What is a gradient?"));
}
