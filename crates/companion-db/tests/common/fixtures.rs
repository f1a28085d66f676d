use companion_entity::{topic, user};
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection) -> user::Model {
    companion_db::user::Mutation::create_user(db, "Test User", "test@example.com", "not-a-real-hash")
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_topic(db: &DatabaseConnection) -> topic::Model {
    companion_db::topic::Mutation::create_topic(db, "Neural Networks", Some("Layers of weighted sums"))
        .await
        .unwrap()
}
