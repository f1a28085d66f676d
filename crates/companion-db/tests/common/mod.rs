pub mod fixtures;

use sea_orm::{Database, DatabaseConnection};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    companion_db::schema::create_tables(&db).await.unwrap();
    db
}
