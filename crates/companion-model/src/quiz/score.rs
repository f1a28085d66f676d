use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserScore {
    pub id: i32,
    pub user_id: i32,
    pub topic_id: i32,
    pub score: i32,
    pub total_questions: i32,
    pub timestamp: chrono::NaiveDateTime,
}
