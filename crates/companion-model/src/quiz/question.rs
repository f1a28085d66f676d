use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A question as presented to a learner. The correct option is not part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestion {
    pub id: i32,
    pub question: String,
    pub options: Vec<String>,
}

/// A stored question including its solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Quiz {
    pub id: i32,
    pub topic_id: i32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: i32,
    pub created_at: chrono::NaiveDateTime,
}
