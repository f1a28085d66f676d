use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizSubmission {
    pub quiz_id: i32,
    pub selected_option: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizSubmissionList {
    pub topic_id: i32,
    pub submissions: Vec<QuizSubmission>,
}
