use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const fn default_num_questions() -> u32 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TutorQuery {
    pub prompt: String,
    #[serde(default)]
    pub topic_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationResponse {
    pub response: String,
    pub topic_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizGenerationRequest {
    pub topic_id: i32,
    #[serde(default = "default_num_questions")]
    #[schema(default = 5, minimum = 1)]
    pub num_questions: u32,
}
