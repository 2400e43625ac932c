use serde::Serialize;

use crate::models::domain::{Question, QuestionFormat};

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendTopicsResponse {
    pub topics: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
    pub success: bool,
    pub topic: String,
    pub format: QuestionFormat,
}
