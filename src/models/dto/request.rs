use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{ProcessingStatus, QuestionFormat};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    pub lecture_content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendTopicsRequest {
    pub lecture_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub topic: String,
    pub question_format: QuestionFormat,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessingRequest {
    #[validate(length(min = 1, message = "lectureId must not be empty"))]
    pub lecture_id: String,
    pub audio_file: Option<String>,
    pub video_file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProcessingStatusRequest {
    pub status: ProcessingStatus,
}
