use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, ErrorResponse},
    models::dto::{
        request::{GenerateQuestionsRequest, RecommendTopicsRequest},
        response::{GenerateQuestionsResponse, RecommendTopicsResponse},
    },
};

#[post("/api/qna/topics")]
pub async fn recommend_topics(
    state: web::Data<AppState>,
    request: web::Json<RecommendTopicsRequest>,
) -> Result<HttpResponse, AppError> {
    let topics = state
        .topic_service
        .recommend_topics(&request.lecture_content)
        .await?;

    Ok(HttpResponse::Ok().json(RecommendTopicsResponse {
        topics,
        success: true,
    }))
}

#[post("/api/qna/generate")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let questions = state
        .quiz_service
        .generate_questions(&request.topic, request.question_format)
        .await?;

    if questions.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "No questions could be generated for this topic".to_string(),
            code: 400,
        }));
    }

    Ok(HttpResponse::Ok().json(GenerateQuestionsResponse {
        questions,
        success: true,
        topic: request.topic,
        format: request.question_format,
    }))
}
