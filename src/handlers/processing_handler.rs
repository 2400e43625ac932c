use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateProcessingRequest, UpdateProcessingStatusRequest},
};

#[post("/api/lectures/processing")]
pub async fn create_processing_record(
    state: web::Data<AppState>,
    request: web::Json<CreateProcessingRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let record = state
        .processing_service
        .create_record(&request.lecture_id, request.audio_file, request.video_file)
        .await?;

    Ok(HttpResponse::Created().json(record))
}

#[put("/api/lectures/processing/{id}/status")]
pub async fn update_processing_status(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateProcessingStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let record = state
        .processing_service
        .advance_status(&id, request.status)
        .await?;

    Ok(HttpResponse::Ok().json(record))
}

/// Returns the record for a lecture, or a JSON `null` body when none exists.
#[get("/api/lectures/{lecture_id}/processing")]
pub async fn get_processing_record(
    state: web::Data<AppState>,
    lecture_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let record = state.processing_service.get_for_lecture(&lecture_id).await?;
    Ok(HttpResponse::Ok().json(record))
}
