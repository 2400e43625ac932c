use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{LectureProcessing, ProcessingStatus},
    repositories::ProcessingRepository,
};

/// Tracks a lecture submission through the external processing pipeline.
pub struct ProcessingService {
    repository: Arc<dyn ProcessingRepository>,
}

impl ProcessingService {
    pub fn new(repository: Arc<dyn ProcessingRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_record(
        &self,
        lecture_id: &str,
        audio_file: Option<String>,
        video_file: Option<String>,
    ) -> AppResult<LectureProcessing> {
        if lecture_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "lecture id must not be empty".to_string(),
            ));
        }

        let record = LectureProcessing::new(lecture_id, audio_file, video_file);
        self.repository.create(record).await
    }

    /// Unconditional write: any target status is accepted and `updated_at`
    /// refreshed. Transition ordering belongs to the external pipeline
    /// reporting its milestones.
    pub async fn advance_status(
        &self,
        id: &str,
        status: ProcessingStatus,
    ) -> AppResult<LectureProcessing> {
        self.repository
            .set_status(id, status, Utc::now())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Processing record with id '{}' not found", id))
            })
    }

    pub async fn get_for_lecture(&self, lecture_id: &str) -> AppResult<Option<LectureProcessing>> {
        self.repository.find_by_lecture(lecture_id).await
    }
}
