use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline stage of a lecture submission. Stages advance linearly
/// (uploading -> processing -> generating -> completed); ordering is the
/// responsibility of the external pipeline driving the updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Uploading,
    Processing,
    Generating,
    Completed,
}

impl std::fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStatus::Uploading => write!(f, "uploading"),
            ProcessingStatus::Processing => write!(f, "processing"),
            ProcessingStatus::Generating => write!(f, "generating"),
            ProcessingStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureProcessing {
    pub id: String,
    pub lecture_id: String,
    pub status: ProcessingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LectureProcessing {
    pub fn new(lecture_id: &str, audio_file: Option<String>, video_file: Option<String>) -> Self {
        let now = Utc::now();
        LectureProcessing {
            id: format!("proc_{}", Uuid::new_v4()),
            lecture_id: lecture_id.to_string(),
            status: ProcessingStatus::Uploading,
            audio_file,
            video_file,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_uploading() {
        let record = LectureProcessing::new("cs101-l1", Some("audio.mp3".to_string()), None);

        assert_eq!(record.status, ProcessingStatus::Uploading);
        assert_eq!(record.lecture_id, "cs101-l1");
        assert!(record.id.starts_with("proc_"));
        assert_eq!(record.created_at, record.updated_at);
        assert!(record.video_file.is_none());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json =
            serde_json::to_string(&ProcessingStatus::Generating).expect("status should serialize");
        assert_eq!(json, "\"generating\"");

        let parsed: ProcessingStatus =
            serde_json::from_str("\"completed\"").expect("status should deserialize");
        assert_eq!(parsed, ProcessingStatus::Completed);
    }

    #[test]
    fn status_display_matches_wire_format() {
        assert_eq!(ProcessingStatus::Uploading.to_string(), "uploading");
        assert_eq!(ProcessingStatus::Completed.to_string(), "completed");
    }
}
