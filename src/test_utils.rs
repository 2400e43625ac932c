use crate::models::domain::LectureProcessing;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a standard processing record for tests
    pub fn test_record() -> LectureProcessing {
        LectureProcessing::new(
            "cs101-l1",
            Some("audio.mp3".to_string()),
            Some("video.mp4".to_string()),
        )
    }

    /// Creates a processing record for a custom lecture
    pub fn test_record_for_lecture(lecture_id: &str) -> LectureProcessing {
        LectureProcessing::new(lecture_id, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::ProcessingStatus;

    #[test]
    fn test_fixtures_test_record() {
        let record = test_record();
        assert_eq!(record.lecture_id, "cs101-l1");
        assert_eq!(record.status, ProcessingStatus::Uploading);
    }

    #[test]
    fn test_fixtures_test_record_for_lecture() {
        let record = test_record_for_lecture("math201-l4");
        assert_eq!(record.lecture_id, "math201-l4");
        assert!(record.audio_file.is_none());
    }
}
