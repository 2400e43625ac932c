use serde::{Deserialize, Serialize};

use crate::constants::prompts;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionFormat {
    Mcq,
    Subjective,
    Mathematical,
}

impl QuestionFormat {
    /// Phrase appended to the web-search query when grounding generation.
    pub fn search_phrase(&self) -> &'static str {
        match self {
            QuestionFormat::Mcq => "multiple choice questions",
            QuestionFormat::Subjective => "subjective questions",
            QuestionFormat::Mathematical => "mathematical problems",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            QuestionFormat::Mcq => prompts::MCQ_INSTRUCTIONS,
            QuestionFormat::Subjective => prompts::SUBJECTIVE_INSTRUCTIONS,
            QuestionFormat::Mathematical => prompts::MATHEMATICAL_INSTRUCTIONS,
        }
    }
}

impl std::fmt::Display for QuestionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionFormat::Mcq => write!(f, "mcq"),
            QuestionFormat::Subjective => write!(f, "subjective"),
            QuestionFormat::Mathematical => write!(f, "mathematical"),
        }
    }
}

/// A multiple-choice question as emitted by the model. Option count and the
/// `correct` index are passed through unvalidated; the grading UI owns any
/// stricter interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqQuestion {
    #[serde(default)]
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct: i64, // 0-based index into options
    pub explanation: String,
}

/// Shared shape for subjective and mathematical questions; the format tag
/// travels outside the record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OpenEndedQuestion {
    #[serde(default)]
    pub id: String,
    pub question: String,
    pub solution: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Question {
    Mcq(McqQuestion),
    OpenEnded(OpenEndedQuestion),
}

impl Question {
    pub fn id(&self) -> &str {
        match self {
            Question::Mcq(q) => &q.id,
            Question::OpenEnded(q) => &q.id,
        }
    }

    pub fn set_id(&mut self, id: String) {
        match self {
            Question::Mcq(q) => q.id = id,
            Question::OpenEnded(q) => q.id = id,
        }
    }
}
