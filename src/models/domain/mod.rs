pub mod lecture_processing;
pub mod question;
pub mod search_snippet;

pub use lecture_processing::{LectureProcessing, ProcessingStatus};
pub use question::{McqQuestion, OpenEndedQuestion, Question, QuestionFormat};
pub use search_snippet::SearchSnippet;
