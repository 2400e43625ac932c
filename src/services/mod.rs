pub mod chat_service;
pub mod completion_client;
pub mod json_helpers;
pub mod processing_service;
pub mod quiz_service;
pub mod search_client;
pub mod topic_service;

pub use chat_service::ChatService;
pub use completion_client::{CompletionProvider, GeminiCompletionClient};
pub use processing_service::ProcessingService;
pub use quiz_service::QuizService;
pub use search_client::{GoogleSearchClient, SearchProvider};
pub use topic_service::TopicService;
