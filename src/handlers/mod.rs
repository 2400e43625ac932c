pub mod chat_handler;
pub mod health_handler;
pub mod processing_handler;
pub mod qna_handler;

pub use chat_handler::chat;
pub use health_handler::health_check;
pub use processing_handler::{
    create_processing_record, get_processing_record, update_processing_status,
};
pub use qna_handler::{generate_questions, recommend_topics};
