pub mod processing_repository;

pub use processing_repository::{MongoProcessingRepository, ProcessingRepository};
