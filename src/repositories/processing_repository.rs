use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{doc, to_bson},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    models::domain::{LectureProcessing, ProcessingStatus},
};

#[async_trait]
pub trait ProcessingRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LectureProcessing>>;
    async fn find_by_lecture(&self, lecture_id: &str) -> AppResult<Option<LectureProcessing>>;
    async fn create(&self, record: LectureProcessing) -> AppResult<LectureProcessing>;
    /// Writes the status and `updated_at` unconditionally; returns the
    /// updated record, or `None` when no record has that id.
    async fn set_status(
        &self,
        id: &str,
        status: ProcessingStatus,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<LectureProcessing>>;
}

pub struct MongoProcessingRepository {
    collection: Collection<LectureProcessing>,
}

impl MongoProcessingRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.processing_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("creating indexes for processing records collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        let lecture_index = IndexModel::builder()
            .keys(doc! { "lecture_id": 1 })
            .options(IndexOptions::builder().name("lecture_id".to_string()).build())
            .build();
        self.collection.create_index(lecture_index).await?;

        Ok(())
    }
}

#[async_trait]
impl ProcessingRepository for MongoProcessingRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LectureProcessing>> {
        let record = self.collection.find_one(doc! { "id": id }).await?;
        Ok(record)
    }

    async fn find_by_lecture(&self, lecture_id: &str) -> AppResult<Option<LectureProcessing>> {
        let record = self
            .collection
            .find_one(doc! { "lecture_id": lecture_id })
            .await?;
        Ok(record)
    }

    async fn create(&self, record: LectureProcessing) -> AppResult<LectureProcessing> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn set_status(
        &self,
        id: &str,
        status: ProcessingStatus,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<LectureProcessing>> {
        let update = doc! {
            "$set": {
                "status": to_bson(&status)?,
                "updated_at": to_bson(&updated_at)?,
            }
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(doc! { "id": id }, update)
            .with_options(options)
            .await?;

        Ok(updated)
    }
}
