use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::MongoProcessingRepository,
    services::{
        ChatService, CompletionProvider, GeminiCompletionClient, GoogleSearchClient,
        ProcessingService, QuizService, SearchProvider, TopicService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub topic_service: Arc<TopicService>,
    pub quiz_service: Arc<QuizService>,
    pub processing_service: Arc<ProcessingService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let processing_repository = Arc::new(MongoProcessingRepository::new(&db, &config));
        processing_repository.ensure_indexes().await?;
        let processing_service = Arc::new(ProcessingService::new(processing_repository));

        let completion: Arc<dyn CompletionProvider> =
            Arc::new(GeminiCompletionClient::from_config(&config)?);

        let search: Option<Arc<dyn SearchProvider>> = GoogleSearchClient::from_config(&config)
            .map(|client| Arc::new(client) as Arc<dyn SearchProvider>);
        if search.is_none() {
            log::warn!("web search credentials not set; generation runs without search context");
        }

        let topic_service = Arc::new(TopicService::new(completion.clone()));
        let quiz_service = Arc::new(QuizService::new(completion.clone(), search.clone()));
        let chat_service = Arc::new(ChatService::new(completion, search));

        Ok(Self {
            chat_service,
            topic_service,
            quiz_service,
            processing_service,
            db,
            config: Arc::new(config),
        })
    }
}
