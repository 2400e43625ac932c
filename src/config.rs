use secrecy::SecretString;
use std::env;

/// Default OpenAI-compatible endpoint for the Gemini model family.
const DEFAULT_COMPLETION_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub processing_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub completion_api_key: Option<SecretString>,
    pub completion_api_base: String,
    pub completion_model: String,
    pub search_api_key: Option<SecretString>,
    pub search_engine_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "scribe-local".to_string()),
            processing_collection: env::var("PROCESSING_COLLECTION")
                .unwrap_or_else(|_| "lectures_processing".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            completion_api_key: env::var("GEMINI_API_KEY").ok().map(SecretString::from),
            completion_api_base: env::var("COMPLETION_API_BASE")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_API_BASE.to_string()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            search_api_key: env::var("GOOGLE_SEARCH_API_KEY").ok().map(SecretString::from),
            search_engine_id: env::var("GOOGLE_SEARCH_ENGINE_ID").ok(),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "scribe-test".to_string(),
            processing_collection: "lectures_processing".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            completion_api_key: Some(SecretString::from("test_completion_key".to_string())),
            completion_api_base: DEFAULT_COMPLETION_API_BASE.to_string(),
            completion_model: "gemini-2.0-flash".to_string(),
            search_api_key: Some(SecretString::from("test_search_key".to_string())),
            search_engine_id: Some("test-engine-id".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert_eq!(config.processing_collection, "lectures_processing");
        assert!(!config.completion_model.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "scribe-test");
        assert!(config.completion_api_key.is_some());
        assert!(config.search_api_key.is_some());
        assert_eq!(config.search_engine_id.as_deref(), Some("test-engine-id"));
    }
}
