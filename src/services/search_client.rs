use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{config::Config, models::domain::SearchSnippet};

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Web-search capability. Best-effort by contract: an implementation never
/// fails, it returns an empty list instead.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchSnippet>;
}

/// Adapter over the Google Custom Search JSON API.
#[derive(Clone)]
pub struct GoogleSearchClient {
    http: reqwest::Client,
    api_key: SecretString,
    engine_id: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

impl GoogleSearchClient {
    /// Returns `None` unless both the API key and the engine id are
    /// configured; callers treat an absent adapter as "search unavailable".
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.search_api_key.clone()?;
        let engine_id = config.search_engine_id.clone()?;

        Some(Self {
            http: reqwest::Client::new(),
            api_key,
            engine_id,
        })
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchSnippet>, reqwest::Error> {
        let response = self
            .http
            .get(CUSTOM_SEARCH_URL)
            .query(&[
                ("key", self.api_key.expose_secret()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| SearchSnippet {
                title: item.title,
                snippet: item.snippet,
                source_url: item.link,
            })
            .collect())
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchSnippet> {
        match self.fetch(query).await {
            Ok(snippets) => snippets.into_iter().take(limit).collect(),
            Err(err) => {
                log::warn!("web search failed, continuing without results: {}", err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_requires_both_credentials() {
        let mut config = Config::test_config();
        config.search_api_key = None;
        assert!(GoogleSearchClient::from_config(&config).is_none());

        let mut config = Config::test_config();
        config.search_engine_id = None;
        assert!(GoogleSearchClient::from_config(&config).is_none());

        let config = Config::test_config();
        assert!(GoogleSearchClient::from_config(&config).is_some());
    }

    #[test]
    fn search_response_tolerates_missing_items() {
        let parsed: SearchResponse =
            serde_json::from_str("{}").expect("empty response should parse");
        assert!(parsed.items.is_empty());

        let parsed: SearchResponse = serde_json::from_str(
            r#"{"items": [{"title": "T", "snippet": "S", "link": "https://example.com"}]}"#,
        )
        .expect("response with items should parse");
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].title, "T");
    }
}
