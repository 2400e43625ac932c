use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Fixed for every call; not per-call configurable.
const COMPLETION_TEMPERATURE: f32 = 0.7;

/// Text-completion capability. One prompt in, one generated text out;
/// provider failures surface as `GenerationFailed`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Completion adapter for the Gemini model family, reached through its
/// OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct GeminiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiCompletionClient {
    /// Every generation path needs this adapter, so a missing API key is a
    /// startup failure rather than a degraded mode.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let api_key = config.completion_api_key.as_ref().ok_or_else(|| {
            AppError::MissingCredential("GEMINI_API_KEY is not set".to_string())
        })?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(&config.completion_api_base);

        Ok(Self {
            client: Client::with_config(openai_config),
            model: config.completion_model.clone(),
        })
    }
}

#[async_trait]
impl CompletionProvider for GeminiCompletionClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(COMPLETION_TEMPERATURE)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::GenerationFailed(
                    "completion response contained no text content".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_requires_api_key() {
        let mut config = Config::test_config();
        config.completion_api_key = None;

        let result = GeminiCompletionClient::from_config(&config);
        assert!(matches!(result, Err(AppError::MissingCredential(_))));
    }

    #[test]
    fn from_config_builds_client_with_key() {
        let config = Config::test_config();

        let client = GeminiCompletionClient::from_config(&config).expect("client should build");
        assert_eq!(client.model, "gemini-2.0-flash");
    }
}
