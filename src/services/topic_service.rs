use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    services::{completion_client::CompletionProvider, json_helpers},
};

/// Cap on lecture text embedded in the prompt, to stay inside the model's
/// context window.
const MAX_LECTURE_CONTEXT_CHARS: usize = 8000;

/// Recommends 5-7 assessable topics from raw lecture text.
pub struct TopicService {
    completion: Arc<dyn CompletionProvider>,
}

impl TopicService {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    /// One completion call, strict-JSON instructions, permissive parse. A
    /// response the model mangled yields an empty list, not an error; only a
    /// blank input or a provider failure is surfaced.
    pub async fn recommend_topics(&self, lecture_text: &str) -> AppResult<Vec<String>> {
        if lecture_text.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "lecture content must not be empty".to_string(),
            ));
        }

        let excerpt = truncate_chars(lecture_text, MAX_LECTURE_CONTEXT_CHARS);
        let prompt = prompts::TOPIC_RECOMMENDATION_PROMPT.replace("{lecture_content}", &excerpt);

        let raw = self.completion.complete(&prompt).await?;

        let values = json_helpers::parse_json_array::<serde_json::Value>(&raw).unwrap_or_default();
        let topics: Vec<String> = values
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .filter(|topic| !topic.trim().is_empty())
            .collect();

        if topics.is_empty() {
            log::warn!("no topics could be parsed from completion output");
        }

        Ok(topics)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
