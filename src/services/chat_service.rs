use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::AppResult,
    models::domain::SearchSnippet,
    services::{completion_client::CompletionProvider, search_client::SearchProvider},
};

const CHAT_SEARCH_RESULTS: usize = 3;

/// Answers student questions, preferring the supplied lecture text and
/// falling back to a search-then-answer flow when the model signals the text
/// is insufficient.
pub struct ChatService {
    completion: Arc<dyn CompletionProvider>,
    search: Option<Arc<dyn SearchProvider>>,
}

impl ChatService {
    pub fn new(
        completion: Arc<dyn CompletionProvider>,
        search: Option<Arc<dyn SearchProvider>>,
    ) -> Self {
        Self { completion, search }
    }

    /// Single pass, at most three sequential model/search calls. Completion
    /// failures propagate; there is no cached answer to fall back on.
    pub async fn respond(&self, message: &str, lecture_text: Option<&str>) -> AppResult<String> {
        if let Some(lecture) = lecture_text.filter(|text| !text.trim().is_empty()) {
            let prompt = prompts::LECTURE_GROUNDED_PROMPT
                .replace("{lecture_content}", lecture)
                .replace("{query}", message);

            let grounded = self.completion.complete(&prompt).await?;

            if !grounded.contains(prompts::SEARCH_NEEDED_MARKER) {
                return Ok(grounded.trim().to_string());
            }

            // Fall back using the original question, not the partial answer.
            if let Some(search) = &self.search {
                return self.answer_with_search(message, search.as_ref()).await;
            }

            // No search configured: degrade to whatever the model said
            // around the marker.
            return Ok(grounded
                .replace(prompts::SEARCH_NEEDED_MARKER, "")
                .trim()
                .to_string());
        }

        match &self.search {
            Some(search) => self.answer_with_search(message, search.as_ref()).await,
            None => {
                let prompt = prompts::DIRECT_ANSWER_PROMPT.replace("{query}", message);
                Ok(self.completion.complete(&prompt).await?.trim().to_string())
            }
        }
    }

    async fn answer_with_search(
        &self,
        message: &str,
        search: &dyn SearchProvider,
    ) -> AppResult<String> {
        let decision_prompt = prompts::SEARCH_DECISION_PROMPT.replace("{query}", message);
        let decision = self.completion.complete(&decision_prompt).await?;
        let decision = decision.trim();

        if let Some(query) = decision.strip_prefix(prompts::SEARCH_PREFIX) {
            let snippets = search.search(query.trim(), CHAT_SEARCH_RESULTS).await;
            let results_block = format_search_results(&snippets);

            let answer_prompt = prompts::SEARCH_ANSWER_PROMPT
                .replace("{query}", message)
                .replace("{search_results}", &results_block);

            return Ok(self
                .completion
                .complete(&answer_prompt)
                .await?
                .trim()
                .to_string());
        }

        if let Some(answer) = decision.strip_prefix(prompts::ANSWER_PREFIX) {
            return Ok(answer.trim().to_string());
        }

        // The model ignored the routing format; its reply is still the best
        // answer available.
        Ok(decision.to_string())
    }
}

fn format_search_results(snippets: &[SearchSnippet]) -> String {
    if snippets.is_empty() {
        return "No results found.".to_string();
    }

    snippets
        .iter()
        .map(|snippet| {
            format!(
                "Title: {}\nSnippet: {}\nLink: {}",
                snippet.title, snippet.snippet, snippet.source_url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        completion_client::MockCompletionProvider, search_client::MockSearchProvider,
    };

    #[tokio::test]
    async fn grounded_answer_returns_trimmed_response() {
        let mut completion = MockCompletionProvider::new();
        completion
            .expect_complete()
            .times(1)
            .withf(|prompt: &str| prompt.contains("Lecture Content:"))
            .returning(|_| Ok("  An AVL tree rebalances via rotations.  ".to_string()));

        let service = ChatService::new(Arc::new(completion), None);
        let answer = service
            .respond("What is an AVL tree?", Some("AVL trees are..."))
            .await
            .expect("respond should succeed");

        assert_eq!(answer, "An AVL tree rebalances via rotations.");
    }

    #[tokio::test]
    async fn marker_without_search_strips_marker() {
        let mut completion = MockCompletionProvider::new();
        completion
            .expect_complete()
            .times(1)
            .returning(|_| Ok("SEARCH_NEEDED I can only say a little from the notes.".to_string()));

        let service = ChatService::new(Arc::new(completion), None);
        let answer = service
            .respond("Who proved this?", Some("Short notes"))
            .await
            .expect("respond should succeed");

        assert_eq!(answer, "I can only say a little from the notes.");
    }

    #[tokio::test]
    async fn malformed_routing_response_is_returned_as_answer() {
        let mut completion = MockCompletionProvider::new();
        completion
            .expect_complete()
            .times(1)
            .returning(|_| Ok("I think the answer is 42.".to_string()));

        let search = MockSearchProvider::new(); // must not be called

        let service = ChatService::new(Arc::new(completion), Some(Arc::new(search)));
        let answer = service
            .respond("What is the answer?", None)
            .await
            .expect("respond should succeed");

        assert_eq!(answer, "I think the answer is 42.");
    }

    #[tokio::test]
    async fn empty_lecture_text_skips_grounding() {
        let mut completion = MockCompletionProvider::new();
        completion
            .expect_complete()
            .times(1)
            .withf(|prompt: &str| !prompt.contains("Lecture Content:"))
            .returning(|_| Ok("ANSWER: Direct reply".to_string()));

        let search = MockSearchProvider::new();
        let service = ChatService::new(Arc::new(completion), Some(Arc::new(search)));

        let answer = service
            .respond("Hello?", Some("   "))
            .await
            .expect("respond should succeed");

        assert_eq!(answer, "Direct reply");
    }
}
