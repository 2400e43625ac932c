use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{McqQuestion, OpenEndedQuestion, Question, QuestionFormat, SearchSnippet},
    services::{
        completion_client::CompletionProvider, json_helpers, search_client::SearchProvider,
    },
};

const MAX_SEARCH_RESULTS: usize = 5;

/// Generates quiz questions for a single topic, optionally grounded in web
/// search results. Callers wanting several topics invoke this once per topic
/// so one bad topic cannot spoil the rest.
pub struct QuizService {
    completion: Arc<dyn CompletionProvider>,
    search: Option<Arc<dyn SearchProvider>>,
}

impl QuizService {
    pub fn new(
        completion: Arc<dyn CompletionProvider>,
        search: Option<Arc<dyn SearchProvider>>,
    ) -> Self {
        Self { completion, search }
    }

    pub async fn generate_questions(
        &self,
        topic: &str,
        format: QuestionFormat,
    ) -> AppResult<Vec<Question>> {
        if topic.trim().is_empty() {
            return Err(AppError::InvalidInput("topic must not be empty".to_string()));
        }

        // Search is grounding context only; when it is unconfigured or comes
        // back empty we generate from the format template alone.
        let reference_block = match &self.search {
            Some(search) => {
                let query = format!("{} educational content {}", topic, format.search_phrase());
                let snippets = search.search(&query, MAX_SEARCH_RESULTS).await;
                format_reference_block(&snippets)
            }
            None => String::new(),
        };

        let prompt = build_prompt(topic, &reference_block, format);
        let raw = self.completion.complete(&prompt).await?;

        let mut questions = parse_questions(&raw, format);
        for (index, question) in questions.iter_mut().enumerate() {
            if question.id().is_empty() {
                question.set_id(format!("q_{}", index + 1));
            }
        }

        if questions.is_empty() {
            log::warn!("no {} questions could be parsed for topic '{}'", format, topic);
        }

        Ok(questions)
    }
}

fn build_prompt(topic: &str, reference_block: &str, format: QuestionFormat) -> String {
    let mut prompt = format!(
        "You are an expert educational content creator.\n\nTopic: {}\n\n",
        topic
    );

    if !reference_block.is_empty() {
        prompt.push_str("Reference Information from web search:\n");
        prompt.push_str(reference_block);
        prompt.push_str("\n\nUse this information to create accurate, well-informed questions.\n\n");
    }

    prompt.push_str(format.instructions());
    prompt.push_str(
        "\n\nCRITICAL: Respond ONLY with a valid JSON array. No explanation, no markdown, just the array.\n\nJSON Response:",
    );
    prompt
}

fn format_reference_block(snippets: &[SearchSnippet]) -> String {
    snippets
        .iter()
        .map(|snippet| {
            format!(
                "Title: {}\nSnippet: {}\nSource: {}",
                snippet.title, snippet.snippet, snippet.source_url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

fn parse_questions(raw: &str, format: QuestionFormat) -> Vec<Question> {
    match format {
        QuestionFormat::Mcq => json_helpers::parse_json_array::<McqQuestion>(raw)
            .unwrap_or_default()
            .into_iter()
            .map(Question::Mcq)
            .collect(),
        QuestionFormat::Subjective | QuestionFormat::Mathematical => {
            json_helpers::parse_json_array::<OpenEndedQuestion>(raw)
                .unwrap_or_default()
                .into_iter()
                .map(Question::OpenEnded)
                .collect()
        }
    }
}
