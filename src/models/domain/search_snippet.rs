use serde::{Deserialize, Serialize};

/// One ranked result from the web-search adapter. Used only to build prompt
/// context; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    pub snippet: String,
    pub source_url: String,
}
