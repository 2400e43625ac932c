//! Helpers for digging a JSON array out of free-form model output. Models
//! routinely wrap JSON in markdown fences or surround it with prose, so every
//! parse here is best-effort: failure means "no result", never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

static CODE_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*").expect("code fence regex should compile"));

/// Removes markdown code fences (```json ... ```) from model output.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE_RE.replace_all(text, "").into_owned()
}

/// Returns the first balanced `[...]` substring, respecting strings and
/// escape sequences so brackets inside quoted text don't end the scan.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Strips fences, locates the first balanced array, and decodes it as a
/// `Vec<T>`. `None` on any failure along the way.
pub fn parse_json_array<T: DeserializeOwned>(raw: &str) -> Option<Vec<T>> {
    let cleaned = strip_code_fences(raw);
    let array = extract_json_array(&cleaned)?;
    serde_json::from_str(array).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fenced_blocks() {
        let raw = "```json\n[1, 2]\n```";
        assert_eq!(strip_code_fences(raw), "[1, 2]\n");
    }

    #[test]
    fn extracts_plain_array() {
        assert_eq!(extract_json_array("[\"a\", \"b\"]"), Some("[\"a\", \"b\"]"));
    }

    #[test]
    fn extracts_array_surrounded_by_prose() {
        let raw = "Here are your topics: [\"a\", \"b\"] -- enjoy!";
        assert_eq!(extract_json_array(raw), Some("[\"a\", \"b\"]"));
    }

    #[test]
    fn extracts_nested_arrays_as_one_balanced_unit() {
        let raw = "x [[1, 2], [3]] y";
        assert_eq!(extract_json_array(raw), Some("[[1, 2], [3]]"));
    }

    #[test]
    fn ignores_brackets_inside_strings() {
        let raw = r#"[{"question": "What is arr[0]?"}] trailing"#;
        assert_eq!(extract_json_array(raw), Some(r#"[{"question": "What is arr[0]?"}]"#));
    }

    #[test]
    fn returns_none_without_brackets() {
        assert_eq!(extract_json_array("no array here"), None);
    }

    #[test]
    fn returns_none_for_unclosed_array() {
        assert_eq!(extract_json_array("[1, 2"), None);
    }

    #[test]
    fn parses_fenced_string_array() {
        let raw = "```json\n[\"Trees\", \"Graphs\"]\n```";
        let parsed: Vec<String> = parse_json_array(raw).expect("array should parse");
        assert_eq!(parsed, vec!["Trees", "Graphs"]);
    }

    #[test]
    fn parse_rejects_non_array_json() {
        let parsed = parse_json_array::<String>("{\"topics\": []}");
        assert!(parsed.is_none());
    }

    #[test]
    fn parse_rejects_truncated_json() {
        let parsed = parse_json_array::<String>("[\"a\", \"b");
        assert!(parsed.is_none());
    }
}
