//! Recovery of JSON payloads embedded in free-text model replies.
//!
//! Candidates are searched in a fixed order, first match wins:
//! a ```` ```json ```` fenced block, then (for list payloads) the first
//! balanced `[...]` that does not sit inside the first balanced `{...}`,
//! then that `{...}`.

use std::ops::Range;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("no JSON candidate found in model reply")]
    NoCandidate,

    #[error("expected a list or an object with a `{0}` key")]
    UnexpectedShape(String),

    #[error("invalid JSON in model reply: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Fenced,
    Array,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub source: CandidateSource,
    pub text: &'a str,
}

/// Locate the substring of `reply` most likely to hold JSON. Arrays nested
/// inside the first object are part of that object, not list candidates.
pub fn find_candidate(reply: &str, include_arrays: bool) -> Option<Candidate<'_>> {
    if let Some(text) = fenced_block(reply) {
        return Some(Candidate {
            source: CandidateSource::Fenced,
            text,
        });
    }

    let object = balanced_range(reply, '{', '}', None);

    if include_arrays && let Some(array) = balanced_range(reply, '[', ']', object.clone()) {
        return Some(Candidate {
            source: CandidateSource::Array,
            text: &reply[array],
        });
    }

    object.map(|object| Candidate {
        source: CandidateSource::Object,
        text: &reply[object],
    })
}

/// Extract a single JSON object (a fenced block or the first `{...}`).
pub fn extract_object<T: DeserializeOwned>(reply: &str) -> Result<T, ExtractionError> {
    let candidate = find_candidate(reply, false).ok_or(ExtractionError::NoCandidate)?;

    serde_json::from_str(candidate.text).map_err(|e| ExtractionError::InvalidJson(e.to_string()))
}

/// Extract a JSON list. A wrapper object such as `{"list": [...]}` is
/// unwrapped through `wrapper_key`.
pub fn extract_list<T: DeserializeOwned>(
    reply: &str,
    wrapper_key: &str,
) -> Result<Vec<T>, ExtractionError> {
    let candidate = find_candidate(reply, true).ok_or(ExtractionError::NoCandidate)?;

    let value: Value = serde_json::from_str(candidate.text)
        .map_err(|e| ExtractionError::InvalidJson(e.to_string()))?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut object) => object
            .remove(wrapper_key)
            .ok_or_else(|| ExtractionError::UnexpectedShape(wrapper_key.to_string()))?,
        _ => return Err(ExtractionError::UnexpectedShape(wrapper_key.to_string())),
    };

    serde_json::from_value(list).map_err(|e| ExtractionError::InvalidJson(e.to_string()))
}

fn fenced_block(reply: &str) -> Option<&str> {
    let start = reply.find(JSON_FENCE)? + JSON_FENCE.len();
    let rest = &reply[start..];
    let end = rest.find(FENCE)?;

    Some(rest[..end].trim())
}

/// Byte range of the first `open ... close` span whose delimiters balance,
/// ignoring delimiters inside JSON string literals and openers in `skip`.
fn balanced_range(
    text: &str,
    open: char,
    close: char,
    skip: Option<Range<usize>>,
) -> Option<Range<usize>> {
    text.match_indices(open)
        .filter(|(start, _)| !skip.as_ref().is_some_and(|skip| skip.contains(start)))
        .find_map(|(start, _)| {
            span_end(&text[start..], open, close).map(|end| start..start + end)
        })
}

fn span_end(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_wins_over_surrounding_prose() {
        let reply = "Sure! Here is your list [draft]:\n```json\n[\"Flour 500g\", \"Eggs x2\"]\n```\nEnjoy {cooking}.";
        let candidate = find_candidate(reply, true).unwrap();

        assert_eq!(candidate.source, CandidateSource::Fenced);
        assert_eq!(candidate.text, "[\"Flour 500g\", \"Eggs x2\"]");

        let list: Vec<String> = extract_list(reply, "list").unwrap();
        assert_eq!(list, vec!["Flour 500g", "Eggs x2"]);
    }

    #[test]
    fn test_array_is_found_before_object() {
        let reply = r#"Items: ["a", "b"] and {"list": ["c"]}"#;
        let candidate = find_candidate(reply, true).unwrap();

        assert_eq!(candidate.source, CandidateSource::Array);
        assert_eq!(candidate.text, r#"["a", "b"]"#);
    }

    #[test]
    fn test_arrays_are_skipped_for_object_extraction() {
        let reply = r#"[1] then {"name": "x"}"#;
        let candidate = find_candidate(reply, false).unwrap();

        assert_eq!(candidate.source, CandidateSource::Object);
        assert_eq!(candidate.text, r#"{"name": "x"}"#);
    }

    #[test]
    fn test_nested_object_is_captured_whole() {
        let reply = r#"Here you go: {"a": {"b": 1}, "c": "}"} trailing"#;
        let candidate = find_candidate(reply, false).unwrap();

        assert_eq!(candidate.text, r#"{"a": {"b": 1}, "c": "}"}"#);
    }

    #[test]
    fn test_nested_array_is_captured_whole() {
        let reply = r#"[["x", "y"], ["z"]]"#;
        let list: Vec<Vec<String>> = extract_list(reply, "list").unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], vec!["x", "y"]);
    }

    #[test]
    fn test_unbalanced_opener_is_skipped() {
        let reply = r#"Note [unfinished, then ["ok"]"#;
        let candidate = find_candidate(reply, true).unwrap();

        assert_eq!(candidate.text, r#"["ok"]"#);
    }

    #[test]
    fn test_plain_prose_has_no_candidate() {
        let reply = "I think you should buy chicken and onions.";

        assert_eq!(find_candidate(reply, true), None);
        assert_eq!(
            extract_list::<String>(reply, "list"),
            Err(ExtractionError::NoCandidate)
        );
    }

    #[test]
    fn test_wrapper_objects_are_unwrapped() {
        for key in ["list", "instructions", "allergens"] {
            let reply = format!("```json\n{{\"{key}\": [\"one\", \"two\"]}}\n```");
            let list: Vec<String> = extract_list(&reply, key).unwrap();

            assert_eq!(list, vec!["one", "two"]);
        }
    }

    #[test]
    fn test_object_without_wrapper_key_is_unexpected_shape() {
        let reply = r#"{"items": ["one"]}"#;

        assert_eq!(
            extract_list::<String>(reply, "list"),
            Err(ExtractionError::UnexpectedShape("list".to_string()))
        );
    }

    #[test]
    fn test_unfenced_wrapper_with_several_arrays() {
        let reply = r#"{"notes": ["buy fresh"], "list": ["Chicken breast 200g", "Onion x1"]}"#;
        let candidate = find_candidate(reply, true).unwrap();
        assert_eq!(candidate.source, CandidateSource::Object);

        let list: Vec<String> = extract_list(reply, "list").unwrap();
        assert_eq!(list, vec!["Chicken breast 200g", "Onion x1"]);
    }

    #[test]
    fn test_array_after_object_is_still_a_list_candidate() {
        let reply = r#"Summary {"count": 2}, items: ["a", "b"]"#;
        let candidate = find_candidate(reply, true).unwrap();

        assert_eq!(candidate.source, CandidateSource::Array);
        assert_eq!(candidate.text, r#"["a", "b"]"#);
    }

    #[test]
    fn test_array_of_objects_is_taken_whole() {
        let reply = r#"Here: [{"item": "x"}]"#;
        let candidate = find_candidate(reply, true).unwrap();

        assert_eq!(candidate.text, r#"[{"item": "x"}]"#);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let reply = "```json\n[\"unterminated, 1]\n```";

        assert!(matches!(
            extract_list::<String>(reply, "list"),
            Err(ExtractionError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_unclosed_fence_falls_through_to_delimiters() {
        let reply = "```json\n[\"a\"]";
        let candidate = find_candidate(reply, true).unwrap();

        assert_eq!(candidate.source, CandidateSource::Array);
    }

    #[test]
    fn test_extract_object_reads_fenced_object() {
        let reply = "```json\n{\"name\": \"Tacos\"}\n```";
        let value: Value = extract_object(reply).unwrap();

        assert_eq!(value["name"], "Tacos");
    }
}
