//! Tolerant extraction of typed results from model output.
//!
//! Models wrap JSON in markdown fences, add preamble, or emit trailing
//! commentary. Extraction trims a fenced block when present, then scans for
//! the first balanced `{...}` or `[...]` span that parses as JSON of the
//! expected kind. Nothing here returns an error: unusable output maps to
//! the task's fallback.

use serde_json::Value;
use tracing::warn;

use crate::domain::task::{ExtractionTask, OutputShape, ParsedResult};

const FENCE: &str = "```";

/// Opening brackets tried per text before giving up.
const MAX_CANDIDATE_SPANS: usize = 64;

/// Convert raw completion text into the result `task` expects.
///
/// `input` is the note text the prompt was built from; grammar checking
/// falls back to it.
#[must_use]
pub fn parse_result(task: &ExtractionTask, raw: &str, input: &str) -> ParsedResult {
    match task {
        ExtractionTask::Summary => ParsedResult::Summary(raw.to_string()),
        ExtractionTask::Translation { .. } => ParsedResult::Translation(raw.to_string()),
        ExtractionTask::Glossary => match extract_json(raw, task.shape()) {
            Some(Value::Object(map)) => ParsedResult::Glossary(map),
            _ => fallback(task, input),
        },
        ExtractionTask::Tags => match extract_json(raw, task.shape()) {
            Some(Value::Array(items)) => ParsedResult::Tags(clean_tags(items)),
            _ => fallback(task, input),
        },
        ExtractionTask::GrammarCheck => match extract_json(raw, task.shape()) {
            Some(Value::Object(map)) => {
                let text = map
                    .get("text")
                    .and_then(Value::as_str)
                    .map_or_else(|| input.to_string(), str::to_string);
                ParsedResult::Grammar(text)
            }
            _ => fallback(task, input),
        },
    }
}

fn fallback(task: &ExtractionTask, input: &str) -> ParsedResult {
    warn!(task = task.name(), "unparseable model output, using fallback");
    task.fallback(input, "unparseable model output")
}

/// Trimmed, non-empty string entries; everything else is dropped.
fn clean_tags(items: Vec<Value>) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find and parse the first JSON value of `shape` in `raw`.
///
/// Returns `None` for [`OutputShape::Text`], when no candidate span parses,
/// or when the parsed value has the wrong top-level type.
#[must_use]
pub fn extract_json(raw: &str, shape: OutputShape) -> Option<Value> {
    let (open, close) = match shape {
        OutputShape::Object => ('{', '}'),
        OutputShape::Array => ('[', ']'),
        OutputShape::Text => return None,
    };

    let text = raw.trim();
    if let Some(body) = fenced_block(text) {
        if let Some(value) = first_parsed_span(body, open, close) {
            return Some(value);
        }
    }
    first_parsed_span(text, open, close)
}

/// Interior of the first fenced code block, minus any language label.
///
/// A missing closing fence takes everything after the opening one.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE)? + FENCE.len();
    let after = &text[start..];

    let body = match after.find('\n') {
        Some(nl) if is_fence_label(&after[..nl]) => &after[nl + 1..],
        _ => after,
    };
    let end = body.find(FENCE).unwrap_or(body.len());
    Some(body[..end].trim())
}

fn is_fence_label(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Try the first [`MAX_CANDIDATE_SPANS`] `open` positions in order; return
/// the first balanced span that parses to a value of the matching kind.
fn first_parsed_span(text: &str, open: char, close: char) -> Option<Value> {
    text.char_indices()
        .filter(|&(_, c)| c == open)
        .take(MAX_CANDIDATE_SPANS)
        .filter_map(|(start, _)| balanced_span(&text[start..], open, close))
        .filter_map(|span| serde_json::from_str::<Value>(span).ok())
        .find(|value| match open {
            '{' => value.is_object(),
            _ => value.is_array(),
        })
}

/// The prefix of `text` (which starts with `open`) up to its matching
/// `close`, ignoring brackets inside string literals.
fn balanced_span(text: &str, open: char, close: char) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            _ if c == open => depth += 1,
            _ if c == close => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..i + c.len_utf8()]);
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
    use serde_json::json;

    fn glossary(raw: &str) -> ParsedResult {
        parse_result(&ExtractionTask::Glossary, raw, "note")
    }

    fn tags(raw: &str) -> Vec<String> {
        match parse_result(&ExtractionTask::Tags, raw, "note") {
            ParsedResult::Tags(tags) => tags,
            other => panic!("expected tags, got {other:?}"),
        }
    }

    fn grammar(raw: &str, input: &str) -> String {
        parse_result(&ExtractionTask::GrammarCheck, raw, input)
            .into_text()
            .unwrap()
    }

    fn object(value: Value) -> ParsedResult {
        match value {
            Value::Object(map) => ParsedResult::Glossary(map),
            _ => unreachable!(),
        }
    }

    // ==================== Glossary ====================

    #[test]
    fn glossary_strips_json_fence() {
        assert_eq!(
            glossary("```json\n{\"a\": \"b\"}\n```"),
            object(json!({"a": "b"}))
        );
    }

    #[test]
    fn glossary_plain_text_falls_back_to_empty() {
        assert_eq!(glossary("not json at all"), object(json!({})));
    }

    #[test]
    fn glossary_ignores_preamble_and_trailer() {
        let raw = "Sure! Here is the glossary:\n{\"Rust\": \"A language\", \"Cargo\": \"Its build tool\"}\nLet me know if you need more.";
        assert_eq!(
            glossary(raw),
            object(json!({"Rust": "A language", "Cargo": "Its build tool"}))
        );
    }

    #[test]
    fn glossary_unlabeled_fence() {
        assert_eq!(glossary("```\n{\"x\": \"y\"}\n```"), object(json!({"x": "y"})));
    }

    #[test]
    fn glossary_unterminated_fence() {
        assert_eq!(glossary("```json\n{\"x\": \"y\"}"), object(json!({"x": "y"})));
    }

    #[test]
    fn glossary_array_is_shape_mismatch() {
        assert_eq!(glossary("[\"a\", \"b\"]"), object(json!({})));
    }

    #[test]
    fn glossary_malformed_json_falls_back() {
        assert_eq!(glossary("{\"a\": \"b\",}"), object(json!({})));
    }

    #[test]
    fn glossary_nested_braces_and_braces_in_strings() {
        let raw = r#"Result: {"set": "written {like this}", "inner": {"k": "v"}} done"#;
        assert_eq!(
            glossary(raw),
            object(json!({"set": "written {like this}", "inner": {"k": "v"}}))
        );
    }

    #[test]
    fn glossary_skips_unparseable_brace_preamble() {
        let raw = "Terms in {braces} below:\n{\"term\": \"definition\"}";
        assert_eq!(glossary(raw), object(json!({"term": "definition"})));
    }

    // ==================== Tags ====================

    #[test]
    fn tags_drop_empty_and_trim() {
        assert_eq!(tags("[\"x\", \"\", \"  y  \"]"), vec!["x", "y"]);
    }

    #[test]
    fn tags_fenced_with_preamble() {
        let raw = "Here you go:\n```json\n[\"rust\", \"notes\"]\n```";
        assert_eq!(tags(raw), vec!["rust", "notes"]);
    }

    #[test]
    fn tags_drop_non_strings() {
        assert_eq!(tags("[\"a\", 3, null, \"b\"]"), vec!["a", "b"]);
    }

    #[test]
    fn tags_garbage_falls_back_to_empty() {
        assert!(tags("rust, notes, productivity").is_empty());
        assert!(tags("{\"tags\": \"rust\"}").is_empty());
    }

    // ==================== Grammar ====================

    #[test]
    fn grammar_returns_text_field_verbatim() {
        let raw = r#"{"corrected": true, "text": "<p>Fixed.</p>"}"#;
        assert_eq!(grammar(raw, "<p>fixd</p>"), "<p>Fixed.</p>");
    }

    #[test]
    fn grammar_missing_text_returns_input() {
        assert_eq!(grammar(r#"{"corrected": false}"#, "<p>same</p>"), "<p>same</p>");
    }

    #[test]
    fn grammar_non_string_text_returns_input() {
        assert_eq!(grammar(r#"{"corrected": true, "text": 42}"#, "orig"), "orig");
    }

    #[test]
    fn grammar_unparseable_returns_input() {
        assert_eq!(grammar("I fixed it for you!", "<b>orig</b>"), "<b>orig</b>");
    }

    #[test]
    fn grammar_handles_escaped_quotes_in_html() {
        let raw = "```json\n{\"corrected\": true, \"text\": \"<a href=\\\"x\\\">Link</a>\"}\n```";
        assert_eq!(grammar(raw, "orig"), "<a href=\"x\">Link</a>");
    }

    // ==================== Free text ====================

    #[test]
    fn summary_and_translation_pass_through() {
        let raw = "```json\n{\"not\": \"parsed\"}\n```";
        assert_eq!(
            parse_result(&ExtractionTask::Summary, raw, "x"),
            ParsedResult::Summary(raw.to_string())
        );
        let task = ExtractionTask::Translation {
            target_language: "German".into(),
        };
        assert_eq!(
            parse_result(&task, "<p>Hallo</p>", "<p>Hello</p>"),
            ParsedResult::Translation("<p>Hallo</p>".into())
        );
    }

    // ==================== Scanner ====================

    #[test]
    fn text_shape_never_parses() {
        assert_eq!(extract_json("{\"a\": 1}", OutputShape::Text), None);
    }

    #[test]
    fn unbalanced_input_yields_none() {
        assert_eq!(extract_json("{\"a\": [1, 2", OutputShape::Object), None);
        assert_eq!(balanced_span("}{", '{', '}'), None);
    }

    #[test]
    fn fence_on_single_line() {
        assert_eq!(
            extract_json("```{\"a\": 1}```", OutputShape::Object),
            Some(json!({"a": 1}))
        );
    }

    #[test]
    fn multibyte_text_is_sliced_safely() {
        assert_eq!(
            extract_json("résumé → {\"café\": \"☕\"} ✓", OutputShape::Object),
            Some(json!({"café": "☕"}))
        );
    }

    #[test]
    fn unbalanced_brackets_stop_after_a_bounded_number_of_candidates() {
        let raw = "{".repeat(200_000);
        assert_eq!(extract_json(&raw, OutputShape::Object), None);

        let late = format!("{}{{\"a\": 1}}", "x{".repeat(MAX_CANDIDATE_SPANS));
        assert_eq!(extract_json(&late, OutputShape::Object), None);

        let early = format!("{}{{\"a\": 1}}", "x{".repeat(MAX_CANDIDATE_SPANS - 1));
        assert_eq!(extract_json(&early, OutputShape::Object), Some(json!({"a": 1})));
    }
}
