//! Note assistant tasks and their typed results.

use serde_json::{Map, Value};

/// Top-level JSON shape a task expects from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// A JSON object (`{...}`).
    Object,
    /// A JSON array (`[...]`).
    Array,
    /// Free text, passed through without JSON parsing.
    Text,
}

/// One note assistant operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionTask {
    /// Term to definition mapping.
    Glossary,
    /// Short prose summary.
    Summary,
    /// A handful of topical tags.
    Tags,
    /// Grammar correction that keeps HTML structure intact.
    GrammarCheck,
    /// Translation that keeps HTML structure intact.
    Translation { target_language: String },
}

impl ExtractionTask {
    /// Stable name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Glossary => "glossary",
            Self::Summary => "summary",
            Self::Tags => "tags",
            Self::GrammarCheck => "grammar",
            Self::Translation { .. } => "translation",
        }
    }

    #[must_use]
    pub fn shape(&self) -> OutputShape {
        match self {
            Self::Glossary | Self::GrammarCheck => OutputShape::Object,
            Self::Tags => OutputShape::Array,
            Self::Summary | Self::Translation { .. } => OutputShape::Text,
        }
    }

    /// Whether the note's markup is embedded in the prompt verbatim.
    ///
    /// Tasks that return renderable HTML keep tags; extraction tasks see
    /// plain text only.
    #[must_use]
    pub fn preserves_markup(&self) -> bool {
        matches!(self, Self::GrammarCheck | Self::Translation { .. })
    }

    /// Result returned when the model output cannot be used.
    ///
    /// `input` is the note text the task was run on; `cause` describes why
    /// the normal path failed and only surfaces for the free-text tasks.
    #[must_use]
    pub fn fallback(&self, input: &str, cause: &str) -> ParsedResult {
        match self {
            Self::Glossary => ParsedResult::Glossary(Map::new()),
            Self::Tags => ParsedResult::Tags(Vec::new()),
            Self::GrammarCheck => ParsedResult::Grammar(input.to_string()),
            Self::Summary => {
                ParsedResult::Summary(format!("Error: failed to summarize note: {cause}"))
            }
            Self::Translation { target_language } => ParsedResult::Translation(format!(
                "Error: failed to translate note to {target_language}: {cause}"
            )),
        }
    }

    /// Result for input that is empty after preprocessing; no model call.
    #[must_use]
    pub fn neutral(&self, input: &str) -> ParsedResult {
        match self {
            Self::Glossary => ParsedResult::Glossary(Map::new()),
            Self::Summary => ParsedResult::Summary(String::new()),
            Self::Tags => ParsedResult::Tags(Vec::new()),
            Self::GrammarCheck => ParsedResult::Grammar(input.to_string()),
            Self::Translation { .. } => ParsedResult::Translation(String::new()),
        }
    }
}

/// Typed output of an [`ExtractionTask`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResult {
    Glossary(Map<String, Value>),
    Summary(String),
    Tags(Vec<String>),
    Grammar(String),
    Translation(String),
}

impl ParsedResult {
    /// Consume into the text payload, if this is a text-bearing result.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Summary(s) | Self::Grammar(s) | Self::Translation(s) => Some(s),
            Self::Glossary(_) | Self::Tags(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation() -> ExtractionTask {
        ExtractionTask::Translation {
            target_language: "French".into(),
        }
    }

    #[test]
    fn shapes_match_tasks() {
        assert_eq!(ExtractionTask::Glossary.shape(), OutputShape::Object);
        assert_eq!(ExtractionTask::GrammarCheck.shape(), OutputShape::Object);
        assert_eq!(ExtractionTask::Tags.shape(), OutputShape::Array);
        assert_eq!(ExtractionTask::Summary.shape(), OutputShape::Text);
        assert_eq!(translation().shape(), OutputShape::Text);
    }

    #[test]
    fn only_grammar_and_translation_keep_markup() {
        assert!(ExtractionTask::GrammarCheck.preserves_markup());
        assert!(translation().preserves_markup());
        assert!(!ExtractionTask::Glossary.preserves_markup());
        assert!(!ExtractionTask::Summary.preserves_markup());
        assert!(!ExtractionTask::Tags.preserves_markup());
    }

    #[test]
    fn fallbacks() {
        assert_eq!(
            ExtractionTask::Glossary.fallback("x", "bad"),
            ParsedResult::Glossary(Map::new())
        );
        assert_eq!(
            ExtractionTask::Tags.fallback("x", "bad"),
            ParsedResult::Tags(vec![])
        );
        assert_eq!(
            ExtractionTask::GrammarCheck.fallback("<p>orig</p>", "bad"),
            ParsedResult::Grammar("<p>orig</p>".into())
        );

        let summary = ExtractionTask::Summary
            .fallback("x", "timeout")
            .into_text()
            .unwrap();
        assert!(summary.starts_with("Error:"));
        assert!(summary.contains("timeout"));

        let translated = translation().fallback("x", "timeout").into_text().unwrap();
        assert!(translated.contains("French"));
    }

    #[test]
    fn neutral_results_are_empty() {
        assert_eq!(
            ExtractionTask::Summary.neutral(""),
            ParsedResult::Summary(String::new())
        );
        assert_eq!(
            ExtractionTask::GrammarCheck.neutral("  "),
            ParsedResult::Grammar("  ".into())
        );
        assert_eq!(translation().neutral(""), ParsedResult::Translation(String::new()));
    }
}
