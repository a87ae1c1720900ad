//! Prompt templates for note assistant tasks.
//!
//! `text` must already be preprocessed: plain text for extraction tasks,
//! original markup for tasks that return HTML.

use crate::domain::task::ExtractionTask;

/// Build the prompt for `task` over `text`.
#[must_use]
pub fn build_prompt(task: &ExtractionTask, text: &str) -> String {
    match task {
        ExtractionTask::Glossary => glossary(text),
        ExtractionTask::Summary => summary(text),
        ExtractionTask::Tags => tags(text),
        ExtractionTask::GrammarCheck => grammar(text),
        ExtractionTask::Translation { target_language } => translation(text, target_language),
    }
}

fn glossary(text: &str) -> String {
    format!(
        r#"Identify important terms, concepts, entities, and key phrases in the following text and provide a brief definition for each.
Be comprehensive and extract as many relevant terms as possible, including proper nouns, technical terms, and significant vocabulary.
Return the result as a JSON object where keys are the terms and values are the definitions.

Text:
"""
{text}
"""

JSON Output:"#
    )
}

fn summary(text: &str) -> String {
    format!(
        r#"Provide a concise summary of the following note in one to two sentences.

Note:
"""
{text}
"""

Summary:"#
    )
}

fn tags(text: &str) -> String {
    format!(
        r#"Suggest 3-5 relevant tags for the following note. Tags should be concise, single words or short phrases.
Return the result as a JSON array of strings.

Note:
"""
{text}
"""

Tags (JSON array):"#
    )
}

fn grammar(text: &str) -> String {
    format!(
        r#"The following text contains HTML. Check the grammar of the content within the tags.
Do not modify the HTML tags themselves: keep every tag, attribute, and nesting exactly as given.

Return the result as a JSON object with two keys:
- "corrected": boolean (true if errors were found and fixed, false otherwise)
- "text": string (the corrected text if errors were found, or the original text if no errors)

Do not include any other text or conversational preamble.

Text:
"""
{text}
"""

JSON Output:"#
    )
}

fn translation(text: &str, target_language: &str) -> String {
    format!(
        r#"Translate the following text to {target_language}.
The text may contain HTML. Translate only the human-readable content; do not add, remove, rename, or reorder any HTML tags or attributes.
Return only the translated text, with no commentary.

Text:
"""
{text}
"""

Translation:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_embeds_text() {
        let tasks = [
            ExtractionTask::Glossary,
            ExtractionTask::Summary,
            ExtractionTask::Tags,
            ExtractionTask::GrammarCheck,
            ExtractionTask::Translation {
                target_language: "Spanish".into(),
            },
        ];
        for task in &tasks {
            let prompt = build_prompt(task, "MARKER-42");
            assert!(prompt.contains("MARKER-42"), "{} prompt", task.name());
        }
    }

    #[test]
    fn json_tasks_ask_for_json() {
        assert!(build_prompt(&ExtractionTask::Glossary, "x").contains("JSON object"));
        assert!(build_prompt(&ExtractionTask::Tags, "x").contains("JSON array"));
        let grammar = build_prompt(&ExtractionTask::GrammarCheck, "x");
        assert!(grammar.contains("\"corrected\""));
        assert!(grammar.contains("\"text\""));
    }

    #[test]
    fn markup_tasks_protect_tags() {
        assert!(build_prompt(&ExtractionTask::GrammarCheck, "<p>x</p>")
            .contains("Do not modify the HTML tags"));

        let translation = build_prompt(
            &ExtractionTask::Translation {
                target_language: "Japanese".into(),
            },
            "<p>x</p>",
        );
        assert!(translation.contains("to Japanese"));
        assert!(translation.contains("do not add, remove, rename, or reorder any HTML tags"));
        assert!(translation.contains("<p>x</p>"));
    }
}
