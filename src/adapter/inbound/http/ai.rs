//! Note assistant handlers.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::state::AppState;
use crate::domain::task::{ExtractionTask, ParsedResult};

#[derive(Debug, Deserialize)]
pub(super) struct NoteRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct TranslateRequest {
    text: String,
    /// Blank or absent selects the configured default language.
    #[serde(default)]
    target_language: String,
}

/// Response body for a task result.
///
/// The glossary is returned as the bare term map; every other task wraps
/// its payload in a single named field.
fn response_body(result: ParsedResult) -> Value {
    match result {
        ParsedResult::Glossary(terms) => Value::Object(terms),
        ParsedResult::Summary(summary) => json!({ "summary": summary }),
        ParsedResult::Tags(tags) => json!({ "tags": tags }),
        ParsedResult::Grammar(text) => json!({ "corrected_text": text }),
        ParsedResult::Translation(text) => json!({ "translation": text }),
    }
}

async fn run(
    state: &AppState,
    task: &ExtractionTask,
    text: &str,
) -> Result<Json<Value>, ApiError> {
    let result = state.assistant.run(task, text).await?;
    Ok(Json(response_body(result)))
}

pub(super) async fn glossary(
    State(state): State<AppState>,
    Json(request): Json<NoteRequest>,
) -> Result<Json<Value>, ApiError> {
    run(&state, &ExtractionTask::Glossary, &request.text).await
}

pub(super) async fn summary(
    State(state): State<AppState>,
    Json(request): Json<NoteRequest>,
) -> Result<Json<Value>, ApiError> {
    run(&state, &ExtractionTask::Summary, &request.text).await
}

pub(super) async fn tags(
    State(state): State<AppState>,
    Json(request): Json<NoteRequest>,
) -> Result<Json<Value>, ApiError> {
    run(&state, &ExtractionTask::Tags, &request.text).await
}

pub(super) async fn grammar(
    State(state): State<AppState>,
    Json(request): Json<NoteRequest>,
) -> Result<Json<Value>, ApiError> {
    run(&state, &ExtractionTask::GrammarCheck, &request.text).await
}

pub(super) async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<Value>, ApiError> {
    let task = state.assistant.translation_task(&request.target_language);
    run(&state, &task, &request.text).await
}
