//! Note encryption handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::AppState;

/// Body for both security routes.
#[derive(Debug, Deserialize)]
pub(super) struct TextRequest {
    text: String,
}

#[derive(Debug, Serialize)]
pub(super) struct EncryptResponse {
    encrypted_text: String,
}

#[derive(Debug, Serialize)]
pub(super) struct DecryptResponse {
    decrypted_text: String,
}

pub(super) async fn encrypt(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<EncryptResponse>, ApiError> {
    let encrypted_text = state.vault.encrypt(&request.text)?;
    Ok(Json(EncryptResponse { encrypted_text }))
}

pub(super) async fn decrypt(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<DecryptResponse>, ApiError> {
    let decrypted_text = state.vault.decrypt(&request.text)?;
    Ok(Json(DecryptResponse { decrypted_text }))
}
