//! Shared handler state.

use std::sync::Arc;

use crate::application::assistant::service::NoteAssistant;
use crate::application::vault::NoteVault;

/// Services handed to every handler. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<NoteAssistant>,
    pub vault: Arc<NoteVault>,
}
