//! HTTP inbound adapter.
//!
//! Exposes the note assistant and note vault as a JSON API:
//!
//! | Route                   | Body                          | Response            |
//! |-------------------------|-------------------------------|---------------------|
//! | `GET /`                 |                               | `{message}`         |
//! | `GET /health`           |                               | `{status}`          |
//! | `POST /ai/glossary`     | `{text}`                      | term map            |
//! | `POST /ai/summary`      | `{text}`                      | `{summary}`         |
//! | `POST /ai/tags`         | `{text}`                      | `{tags}`            |
//! | `POST /ai/grammar`      | `{text}`                      | `{corrected_text}`  |
//! | `POST /ai/translate`    | `{text, target_language}`     | `{translation}`     |
//! | `POST /security/encrypt`| `{text}`                      | `{encrypted_text}`  |
//! | `POST /security/decrypt`| `{text}`                      | `{decrypted_text}`  |
//!
//! Service failures map to `500 {"detail": ...}`.

mod ai;
pub mod error;
pub mod router;
mod security;
pub mod state;
