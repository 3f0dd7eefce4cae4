//! View State
//!
//! State containers for the three interactive views. They hold no framework
//! types: the dashboard keeps each in a signal, the CLI keeps them locally.
//! Each view owns its state; nothing is shared between them.

pub mod app;
pub mod chat;
pub mod upload;

pub use app::{AppState, View, INSIGHTS_ALERT};
pub use chat::{ChatSession, CHAT_FALLBACK_REPLY};
pub use upload::{UploadForm, NO_FILE_SELECTED, UPLOAD_FAILED};
