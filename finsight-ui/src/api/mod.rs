//! API Layer
//!
//! Browser HTTP client for the analysis backend.

pub mod client;

pub use client::{get_api_base, read_upload_file, set_api_base, GlooBackend};
