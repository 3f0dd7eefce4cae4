//! Error Types
//!
//! Failures a call to the analysis backend can end in. Every call site
//! degrades the view instead of propagating these to rendering.

use thiserror::Error;

use crate::models::ErrorBody;

/// Backend call errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network failure, or the request could not be built
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("{}", status_message(*status, detail.as_deref()))]
    Status { status: u16, detail: Option<String> },

    /// 2xx response whose body did not have the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// The selected file could not be read locally
    #[error("File error: {0}")]
    File(String),
}

fn status_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("HTTP {}: {}", status, detail),
        None => format!("HTTP {}", status),
    }
}

impl ApiError {
    /// Build a status error from a raw non-2xx body
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);
        ApiError::Status { status, detail }
    }

    /// Backend-supplied detail text, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// User-facing text: the backend's `detail`, else `fallback`
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_extracted_from_body() {
        let err = ApiError::from_status_body(400, r#"{"detail": "File must be a CSV"}"#);
        assert_eq!(err.detail(), Some("File must be a CSV"));
        assert_eq!(err.detail_or("Upload failed"), "File must be a CSV");
        assert_eq!(err.to_string(), "HTTP 400: File must be a CSV");
    }

    #[test]
    fn test_detail_fallback() {
        let unparsable = ApiError::from_status_body(500, "<html>oops</html>");
        assert_eq!(unparsable.detail_or("Upload failed"), "Upload failed");

        let no_field = ApiError::from_status_body(500, r#"{"error": "x"}"#);
        assert_eq!(no_field.detail_or("Upload failed"), "Upload failed");

        let transport = ApiError::Transport("connection refused".into());
        assert_eq!(transport.detail_or("Upload failed"), "Upload failed");
    }
}
