//! Analysis Backend Contract
//!
//! Endpoints of the external analysis service and the trait both HTTP
//! clients (native `reqwest`, browser `gloo-net`) implement.

pub mod mock;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{AiSummary, ChatReply, InsightsData, ServiceInfo, UploadResponse};

pub use mock::MockBackend;

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const UPLOAD_PATH: &str = "/api/upload";
pub const INSIGHTS_PATH: &str = "/api/insights";
pub const SUMMARY_PATH: &str = "/api/insights/summary";
pub const CHAT_PATH: &str = "/api/chat";

/// Multipart field name the backend reads the CSV from
pub const UPLOAD_FIELD: &str = "file";

/// Strip trailing slashes so paths can be appended directly
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}

/// Chat URL; the question travels as a query parameter, not a body
pub fn chat_url(base: &str, query: &str) -> String {
    format!(
        "{}?query={}",
        endpoint(base, CHAT_PATH),
        urlencoding::encode(query)
    )
}

/// A file ready to be sent as the `file` multipart part
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    #[cfg(feature = "client")]
    pub fn from_path(path: &std::path::Path) -> Result<Self, ApiError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ApiError::File(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.csv".to_string());
        Ok(Self { name, bytes })
    }
}

/// Operations the analysis service exposes.
///
/// `?Send` so browser futures (which hold JS values) can implement it.
#[async_trait(?Send)]
pub trait InsightsBackend {
    /// `POST /api/upload` with multipart field `file`
    async fn upload_csv(&self, file: &UploadFile) -> Result<UploadResponse, ApiError>;

    /// `GET /api/insights`
    async fn fetch_insights(&self) -> Result<InsightsData, ApiError>;

    /// `POST /api/chat?query=...`
    async fn chat(&self, query: &str) -> Result<ChatReply, ApiError>;

    /// `GET /api/insights/summary`
    async fn fetch_summary(&self) -> Result<AiSummary, ApiError>;

    /// `GET /`
    async fn service_info(&self) -> Result<ServiceInfo, ApiError>;
}
