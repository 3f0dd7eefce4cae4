//! Analysis Backend REST Client
//!
//! Native HTTP client for the analysis service's REST API.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;

use crate::backend::{
    chat_url, endpoint, normalize_base, InsightsBackend, UploadFile, DEFAULT_API_BASE,
    INSIGHTS_PATH, SUMMARY_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{AiSummary, ChatReply, InsightsData, ServiceInfo, UploadResponse};

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the analysis API (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves requests unbounded
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl From<&ApiConfig> for ClientConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            request_timeout_secs: api.request_timeout_secs,
        }
    }
}

/// Analysis backend REST client
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Map a response to `T`, or to a status error carrying `detail`
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status_body(status.as_u16(), &body);
            tracing::warn!("Backend returned {}", err);
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(transport)?;
        Self::read_json(response).await
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    tracing::warn!("Request failed: {}", e);
    ApiError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl InsightsBackend for BackendClient {
    async fn upload_csv(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        let url = self.url(UPLOAD_PATH);
        tracing::debug!("POST {} ({}, {} bytes)", url, file.name, file.bytes.len());

        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str("text/csv")
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        Self::read_json(response).await
    }

    async fn fetch_insights(&self) -> Result<InsightsData, ApiError> {
        self.get_json(INSIGHTS_PATH).await
    }

    async fn chat(&self, query: &str) -> Result<ChatReply, ApiError> {
        let url = chat_url(&self.base_url, query);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).send().await.map_err(transport)?;
        Self::read_json(response).await
    }

    async fn fetch_summary(&self) -> Result<AiSummary, ApiError> {
        self.get_json(SUMMARY_PATH).await
    }

    async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        self.get_json("/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_base_url_normalized() {
        let client = BackendClient::new(ClientConfig {
            base_url: "http://localhost:8000/".to_string(),
            request_timeout_secs: Some(5),
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(INSIGHTS_PATH), "http://localhost:8000/api/insights");
    }

    #[test]
    fn test_from_api_config() {
        let api = ApiConfig {
            base_url: "http://analysis:9000".to_string(),
            request_timeout_secs: Some(10),
        };
        let config = ClientConfig::from(&api);
        assert_eq!(config.base_url, "http://analysis:9000");
        assert_eq!(config.request_timeout_secs, Some(10));
    }
}
