//! HTTP API Client
//!
//! `gloo-net` implementation of the analysis backend contract.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use finsight::backend::{
    chat_url, endpoint, normalize_base, INSIGHTS_PATH, SUMMARY_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use finsight::{
    AiSummary, ApiError, ChatReply, InsightsBackend, InsightsData, ServiceInfo, UploadFile,
    UploadResponse, DEFAULT_API_BASE,
};

const API_URL_KEY: &str = "finsight_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, &normalize_base(url));
        }
    }
}

fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Read a picked file into memory for the multipart body
pub async fn read_upload_file(file: &web_sys::File) -> Result<UploadFile, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(js_error(&e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(UploadFile::new(file.name(), bytes))
}

/// Browser client bound to one base URL
#[derive(Debug, Clone)]
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status_body(response.status(), &body);
            log_error(&format!("Backend returned {}", err));
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&endpoint(&self.base_url, path))
            .send()
            .await
            .map_err(transport)?;
        Self::read_json(response).await
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    log_error(&format!("Network error: {}", e));
    ApiError::Transport(e.to_string())
}

fn multipart_body(file: &UploadFile) -> Result<web_sys::FormData, ApiError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| ApiError::Transport(js_error(&e)))?;

    let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(js_error(&e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.name)
        .map_err(|e| ApiError::Transport(js_error(&e)))?;
    Ok(form)
}

#[async_trait(?Send)]
impl InsightsBackend for GlooBackend {
    async fn upload_csv(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        // The browser sets the multipart boundary header itself
        let response = Request::post(&endpoint(&self.base_url, UPLOAD_PATH))
            .body(multipart_body(file)?)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        Self::read_json(response).await
    }

    async fn fetch_insights(&self) -> Result<InsightsData, ApiError> {
        self.get_json(INSIGHTS_PATH).await
    }

    async fn chat(&self, query: &str) -> Result<ChatReply, ApiError> {
        let response = Request::post(&chat_url(&self.base_url, query))
            .send()
            .await
            .map_err(transport)?;
        Self::read_json(response).await
    }

    async fn fetch_summary(&self) -> Result<AiSummary, ApiError> {
        self.get_json(SUMMARY_PATH).await
    }

    async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        self.get_json("/").await
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_round_trip() {
        set_api_base("http://analysis.local:9000/");
        assert_eq!(get_api_base(), "http://analysis.local:9000");

        set_api_base("");
        assert_eq!(get_api_base(), DEFAULT_API_BASE);
    }

    #[wasm_bindgen_test]
    async fn test_read_upload_file() {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(&b"date,amount\n"[..]));
        let file = web_sys::File::new_with_u8_array_sequence(&parts, "march.csv").unwrap();

        let upload = read_upload_file(&file).await.unwrap();
        assert_eq!(upload.name, "march.csv");
        assert_eq!(upload.bytes, b"date,amount\n");
    }
}
