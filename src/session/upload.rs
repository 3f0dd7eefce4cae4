//! File upload form state.

use crate::backend::{InsightsBackend, UploadFile};
use crate::error::ApiError;
use crate::models::UploadResponse;

/// Shown when Upload is pressed with nothing selected
pub const NO_FILE_SELECTED: &str = "Please select a file first";

/// Shown when a non-2xx body carries no usable `detail`
pub const UPLOAD_FAILED: &str = "Upload failed";

/// Upload form state, generic over the selected-file handle
/// (`web_sys::File` in the browser, [`UploadFile`] natively).
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F = UploadFile> {
    pub file: Option<F>,
    pub uploading: bool,
    pub error: Option<String>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            uploading: false,
            error: None,
        }
    }
}

impl<F: Clone> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection. Any file is accepted; the `.csv` filter is a
    /// picker hint only.
    pub fn select(&mut self, file: F) {
        self.file = Some(file);
        self.error = None;
    }

    /// Upload button is disabled without a file or while uploading
    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.uploading
    }

    /// Start an upload. Without a selection this records the error and
    /// returns `None`: no request may be issued.
    pub fn begin(&mut self) -> Option<F> {
        match &self.file {
            None => {
                self.error = Some(NO_FILE_SELECTED.to_string());
                None
            }
            Some(file) => {
                self.uploading = true;
                self.error = None;
                Some(file.clone())
            }
        }
    }

    /// Apply the outcome. `uploading` is cleared whatever happened; the
    /// selection is kept so the user can retry.
    pub fn finish(
        &mut self,
        result: Result<UploadResponse, ApiError>,
    ) -> Option<UploadResponse> {
        self.uploading = false;
        match result {
            Ok(response) => {
                tracing::info!(
                    "Upload successful: {} ({} transactions)",
                    response.message,
                    response.transactions_count
                );
                Some(response)
            }
            Err(e) => {
                let message = match &e {
                    ApiError::Status { .. } => e.detail_or(UPLOAD_FAILED),
                    other => other.to_string(),
                };
                tracing::warn!("Upload failed: {}", e);
                self.error = Some(message);
                None
            }
        }
    }
}

impl UploadForm<UploadFile> {
    /// Run the whole upload; `Some` means the caller should proceed as on
    /// success, exactly once.
    pub async fn submit<B: InsightsBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Option<UploadResponse> {
        let file = self.begin()?;
        let result = backend.upload_csv(&file).await;
        self.finish(result)
    }
}
