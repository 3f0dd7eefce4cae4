//! Mock backend for testing
//!
//! Returns scripted responses and counts calls, so view-state flows can be
//! exercised without a running analysis service.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{InsightsBackend, UploadFile};
use crate::error::ApiError;
use crate::models::{
    AiSummary, AnomalyAlert, ChatReply, InsightsData, ServiceInfo, SpendingInsight, Trend,
    UploadResponse,
};

/// Scripted backend
pub struct MockBackend {
    upload: Result<UploadResponse, ApiError>,
    insights: Result<InsightsData, ApiError>,
    chat: Result<ChatReply, ApiError>,
    summary: Result<AiSummary, ApiError>,
    upload_calls: AtomicUsize,
    insights_calls: AtomicUsize,
    chat_queries: Mutex<Vec<String>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// A backend that answers every call successfully
    pub fn new() -> Self {
        Self {
            upload: Ok(UploadResponse {
                message: "File uploaded successfully".to_string(),
                transactions_count: 42,
            }),
            insights: Ok(sample_insights()),
            chat: Ok(ChatReply {
                response: "**Groceries** is your top category.".to_string(),
                model: None,
                usage: None,
            }),
            summary: Ok(AiSummary {
                summary: "Spending is steady.".to_string(),
                generated_at: "2024-03-31T12:00:00".to_string(),
            }),
            upload_calls: AtomicUsize::new(0),
            insights_calls: AtomicUsize::new(0),
            chat_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_upload(mut self, result: Result<UploadResponse, ApiError>) -> Self {
        self.upload = result;
        self
    }

    pub fn with_insights(mut self, result: Result<InsightsData, ApiError>) -> Self {
        self.insights = result;
        self
    }

    pub fn with_chat(mut self, result: Result<ChatReply, ApiError>) -> Self {
        self.chat = result;
        self
    }

    pub fn with_summary(mut self, result: Result<AiSummary, ApiError>) -> Self {
        self.summary = result;
        self
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn insights_calls(&self) -> usize {
        self.insights_calls.load(Ordering::SeqCst)
    }

    /// Queries received by `chat`, in order
    pub fn chat_queries(&self) -> Vec<String> {
        self.chat_queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl InsightsBackend for MockBackend {
    async fn upload_csv(&self, _file: &UploadFile) -> Result<UploadResponse, ApiError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.upload.clone()
    }

    async fn fetch_insights(&self) -> Result<InsightsData, ApiError> {
        self.insights_calls.fetch_add(1, Ordering::SeqCst);
        self.insights.clone()
    }

    async fn chat(&self, query: &str) -> Result<ChatReply, ApiError> {
        if let Ok(mut queries) = self.chat_queries.lock() {
            queries.push(query.to_string());
        }
        self.chat.clone()
    }

    async fn fetch_summary(&self) -> Result<AiSummary, ApiError> {
        self.summary.clone()
    }

    async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        Ok(ServiceInfo {
            message: "Financial Insights API".to_string(),
            version: Some("1.0.0".to_string()),
        })
    }
}

/// Insights with three categories and one anomaly
pub fn sample_insights() -> InsightsData {
    InsightsData {
        total_spending: 1250.0,
        top_categories: vec![
            SpendingInsight {
                category: "Groceries".to_string(),
                total: 600.0,
                percentage: 48.0,
                trend: Trend::Up,
            },
            SpendingInsight {
                category: "Dining".to_string(),
                total: 400.0,
                percentage: 32.0,
                trend: Trend::Stable,
            },
            SpendingInsight {
                category: "Gas".to_string(),
                total: 250.0,
                percentage: 20.0,
                trend: Trend::Down,
            },
        ],
        anomalies: vec![AnomalyAlert {
            date: "2024-02-14".to_string(),
            description: "Jewelry store".to_string(),
            amount: 480.0,
            reason: "Unusually high transaction ($480.00 vs avg $62.50)".to_string(),
        }],
        monthly_average: 625.0,
    }
}
