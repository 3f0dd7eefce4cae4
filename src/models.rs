//! Data Model
//!
//! Wire types shared by the CLI and the dashboard. Field names match the
//! analysis backend's JSON exactly.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One parsed CSV row. Owned by the backend; the clients only describe the
/// expected upload shape with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl Transaction {
    /// Column order the backend expects in an uploaded CSV
    pub const CSV_COLUMNS: [&'static str; 4] = ["date", "description", "amount", "category"];
}

/// Direction of a category's spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    #[serde(other)]
    Stable,
}

/// One aggregated category row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingInsight {
    pub category: String,
    pub total: f64,
    pub percentage: f64,
    #[serde(default)]
    pub trend: Trend,
}

/// A transaction the backend flagged as unusual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyAlert {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub reason: String,
}

/// The single object behind the whole dashboard.
///
/// Never patched in place: a new fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsData {
    pub total_spending: f64,
    /// Backend-ranked, highest spend first
    pub top_categories: Vec<SpendingInsight>,
    pub anomalies: Vec<AnomalyAlert>,
    pub monthly_average: f64,
}

/// Acknowledgement of a CSV upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub transactions_count: u64,
}

/// Body of a successful `/api/chat` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<serde_json::Value>,
}

/// AI-written narrative from `/api/insights/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    pub summary: String,
    pub generated_at: String,
}

/// Response of the backend root endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation log
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Wall-clock time shown under the bubble
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
