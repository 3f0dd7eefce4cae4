//! # Finsight
//!
//! Financial Insights Platform - client side of a CSV spending-analysis
//! service. Upload a CSV of transactions, read back the aggregated insights,
//! and ask free-text questions about them.
//!
//! All analysis (categorization, anomaly detection, chat reasoning) happens
//! in the external backend; this crate is the request/response plumbing and
//! the view state around it, shared by the `finsight-cli` binary and the
//! `finsight-ui` WASM dashboard.
//!
//! ## Modules
//!
//! - [`models`]: Wire types (`InsightsData`, `ChatMessage`, ...)
//! - [`backend`]: Endpoint contract and the [`InsightsBackend`] trait
//! - [`session`]: Upload / dashboard / chat view state
//! - [`markup`]: Assistant reply formatting
//! - [`report`]: Dashboard projections (cards, pie slices, palette)
//! - `client`, `config`, `preview`: Native HTTP client, TOML config and
//!   local CSV checks (feature `client`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use finsight::{BackendClient, ClientConfig, UploadFile};
//! use finsight::session::{AppState, UploadForm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = BackendClient::new(ClientConfig::default())?;
//!
//!     let mut form = UploadForm::new();
//!     form.select(UploadFile::from_path("transactions.csv".as_ref())?);
//!
//!     let mut app = AppState::new();
//!     if form.submit(&backend).await.is_some() {
//!         app.load_insights(&backend).await?;
//!     }
//!
//!     if let Some(insights) = &app.insights {
//!         println!("Total spending: {:.2}", insights.total_spending);
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod markup;
pub mod models;
pub mod report;
pub mod session;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod config;
#[cfg(feature = "client")]
pub mod preview;

// Re-export top-level types for convenience
pub use backend::{InsightsBackend, MockBackend, UploadFile, DEFAULT_API_BASE};

pub use error::ApiError;

pub use models::{
    AiSummary, AnomalyAlert, ChatMessage, ChatReply, InsightsData, Role, ServiceInfo,
    SpendingInsight, Transaction, Trend, UploadResponse,
};

pub use session::{AppState, ChatSession, UploadForm, View};

#[cfg(feature = "client")]
pub use client::{BackendClient, ClientConfig};

#[cfg(feature = "client")]
pub use config::{Config, ConfigError, LoggingConfig};
