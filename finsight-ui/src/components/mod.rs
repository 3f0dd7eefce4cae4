//! UI Components
//!
//! Leptos components for the upload screen, dashboard and chat.

pub mod ai_summary;
pub mod chat;
pub mod connection;
pub mod file_upload;
pub mod loading;
pub mod pie_chart;
pub mod reply;
pub mod summary_card;
pub mod toast;

pub use ai_summary::AiSummaryPanel;
pub use chat::ChatInterface;
pub use connection::ConnectionPanel;
pub use file_upload::FileUpload;
pub use loading::Loading;
pub use pie_chart::PieChart;
pub use reply::FormattedReply;
pub use summary_card::SummaryCard;
pub use toast::Toast;
