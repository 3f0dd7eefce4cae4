//! Root view state: upload mode until insights arrive, dashboard after.

use crate::backend::InsightsBackend;
use crate::error::ApiError;
use crate::models::InsightsData;

/// Blocking alert shown when the insights fetch fails
pub const INSIGHTS_ALERT: &str = "Error loading insights. Please try again.";

/// Which screen the root renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Upload,
    Dashboard,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub insights: Option<InsightsData>,
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload mode until the first successful fetch; never reverts
    pub fn view(&self) -> View {
        if self.insights.is_some() {
            View::Dashboard
        } else {
            View::Upload
        }
    }

    pub fn begin_insights_fetch(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch outcome. On failure returns the alert text and leaves
    /// any insights already shown untouched.
    pub fn complete_insights_fetch(
        &mut self,
        result: Result<InsightsData, ApiError>,
    ) -> Result<(), &'static str> {
        self.loading = false;
        match result {
            Ok(data) => {
                self.insights = Some(data);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Error fetching insights: {}", e);
                Err(INSIGHTS_ALERT)
            }
        }
    }

    /// Fetch insights after a successful upload. No retry.
    pub async fn load_insights<B: InsightsBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Result<(), &'static str> {
        self.begin_insights_fetch();
        let result = backend.fetch_insights().await;
        self.complete_insights_fetch(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{sample_insights, MockBackend};

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(state.insights.is_none());
        assert!(!state.loading);
        assert_eq!(state.view(), View::Upload);
    }

    #[test]
    fn test_begin_sets_loading() {
        let mut state = AppState::new();
        state.begin_insights_fetch();
        assert!(state.loading);
        assert_eq!(state.view(), View::Upload);
    }

    #[tokio::test]
    async fn test_successful_fetch_switches_to_dashboard() {
        let backend = MockBackend::new();
        let mut state = AppState::new();

        assert!(state.load_insights(&backend).await.is_ok());
        assert_eq!(state.view(), View::Dashboard);
        assert!(!state.loading);
        assert_eq!(state.insights, Some(sample_insights()));
        assert_eq!(backend.insights_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_stays_on_upload() {
        let backend = MockBackend::new().with_insights(Err(ApiError::Status {
            status: 400,
            detail: Some("No transactions available".into()),
        }));
        let mut state = AppState::new();

        assert_eq!(state.load_insights(&backend).await, Err(INSIGHTS_ALERT));
        assert_eq!(state.view(), View::Upload);
        assert!(state.insights.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_transport_failure_stays_on_upload() {
        let backend =
            MockBackend::new().with_insights(Err(ApiError::Transport("refused".into())));
        let mut state = AppState::new();

        assert!(state.load_insights(&backend).await.is_err());
        assert!(state.insights.is_none());
    }

    #[test]
    fn test_dashboard_never_reverts() {
        let mut state = AppState::new();
        state.begin_insights_fetch();
        state.complete_insights_fetch(Ok(sample_insights())).unwrap();

        state.begin_insights_fetch();
        let outcome = state.complete_insights_fetch(Err(ApiError::Decode("bad".into())));
        assert_eq!(outcome, Err(INSIGHTS_ALERT));
        assert_eq!(state.view(), View::Dashboard);
        assert_eq!(state.insights, Some(sample_insights()));
    }

    #[test]
    fn test_refetch_replaces_wholesale() {
        let mut state = AppState::new();
        state.complete_insights_fetch(Ok(sample_insights())).unwrap();

        let mut next = sample_insights();
        next.anomalies.clear();
        next.total_spending = 10.0;
        state.complete_insights_fetch(Ok(next.clone())).unwrap();
        assert_eq!(state.insights, Some(next));
    }
}
