/// Backend port for the S1M0N dashboard.
///
/// Every call the dashboard makes against the publishing service goes through
/// [`DashboardApi`]. The production adapter is [`HttpApi`] (JSON over HTTP via
/// reqwest); tests substitute an in-process fake.
///
/// # Usage
///
/// ```rust,no_run
/// use s1m0n_dashboard::api::{DashboardApi, HttpApi};
/// use s1m0n_dashboard::config::DashboardConfig;
///
/// # async fn example() -> anyhow::Result<()> {
/// let api = HttpApi::new(&DashboardConfig::from_env()?)?;
/// let stats = api.stats().await?;
/// println!("{} published", stats.total_articles);
/// # Ok(())
/// # }
/// ```
mod http;

pub use http::HttpApi;

use crate::types::{
    ControlAction, ControlResponse, DeploymentStatus, FieldValidation, FieldValidationRequest,
    HistoryDetail, HistoryListing, ModelListing, NewFeed, PendingArticle, PerformanceSnapshot,
    RssFeed, SecurityEvent, SettingsBag, StatSnapshot,
};
use async_trait::async_trait;

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Validation type sent with credential checks.
pub const CREDENTIAL_KIND: &str = "api_key";

// ============================================
// Port
// ============================================

#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn deployment_status(&self) -> ApiResult<DeploymentStatus>;

    async fn control(&self, action: ControlAction) -> ApiResult<ControlResponse>;

    async fn stats(&self) -> ApiResult<StatSnapshot>;

    async fn logs(&self) -> ApiResult<Vec<String>>;

    async fn clear_logs(&self) -> ApiResult<()>;

    async fn performance(&self) -> ApiResult<PerformanceSnapshot>;

    async fn validate_field(&self, request: &FieldValidationRequest)
    -> ApiResult<FieldValidation>;

    /// Backend check of a credential value. Defaults to the field-level
    /// validator with the `api_key` type.
    async fn validate_credential(&self, field: &str, value: &str) -> ApiResult<bool> {
        let request = FieldValidationRequest {
            field: field.to_string(),
            value: value.to_string(),
            kind: CREDENTIAL_KIND.to_string(),
        };
        Ok(self.validate_field(&request).await?.valid)
    }

    async fn list_models(&self, api_key: &str) -> ApiResult<ModelListing>;

    async fn report_security_event(&self, event: &SecurityEvent) -> ApiResult<()>;

    async fn settings(&self) -> ApiResult<SettingsBag>;

    async fn save_settings(&self, bag: &SettingsBag) -> ApiResult<()>;

    async fn model_mode(&self) -> ApiResult<Option<String>>;

    async fn set_model_mode(&self, mode: &str) -> ApiResult<()>;

    async fn feeds(&self) -> ApiResult<Vec<RssFeed>>;

    async fn create_feed(&self, feed: &NewFeed) -> ApiResult<()>;

    async fn toggle_feed(&self, id: i64) -> ApiResult<()>;

    async fn delete_feed(&self, id: i64) -> ApiResult<()>;

    async fn delete_all_feeds(&self) -> ApiResult<()>;

    async fn pending(&self) -> ApiResult<Vec<PendingArticle>>;

    async fn approve(&self, id: i64, content: &str) -> ApiResult<()>;

    async fn reject(&self, id: i64) -> ApiResult<()>;

    async fn trigger_evergreen(&self, topic: &str) -> ApiResult<()>;

    /// Current cycle interval in minutes, when the backend reports one.
    async fn cycle_interval(&self) -> ApiResult<Option<u32>>;

    async fn history(&self) -> ApiResult<HistoryListing>;

    async fn history_detail(&self, session_id: &str) -> ApiResult<HistoryDetail>;

    async fn clear_history(&self) -> ApiResult<()>;

    /// Absolute URL of a backend-served asset such as `/static/cover.jpg`.
    fn asset_url(&self, path: &str) -> String {
        path.to_string()
    }
}
