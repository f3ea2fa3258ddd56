use super::{ApiError, ApiResult, DashboardApi};
use crate::config::DashboardConfig;
use crate::types::{
    ControlAction, ControlResponse, DeploymentStatus, FieldValidation, FieldValidationRequest,
    HistoryDetail, HistoryListing, ModelListing, NewFeed, PendingArticle, PerformanceSnapshot,
    RssFeed, SecurityEvent, SettingsBag, StatSnapshot,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// reqwest adapter for the dashboard backend.
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(config: &DashboardConfig) -> ApiResult<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder().timeout(config.request_timeout).build()?;
        #[cfg(target_arch = "wasm32")]
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = checked(self.request(Method::GET, path).send().await?).await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = checked(self.request(Method::POST, path).json(body).send().await?).await?;
        decode(response).await
    }

    /// Sends a request whose response body is ignored.
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        checked(builder.send().await?).await?;
        Ok(())
    }
}

async fn checked(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

// ---------------
// Wire envelopes
// ---------------

#[derive(Serialize)]
struct ControlRequest {
    action: ControlAction,
}

#[derive(Deserialize)]
struct LogListing {
    #[serde(default)]
    logs: Vec<String>,
}

#[derive(Serialize)]
struct ModelKeyRequest<'a> {
    api_key: &'a str,
}

#[derive(Serialize, Deserialize)]
struct ModelMode {
    #[serde(default)]
    mode: Option<String>,
}

#[derive(Serialize)]
struct ApproveRequest<'a> {
    id: i64,
    content: &'a str,
}

#[derive(Serialize)]
struct RejectRequest {
    id: i64,
}

#[derive(Serialize)]
struct EvergreenRequest<'a> {
    topic: &'a str,
}

#[derive(Deserialize)]
struct CycleInterval {
    #[serde(default)]
    interval: Option<u32>,
}

const NO_BODY: Option<&()> = None;

#[async_trait]
impl DashboardApi for HttpApi {
    async fn deployment_status(&self) -> ApiResult<DeploymentStatus> {
        self.get_json("/api/status/deployment").await
    }

    async fn control(&self, action: ControlAction) -> ApiResult<ControlResponse> {
        self.post_json("/api/control", &ControlRequest { action })
            .await
    }

    async fn stats(&self) -> ApiResult<StatSnapshot> {
        self.get_json("/api/stats").await
    }

    async fn logs(&self) -> ApiResult<Vec<String>> {
        let listing: LogListing = self.get_json("/api/logs").await?;
        Ok(listing.logs)
    }

    async fn clear_logs(&self) -> ApiResult<()> {
        self.send(Method::POST, "/api/logs/clear", NO_BODY).await
    }

    async fn performance(&self) -> ApiResult<PerformanceSnapshot> {
        self.get_json("/api/performance").await
    }

    async fn validate_field(
        &self,
        request: &FieldValidationRequest,
    ) -> ApiResult<FieldValidation> {
        self.post_json("/api/security/validate", request).await
    }

    async fn list_models(&self, api_key: &str) -> ApiResult<ModelListing> {
        self.post_json("/api/gemini/validate", &ModelKeyRequest { api_key })
            .await
    }

    async fn report_security_event(&self, event: &SecurityEvent) -> ApiResult<()> {
        self.send(Method::POST, "/api/security/events", Some(event))
            .await
    }

    async fn settings(&self) -> ApiResult<SettingsBag> {
        self.get_json("/api/settings").await
    }

    async fn save_settings(&self, bag: &SettingsBag) -> ApiResult<()> {
        self.send(Method::POST, "/api/settings", Some(bag)).await
    }

    async fn model_mode(&self) -> ApiResult<Option<String>> {
        let current: ModelMode = self.get_json("/api/model").await?;
        Ok(current.mode)
    }

    async fn set_model_mode(&self, mode: &str) -> ApiResult<()> {
        let body = ModelMode {
            mode: Some(mode.to_string()),
        };
        self.send(Method::POST, "/api/model", Some(&body)).await
    }

    async fn feeds(&self) -> ApiResult<Vec<RssFeed>> {
        self.get_json("/api/rss").await
    }

    async fn create_feed(&self, feed: &NewFeed) -> ApiResult<()> {
        self.send(Method::POST, "/api/rss", Some(feed)).await
    }

    async fn toggle_feed(&self, id: i64) -> ApiResult<()> {
        self.send(Method::POST, &format!("/api/rss/{id}/toggle"), NO_BODY)
            .await
    }

    async fn delete_feed(&self, id: i64) -> ApiResult<()> {
        self.send(Method::DELETE, &format!("/api/rss/{id}"), NO_BODY)
            .await
    }

    async fn delete_all_feeds(&self) -> ApiResult<()> {
        self.send(Method::POST, "/api/rss/delete_all", NO_BODY).await
    }

    async fn pending(&self) -> ApiResult<Vec<PendingArticle>> {
        self.get_json("/api/pending").await
    }

    async fn approve(&self, id: i64, content: &str) -> ApiResult<()> {
        self.send(
            Method::POST,
            "/api/approve",
            Some(&ApproveRequest { id, content }),
        )
        .await
    }

    async fn reject(&self, id: i64) -> ApiResult<()> {
        self.send(Method::POST, "/api/reject", Some(&RejectRequest { id }))
            .await
    }

    async fn trigger_evergreen(&self, topic: &str) -> ApiResult<()> {
        self.send(
            Method::POST,
            "/api/evergreen",
            Some(&EvergreenRequest { topic }),
        )
        .await
    }

    async fn cycle_interval(&self) -> ApiResult<Option<u32>> {
        let current: CycleInterval = self.get_json("/api/cycle/adjust").await?;
        Ok(current.interval)
    }

    async fn history(&self) -> ApiResult<HistoryListing> {
        self.get_json("/api/history").await
    }

    async fn history_detail(&self, session_id: &str) -> ApiResult<HistoryDetail> {
        self.get_json(&format!("/api/history/{session_id}")).await
    }

    async fn clear_history(&self) -> ApiResult<()> {
        self.send(Method::DELETE, "/api/history", NO_BODY).await
    }

    fn asset_url(&self, path: &str) -> String {
        self.url(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(&DashboardConfig {
            api_base: base.to_string(),
            request_timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(
            api("http://127.0.0.1:5000/").url("/api/stats"),
            "http://127.0.0.1:5000/api/stats"
        );
    }

    #[test]
    fn test_control_request_shape() {
        let body = serde_json::to_value(ControlRequest {
            action: ControlAction::Pause,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "action": "PAUSE" }));
    }

    #[test]
    fn test_approve_request_shape() {
        let body = serde_json::to_value(ApproveRequest {
            id: 7,
            content: "edited",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "id": 7, "content": "edited" }));
    }

    #[test]
    fn test_cycle_interval_tolerates_missing_field() {
        let parsed: CycleInterval = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.interval, None);
    }

    #[test]
    fn test_log_listing_decodes() {
        let parsed: LogListing = serde_json::from_str(r#"{"logs":["a","b"]}"#).unwrap();
        assert_eq!(parsed.logs, vec!["a", "b"]);
    }
}
