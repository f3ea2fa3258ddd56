//! In-process backend used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use s1m0n_dashboard::api::{ApiError, ApiResult, DashboardApi};
use s1m0n_dashboard::dashboard::{Dashboard, NoSpeechCapture, SpeechCapture, SpeechError};
use s1m0n_dashboard::storage::{MemoryStorage, Storage};
use s1m0n_dashboard::types::{
    ControlAction, ControlResponse, DeploymentStatus, FieldValidation, FieldValidationRequest,
    HistoryDetail, HistoryListing, HistoryThread, ModelListing, NewFeed, PendingArticle,
    PerformanceSnapshot, RssFeed, SecurityEvent, SettingsBag, StatSnapshot, SystemState,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// How an injected failure surfaces.
#[derive(Clone, Copy, Debug)]
pub enum Failure {
    /// Non-2xx answer.
    Status(u16),
    /// 2xx answer with an unreadable body.
    Garbled,
}

impl Failure {
    fn into_error(self) -> ApiError {
        match self {
            Failure::Status(status) => ApiError::Status {
                status,
                body: "backend failure".to_string(),
            },
            Failure::Garbled => match serde_json::from_str::<serde_json::Value>("<html>") {
                Err(err) => ApiError::Decode(err),
                Ok(_) => unreachable!("invalid JSON parsed"),
            },
        }
    }
}

#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<&'static str, Failure>>,
    delays: Mutex<HashMap<&'static str, Duration>>,
    holds: Mutex<HashMap<&'static str, Arc<Notify>>>,
    pub system: Mutex<SystemState>,
    pub feeds: Mutex<Vec<RssFeed>>,
    pub settings: Mutex<SettingsBag>,
    pub saved_settings: Mutex<Vec<SettingsBag>>,
    pub model_mode: Mutex<Option<String>>,
    pub saved_model_modes: Mutex<Vec<String>>,
    pub models: Mutex<Vec<String>>,
    pub valid_credentials: Mutex<HashSet<String>>,
    pub validated: Mutex<Vec<FieldValidationRequest>>,
    pub pending: Mutex<Vec<PendingArticle>>,
    pub approved: Mutex<Vec<(i64, String)>>,
    pub threads: Mutex<Vec<HistoryThread>>,
    pub cycle_minutes: Mutex<Option<u32>>,
    pub security_events: Mutex<Vec<SecurityEvent>>,
    pub evergreen_topics: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail(&self, call: &'static str, failure: Failure) {
        self.failures.lock().unwrap().insert(call, failure);
    }

    /// Makes `call` answer only after `delay` of (paused) time.
    pub fn delay(&self, call: &'static str, delay: Duration) {
        self.delays.lock().unwrap().insert(call, delay);
    }

    /// Makes `call` wait until the returned handle is notified.
    pub fn hold(&self, call: &'static str) -> Arc<Notify> {
        let release = Arc::new(Notify::new());
        self.holds.lock().unwrap().insert(call, release.clone());
        release
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|recorded| recorded.as_str() == call)
            .count()
    }

    pub fn accept_credential(&self, value: &str) {
        self.valid_credentials
            .lock()
            .unwrap()
            .insert(value.to_string());
    }

    async fn stall(&self, call: &'static str) {
        let delay = self.delays.lock().unwrap().get(call).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let release = self.holds.lock().unwrap().get(call).cloned();
        if let Some(release) = release {
            release.notified().await;
        }
    }

    fn hit(&self, call: &'static str) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call.to_string());
        match self.failures.lock().unwrap().get(call) {
            Some(failure) => Err(failure.into_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DashboardApi for FakeBackend {
    async fn deployment_status(&self) -> ApiResult<DeploymentStatus> {
        self.hit("deployment_status")?;
        Ok(DeploymentStatus {
            env: "DEV".to_string(),
            version: "v5.2".to_string(),
            ready: true,
        })
    }

    async fn control(&self, action: ControlAction) -> ApiResult<ControlResponse> {
        self.hit("control")?;
        let state = match action {
            ControlAction::Start => SystemState::Running,
            ControlAction::Pause => SystemState::Paused,
            ControlAction::Stop => SystemState::Stopped,
            ControlAction::Optimize => *self.system.lock().unwrap(),
        };
        *self.system.lock().unwrap() = state;
        Ok(ControlResponse {
            state,
            message: None,
        })
    }

    async fn stats(&self) -> ApiResult<StatSnapshot> {
        self.hit("stats")?;
        self.stall("stats").await;
        Ok(StatSnapshot {
            total_articles: 120,
            today: 4,
            pending: self.pending.lock().unwrap().len() as u64,
            cache_count: 33,
            state: Some(*self.system.lock().unwrap()),
        })
    }

    async fn logs(&self) -> ApiResult<Vec<String>> {
        self.hit("logs")?;
        Ok(vec!["[INFO] cycle finished".to_string()])
    }

    async fn clear_logs(&self) -> ApiResult<()> {
        self.hit("clear_logs")
    }

    async fn performance(&self) -> ApiResult<PerformanceSnapshot> {
        self.hit("performance")?;
        Ok(PerformanceSnapshot {
            cpu: 12.0,
            ram: 48.5,
            disk: 71.0,
        })
    }

    async fn validate_field(&self, request: &FieldValidationRequest) -> ApiResult<FieldValidation> {
        self.hit("validate_field")?;
        self.stall("validate_field").await;
        self.validated.lock().unwrap().push(request.clone());
        let valid = self.valid_credentials.lock().unwrap().contains(&request.value);
        Ok(FieldValidation {
            valid,
            error: (!valid).then(|| format!("{} rejected", request.field)),
        })
    }

    async fn list_models(&self, api_key: &str) -> ApiResult<ModelListing> {
        self.hit("list_models")?;
        let valid = self.valid_credentials.lock().unwrap().contains(api_key);
        Ok(ModelListing {
            success: valid,
            models: if valid {
                self.models.lock().unwrap().clone()
            } else {
                Vec::new()
            },
        })
    }

    async fn report_security_event(&self, event: &SecurityEvent) -> ApiResult<()> {
        self.hit("report_security_event")?;
        self.security_events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn settings(&self) -> ApiResult<SettingsBag> {
        self.hit("settings")?;
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save_settings(&self, bag: &SettingsBag) -> ApiResult<()> {
        self.hit("save_settings")?;
        self.saved_settings.lock().unwrap().push(bag.clone());
        Ok(())
    }

    async fn model_mode(&self) -> ApiResult<Option<String>> {
        self.hit("model_mode")?;
        Ok(self.model_mode.lock().unwrap().clone())
    }

    async fn set_model_mode(&self, mode: &str) -> ApiResult<()> {
        self.hit("set_model_mode")?;
        self.saved_model_modes.lock().unwrap().push(mode.to_string());
        Ok(())
    }

    async fn feeds(&self) -> ApiResult<Vec<RssFeed>> {
        self.hit("feeds")?;
        Ok(self.feeds.lock().unwrap().clone())
    }

    async fn create_feed(&self, feed: &NewFeed) -> ApiResult<()> {
        self.hit("create_feed")?;
        let mut feeds = self.feeds.lock().unwrap();
        let id = feeds.iter().map(|feed| feed.id).max().unwrap_or(0) + 1;
        feeds.push(RssFeed {
            id,
            name: feed.name.clone(),
            url: feed.url.clone(),
            theme: feed.theme.clone(),
            is_active: true,
        });
        Ok(())
    }

    async fn toggle_feed(&self, id: i64) -> ApiResult<()> {
        self.hit("toggle_feed")?;
        for feed in self.feeds.lock().unwrap().iter_mut() {
            if feed.id == id {
                feed.is_active = !feed.is_active;
            }
        }
        Ok(())
    }

    async fn delete_feed(&self, id: i64) -> ApiResult<()> {
        self.hit("delete_feed")?;
        self.feeds.lock().unwrap().retain(|feed| feed.id != id);
        Ok(())
    }

    async fn delete_all_feeds(&self) -> ApiResult<()> {
        self.hit("delete_all_feeds")?;
        self.feeds.lock().unwrap().clear();
        Ok(())
    }

    async fn pending(&self) -> ApiResult<Vec<PendingArticle>> {
        self.hit("pending")?;
        Ok(self.pending.lock().unwrap().clone())
    }

    async fn approve(&self, id: i64, content: &str) -> ApiResult<()> {
        self.hit("approve")?;
        self.approved.lock().unwrap().push((id, content.to_string()));
        self.pending.lock().unwrap().retain(|article| article.id != id);
        Ok(())
    }

    async fn reject(&self, id: i64) -> ApiResult<()> {
        self.hit("reject")?;
        self.pending.lock().unwrap().retain(|article| article.id != id);
        Ok(())
    }

    async fn trigger_evergreen(&self, topic: &str) -> ApiResult<()> {
        self.hit("trigger_evergreen")?;
        self.evergreen_topics.lock().unwrap().push(topic.to_string());
        Ok(())
    }

    async fn cycle_interval(&self) -> ApiResult<Option<u32>> {
        self.hit("cycle_interval")?;
        Ok(*self.cycle_minutes.lock().unwrap())
    }

    async fn history(&self) -> ApiResult<HistoryListing> {
        self.hit("history")?;
        Ok(HistoryListing {
            success: true,
            threads: self.threads.lock().unwrap().clone(),
        })
    }

    async fn history_detail(&self, session_id: &str) -> ApiResult<HistoryDetail> {
        self.hit("history_detail")?;
        Ok(HistoryDetail {
            success: self
                .threads
                .lock()
                .unwrap()
                .iter()
                .any(|thread| thread.session_id == session_id),
            ..HistoryDetail::default()
        })
    }

    async fn clear_history(&self) -> ApiResult<()> {
        self.hit("clear_history")?;
        self.threads.lock().unwrap().clear();
        Ok(())
    }

    fn asset_url(&self, path: &str) -> String {
        format!("http://backend.test{path}")
    }
}

/// Speech capture returning a fixed transcript.
pub struct ScriptedSpeech(pub &'static str);

#[async_trait]
impl SpeechCapture for ScriptedSpeech {
    fn is_available(&self) -> bool {
        true
    }

    async fn listen(&self, _language: &str) -> Result<String, SpeechError> {
        Ok(self.0.to_string())
    }
}

pub fn dashboard(backend: &Arc<FakeBackend>) -> Dashboard {
    dashboard_with(backend, Arc::new(MemoryStorage::new()), Arc::new(NoSpeechCapture))
}

pub fn dashboard_with(
    backend: &Arc<FakeBackend>,
    storage: Arc<dyn Storage>,
    speech: Arc<dyn SpeechCapture>,
) -> Dashboard {
    Dashboard::new(backend.clone(), storage, speech)
}

pub fn thread(session_id: &str, date: &str, status: &str) -> HistoryThread {
    HistoryThread {
        session_id: session_id.to_string(),
        title: Some(format!("Session {session_id}")),
        date: Some(date.to_string()),
        status: status.to_string(),
    }
}

pub fn article(id: i64, content: &str) -> PendingArticle {
    PendingArticle {
        id,
        title: format!("Article {id}"),
        content: Some(content.to_string()),
        image: Some(format!("C:\\s1m0n\\static\\cover_{id}.jpg")),
        date: "2025-02-01 10:00:00".to_string(),
    }
}

/// Lets spawned tasks run without moving the clock.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
