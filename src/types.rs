use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Untyped key/value bag owned by the backend. Values are strings, booleans or
/// JSON-encoded lists stored as strings.
pub type SettingsBag = BTreeMap<String, serde_json::Value>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn storage_value(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_storage(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Backend-owned run state. The backend echoes the last command verbatim for
/// pause/stop, so both spellings are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SystemState {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl From<String> for SystemState {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "RUNNING" => SystemState::Running,
            "PAUSED" | "PAUSE" => SystemState::Paused,
            _ => SystemState::Stopped,
        }
    }
}

impl SystemState {
    pub fn label(self) -> &'static str {
        match self {
            SystemState::Stopped => "STOPPED",
            SystemState::Running => "RUNNING",
            SystemState::Paused => "PAUSED",
        }
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ControlAction {
    Start,
    Stop,
    Pause,
    Optimize,
}

impl ControlAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlAction::Start => "START",
            ControlAction::Stop => "STOP",
            ControlAction::Pause => "PAUSE",
            ControlAction::Optimize => "OPTIMIZE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ControlResponse {
    pub state: SystemState,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DeploymentStatus {
    #[serde(default)]
    pub env: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub ready: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatSnapshot {
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub today: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub cache_count: u64,
    /// Present only on backends that report the run state with the counters.
    #[serde(default)]
    pub state: Option<SystemState>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct PerformanceSnapshot {
    #[serde(default)]
    pub cpu: f64,
    #[serde(default)]
    pub ram: f64,
    #[serde(default)]
    pub disk: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RssFeed {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewFeed {
    pub name: String,
    pub url: String,
    pub theme: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PendingArticle {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Raw article body, either plain text or a JSON envelope.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryThread {
    pub session_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl HistoryThread {
    pub fn is_completed(&self) -> bool {
        self.status == "COMPLETED"
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HistoryListing {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub threads: Vec<HistoryThread>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    User,
    Assistant,
    Other(String),
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(raw),
        }
    }
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(raw) => raw,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HistoryDetail {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub messages: Vec<HistoryMessage>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ModelListing {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub models: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SecurityEvent {
    pub event: String,
    pub field: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldValidationRequest {
    pub field: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FieldValidation {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Entry of a client-local history buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalLogEntry {
    pub date: String,
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_state_accepts_command_spellings() {
        assert_eq!(SystemState::from("RUNNING".to_string()), SystemState::Running);
        assert_eq!(SystemState::from("PAUSE".to_string()), SystemState::Paused);
        assert_eq!(SystemState::from("paused".to_string()), SystemState::Paused);
        assert_eq!(SystemState::from("STOP".to_string()), SystemState::Stopped);
        assert_eq!(SystemState::from("???".to_string()), SystemState::Stopped);
    }

    #[test]
    fn test_control_response_decodes() {
        let parsed: ControlResponse =
            serde_json::from_str(r#"{"state":"RUNNING"}"#).unwrap();
        assert_eq!(parsed.state, SystemState::Running);
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn test_control_action_wire_name() {
        let body = serde_json::to_string(&ControlAction::Optimize).unwrap();
        assert_eq!(body, r#""OPTIMIZE""#);
    }

    #[test]
    fn test_field_validation_request_uses_type_key() {
        let body = serde_json::to_value(FieldValidationRequest {
            field: "wp_url".into(),
            value: "https://x".into(),
            kind: "url".into(),
        })
        .unwrap();
        assert_eq!(body["type"], "url");
    }

    #[test]
    fn test_role_keeps_unknown_values() {
        assert_eq!(Role::from("system".to_string()).as_str(), "system");
        assert_eq!(Role::from("user".to_string()), Role::User);
    }
}
