//! The dashboard view model.
//!
//! [`AppState`] is the only mutable state the views read. It is owned by
//! [`Dashboard`](super::Dashboard) and handed to the UI as cloned snapshots.

use super::settings::{ModelSelector, SettingsForm};
use super::tabs::Tab;
use crate::i18n::Locale;
use crate::types::{
    DeploymentStatus, HistoryDetail, HistoryThread, LocalLogEntry, NewFeed, PerformanceSnapshot,
    RssFeed, StatSnapshot, SystemState, ThemeMode,
};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub locale: Locale,
    pub theme: ThemeMode,
    pub active_tab: Tab,
    pub sidebar_collapsed: bool,
    pub deployment: Option<DeploymentStatus>,
    pub system: SystemState,
    pub stats: StatSnapshot,
    pub logs: Vec<String>,
    pub performance: PerformanceSnapshot,
    pub feeds: FeedsState,
    pub settings: SettingsForm,
    pub gates: BTreeMap<&'static str, GateState>,
    pub models: ModelSelector,
    pub cycle: CycleModal,
    pub review: ReviewState,
    pub histories: HistoriesState,
    pub evergreen_topic: String,
    pub security: SecurityState,
    pub toasts: Vec<Toast>,
    pub confirmation: Option<Confirmation>,
}

// ============================================
// Feeds
// ============================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedsState {
    pub items: Vec<RssFeed>,
    pub modal_open: bool,
    pub draft: NewFeed,
}

// ============================================
// Credential gates
// ============================================

/// Availability of one credential-gated toggle. The checked flag itself lives
/// in the settings form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateState {
    pub enabled: bool,
    /// A backend check is in flight; the row is dimmed.
    pub pending: bool,
}

// ============================================
// Cycle modal
// ============================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleModal {
    pub open: bool,
    pub minutes: u32,
}

impl Default for CycleModal {
    fn default() -> Self {
        Self {
            open: false,
            minutes: super::settings::DEFAULT_CYCLE_MINUTES,
        }
    }
}

// ============================================
// Review queue
// ============================================

#[derive(Clone, Debug, PartialEq)]
pub struct PendingItem {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub image_url: Option<String>,
    /// Editable body, seeded from the decoded article content.
    pub draft: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewState {
    pub loading: bool,
    pub pending: Vec<PendingItem>,
    pub today: Vec<HistoryThread>,
    /// Item currently receiving dictation.
    pub dictating: Option<i64>,
}

// ============================================
// Histories
// ============================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoriesState {
    /// Most recent local optimization entries.
    pub optimizations: Vec<LocalLogEntry>,
    pub evergreen_topics: Vec<LocalLogEntry>,
    pub threads: Vec<HistoryThread>,
    pub detail: Option<DetailModal>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailModal {
    pub session_id: String,
    pub body: DetailBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailBody {
    Loading,
    Loaded(HistoryDetail),
    Failed,
}

// ============================================
// Security guard
// ============================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SecurityState {
    /// Field name -> token of the warning currently shown under it.
    pub warnings: BTreeMap<String, u64>,
    /// Field name -> token of the invalid pulse currently shown.
    pub pulsing: BTreeMap<String, u64>,
    /// Field name -> message from field-level validation.
    pub field_errors: BTreeMap<String, String>,
}

// ============================================
// Notifications
// ============================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Warning => "toast-warning",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

// ============================================
// Confirmation
// ============================================

/// Which local history buffer a clear request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryKind {
    /// Local optimization log.
    Perf,
    /// Server-backed generation history plus its local topic buffer.
    Evergreen,
}

/// An action that runs only after the operator accepts the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Control(crate::types::ControlAction),
    Optimize,
    ApproveArticle(i64),
    RejectArticle(i64),
    DeleteFeed(i64),
    DeleteAllFeeds,
    ClearHistory(HistoryKind),
    ClearAllHistories,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
    pub action: PendingAction,
}
