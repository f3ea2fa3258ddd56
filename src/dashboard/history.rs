use super::{
    Dashboard, DetailBody, DetailModal, HistoriesState, HistoryKind, PendingAction, ToastLevel,
};
use crate::api::ApiError;
use crate::storage::{EVERGREEN_HISTORY_KEY, PERF_HISTORY_KEY, Preferences};
use crate::types::{ControlAction, LocalLogEntry};
use std::time::Duration;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Entries of each local buffer shown in the history tables.
pub const LOCAL_HISTORY_VISIBLE: usize = 5;

/// Delay before the server history is reloaded after a generation starts.
pub const EVERGREEN_REFRESH_DELAY: Duration = Duration::from_secs(1);

pub(super) fn restore_local(prefs: &Preferences, histories: &mut HistoriesState) {
    let mut optimizations = prefs.history(PERF_HISTORY_KEY);
    optimizations.truncate(LOCAL_HISTORY_VISIBLE);
    let mut topics = prefs.history(EVERGREEN_HISTORY_KEY);
    topics.truncate(LOCAL_HISTORY_VISIBLE);
    histories.optimizations = optimizations;
    histories.evergreen_topics = topics;
}

fn storage_key(kind: HistoryKind) -> &'static str {
    match kind {
        HistoryKind::Perf => PERF_HISTORY_KEY,
        HistoryKind::Evergreen => EVERGREEN_HISTORY_KEY,
    }
}

/// Wall-clock label stored with local history entries.
fn clock_label() -> String {
    super::local_now()
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default()
}

/// Formats a backend timestamp as a time of day. Values that do not parse are
/// returned unchanged.
pub fn humanize_timestamp(raw: &str) -> String {
    let clock = format_description!("[hour]:[minute]:[second]");
    let plain = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let parsed = OffsetDateTime::parse(raw, &Rfc3339)
        .map(|moment| moment.time())
        .or_else(|_| PrimitiveDateTime::parse(raw, plain).map(|moment| moment.time()));
    match parsed {
        Ok(moment) => moment.format(clock).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

impl Dashboard {
    fn restore_local_histories(&self) {
        let prefs = self.prefs().clone();
        self.update(|state| restore_local(&prefs, &mut state.histories));
    }

    fn record_local(&self, kind: HistoryKind, action: String) {
        let entry = LocalLogEntry {
            date: clock_label(),
            action,
        };
        if let Err(err) = self.prefs().push_history(storage_key(kind), entry) {
            tracing::warn!("Failed to record local history: {err}");
        }
    }

    /// Re-renders both local buffers and reloads the generation history.
    pub async fn render_histories(&self) {
        self.restore_local_histories();
        match self.api().history().await {
            Ok(listing) => self.update(|state| state.histories.threads = listing.threads),
            Err(err) => {
                tracing::warn!("History load failed: {err}");
                self.notify_key(ToastLevel::Error, "err_history");
            }
        }
    }

    pub async fn show_history_detail(&self, session_id: &str) {
        self.update(|state| {
            state.histories.detail = Some(DetailModal {
                session_id: session_id.to_string(),
                body: DetailBody::Loading,
            });
        });
        let body = match self.api().history_detail(session_id).await {
            Ok(detail) if detail.success => DetailBody::Loaded(detail),
            Ok(_) => DetailBody::Failed,
            Err(err) => {
                tracing::warn!(session_id, "History detail failed: {err}");
                DetailBody::Failed
            }
        };
        self.update(|state| {
            match state.histories.detail.as_mut() {
                Some(modal) if modal.session_id == session_id => modal.body = body,
                _ => {}
            }
        });
    }

    pub fn close_history_detail(&self) {
        self.update(|state| state.histories.detail = None);
    }

    pub fn request_clear_history(&self, kind: HistoryKind) {
        let message = self.translator().text("confirm_clear_history");
        self.confirm(message.to_string(), PendingAction::ClearHistory(kind));
    }

    /// Clears one history. Only the generation history has a server side.
    pub(super) async fn execute_clear_history(&self, kind: HistoryKind) {
        if kind == HistoryKind::Evergreen {
            if let Err(err) = self.api().clear_history().await {
                tracing::warn!("Server history clear failed: {err}");
            }
        }
        if let Err(err) = self.prefs().remove(storage_key(kind)) {
            tracing::warn!("Failed to clear local history: {err}");
        }
        self.render_histories().await;
        self.notify_key(ToastLevel::Success, "toast_history_cleared");
    }

    pub fn request_clear_all_histories(&self) {
        let message = self.translator().text("confirm_clear_all");
        self.confirm(message.to_string(), PendingAction::ClearAllHistories);
    }

    /// Clears both local buffers. The server history is left untouched.
    pub(super) async fn execute_clear_all_histories(&self) {
        for key in [PERF_HISTORY_KEY, EVERGREEN_HISTORY_KEY] {
            if let Err(err) = self.prefs().remove(key) {
                tracing::warn!("Failed to clear local history: {err}");
            }
        }
        self.render_histories().await;
        self.notify_key(ToastLevel::Warning, "toast_histories_cleared");
    }

    // ---------------
    // Evergreen
    // ---------------

    pub fn set_evergreen_topic(&self, topic: String) {
        self.update(|state| state.evergreen_topic = topic);
    }

    /// Starts a generation for the typed topic. Blank topics are ignored.
    pub async fn trigger_evergreen(&self) {
        let topic = self.read(|state| state.evergreen_topic.trim().to_string());
        if topic.is_empty() {
            return;
        }
        match self.api().trigger_evergreen(&topic).await {
            Ok(()) => {
                tracing::info!(%topic, "Evergreen generation started");
                self.record_local(HistoryKind::Evergreen, topic);
                self.update(|state| state.evergreen_topic.clear());
                self.restore_local_histories();
                self.notify_key(ToastLevel::Success, "toast_evergreen_started");
                self.after(EVERGREEN_REFRESH_DELAY, |dashboard| {
                    tokio::spawn(async move { dashboard.render_histories().await });
                });
            }
            Err(err) => self.notify_failure("Evergreen trigger", &err),
        }
    }

    // ---------------
    // Optimization
    // ---------------

    pub fn request_optimize(&self) {
        let message = self.translator().text("confirm_optimize");
        self.confirm(message.to_string(), PendingAction::Optimize);
    }

    /// Sends the optimize command. An answer without a readable body still
    /// counts as accepted.
    pub(super) async fn execute_optimize(&self) {
        match self.api().control(ControlAction::Optimize).await {
            Ok(_) | Err(ApiError::Decode(_)) => {
                let action = self.translator().text("opt_action").to_string();
                self.record_local(HistoryKind::Perf, action);
                self.restore_local_histories();
                self.notify_key(ToastLevel::Success, "toast_optimized");
            }
            Err(err @ ApiError::Status { .. }) => {
                tracing::info!("Optimize answered with {err}");
                self.notify_key(ToastLevel::Info, "toast_command_sent");
            }
            Err(err) => self.notify_failure("Optimize", &err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_humanize_rfc3339() {
        assert_eq!(humanize_timestamp("2025-02-01T14:05:09Z"), "14:05:09");
        assert_eq!(humanize_timestamp("2025-02-01T14:05:09.123-03:00"), "14:05:09");
    }

    #[test]
    fn test_humanize_plain_datetime() {
        assert_eq!(humanize_timestamp("2025-02-01 08:30:00"), "08:30:00");
    }

    #[test]
    fn test_humanize_passthrough() {
        assert_eq!(humanize_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_restore_local_keeps_newest_five() {
        let prefs = Preferences::new(Arc::new(MemoryStorage::new()));
        for n in 0..8 {
            prefs
                .push_history(
                    PERF_HISTORY_KEY,
                    LocalLogEntry {
                        date: format!("10:00:0{n}"),
                        action: format!("run {n}"),
                    },
                )
                .unwrap();
        }
        let mut histories = HistoriesState::default();
        restore_local(&prefs, &mut histories);
        assert_eq!(histories.optimizations.len(), LOCAL_HISTORY_VISIBLE);
        assert_eq!(histories.optimizations[0].action, "run 7");
        assert!(histories.evergreen_topics.is_empty());
    }
}
