/// Orchestration core of the dashboard.
///
/// [`Dashboard`] owns the [`AppState`] view model and every operation the
/// views trigger: tab switching, system control, polling, settings, feeds,
/// credential gates, the review queue, histories and the clipboard guard. It
/// has no UI framework dependency; views subscribe to the revision channel
/// and render from cloned snapshots.
///
/// # Architecture
///
/// - `state` - the view model
/// - `tabs`, `control`, `settings`, `gate`, `feeds`, `review`, `history`,
///   `security` - operations grouped by dashboard section
/// - `confirm` - the confirm-then-execute flow shared by destructive actions
/// - `debounce` - keyed debounced tasks with stale-result suppression
mod confirm;
mod control;
mod debounce;
mod feeds;
mod gate;
mod history;
mod review;
mod security;
mod settings;
mod state;
mod tabs;

pub use control::{ControlPanel, DeploymentBadge};
pub use debounce::Debouncer;
pub use feeds::FeedField;
pub use gate::{CREDENTIAL_DEBOUNCE, GATE_BINDINGS, GateBinding, MIN_CREDENTIAL_LEN};
pub use history::humanize_timestamp;
pub use review::{NoSpeechCapture, SpeechCapture, SpeechError, decode_content, static_path};
pub use security::{ClipboardEvent, INVALID_PULSE, WARNING_LIFETIME, validation_kind};
pub use settings::{
    CATEGORY_GROUPS, CATEGORY_OPTIONS, CYCLE_PRESETS, DEFAULT_CYCLE_MINUTES, FieldKind, FieldSpec,
    GOOGLE_FIELDS, MODEL_TIERS, ModelSelector, NEWS_FIELDS, PERF_FIELDS, SettingsForm,
    TOGGLE_KEYS, WORDPRESS_FIELDS, preferred_model,
};
pub use state::{
    AppState, Confirmation, CycleModal, DetailBody, DetailModal, FeedsState, GateState,
    HistoriesState, HistoryKind, PendingAction, PendingItem, ReviewState, SecurityState, Toast,
    ToastLevel,
};
pub use tabs::Tab;

use crate::api::{ApiError, DashboardApi};
use crate::i18n::{Locale, Translator};
use crate::storage::{Preferences, Storage};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::watch;

/// Period of the background refresh.
pub const POLL_PERIOD: Duration = Duration::from_secs(5);
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Cheap, cloneable handle to the dashboard core.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn DashboardApi>,
    prefs: Preferences,
    speech: Arc<dyn SpeechCapture>,
    state: Mutex<AppState>,
    revision: watch::Sender<u64>,
    debouncer: Debouncer,
    tokens: AtomicU64,
}

impl Dashboard {
    /// Builds the core, restoring locale, theme and local histories from
    /// `storage`.
    pub fn new(
        api: Arc<dyn DashboardApi>,
        storage: Arc<dyn Storage>,
        speech: Arc<dyn SpeechCapture>,
    ) -> Self {
        let prefs = Preferences::new(storage);
        let mut state = AppState {
            locale: Locale::resolve(prefs.locale_code().as_deref()),
            theme: prefs.theme(),
            gates: gate::initial_gates(),
            ..AppState::default()
        };
        history::restore_local(&prefs, &mut state.histories);

        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                api,
                prefs,
                speech,
                state: Mutex::new(state),
                revision,
                debouncer: Debouncer::new(),
                tokens: AtomicU64::new(1),
            }),
        }
    }

    pub fn snapshot(&self) -> AppState {
        self.read(Clone::clone)
    }

    /// Receiver that changes whenever the state does.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.read(|state| state.locale))
    }

    /// Loads everything the landing view shows. Each read is independent.
    pub async fn init(&self) {
        futures::join!(
            self.load_deployment(),
            self.poll_once(),
            self.render_histories()
        );
    }

    /// Refreshes on a fixed period for as long as the returned future is
    /// polled. The first tick fires one period after the call. Ticks never
    /// wait on the reads they start.
    pub async fn run_poller(&self) {
        let start = tokio::time::Instant::now() + POLL_PERIOD;
        let mut ticker = tokio::time::interval_at(start, POLL_PERIOD);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.spawn_poll();
        }
    }

    // ============================================
    // Display preferences
    // ============================================

    pub fn set_locale(&self, locale: Locale) {
        if let Err(err) = self.inner.prefs.set_locale_code(locale.code()) {
            tracing::warn!("Failed to persist locale: {err}");
        }
        self.update(|state| state.locale = locale);
    }

    pub fn toggle_theme(&self) {
        let theme = self.update(|state| {
            state.theme = state.theme.toggled();
            state.theme
        });
        if let Err(err) = self.inner.prefs.set_theme(theme) {
            tracing::warn!("Failed to persist theme: {err}");
        }
    }

    pub fn toggle_sidebar(&self) {
        self.update(|state| state.sidebar_collapsed = !state.sidebar_collapsed);
    }

    // ============================================
    // Notifications
    // ============================================

    /// Shows a toast that dismisses itself after [`TOAST_LIFETIME`].
    pub fn notify(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_token();
        let message = message.into();
        self.update(|state| state.toasts.push(Toast { id, level, message }));
        self.after(TOAST_LIFETIME, move |dashboard| dashboard.dismiss_toast(id));
        id
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.update(|state| state.toasts.retain(|toast| toast.id != id));
    }

    fn notify_key(&self, level: ToastLevel, key: &'static str) {
        let message = self.translator().text(key);
        self.notify(level, message);
    }

    /// Localized toast for a failed write.
    fn notify_failure(&self, context: &str, err: &ApiError) {
        tracing::warn!("{context} failed: {err}");
        let key = match err {
            ApiError::Transport(_) => "err_generic",
            ApiError::Status { .. } | ApiError::Decode(_) => "err_save",
        };
        self.notify_key(ToastLevel::Error, key);
    }

    // ============================================
    // Internals
    // ============================================

    fn api(&self) -> &dyn DashboardApi {
        self.inner.api.as_ref()
    }

    fn prefs(&self) -> &Preferences {
        &self.inner.prefs
    }

    fn debouncer(&self) -> &Debouncer {
        &self.inner.debouncer
    }

    fn next_token(&self) -> u64 {
        self.inner.tokens.fetch_add(1, Ordering::Relaxed)
    }

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let state = self
            .inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Mutates the state and bumps the revision. The lock is released before
    /// subscribers are notified.
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let result = {
            let mut state = self
                .inner
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            f(&mut state)
        };
        self.inner.revision.send_modify(|revision| *revision += 1);
        result
    }

    /// Runs `f` on a clone of this handle after `delay`.
    fn after(&self, delay: Duration, f: impl FnOnce(Dashboard) + Send + 'static) {
        let dashboard = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f(dashboard);
        });
    }
}

pub(crate) fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
