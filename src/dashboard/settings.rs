use super::{Dashboard, ToastLevel};
use crate::types::SettingsBag;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

pub const DEFAULT_CYCLE_MINUTES: u32 = 120;
pub const CYCLE_PRESETS: [u32; 4] = [30, 60, 120, 240];
pub const CYCLE_RANGE: (u32, u32) = (15, 720);

const PUBLISH_MODE: &str = "wp_publish_mode";
const MANUAL_APPROVAL: &str = "require_manual_approval";
const MODEL_MODE: &str = "ai_model_mode";
const EXECUTION_INTERVAL: &str = "execution_interval";
const MAX_THREADS: &str = "max_ai_threads";
const MODEL_KEY_FIELD: &str = "google_api_key";
const PREFERRED_MODEL_TIER: &str = "flash";
const DEFAULT_MODEL_MODE: &str = "pro";

/// Built-in model tiers offered before a key has been validated.
pub const MODEL_TIERS: [(&str, &str); 2] = [("pro", "opt_model_pro"), ("flash", "opt_model_flash")];

/// Delay before the model list is fetched for a pre-filled key.
pub const MODEL_AUTOCHECK_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    /// Credential input guarded against clipboard access.
    Secret,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label_key: &'static str,
    pub placeholder_key: &'static str,
    pub tooltip_key: &'static str,
    pub kind: FieldKind,
}

const fn field(
    name: &'static str,
    label_key: &'static str,
    placeholder_key: &'static str,
    tooltip_key: &'static str,
    kind: FieldKind,
) -> FieldSpec {
    FieldSpec {
        name,
        label_key,
        placeholder_key,
        tooltip_key,
        kind,
    }
}

pub const GOOGLE_FIELDS: &[FieldSpec] = &[
    field("google_project_id", "lbl_google_project", "ph_google_project", "tt_google_proj", FieldKind::Text),
    field("google_api_key", "lbl_gemini_key", "ph_key", "tt_gemini_key", FieldKind::Secret),
    field("youtube_api_key", "lbl_yt_key", "ph_key", "tt_yt_key", FieldKind::Secret),
];

pub const NEWS_FIELDS: &[FieldSpec] = &[
    field("gnews_api_key", "lbl_gnews_key", "ph_key", "tt_news_key", FieldKind::Secret),
    field("newsapi_key", "lbl_newsapi_key", "ph_key", "tt_news_key", FieldKind::Secret),
    field("currents_api_key", "lbl_currents_key", "ph_key", "tt_news_key", FieldKind::Secret),
];

pub const WORDPRESS_FIELDS: &[FieldSpec] = &[
    field("wordpress_url", "lbl_wp_url", "ph_wp_url", "tt_wp_url", FieldKind::Url),
    field("wordpress_username", "lbl_wp_user", "ph_user", "tt_wp_user", FieldKind::Text),
    field("wordpress_password", "lbl_wp_pass", "ph_key", "tt_wp_pass", FieldKind::Secret),
];

/// Inputs of the performance form.
pub const PERF_FIELDS: [&str; 2] = [EXECUTION_INTERVAL, MAX_THREADS];

/// Feature toggles serialized as booleans.
pub const TOGGLE_KEYS: [&str; 5] = [
    "enable_global_images",
    "enable_youtube_embed",
    "enable_gnews",
    "enable_newsapi",
    "enable_currents",
];

/// Checkbox groups serialized as JSON string arrays.
pub const CATEGORY_GROUPS: [&str; 3] = ["gnews_categories", "newsapi_categories", "currents_categories"];

pub const CATEGORY_OPTIONS: [&str; 7] = [
    "general",
    "business",
    "technology",
    "science",
    "health",
    "sports",
    "entertainment",
];

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    GOOGLE_FIELDS
        .iter()
        .chain(NEWS_FIELDS)
        .chain(WORDPRESS_FIELDS)
        .find(|spec| spec.name == name)
}

fn is_settings_field(name: &str) -> bool {
    field_spec(name).is_some() || name == PUBLISH_MODE || name == MODEL_MODE
}

/// Bag values compare by their string form; the backend stores most values
/// as strings.
fn bag_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================
// Settings form
// ============================================

/// Current contents of the settings and performance forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    fields: BTreeMap<String, String>,
    toggles: BTreeMap<String, bool>,
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl SettingsForm {
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn toggle(&self, name: &str) -> bool {
        self.toggles.get(name).copied().unwrap_or(false)
    }

    pub fn set_toggle(&mut self, name: &str, checked: bool) {
        self.toggles.insert(name.to_string(), checked);
    }

    pub fn category_selected(&self, group: &str, value: &str) -> bool {
        self.categories
            .get(group)
            .is_some_and(|selected| selected.contains(value))
    }

    pub fn set_category(&mut self, group: &str, value: &str, checked: bool) {
        let selected = self.categories.entry(group.to_string()).or_default();
        if checked {
            selected.insert(value.to_string());
        } else {
            selected.remove(value);
        }
    }

    /// Execution interval rendered in minutes, e.g. `"120 min"`.
    pub fn interval_label(&self) -> String {
        match self.field(EXECUTION_INTERVAL).trim().parse::<f64>() {
            Ok(seconds) => format!("{} min", (seconds / 60.0).round() as i64),
            Err(_) => String::new(),
        }
    }

    pub fn threads_label(&self) -> String {
        self.field(MAX_THREADS).to_string()
    }

    /// Fills the form from a fetched bag and the stored model mode.
    pub fn populate(&mut self, bag: &SettingsBag, model_mode: Option<String>) {
        self.set_field(
            MODEL_MODE,
            model_mode
                .filter(|mode| !mode.is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL_MODE.to_string()),
        );

        for key in TOGGLE_KEYS {
            if let Some(value) = bag.get(key) {
                self.set_toggle(key, bag_text(value) == "true");
            }
        }

        for (key, value) in bag {
            if key.contains("_categories") {
                if let Some(selected) = decode_categories(value) {
                    self.categories.insert(key.clone(), selected);
                }
            } else if key != PUBLISH_MODE
                && (is_settings_field(key) || PERF_FIELDS.contains(&key.as_str()))
            {
                self.set_field(key, bag_text(value));
            }
        }

        // Manual review is a publish mode in the form but two keys in the bag.
        let publish_mode = if bag.get(MANUAL_APPROVAL).map(bag_text).as_deref() == Some("true") {
            "manual".to_string()
        } else {
            bag.get(PUBLISH_MODE)
                .map(bag_text)
                .filter(|mode| !mode.is_empty())
                .unwrap_or_else(|| "publish".to_string())
        };
        self.set_field(PUBLISH_MODE, publish_mode);
    }

    /// Serializes the settings form. Selecting "manual" stores a draft
    /// publish mode together with the approval flag.
    pub fn to_bag(&self) -> SettingsBag {
        let mut bag = SettingsBag::new();

        for group in CATEGORY_GROUPS {
            let selected: Vec<&str> = CATEGORY_OPTIONS
                .iter()
                .copied()
                .filter(|option| self.category_selected(group, option))
                .collect();
            let encoded = serde_json::to_string(&selected).unwrap_or_else(|_| "[]".to_string());
            bag.insert(group.to_string(), Value::String(encoded));
        }

        for (name, value) in &self.fields {
            if is_settings_field(name) {
                bag.insert(name.clone(), Value::String(value.clone()));
            }
        }

        for key in TOGGLE_KEYS {
            bag.insert(key.to_string(), Value::Bool(self.toggle(key)));
        }

        let mode = match self.field(PUBLISH_MODE) {
            "" => "publish",
            other => other,
        };
        let manual = mode == "manual";
        bag.insert(MANUAL_APPROVAL.to_string(), Value::Bool(manual));
        bag.insert(
            PUBLISH_MODE.to_string(),
            Value::String(if manual { "draft" } else { mode }.to_string()),
        );
        bag
    }

    /// Serializes the performance form. Empty inputs are left out.
    pub fn perf_bag(&self) -> SettingsBag {
        PERF_FIELDS
            .iter()
            .filter(|name| !self.field(name).trim().is_empty())
            .map(|name| (name.to_string(), Value::String(self.field(name).trim().to_string())))
            .collect()
    }
}

fn decode_categories(value: &Value) -> Option<BTreeSet<String>> {
    let parsed = match value {
        Value::String(raw) => serde_json::from_str::<Value>(raw).ok()?,
        other => other.clone(),
    };
    let items = parsed.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

// ============================================
// Model selector
// ============================================

/// The AI model dropdown. Disabled until a key validates against the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelSelector {
    pub enabled: bool,
    /// Models returned by the last successful validation. Empty means the
    /// built-in tiers are shown.
    pub options: Vec<String>,
    /// The last validation failed or returned no models.
    pub invalid: bool,
}

/// First model containing the preferred tier, falling back to the first one.
pub fn preferred_model(models: &[String]) -> Option<&String> {
    models
        .iter()
        .find(|model| model.contains(PREFERRED_MODEL_TIER))
        .or_else(|| models.first())
}

// ============================================
// Operations
// ============================================

impl Dashboard {
    pub fn edit_field(&self, name: &str, value: String) {
        self.update(|state| {
            state.security.field_errors.remove(name);
            state.settings.set_field(name, value);
        });
        if let Some(binding) = super::gate::binding_for_credential(name) {
            self.schedule_gate_check(binding);
        }
    }

    /// Empties an input through the clear affordance.
    pub fn clear_field(&self, name: &str) {
        self.edit_field(name, String::new());
    }

    pub fn set_toggle(&self, name: &str, checked: bool) {
        self.update(|state| {
            let gated = super::gate::binding_for_toggle(name).is_some();
            let allowed = !gated || state.gates.get(name).is_some_and(|gate| gate.enabled);
            state.settings.set_toggle(name, checked && allowed);
        });
    }

    pub fn set_category(&self, group: &str, value: &str, checked: bool) {
        self.update(|state| state.settings.set_category(group, value, checked));
    }

    /// Fetches the bag and model mode, fills the form, then re-runs the
    /// credential gates.
    pub async fn load_settings(&self) {
        let (bag, mode) = futures::join!(self.api().settings(), self.api().model_mode());
        let bag = match bag {
            Ok(bag) => bag,
            Err(err) => {
                tracing::warn!("Settings load failed: {err}");
                return;
            }
        };
        let mode = mode.unwrap_or_else(|err| {
            tracing::debug!("Model mode load failed: {err}");
            None
        });
        self.update(|state| state.settings.populate(&bag, mode));
        self.refresh_gates().await;

        let has_key = self.read(|state| !state.settings.field(MODEL_KEY_FIELD).is_empty());
        if has_key {
            self.after(MODEL_AUTOCHECK_DELAY, |dashboard| {
                tokio::spawn(async move { dashboard.refresh_models().await });
            });
        }
    }

    /// Saves the bag and, when a model is selected, the model choice. The two
    /// calls report their failures separately.
    pub async fn save_settings(&self) {
        let bag = self.read(|state| state.settings.to_bag());
        let model = bag
            .get(MODEL_MODE)
            .map(bag_text)
            .filter(|mode| !mode.is_empty());

        match self.api().save_settings(&bag).await {
            Ok(()) => self.notify_key(ToastLevel::Success, "toast_settings_saved"),
            Err(err) => self.notify_failure("Settings save", &err),
        }

        if let Some(mode) = model {
            if let Err(err) = self.api().set_model_mode(&mode).await {
                tracing::warn!("Model save failed: {err}");
                self.notify_key(ToastLevel::Error, "err_model_save");
            }
        }
    }

    pub async fn save_perf_settings(&self) {
        if self.post_perf_settings().await {
            self.notify_key(ToastLevel::Warning, "toast_perf_applied");
        }
    }

    async fn post_perf_settings(&self) -> bool {
        let bag = self.read(|state| state.settings.perf_bag());
        match self.api().save_settings(&bag).await {
            Ok(()) => true,
            Err(err) => {
                self.notify_failure("Performance save", &err);
                false
            }
        }
    }

    // ---------------
    // Cycle modal
    // ---------------

    pub async fn open_cycle_modal(&self) {
        let minutes = match self.api().cycle_interval().await {
            Ok(Some(minutes)) if minutes > 0 => minutes.clamp(CYCLE_RANGE.0, CYCLE_RANGE.1),
            Ok(_) => DEFAULT_CYCLE_MINUTES,
            Err(err) => {
                tracing::debug!("Cycle interval read failed: {err}");
                DEFAULT_CYCLE_MINUTES
            }
        };
        self.update(|state| {
            state.cycle.minutes = minutes;
            state.cycle.open = true;
        });
    }

    pub fn set_cycle(&self, minutes: u32) {
        let minutes = minutes.clamp(CYCLE_RANGE.0, CYCLE_RANGE.1);
        self.update(|state| state.cycle.minutes = minutes);
    }

    pub fn close_cycle_modal(&self) {
        self.update(|state| state.cycle.open = false);
    }

    /// Stores the chosen interval in seconds and saves the performance form.
    pub async fn save_cycle(&self) {
        self.update(|state| {
            let seconds = u64::from(state.cycle.minutes) * 60;
            state.settings.set_field(EXECUTION_INTERVAL, seconds.to_string());
        });
        if self.post_perf_settings().await {
            self.close_cycle_modal();
            self.notify_key(ToastLevel::Success, "toast_cycle_updated");
        }
    }

    // ---------------
    // Model selector
    // ---------------

    /// Validates the Gemini key and repopulates the model dropdown.
    pub async fn refresh_models(&self) {
        let generation = self.debouncer().begin(MODEL_KEY_FIELD);
        let key = self.read(|state| state.settings.field(MODEL_KEY_FIELD).trim().to_string());
        if key.is_empty() {
            self.update(|state| state.models = ModelSelector::default());
            return;
        }

        let listing = self.api().list_models(&key).await;
        if !self.debouncer().is_current(MODEL_KEY_FIELD, generation) {
            return;
        }
        match listing {
            Ok(listing) if listing.success && !listing.models.is_empty() => {
                self.update(|state| {
                    if let Some(model) = preferred_model(&listing.models) {
                        state.settings.set_field(MODEL_MODE, model.clone());
                    }
                    state.models = ModelSelector {
                        enabled: true,
                        options: listing.models,
                        invalid: false,
                    };
                });
            }
            other => {
                if let Err(err) = other {
                    tracing::debug!("Model listing failed: {err}");
                }
                self.update(|state| {
                    state.models = ModelSelector {
                        enabled: false,
                        options: Vec::new(),
                        invalid: true,
                    };
                });
            }
        }
    }

    pub fn select_model(&self, model: String) {
        self.update(|state| {
            if state.models.enabled {
                state.settings.set_field(MODEL_MODE, model);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: serde_json::Value) -> SettingsBag {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_manual_mode_serializes_as_draft_with_approval() {
        let mut form = SettingsForm::default();
        form.set_field(PUBLISH_MODE, "manual");
        let out = form.to_bag();
        assert_eq!(out[MANUAL_APPROVAL], json!(true));
        assert_eq!(out[PUBLISH_MODE], json!("draft"));
    }

    #[test]
    fn test_live_mode_clears_approval() {
        let mut form = SettingsForm::default();
        form.set_field(PUBLISH_MODE, "publish");
        let out = form.to_bag();
        assert_eq!(out[MANUAL_APPROVAL], json!(false));
        assert_eq!(out[PUBLISH_MODE], json!("publish"));
    }

    #[test]
    fn test_populate_reads_toggles_categories_and_labels() {
        let mut form = SettingsForm::default();
        form.populate(
            &bag(json!({
                "enable_gnews": "true",
                "enable_newsapi": "false",
                "gnews_categories": "[\"science\",\"health\"]",
                "newsapi_categories": "not json",
                "execution_interval": "7200",
                "max_ai_threads": "4",
                "wordpress_url": "https://blog.example",
                "unrelated_key": "ignored"
            })),
            None,
        );
        assert!(form.toggle("enable_gnews"));
        assert!(!form.toggle("enable_newsapi"));
        assert!(form.category_selected("gnews_categories", "science"));
        assert!(!form.category_selected("gnews_categories", "sports"));
        assert!(!form.category_selected("newsapi_categories", "science"));
        assert_eq!(form.interval_label(), "120 min");
        assert_eq!(form.threads_label(), "4");
        assert_eq!(form.field("wordpress_url"), "https://blog.example");
        assert_eq!(form.field("unrelated_key"), "");
        assert_eq!(form.field(MODEL_MODE), "pro");
        assert_eq!(form.field(PUBLISH_MODE), "publish");
    }

    #[test]
    fn test_populate_resolves_manual_mode() {
        let mut form = SettingsForm::default();
        form.populate(
            &bag(json!({ "require_manual_approval": "true", "wp_publish_mode": "draft" })),
            Some("flash".into()),
        );
        assert_eq!(form.field(PUBLISH_MODE), "manual");
        assert_eq!(form.field(MODEL_MODE), "flash");
    }

    #[test]
    fn test_categories_serialize_as_json_arrays() {
        let mut form = SettingsForm::default();
        form.set_category("gnews_categories", "technology", true);
        form.set_category("gnews_categories", "business", true);
        let out = form.to_bag();
        assert_eq!(out["gnews_categories"], json!("[\"business\",\"technology\"]"));
        assert_eq!(out["currents_categories"], json!("[]"));
    }

    #[test]
    fn test_toggles_serialize_as_booleans() {
        let mut form = SettingsForm::default();
        form.set_toggle("enable_currents", true);
        let out = form.to_bag();
        assert_eq!(out["enable_currents"], json!(true));
        assert_eq!(out["enable_gnews"], json!(false));
    }

    #[test]
    fn test_perf_bag_contains_only_perf_fields() {
        let mut form = SettingsForm::default();
        form.set_field(EXECUTION_INTERVAL, "2700");
        form.set_field("wordpress_url", "https://blog.example");
        let out = form.perf_bag();
        assert_eq!(out.len(), 1);
        assert_eq!(out[EXECUTION_INTERVAL], json!("2700"));
    }

    #[test]
    fn test_preferred_model_prefers_flash() {
        let models = vec![
            "gemini-1.5-pro".to_string(),
            "gemini-1.5-flash".to_string(),
            "gemini-2.0-flash".to_string(),
        ];
        assert_eq!(preferred_model(&models).unwrap(), "gemini-1.5-flash");
        let no_flash = vec!["gemini-1.5-pro".to_string()];
        assert_eq!(preferred_model(&no_flash).unwrap(), "gemini-1.5-pro");
        assert!(preferred_model(&[]).is_none());
    }
}
