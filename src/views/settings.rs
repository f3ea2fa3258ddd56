use crate::dashboard::{
    CATEGORY_GROUPS, CATEGORY_OPTIONS, GOOGLE_FIELDS, MODEL_TIERS, NEWS_FIELDS, WORDPRESS_FIELDS,
};
use crate::views::shared::{GatedToggle, RichText, SettingsInput, use_console};
use dioxus::prelude::*;

const PUBLISH_MODES: [(&str, &str); 3] = [
    ("publish", "opt_auto"),
    ("draft", "opt_draft"),
    ("manual", "opt_manual"),
];

#[component]
pub fn SettingsView() -> Element {
    let console = use_console();
    let t = console.t();
    let google_title = t.text("sec_google_title");
    let news_title = t.text("sec_news_title");
    let wp_title = t.text("sec_wp_title");
    let save = t.text("btn_save_all");

    rsx! {
        div { class: "main-container settings-view",
            RichText { text_key: "help_settings", class: "help-text" }

            div { class: "card settings-section",
                div { class: "card-header", h5 { "{google_title}" } }
                div { class: "card-body",
                    RichText { text_key: "help_google", class: "help-text" }
                    for spec in GOOGLE_FIELDS.iter().copied() {
                        SettingsInput { key: "{spec.name}", spec }
                    }
                    GatedToggle { toggle: "enable_global_images", label_key: "tg_images" }
                    GatedToggle { toggle: "enable_youtube_embed", label_key: "tg_videos" }
                    ModelSelect {}
                }
            }

            div { class: "card settings-section",
                div { class: "card-header", h5 { "{news_title}" } }
                div { class: "card-body",
                    RichText { text_key: "help_news", class: "help-text" }
                    for spec in NEWS_FIELDS.iter().copied() {
                        SettingsInput { key: "{spec.name}", spec }
                    }
                    GatedToggle { toggle: "enable_gnews", label_key: "btn_use_gnews" }
                    GatedToggle { toggle: "enable_newsapi", label_key: "btn_use_newsapi" }
                    GatedToggle { toggle: "enable_currents", label_key: "btn_use_currents" }
                    for group in CATEGORY_GROUPS {
                        CategoryPicker { key: "{group}", group }
                    }
                }
            }

            div { class: "card settings-section",
                div { class: "card-header", h5 { "{wp_title}" } }
                div { class: "card-body",
                    RichText { text_key: "help_wp", class: "help-text" }
                    for spec in WORDPRESS_FIELDS.iter().copied() {
                        SettingsInput { key: "{spec.name}", spec }
                    }
                    PublishModeSelect {}
                }
            }

            div { class: "settings-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    title: t.text("tt_save_all"),
                    onclick: move |_| console.run(|dashboard| async move { dashboard.save_settings().await }),
                    "{save}"
                }
            }
        }
    }
}

#[component]
fn ModelSelect() -> Element {
    let console = use_console();
    let t = console.t();
    let (models, selected) = {
        let state = console.state.read();
        (
            state.models.clone(),
            state.settings.field("ai_model_mode").to_string(),
        )
    };
    let label = t.text("lbl_ai_model");
    let invalid = t.text("model_invalid");
    let options: Vec<(String, String)> = if models.options.is_empty() {
        MODEL_TIERS
            .iter()
            .map(|&(value, label_key)| (value.to_string(), t.text(label_key).to_string()))
            .collect()
    } else {
        models
            .options
            .iter()
            .map(|model| (model.clone(), model.clone()))
            .collect()
    };

    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: "ai_model_mode", "{label}" }
            select {
                id: "ai_model_mode",
                class: if models.invalid { "form-select is-invalid" } else { "form-select" },
                disabled: !models.enabled,
                value: "{selected}",
                onchange: move |ev| console.core().select_model(ev.value()),
                for (value, text) in options {
                    option { value: "{value}", selected: value == selected, "{text}" }
                }
            }
            if models.invalid {
                div { class: "invalid-feedback d-block", "{invalid}" }
            }
        }
    }
}

#[component]
fn CategoryPicker(group: &'static str) -> Element {
    let console = use_console();
    let t = console.t();
    let label = t.text("btn_categories");
    let source = group.trim_end_matches("_categories");
    let options: Vec<(&'static str, bool)> = {
        let state = console.state.read();
        CATEGORY_OPTIONS
            .iter()
            .map(|option| (*option, state.settings.category_selected(group, option)))
            .collect()
    };

    rsx! {
        div { class: "category-picker",
            span { class: "category-title", "{label} · {source}" }
            div { class: "category-grid",
                for (option, checked) in options {
                    label { class: "form-check form-check-inline",
                        input {
                            class: "form-check-input",
                            r#type: "checkbox",
                            checked: checked,
                            onchange: move |ev| console.core().set_category(group, option, ev.checked()),
                        }
                        span { class: "form-check-label", "{option}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PublishModeSelect() -> Element {
    let console = use_console();
    let t = console.t();
    let mode = console.state.read().settings.field("wp_publish_mode").to_string();
    let label = t.text("lbl_pub_mode");
    let manual_hint = t.text("tt_manual_rev");

    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: "wp_publish_mode", title: t.text("tt_pub_mode"), "{label}" }
            select {
                id: "wp_publish_mode",
                class: "form-select",
                value: "{mode}",
                onchange: move |ev| console.core().edit_field("wp_publish_mode", ev.value()),
                for (value, label_key) in PUBLISH_MODES {
                    option { value: value, selected: value == mode, "{t.text(label_key)}" }
                }
            }
            if mode == "manual" {
                small { class: "text-muted", "{manual_hint}" }
            }
        }
    }
}
