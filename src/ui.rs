use crate::dashboard::{Dashboard, DeploymentBadge, Tab};
use crate::i18n::Locale;
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::shared::{ConfirmDialog, Console, ToastStack, use_console};
use crate::views::{
    EvergreenView, ManualView, OverviewView, PerformanceView, ReviewView, SettingsView,
    SourcesView,
};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

static DASHBOARD: OnceCell<Dashboard> = OnceCell::new();

/// Hands the configured core to [`App`]. Returns false if one was already
/// installed.
pub fn install(dashboard: Dashboard) -> bool {
    DASHBOARD.set(dashboard).is_ok()
}

#[component]
pub fn App() -> Element {
    let Some(dashboard) = DASHBOARD.get().cloned() else {
        return rsx! {
            div { class: "boot-error", "Dashboard core was not installed before launch." }
        };
    };

    let state = use_signal(|| dashboard.snapshot());
    let core = use_hook(|| CopyValue::new(dashboard));
    let console = use_context_provider(|| Console::new(core, state));

    use_state_sync(console);
    use_background_refresh(console);

    let snapshot = console.snapshot();
    let theme = theme_definition(snapshot.theme);
    let footer_text = console.t().text("footer_copy");
    let layout = if snapshot.sidebar_collapsed {
        "layout sidebar-collapsed"
    } else {
        "layout"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        style { dangerous_inner_html: "{theme.css}" }
        div { class: format_args!("{} {}", layout, theme.body_class),
            Sidebar {}
            div { class: "main-column",
                AppHeader {}
                TabPanels {}
                footer { class: "app-footer", "{footer_text}" }
            }
        }
        ToastStack {}
        ConfirmDialog {}
    }
}

/// Mirrors every core revision into the state signal.
fn use_state_sync(console: Console) {
    use_future(move || async move {
        let dashboard = console.core();
        let mut state = console.state;
        let mut revisions = dashboard.subscribe();
        state.set(dashboard.snapshot());
        while revisions.changed().await.is_ok() {
            state.set(dashboard.snapshot());
        }
    });
}

/// Initial load followed by the periodic refresh.
fn use_background_refresh(console: Console) {
    use_future(move || async move {
        let dashboard = console.core();
        dashboard.init().await;
        dashboard.run_poller().await;
    });
}

#[component]
fn AppHeader() -> Element {
    let console = use_console();
    let t = console.t();
    let snapshot = console.snapshot();
    let title = t.text(snapshot.active_tab.label_key());
    let language_label = t.text("lbl_language");
    let dark_label = t.text("lbl_dark_mode");
    let badge = snapshot.deployment.as_ref().map(DeploymentBadge::from_status);
    let dark = snapshot.theme == ThemeMode::Dark;

    rsx! {
        div { class: "header",
            div { class: "header-content",
                button {
                    class: "btn btn-ghost sidebar-toggle",
                    r#type: "button",
                    onclick: move |_| console.core().toggle_sidebar(),
                    "☰"
                }
                h1 { class: "page-title", "{title}" }
                if let Some(badge) = badge {
                    span {
                        class: format_args!("badge {}", badge.class),
                        title: t.text(badge.tooltip_key),
                        "{badge.label}"
                    }
                }
                div { class: "header-controls",
                    label { class: "visually-hidden", r#for: "lang-select", "{language_label}" }
                    select {
                        id: "lang-select",
                        class: "form-select form-select-sm",
                        value: snapshot.locale.code(),
                        onchange: move |ev| {
                            if let Some(locale) = Locale::from_code(&ev.value()) {
                                console.core().set_locale(locale);
                            }
                        },
                        for locale in Locale::ALL {
                            option { value: locale.code(), selected: locale == snapshot.locale, "{locale.label()}" }
                        }
                    }
                    label { class: "form-check form-switch",
                        input {
                            class: "form-check-input",
                            r#type: "checkbox",
                            checked: dark,
                            onchange: move |_| console.core().toggle_theme(),
                        }
                        span { class: "form-check-label", "{dark_label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let console = use_console();
    let t = console.t();
    rsx! {
        nav { class: "sidebar",
            div { class: "sidebar-brand", "S1M0N" }
            for tab in Tab::ALL {
                TabButton { tab, label: t.text(tab.label_key()) }
            }
        }
    }
}

#[component]
fn TabButton(tab: Tab, label: &'static str) -> Element {
    let console = use_console();
    let class = if console.state.read().active_tab == tab {
        "nav-link active"
    } else {
        "nav-link"
    };
    rsx! {
        a {
            class: class,
            href: "#",
            onclick: move |ev| {
                ev.prevent_default();
                console.run(move |dashboard| async move { dashboard.show(tab).await });
            },
            span { class: "nav-icon", "{tab.icon()}" }
            span { class: "nav-label", "{label}" }
        }
    }
}

#[component]
fn TabPanels() -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel { tab: Tab::Dashboard, children: rsx!( OverviewView {} ) }
            TabPanel { tab: Tab::Performance, children: rsx!( PerformanceView {} ) }
            TabPanel { tab: Tab::Evergreen, children: rsx!( EvergreenView {} ) }
            TabPanel { tab: Tab::Sources, children: rsx!( SourcesView {} ) }
            TabPanel { tab: Tab::Review, children: rsx!( ReviewView {} ) }
            TabPanel { tab: Tab::Settings, children: rsx!( SettingsView {} ) }
            TabPanel { tab: Tab::Manual, children: rsx!( ManualView {} ) }
        }
    }
}

#[component]
fn TabPanel(tab: Tab, children: Element) -> Element {
    let console = use_console();
    let is_active = console.state.read().active_tab == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            id: tab.id(),
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}
