use crate::dashboard::{AppState, ClipboardEvent, Dashboard, FieldKind, FieldSpec, Toast};
use crate::i18n::{Rendered, Translator};
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::future::Future;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.unsafe_ = true;
    options
});

/// Renders a generation transcript message. Backend messages are markdown.
pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// Inline width style for a percentage gauge.
pub fn gauge_width(percent: f64) -> String {
    format!("width: {:.0}%;", percent.clamp(0.0, 100.0))
}

// ============================================
// Core handle
// ============================================

/// Copyable handle shared through context: the core plus the mirrored state.
#[derive(Clone, Copy)]
pub struct Console {
    core: CopyValue<Dashboard>,
    pub state: Signal<AppState>,
}

impl Console {
    pub fn new(core: CopyValue<Dashboard>, state: Signal<AppState>) -> Self {
        Self { core, state }
    }

    pub fn core(&self) -> Dashboard {
        Dashboard::clone(&self.core.read())
    }

    pub fn snapshot(&self) -> AppState {
        AppState::clone(&self.state.read())
    }

    pub fn t(&self) -> Translator {
        Translator::new(self.state.read().locale)
    }

    /// Spawns an operation on the component's task scope.
    pub fn run<F, Fut>(&self, task: F)
    where
        F: FnOnce(Dashboard) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn(task(self.core()));
    }
}

pub fn use_console() -> Console {
    use_context::<Console>()
}

// ============================================
// Components
// ============================================

/// Element bound to a translation key. Rich keys render as markup.
#[component]
pub fn RichText(text_key: &'static str, #[props(default)] class: &'static str) -> Element {
    let console = use_console();
    match console.t().render(text_key, "") {
        Rendered::Html(html) => rsx! {
            div { class: class, dangerous_inner_html: "{html}" }
        },
        Rendered::Text(text) => rsx! {
            div { class: class, "{text}" }
        },
    }
}

#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal-dialog",
                onclick: move |ev| ev.stop_propagation(),
                div { class: "modal-header",
                    h5 { class: "modal-title", "{title}" }
                    button {
                        class: "btn-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog() -> Element {
    let console = use_console();
    let t = console.t();
    let Some(confirmation) = console.state.read().confirmation.clone() else {
        return rsx! {};
    };
    let title = t.text("modal_confirm_title");
    let cancel = t.text("btn_cancel");
    let accept = t.text("btn_confirm");

    rsx! {
        Modal {
            title: title.to_string(),
            on_close: move |_| console.run(|dashboard| async move {
                dashboard.resolve_confirmation(false).await
            }),
            p { "{confirmation.message}" }
            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| console.run(|dashboard| async move {
                        dashboard.resolve_confirmation(false).await
                    }),
                    "{cancel}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| console.run(|dashboard| async move {
                        dashboard.resolve_confirmation(true).await
                    }),
                    "{accept}"
                }
            }
        }
    }
}

#[component]
pub fn ToastStack() -> Element {
    let console = use_console();
    let toasts = console.state.read().toasts.clone();
    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let console = use_console();
    let id = toast.id;
    rsx! {
        div {
            class: format_args!("toast {}", toast.level.css_class()),
            onclick: move |_| console.core().dismiss_toast(id),
            "{toast.message}"
        }
    }
}

/// A settings input bound to the form. Secret inputs block clipboard access
/// and show the DLP warning.
#[component]
pub fn SettingsInput(spec: FieldSpec) -> Element {
    let console = use_console();
    let t = console.t();
    let (value, error, warned, pulsing) = {
        let state = console.state.read();
        (
            state.settings.field(spec.name).to_string(),
            state.security.field_errors.get(spec.name).cloned(),
            state.security.warnings.contains_key(spec.name),
            state.security.pulsing.contains_key(spec.name),
        )
    };
    let input_type = match spec.kind {
        FieldKind::Secret => "password",
        FieldKind::Url => "url",
        FieldKind::Text => "text",
    };
    let secret = spec.kind == FieldKind::Secret;
    let invalid = if error.is_some() || pulsing {
        "is-invalid"
    } else {
        ""
    };
    let label = t.text(spec.label_key);
    let placeholder = t.text(spec.placeholder_key);
    let tooltip = t.text(spec.tooltip_key);
    let warning = t.text("sec_alert");

    let guard = move |event: ClipboardEvent| {
        if secret {
            console.core().guard_clipboard(spec.name, event);
        }
    };

    rsx! {
        div { class: "mb-3 settings-field",
            label { class: "form-label", r#for: spec.name, title: tooltip, "{label}" }
            div { class: "input-group",
                input {
                    id: spec.name,
                    name: spec.name,
                    class: format_args!("form-control {}", invalid),
                    r#type: input_type,
                    autocomplete: "off",
                    placeholder: placeholder,
                    value: "{value}",
                    oninput: move |ev| console.core().edit_field(spec.name, ev.value()),
                    onblur: move |_| console.run(move |dashboard| async move {
                        dashboard.blur_field(spec.name).await
                    }),
                    oncopy: move |ev| {
                        if secret {
                            ev.prevent_default();
                        }
                        guard(ClipboardEvent::Copy);
                    },
                    oncut: move |ev| {
                        if secret {
                            ev.prevent_default();
                        }
                        guard(ClipboardEvent::Cut);
                    },
                    oncontextmenu: move |ev| {
                        if secret {
                            ev.prevent_default();
                        }
                        guard(ClipboardEvent::ContextMenu);
                    },
                }
                if !value.is_empty() {
                    button {
                        class: "btn btn-outline-secondary btn-clear",
                        r#type: "button",
                        onclick: move |_| console.core().clear_field(spec.name),
                        "×"
                    }
                }
            }
            if let Some(error) = error {
                div { class: "invalid-feedback d-block", "{error}" }
            }
            if warned {
                div { class: "security-warning", "{warning}" }
            }
        }
    }
}

/// Feature toggle that stays disabled until its credential validates.
#[component]
pub fn GatedToggle(toggle: &'static str, label_key: &'static str) -> Element {
    let console = use_console();
    let label = console.t().text(label_key);
    let (checked, gate) = {
        let state = console.state.read();
        (
            state.settings.toggle(toggle),
            state.gates.get(toggle).copied().unwrap_or_default(),
        )
    };
    let row_class = if gate.pending {
        "form-check form-switch gate-pending"
    } else if gate.enabled {
        "form-check form-switch"
    } else {
        "form-check form-switch gate-locked"
    };

    rsx! {
        div { class: row_class,
            input {
                id: toggle,
                class: "form-check-input",
                r#type: "checkbox",
                checked: checked,
                disabled: !gate.enabled,
                onchange: move |ev| console.core().set_toggle(toggle, ev.checked()),
            }
            label { class: "form-check-label", r#for: toggle, "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_tables() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_gauge_width_is_clamped() {
        assert_eq!(gauge_width(42.4), "width: 42%;");
        assert_eq!(gauge_width(180.0), "width: 100%;");
        assert_eq!(gauge_width(-3.0), "width: 0%;");
    }
}
