use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    /// Class added to the root container.
    pub body_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            body_class: "dark-mode",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            body_class: "",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f4f6f9;
    --color-bg-secondary: #ffffff;
    --color-bg-overlay: rgba(15, 23, 42, 0.45);
    --color-sidebar-bg: #1e293b;
    --color-sidebar-text: #cbd5e1;
    --color-sidebar-active: #3b82f6;
    --color-text-primary: #0f172a;
    --color-text-muted: #64748b;
    --color-border: #e2e8f0;
    --color-card-bg: #ffffff;
    --color-input-bg: #ffffff;
    --color-input-border: #cbd5e1;
    --color-log-bg: #0f172a;
    --color-log-text: #a3e635;
    --color-gauge-track: #e2e8f0;
    --color-warning-text: #b45309;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.card { background: var(--color-card-bg); border-color: var(--color-border); }
.form-control, .form-select { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b1120;
    --color-bg-secondary: #111827;
    --color-bg-overlay: rgba(0, 0, 0, 0.7);
    --color-sidebar-bg: #020617;
    --color-sidebar-text: #94a3b8;
    --color-sidebar-active: #60a5fa;
    --color-text-primary: #e2e8f0;
    --color-text-muted: #94a3b8;
    --color-border: #1f2937;
    --color-card-bg: #111827;
    --color-input-bg: #0f172a;
    --color-input-border: #334155;
    --color-log-bg: #020617;
    --color-log-text: #86efac;
    --color-gauge-track: #1f2937;
    --color-warning-text: #fbbf24;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.card { background: var(--color-card-bg); border-color: var(--color-border); }
.form-control, .form-select { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.table { color: var(--color-text-primary); }
"#;
