use super::Dashboard;
use crate::types::{FieldValidationRequest, SecurityEvent};
use std::time::Duration;

/// How long the clipboard warning stays under a protected field.
pub const WARNING_LIFETIME: Duration = Duration::from_secs(3);
pub const INVALID_PULSE: Duration = Duration::from_millis(500);

/// Clipboard interactions blocked on credential inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardEvent {
    Copy,
    Cut,
    ContextMenu,
}

impl ClipboardEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ClipboardEvent::Copy => "copy",
            ClipboardEvent::Cut => "cut",
            ClipboardEvent::ContextMenu => "contextmenu",
        }
    }
}

/// Validation type sent for a field, inferred from its name.
pub fn validation_kind(name: &str) -> &'static str {
    if name.contains("url") {
        "url"
    } else if name.contains("key") {
        "api_key"
    } else {
        "username"
    }
}

impl Dashboard {
    /// Handles a blocked clipboard event on a secret field: reports it and
    /// shows a short-lived warning. The view is expected to cancel the native
    /// event.
    pub fn guard_clipboard(&self, field: &str, event: ClipboardEvent) {
        let field = if field.is_empty() { "unknown" } else { field }.to_string();
        tracing::info!(field = %field, event = event.as_str(), "Blocked clipboard access");

        let report = SecurityEvent {
            event: event.as_str().to_string(),
            field: field.clone(),
        };
        let dashboard = self.clone();
        tokio::spawn(async move {
            if let Err(err) = dashboard.api().report_security_event(&report).await {
                tracing::debug!("Security event report failed: {err}");
            }
        });

        let warning = self.next_token();
        let pulse = self.next_token();
        self.update(|state| {
            state.security.warnings.insert(field.clone(), warning);
            state.security.pulsing.insert(field.clone(), pulse);
        });

        let warned = field.clone();
        self.after(WARNING_LIFETIME, move |dashboard| {
            dashboard.update(|state| {
                if state.security.warnings.get(&warned) == Some(&warning) {
                    state.security.warnings.remove(&warned);
                }
            });
        });
        self.after(INVALID_PULSE, move |dashboard| {
            dashboard.update(|state| {
                if state.security.pulsing.get(&field) == Some(&pulse) {
                    state.security.pulsing.remove(&field);
                }
            });
        });
    }

    /// Backend validation run when a field loses focus. Empty values are not
    /// checked.
    pub async fn validate_field(&self, name: &str) {
        let value = self.read(|state| state.settings.field(name).trim().to_string());
        if value.is_empty() {
            return;
        }
        let request = FieldValidationRequest {
            field: name.to_string(),
            value,
            kind: validation_kind(name).to_string(),
        };
        match self.api().validate_field(&request).await {
            Ok(verdict) if verdict.valid => self.update(|state| {
                state.security.field_errors.remove(name);
            }),
            Ok(verdict) => {
                let message = verdict
                    .error
                    .unwrap_or_else(|| self.translator().text("field_invalid").to_string());
                self.update(|state| {
                    state.security.field_errors.insert(name.to_string(), message);
                });
            }
            Err(err) => tracing::debug!(field = name, "Field validation unavailable: {err}"),
        }
    }

    /// Blur handler. The Gemini key also refreshes the model list.
    pub async fn blur_field(&self, name: &str) {
        if name == "google_api_key" {
            futures::join!(self.validate_field(name), self.refresh_models());
        } else {
            self.validate_field(name).await;
        }
    }
}
