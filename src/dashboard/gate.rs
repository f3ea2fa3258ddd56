use super::{Dashboard, GateState};
use std::collections::BTreeMap;
use std::time::Duration;

/// Credentials at or below this many characters are rejected without asking
/// the backend.
pub const MIN_CREDENTIAL_LEN: usize = 5;
pub const CREDENTIAL_DEBOUNCE: Duration = Duration::from_millis(800);

/// A feature toggle that stays disabled until its credential validates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateBinding {
    pub toggle: &'static str,
    pub credential: &'static str,
    /// Forced off on load when the stored credential is too short.
    pub critical: bool,
}

pub const GATE_BINDINGS: [GateBinding; 5] = [
    GateBinding {
        toggle: "enable_global_images",
        credential: "google_api_key",
        critical: true,
    },
    GateBinding {
        toggle: "enable_youtube_embed",
        credential: "youtube_api_key",
        critical: true,
    },
    GateBinding {
        toggle: "enable_gnews",
        credential: "gnews_api_key",
        critical: false,
    },
    GateBinding {
        toggle: "enable_newsapi",
        credential: "newsapi_key",
        critical: false,
    },
    GateBinding {
        toggle: "enable_currents",
        credential: "currents_api_key",
        critical: false,
    },
];

pub(super) fn initial_gates() -> BTreeMap<&'static str, GateState> {
    GATE_BINDINGS
        .iter()
        .map(|binding| (binding.toggle, GateState::default()))
        .collect()
}

pub(super) fn binding_for_credential(name: &str) -> Option<&'static GateBinding> {
    GATE_BINDINGS.iter().find(|binding| binding.credential == name)
}

pub(super) fn binding_for_toggle(name: &str) -> Option<&'static GateBinding> {
    GATE_BINDINGS.iter().find(|binding| binding.toggle == name)
}

fn passes_format(value: &str) -> bool {
    value.trim().chars().count() > MIN_CREDENTIAL_LEN
}

impl Dashboard {
    /// Re-checks a gate once typing on its credential has paused.
    pub(super) fn schedule_gate_check(&self, binding: &'static GateBinding) {
        let dashboard = self.clone();
        tokio::spawn(async move {
            if let Some(generation) = dashboard
                .debouncer()
                .settle(binding.toggle, CREDENTIAL_DEBOUNCE)
                .await
            {
                dashboard.check_gate(binding, generation).await;
            }
        });
    }

    /// Disables every gate, then checks the loaded credentials right away.
    pub(super) async fn refresh_gates(&self) {
        let bindings: Vec<(&'static GateBinding, u64)> = self.update(|state| {
            let mut pending = Vec::new();
            for binding in &GATE_BINDINGS {
                state.gates.insert(binding.toggle, GateState::default());
                let length = state.settings.field(binding.credential).trim().chars().count();
                if binding.critical && length < MIN_CREDENTIAL_LEN {
                    state.settings.set_toggle(binding.toggle, false);
                }
                if length > 0 {
                    pending.push(binding);
                }
            }
            pending
                .into_iter()
                .map(|binding| (binding, self.debouncer().begin(binding.toggle)))
                .collect()
        });

        futures::future::join_all(
            bindings
                .into_iter()
                .map(|(binding, generation)| self.check_gate(binding, generation)),
        )
        .await;
    }

    async fn check_gate(&self, binding: &'static GateBinding, generation: u64) {
        let value = self.read(|state| state.settings.field(binding.credential).trim().to_string());
        if !passes_format(&value) {
            self.update(|state| {
                state.gates.insert(binding.toggle, GateState::default());
                state.settings.set_toggle(binding.toggle, false);
            });
            return;
        }

        self.update(|state| {
            state.gates.insert(
                binding.toggle,
                GateState {
                    enabled: false,
                    pending: true,
                },
            );
        });

        let verdict = self.api().validate_credential(binding.credential, &value).await;
        if !self.debouncer().is_current(binding.toggle, generation) {
            tracing::debug!(toggle = binding.toggle, "Discarding stale credential check");
            return;
        }

        let valid = match verdict {
            Ok(valid) => valid,
            Err(err) => {
                tracing::debug!(credential = binding.credential, "Credential check failed: {err}");
                false
            }
        };
        self.update(|state| {
            state.gates.insert(
                binding.toggle,
                GateState {
                    enabled: valid,
                    pending: false,
                },
            );
            if !valid {
                state.settings.set_toggle(binding.toggle, false);
            }
        });
    }
}
