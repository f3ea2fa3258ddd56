use super::{Dashboard, PendingAction, Tab, ToastLevel};
use crate::types::{ControlAction, DeploymentStatus, SystemState};

/// Status badge plus the primary/pause button pair for a run state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlPanel {
    pub badge_class: &'static str,
    pub badge_label: &'static str,
    /// Command issued by the primary button.
    pub main_action: ControlAction,
    pub main_class: &'static str,
    pub main_label_key: &'static str,
    pub pause_enabled: bool,
}

impl ControlPanel {
    pub fn for_state(state: SystemState) -> Self {
        let badge_class = match state {
            SystemState::Running => "bg-success",
            SystemState::Paused => "bg-warning",
            SystemState::Stopped => "bg-secondary",
        };
        if state == SystemState::Running {
            Self {
                badge_class,
                badge_label: state.label(),
                main_action: ControlAction::Stop,
                main_class: "btn btn-danger",
                main_label_key: "btn_stop",
                pause_enabled: true,
            }
        } else {
            Self {
                badge_class,
                badge_label: state.label(),
                main_action: ControlAction::Start,
                main_class: "btn btn-success",
                main_label_key: "btn_start",
                pause_enabled: false,
            }
        }
    }
}

/// Environment badge shown next to the page title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentBadge {
    pub label: String,
    pub class: &'static str,
    pub tooltip_key: &'static str,
}

impl DeploymentBadge {
    pub fn from_status(status: &DeploymentStatus) -> Self {
        Self {
            label: format!("{} {}", status.env, status.version),
            class: if status.env == "PROD" {
                "bg-danger"
            } else {
                "bg-success"
            },
            tooltip_key: if status.ready {
                "status_ready"
            } else {
                "status_not_ready"
            },
        }
    }
}

impl Dashboard {
    pub async fn load_deployment(&self) {
        match self.api().deployment_status().await {
            Ok(status) if !status.env.is_empty() => {
                self.update(|state| state.deployment = Some(status));
            }
            Ok(_) => tracing::debug!("Deployment status carried no environment"),
            Err(err) => tracing::warn!("Status check failed: {err}"),
        }
    }

    /// Asks for confirmation before sending a lifecycle command.
    pub fn request_control(&self, action: ControlAction) {
        if action == ControlAction::Optimize {
            self.request_optimize();
            return;
        }
        let message = self
            .translator()
            .format("confirm_control", &[("action", action.as_str())]);
        self.confirm(message, PendingAction::Control(action));
    }

    pub(super) async fn execute_control(&self, action: ControlAction) {
        tracing::info!(action = action.as_str(), "Sending control command");
        match self.api().control(action).await {
            Ok(response) => {
                self.update(|state| state.system = response.state);
                let message = self
                    .translator()
                    .format("toast_system", &[("action", action.as_str())]);
                self.notify(ToastLevel::Info, message);
            }
            Err(err) => self.notify_failure("Control command", &err),
        }
    }

    /// One refresh pass: counters always, logs and gauges only while their
    /// tab is visible. Failures are logged and left for the next pass.
    pub async fn poll_once(&self) {
        let tab = self.read(|state| state.active_tab);
        let logs = async {
            if tab == Tab::Dashboard {
                self.load_logs().await;
            }
        };
        let gauges = async {
            if tab == Tab::Performance {
                self.load_performance().await;
            }
        };
        futures::join!(self.refresh_stats(), logs, gauges);
    }

    /// Detached variant of [`Dashboard::poll_once`]: every read is its own
    /// task and none waits on another.
    pub(super) fn spawn_poll(&self) {
        let tab = self.read(|state| state.active_tab);
        let dashboard = self.clone();
        tokio::spawn(async move { dashboard.refresh_stats().await });
        match tab {
            Tab::Dashboard => {
                let dashboard = self.clone();
                tokio::spawn(async move { dashboard.load_logs().await });
            }
            Tab::Performance => {
                let dashboard = self.clone();
                tokio::spawn(async move { dashboard.load_performance().await });
            }
            _ => {}
        }
    }

    pub async fn refresh_stats(&self) {
        match self.api().stats().await {
            Ok(stats) => self.update(|state| {
                if let Some(system) = stats.state {
                    state.system = system;
                }
                state.stats = stats;
            }),
            Err(err) => tracing::debug!("Stats refresh failed: {err}"),
        }
    }

    pub async fn load_logs(&self) {
        match self.api().logs().await {
            Ok(lines) => self.update(|state| state.logs = lines),
            Err(err) => tracing::debug!("Log refresh failed: {err}"),
        }
    }

    pub async fn clear_logs(&self) {
        if let Err(err) = self.api().clear_logs().await {
            self.notify_failure("Log clear", &err);
        }
        self.load_logs().await;
    }

    pub async fn load_performance(&self) {
        match self.api().performance().await {
            Ok(gauges) => self.update(|state| state.performance = gauges),
            Err(err) => tracing::debug!("Performance refresh failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_offers_stop_and_pause() {
        let panel = ControlPanel::for_state(SystemState::Running);
        assert_eq!(panel.badge_class, "bg-success");
        assert_eq!(panel.main_action, ControlAction::Stop);
        assert_eq!(panel.main_label_key, "btn_stop");
        assert!(panel.pause_enabled);
    }

    #[test]
    fn test_paused_and_stopped_offer_start() {
        let paused = ControlPanel::for_state(SystemState::Paused);
        assert_eq!(paused.badge_class, "bg-warning");
        assert_eq!(paused.main_action, ControlAction::Start);
        assert!(!paused.pause_enabled);

        let stopped = ControlPanel::for_state(SystemState::Stopped);
        assert_eq!(stopped.badge_class, "bg-secondary");
        assert_eq!(stopped.main_class, "btn btn-success");
    }

    #[test]
    fn test_deployment_badge() {
        let badge = DeploymentBadge::from_status(&DeploymentStatus {
            env: "PROD".into(),
            version: "v5.2".into(),
            ready: false,
        });
        assert_eq!(badge.label, "PROD v5.2");
        assert_eq!(badge.class, "bg-danger");
        assert_eq!(badge.tooltip_key, "status_not_ready");

        let dev = DeploymentBadge::from_status(&DeploymentStatus {
            env: "DEV".into(),
            version: "v5.2".into(),
            ready: true,
        });
        assert_eq!(dev.class, "bg-success");
        assert_eq!(dev.tooltip_key, "status_ready");
    }
}
