use anyhow::Context;
use s1m0n_dashboard::api::HttpApi;
use s1m0n_dashboard::config::DashboardConfig;
use s1m0n_dashboard::dashboard::{Dashboard, NoSpeechCapture};
use s1m0n_dashboard::{logging, storage, ui};
use std::sync::Arc;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for line in BUNDLED_CONFIG.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            // Only set if not already set (allow env override)
            if std::env::var(key).is_err() {
                // SAFETY: We're setting env vars at startup before any threads are spawned
                unsafe {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    load_dotenv();
    if let Err(err) = logging::init() {
        eprintln!("logging disabled: {err}");
    }

    let config = DashboardConfig::from_env().context("invalid dashboard configuration")?;
    let api = HttpApi::new(&config).context("failed to build the backend client")?;
    tracing::info!(api_base = %config.api_base, "Starting S1M0N dashboard");

    let dashboard = Dashboard::new(
        Arc::new(api),
        storage::default_storage(),
        Arc::new(NoSpeechCapture),
    );
    if !ui::install(dashboard) {
        anyhow::bail!("dashboard core installed twice");
    }

    dioxus::launch(ui::App);
    Ok(())
}
