//! S1M0N dashboard: operator console for the S1M0N content-publishing
//! backend.
//!
//! The orchestration core ([`dashboard::Dashboard`]) is framework-free and
//! talks to the backend through the [`api::DashboardApi`] port. The Dioxus
//! views in [`ui`] and [`views`] are compiled with the `dioxus` feature.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod i18n;
pub mod logging;
pub mod storage;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod theme;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
