pub mod evergreen;
pub mod manual;
pub mod overview;
pub mod performance;
pub mod review;
pub mod settings;
pub mod shared;
pub mod sources;

pub use evergreen::EvergreenView;
pub use manual::ManualView;
pub use overview::OverviewView;
pub use performance::PerformanceView;
pub use review::ReviewView;
pub use settings::SettingsView;
pub use sources::SourcesView;
