use super::Dashboard;

/// Top-level sections of the dashboard. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Performance,
    Evergreen,
    Sources,
    Review,
    Settings,
    Manual,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Dashboard,
        Tab::Performance,
        Tab::Evergreen,
        Tab::Sources,
        Tab::Review,
        Tab::Settings,
        Tab::Manual,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Performance => "performance",
            Tab::Evergreen => "evergreen",
            Tab::Sources => "sources",
            Tab::Review => "review",
            Tab::Settings => "settings",
            Tab::Manual => "manual",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// Translation key of the navigation label.
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Dashboard => "menu_dashboard",
            Tab::Performance => "menu_performance",
            Tab::Evergreen => "menu_evergreen",
            Tab::Sources => "menu_sources",
            Tab::Review => "menu_review",
            Tab::Settings => "menu_settings",
            Tab::Manual => "menu_manual",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "◉",
            Tab::Performance => "▤",
            Tab::Evergreen => "✎",
            Tab::Sources => "≋",
            Tab::Review => "✓",
            Tab::Settings => "⚙",
            Tab::Manual => "?",
        }
    }
}

impl Dashboard {
    /// Activates the tab with the given id. Unknown ids are ignored.
    pub async fn show_tab(&self, id: &str) {
        match Tab::from_id(id) {
            Some(tab) => self.show(tab).await,
            None => tracing::debug!(id, "ignoring unknown tab"),
        }
    }

    /// Activates `tab` and runs its loader once for this activation.
    pub async fn show(&self, tab: Tab) {
        self.update(|state| state.active_tab = tab);
        match tab {
            Tab::Sources => self.load_feeds().await,
            Tab::Settings => self.load_settings().await,
            Tab::Review => self.load_review().await,
            // The manual renders straight from the locale table.
            Tab::Manual | Tab::Dashboard | Tab::Performance | Tab::Evergreen => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("nope"), None);
    }

    #[test]
    fn test_initial_tab_is_dashboard() {
        assert_eq!(Tab::default(), Tab::Dashboard);
    }
}
