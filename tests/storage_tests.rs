//! Integration tests for client-side persistence.

use s1m0n_dashboard::storage::{
    EVERGREEN_HISTORY_KEY, FileStorage, LANG_KEY, PERF_HISTORY_KEY, Preferences, Storage,
};
use s1m0n_dashboard::types::{LocalLogEntry, ThemeMode};
use std::sync::Arc;

fn entry(date: &str, action: &str) -> LocalLogEntry {
    LocalLogEntry {
        date: date.to_string(),
        action: action.to_string(),
    }
}

mod file_storage {
    use super::*;

    #[test]
    fn test_set_get_and_remove() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("prefs"));

        assert_eq!(storage.get(LANG_KEY), None);
        storage.set(LANG_KEY, "en").expect("set");
        assert_eq!(storage.get(LANG_KEY), Some("en".to_string()));

        storage.remove(LANG_KEY).expect("remove");
        assert_eq!(storage.get(LANG_KEY), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path());
        assert!(storage.remove("never_written").is_ok());
    }

    #[test]
    fn test_keys_are_sanitized_into_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path());

        storage.set("../escape", "x").expect("set");

        assert_eq!(storage.get("../escape"), Some("x".to_string()));
        assert!(dir.path().join("___escape.json").exists());
    }

    #[test]
    fn test_values_survive_new_instance() {
        let dir = tempfile::tempdir().expect("tempdir");
        FileStorage::new(dir.path()).set(LANG_KEY, "es").expect("set");

        let reopened = FileStorage::new(dir.path());
        assert_eq!(reopened.get(LANG_KEY), Some("es".to_string()));
    }
}

mod preferences {
    use super::*;

    fn on_disk() -> (tempfile::TempDir, Preferences) {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = Preferences::new(Arc::new(FileStorage::new(dir.path())));
        (dir, prefs)
    }

    #[test]
    fn test_locale_and_theme_round_trip() {
        let (_dir, prefs) = on_disk();
        assert_eq!(prefs.locale_code(), None);
        assert_eq!(prefs.theme(), ThemeMode::Light);

        prefs.set_locale_code("es").expect("locale");
        prefs.set_theme(ThemeMode::Dark).expect("theme");

        assert_eq!(prefs.locale_code().as_deref(), Some("es"));
        assert_eq!(prefs.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_history_buffers_are_independent() {
        let (_dir, prefs) = on_disk();
        prefs
            .push_history(PERF_HISTORY_KEY, entry("10:00:00", "Otimização"))
            .expect("push");
        prefs
            .push_history(EVERGREEN_HISTORY_KEY, entry("10:01:00", "Rust"))
            .expect("push");
        prefs
            .push_history(EVERGREEN_HISTORY_KEY, entry("10:02:00", "Tokio"))
            .expect("push");

        assert_eq!(prefs.history(PERF_HISTORY_KEY).len(), 1);
        let topics = prefs.history(EVERGREEN_HISTORY_KEY);
        assert_eq!(topics[0].action, "Tokio");
        assert_eq!(topics[1].action, "Rust");

        prefs.remove(EVERGREEN_HISTORY_KEY).expect("remove");
        assert!(prefs.history(EVERGREEN_HISTORY_KEY).is_empty());
        assert_eq!(prefs.history(PERF_HISTORY_KEY).len(), 1);
    }

    #[test]
    fn test_corrupt_history_reads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = Arc::new(FileStorage::new(dir.path()));
        storage.set(PERF_HISTORY_KEY, "{not json").expect("set");
        let prefs = Preferences::new(storage);

        assert!(prefs.history(PERF_HISTORY_KEY).is_empty());
        prefs
            .push_history(PERF_HISTORY_KEY, entry("11:00:00", "Otimização"))
            .expect("push");
        assert_eq!(prefs.history(PERF_HISTORY_KEY).len(), 1);
    }
}
