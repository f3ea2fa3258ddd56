//! Client-side persistence for dashboard preferences.
//!
//! The dashboard keeps four values outside the backend: the locale code, the
//! theme flag and two bounded history buffers. They live behind the
//! [`Storage`] port so the view layer never touches the disk directly:
//! - file-based storage under the platform data directory on native targets
//! - in-memory storage for WASM and tests

use crate::types::{LocalLogEntry, ThemeMode};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(not(target_arch = "wasm32"))]
use std::fs;

/// Namespace shared by every persisted key.
pub const KEY_PREFIX: &str = "s1m0n_";
pub const LANG_KEY: &str = "s1m0n_lang";
pub const THEME_KEY: &str = "s1m0n_theme";
pub const PERF_HISTORY_KEY: &str = "s1m0n_perf_hist";
pub const EVERGREEN_HISTORY_KEY: &str = "s1m0n_evergreen_hist";

/// Upper bound on entries kept in a local history buffer.
pub const LOCAL_HISTORY_CAP: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ============================================
// File storage (native platforms)
// ============================================

/// One file per key under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted in the platform data directory, falling back to a
    /// relative `cache` directory when none is available.
    pub fn default_location() -> Self {
        if let Some(data_dir) = dirs::data_local_dir() {
            return Self::new(data_dir.join("s1m0n").join("prefs"));
        }
        Self::new(PathBuf::from("cache").join("prefs"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::CreateDir {
            path: self.root.clone(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StorageError::Write { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| StorageError::Delete { path, source })?;
        }
        Ok(())
    }
}

// ============================================
// In-memory storage (WASM, tests)
// ============================================

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// Platform default: files on native targets, memory on WASM.
pub fn default_storage() -> Arc<dyn Storage> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(FileStorage::default_location())
    }
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(MemoryStorage::new())
    }
}

/// Sanitize storage key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

// ============================================
// Typed preferences
// ============================================

/// Typed accessors over a [`Storage`] port.
#[derive(Clone)]
pub struct Preferences {
    storage: Arc<dyn Storage>,
}

impl Preferences {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn locale_code(&self) -> Option<String> {
        self.storage.get(LANG_KEY)
    }

    pub fn set_locale_code(&self, code: &str) -> Result<(), StorageError> {
        self.storage.set(LANG_KEY, code)
    }

    pub fn theme(&self) -> ThemeMode {
        ThemeMode::from_storage(self.storage.get(THEME_KEY).as_deref())
    }

    pub fn set_theme(&self, theme: ThemeMode) -> Result<(), StorageError> {
        self.storage.set(THEME_KEY, theme.storage_value())
    }

    /// Entries of a local history buffer, newest first. Malformed JSON reads
    /// as an empty buffer.
    pub fn history(&self, key: &str) -> Vec<LocalLogEntry> {
        self.storage
            .get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn push_history(&self, key: &str, entry: LocalLogEntry) -> Result<(), StorageError> {
        let mut entries = self.history(key);
        entries.insert(0, entry);
        entries.truncate(LOCAL_HISTORY_CAP);
        let encoded = serde_json::to_string(&entries)?;
        self.storage.set(key, &encoded)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences {
        Preferences::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("s1m0n_lang"), "s1m0n_lang");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let prefs = prefs();
        assert_eq!(prefs.theme(), ThemeMode::Light);
        prefs.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(prefs.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_history_is_newest_first_and_bounded() {
        let prefs = prefs();
        for i in 0..(LOCAL_HISTORY_CAP + 5) {
            prefs
                .push_history(
                    PERF_HISTORY_KEY,
                    LocalLogEntry {
                        date: format!("t{i}"),
                        action: "Optimization".into(),
                    },
                )
                .unwrap();
        }
        let entries = prefs.history(PERF_HISTORY_KEY);
        assert_eq!(entries.len(), LOCAL_HISTORY_CAP);
        assert_eq!(entries[0].date, format!("t{}", LOCAL_HISTORY_CAP + 4));
    }

    #[test]
    fn test_malformed_history_reads_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(PERF_HISTORY_KEY, "not json").unwrap();
        let prefs = Preferences::new(storage);
        assert!(prefs.history(PERF_HISTORY_KEY).is_empty());
    }

    #[test]
    fn test_keys_share_namespace() {
        for key in [LANG_KEY, THEME_KEY, PERF_HISTORY_KEY, EVERGREEN_HISTORY_KEY] {
            assert!(key.starts_with(KEY_PREFIX));
        }
    }
}
