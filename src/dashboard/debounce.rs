use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Keyed debounced tasks.
///
/// Every trigger for a key starts a new generation and supersedes the older
/// ones. A task that wakes up after being superseded does nothing, and a task
/// that finishes its async work after being superseded must discard its
/// result (check [`Debouncer::is_current`] before applying it).
#[derive(Default)]
pub struct Debouncer {
    generations: Mutex<HashMap<String, u64>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation for `key`, invalidating earlier ones.
    pub fn begin(&self, key: &str) -> u64 {
        let mut generations = self
            .generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let generation = generations.entry(key.to_string()).or_insert(0);
        *generation += 1;
        *generation
    }

    pub fn is_current(&self, key: &str, generation: u64) -> bool {
        let generations = self
            .generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        generations.get(key).copied() == Some(generation)
    }

    /// Waits `delay` and returns the generation if no newer trigger arrived
    /// meanwhile.
    pub async fn settle(&self, key: &str, delay: Duration) -> Option<u64> {
        let generation = self.begin(key);
        tokio::time::sleep(delay).await;
        self.is_current(key, generation).then_some(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_newer_generation_supersedes_older() {
        let debouncer = Debouncer::new();
        let first = debouncer.begin("google_api_key");
        let second = debouncer.begin("google_api_key");
        assert!(!debouncer.is_current("google_api_key", first));
        assert!(debouncer.is_current("google_api_key", second));
    }

    #[test]
    fn test_keys_are_independent() {
        let debouncer = Debouncer::new();
        let a = debouncer.begin("gnews_api_key");
        debouncer.begin("newsapi_key");
        assert!(debouncer.is_current("gnews_api_key", a));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_triggers_only_last_settles() {
        let debouncer = Arc::new(Debouncer::new());
        let early = {
            let debouncer = debouncer.clone();
            tokio::spawn(async move { debouncer.settle("k", Duration::from_millis(800)).await })
        };
        tokio::time::sleep(Duration::from_millis(300)).await;
        let late = {
            let debouncer = debouncer.clone();
            tokio::spawn(async move { debouncer.settle("k", Duration::from_millis(800)).await })
        };
        assert_eq!(early.await.unwrap(), None);
        assert!(late.await.unwrap().is_some());
    }
}
