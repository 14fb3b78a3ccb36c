use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::application::anagram::{CanonicalKey, StoreResult, WordIndex};

/// Process-local word index. Never fails.
#[derive(Default)]
pub struct MemoryWordIndex {
    entries: Mutex<HashMap<String, VecDeque<String>>>,
}

impl MemoryWordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }
}

#[async_trait]
impl WordIndex for MemoryWordIndex {
    async fn insert(&self, key: &CanonicalKey, word: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .entry(key.as_str().to_owned())
            .or_default()
            .push_front(word.to_owned());
        Ok(())
    }

    async fn lookup(&self, key: &CanonicalKey) -> StoreResult<Vec<String>> {
        Ok(self
            .entries
            .lock()
            .get(key.as_str())
            .map(|words| words.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn reset_all(&self) -> StoreResult<()> {
        self.entries.lock().clear();
        Ok(())
    }
}
