use std::sync::Arc;

use super::canonical::canonicalize;
use super::index::WordIndex;
use super::types::{AnagramError, StoreOperation};

/// Query, reload and append operations over an injected word index.
///
/// Holds no state of its own. Multi-word loads are not atomic: a failure
/// leaves already inserted words in place and concurrent loads interleave.
#[derive(Clone)]
pub struct AnagramService {
    index: Arc<dyn WordIndex>,
}

impl AnagramService {
    pub fn new(index: Arc<dyn WordIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &Arc<dyn WordIndex> {
        &self.index
    }

    pub async fn get_anagrams(&self, word: &str) -> Result<Vec<String>, AnagramError> {
        log::info!("Starting to find anagrams for word '{}'", word);

        let key = canonicalize(word);
        log::debug!("Sorted word is '{}'", key);

        let anagrams = self
            .index
            .lookup(&key)
            .await
            .map_err(|err| {
                log::error!("Failed to look up key '{}': {}", key, err);
                AnagramError::store(StoreOperation::Lookup)(err)
            })?;

        if anagrams.is_empty() {
            log::info!("Anagrams not found for word '{}'", word);
            return Err(AnagramError::NotFound);
        }

        log::info!("Found anagrams: {:?}", anagrams);
        Ok(anagrams)
    }

    /// Clears the index, then appends `words` in order.
    pub async fn load_word_list(&self, words: &[String]) -> Result<(), AnagramError> {
        log::info!("Starting to load new wordlist of {} words", words.len());

        self.index.reset_all().await.map_err(|err| {
            log::error!("Failed to clear old data: {}", err);
            AnagramError::store(StoreOperation::Reset)(err)
        })?;
        log::debug!("Old data cleared successfully");

        self.add_words(words).await
    }

    /// Inserts each word under its key in input order, stopping at the first failure.
    pub async fn add_words(&self, words: &[String]) -> Result<(), AnagramError> {
        log::info!("Adding {} new words", words.len());

        for (done, word) in words.iter().enumerate() {
            let key = canonicalize(word);
            if let Err(err) = self.index.insert(&key, word).await {
                log::error!(
                    "Failed to add word '{}' after {} of {} words: {}",
                    word,
                    done,
                    words.len(),
                    err
                );
                return Err(AnagramError::store(StoreOperation::Insert)(err));
            }
        }

        log::info!("New words added successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::anagram::canonical::CanonicalKey;
    use crate::application::anagram::index::{StoreResult, StoreUnavailable};
    use crate::infrastructure::database::memory::MemoryWordIndex;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn memory_service() -> (AnagramService, Arc<MemoryWordIndex>) {
        let index = Arc::new(MemoryWordIndex::new());
        (AnagramService::new(index.clone()), index)
    }

    #[tokio::test]
    async fn finds_anagrams_after_load() {
        let (service, _) = memory_service();
        service
            .load_word_list(&words(&["foobar", "aabb", "baba", "boofar", "test"]))
            .await
            .unwrap();

        assert_eq!(service.get_anagrams("abba").await.unwrap(), ["baba", "aabb"]);
        assert_eq!(
            service.get_anagrams("abfoor").await.unwrap(),
            ["boofar", "foobar"]
        );
        assert_eq!(
            service.get_anagrams("raboof").await.unwrap(),
            ["boofar", "foobar"]
        );
        assert!(matches!(
            service.get_anagrams("incorrect").await,
            Err(AnagramError::NotFound)
        ));
    }

    #[tokio::test]
    async fn add_words_prepends_to_existing_entries() {
        let (service, _) = memory_service();
        service
            .load_word_list(&words(&["foobar", "boofar"]))
            .await
            .unwrap();
        service
            .add_words(&words(&["bofaro", "boofra"]))
            .await
            .unwrap();

        assert_eq!(
            service.get_anagrams("foobar").await.unwrap(),
            ["boofra", "bofaro", "boofar", "foobar"]
        );
    }

    #[tokio::test]
    async fn keeps_original_case_and_duplicates() {
        let (service, _) = memory_service();
        service
            .load_word_list(&words(&["TEST", "eStt", "tset"]))
            .await
            .unwrap();
        service.add_words(&words(&["tset"])).await.unwrap();

        assert_eq!(
            service.get_anagrams("ttse").await.unwrap(),
            ["tset", "tset", "eStt", "TEST"]
        );
    }

    #[tokio::test]
    async fn load_replaces_previous_words() {
        let (service, index) = memory_service();
        service
            .load_word_list(&words(&["foobar", "aabb", "baba", "boofar", "test"]))
            .await
            .unwrap();
        service.load_word_list(&words(&["test"])).await.unwrap();

        assert!(matches!(
            service.get_anagrams("foobar").await,
            Err(AnagramError::NotFound)
        ));
        assert_eq!(index.keys(), ["estt"]);
    }

    #[tokio::test]
    async fn empty_load_leaves_nothing_to_find() {
        let (service, index) = memory_service();
        service
            .load_word_list(&words(&["aabb", ""]))
            .await
            .unwrap();
        assert_eq!(index.keys(), ["", "aabb"]);

        service.load_word_list(&[]).await.unwrap();
        assert!(index.keys().is_empty());
        for query in ["aabb", "", "anything"] {
            assert!(matches!(
                service.get_anagrams(query).await,
                Err(AnagramError::NotFound)
            ));
        }
    }

    #[tokio::test]
    async fn every_added_word_is_found_by_its_variants() {
        let (service, _) = memory_service();
        let list = words(&["Listen", "silent", "Enlist", "google", "Tinsel"]);
        service.add_words(&list).await.unwrap();

        for word in &list {
            let reversed: String = word.chars().rev().collect();
            for query in [word.clone(), word.to_uppercase(), reversed] {
                let found = service.get_anagrams(&query).await.unwrap();
                assert!(found.contains(word), "{word} missing for {query}");
            }
        }
    }

    /// Index double that fails once a call budget is spent.
    struct FailingIndex {
        inner: MemoryWordIndex,
        inserts_left: AtomicUsize,
        fail_reset: bool,
        fail_lookup: bool,
    }

    impl FailingIndex {
        fn new(inserts_left: usize) -> Self {
            Self {
                inner: MemoryWordIndex::new(),
                inserts_left: AtomicUsize::new(inserts_left),
                fail_reset: false,
                fail_lookup: false,
            }
        }
    }

    #[async_trait]
    impl WordIndex for FailingIndex {
        async fn insert(&self, key: &CanonicalKey, word: &str) -> StoreResult<()> {
            let left = self.inserts_left.load(Ordering::SeqCst);
            if left == 0 {
                return Err(StoreUnavailable::new("connection refused"));
            }
            self.inserts_left.store(left - 1, Ordering::SeqCst);
            self.inner.insert(key, word).await
        }

        async fn lookup(&self, key: &CanonicalKey) -> StoreResult<Vec<String>> {
            if self.fail_lookup {
                return Err(StoreUnavailable::new("i/o timeout"));
            }
            self.inner.lookup(key).await
        }

        async fn reset_all(&self) -> StoreResult<()> {
            if self.fail_reset {
                return Err(StoreUnavailable::new("connection refused"));
            }
            self.inner.reset_all().await
        }
    }

    #[tokio::test]
    async fn add_words_stops_at_first_failed_insert() {
        let index = Arc::new(FailingIndex::new(2));
        let service = AnagramService::new(index.clone());

        let err = service
            .add_words(&words(&["cat", "act", "tac", "god"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AnagramError::StoreUnavailable {
                operation: StoreOperation::Insert,
                ..
            }
        ));
        assert_eq!(err.to_string(), "failed to add new words: connection refused");
        assert_eq!(service.get_anagrams("cat").await.unwrap(), ["act", "cat"]);
        assert!(matches!(
            service.get_anagrams("dog").await,
            Err(AnagramError::NotFound)
        ));
    }

    #[tokio::test]
    async fn failed_reset_skips_inserts() {
        let mut index = FailingIndex::new(10);
        index.fail_reset = true;
        let index = Arc::new(index);
        let service = AnagramService::new(index.clone());

        let err = service
            .load_word_list(&words(&["cat"]))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to clear old data from store: connection refused"
        );
        assert_eq!(index.inserts_left.load(Ordering::SeqCst), 10);
        assert!(index.inner.keys().is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_is_not_a_miss() {
        let mut index = FailingIndex::new(0);
        index.fail_lookup = true;
        let service = AnagramService::new(Arc::new(index));

        let err = service.get_anagrams("cat").await.unwrap_err();
        assert!(matches!(
            err,
            AnagramError::StoreUnavailable {
                operation: StoreOperation::Lookup,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "failed to get anagrams from store: i/o timeout"
        );
    }
}
