use async_trait::async_trait;
use thiserror::Error;

use super::canonical::CanonicalKey;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The backing store could not be reached or refused the operation.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreUnavailable(BoxError);

impl StoreUnavailable {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self(source.into())
    }
}

pub type StoreResult<T> = Result<T, StoreUnavailable>;

/// Keyed multi-value store holding one word list per canonical key.
///
/// Lists are ordered most recent insert first and keep duplicates. A key
/// without words has no entry, so `lookup` returns an empty list for it.
#[async_trait]
pub trait WordIndex: Send + Sync {
    async fn insert(&self, key: &CanonicalKey, word: &str) -> StoreResult<()>;

    async fn lookup(&self, key: &CanonicalKey) -> StoreResult<Vec<String>>;

    /// Removes every entry in the store.
    async fn reset_all(&self) -> StoreResult<()>;

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
