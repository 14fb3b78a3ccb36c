use std::fmt;

use thiserror::Error;

use super::index::StoreUnavailable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Lookup,
    Reset,
    Insert,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StoreOperation::Lookup => "failed to get anagrams from store",
            StoreOperation::Reset => "failed to clear old data from store",
            StoreOperation::Insert => "failed to add new words",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Error)]
pub enum AnagramError {
    #[error("anagrams not found")]
    NotFound,
    #[error("{operation}: {source}")]
    StoreUnavailable {
        operation: StoreOperation,
        #[source]
        source: StoreUnavailable,
    },
}

impl AnagramError {
    pub(crate) fn store(operation: StoreOperation) -> impl FnOnce(StoreUnavailable) -> Self {
        move |source| AnagramError::StoreUnavailable { operation, source }
    }
}
