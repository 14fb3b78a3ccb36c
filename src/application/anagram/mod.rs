pub mod canonical;
pub mod index;
pub mod loader;
pub mod service;
pub mod types;

pub use canonical::{CanonicalKey, canonicalize};
pub use index::{BoxError, StoreResult, StoreUnavailable, WordIndex};
pub use loader::{PreloadError, preload_from_file};
pub use service::AnagramService;
pub use types::{AnagramError, StoreOperation};
