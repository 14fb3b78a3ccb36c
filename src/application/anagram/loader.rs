use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tokio::fs;

use super::service::AnagramService;
use super::types::AnagramError;

#[derive(Debug, Error)]
pub enum PreloadError {
    #[error("failed to read wordlist file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode wordlist file {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Load(#[from] AnagramError),
}

/// Replaces the index contents with the JSON array of words stored at `path`.
pub async fn preload_from_file(
    service: &AnagramService,
    path: &Path,
) -> Result<usize, PreloadError> {
    let t0 = Instant::now();
    let display = path.display().to_string();

    let raw = fs::read(path).await.map_err(|source| PreloadError::Read {
        path: display.clone(),
        source,
    })?;
    let words: Option<Vec<String>> =
        serde_json::from_slice(&raw).map_err(|source| PreloadError::Decode {
            path: display.clone(),
            source,
        })?;
    let words = words.unwrap_or_default();

    service.load_word_list(&words).await?;

    log::info!(
        "wordlist.loaded={} file={} perf.load_us={}",
        words.len(),
        display,
        t0.elapsed().as_micros()
    );
    Ok(words.len())
}
