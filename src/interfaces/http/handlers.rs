use axum::body::Bytes;
use axum::extract::{Query, State};

use super::response::Reply;
use crate::application::anagram::{AnagramError, AnagramService};

pub const MISSING_WORD: &str = "couldn't found 'word' parameter";

pub async fn get(
    State(service): State<AnagramService>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Reply {
    let Some(word) = query.and_then(|Query(pairs)| first_word(pairs)) else {
        return Reply::bad_request(MISSING_WORD);
    };

    match service.get_anagrams(&word).await {
        Ok(anagrams) => Reply::ok(Some(anagrams)),
        Err(AnagramError::NotFound) => Reply::ok(None),
        Err(err) => Reply::internal(err.to_string()),
    }
}

pub async fn load(State(service): State<AnagramService>, body: Bytes) -> Reply {
    let words = match decode_words(&body) {
        Ok(words) => words,
        Err(reply) => return reply,
    };
    match service.load_word_list(&words).await {
        Ok(()) => Reply::ok(None),
        Err(err) => Reply::internal(err.to_string()),
    }
}

pub async fn add(State(service): State<AnagramService>, body: Bytes) -> Reply {
    let words = match decode_words(&body) {
        Ok(words) => words,
        Err(reply) => return reply,
    };
    match service.add_words(&words).await {
        Ok(()) => Reply::ok(None),
        Err(err) => Reply::internal(err.to_string()),
    }
}

pub async fn health(State(service): State<AnagramService>) -> Reply {
    match service.index().ping().await {
        Ok(()) => Reply::ok(None),
        Err(err) => {
            log::warn!("Health check failed: {}", err);
            Reply::internal(err.to_string())
        }
    }
}

/// First `word` value of the query string, ignoring repeats; empty counts as missing.
fn first_word(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(name, _)| name == "word")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// A JSON array of strings; `null` counts as an empty list.
fn decode_words(body: &[u8]) -> Result<Vec<String>, Reply> {
    serde_json::from_slice::<Option<Vec<String>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|err| {
            log::warn!("Rejected word list payload: {}", err);
            Reply::bad_request(format!("failed to decode input json: {err}"))
        })
}
