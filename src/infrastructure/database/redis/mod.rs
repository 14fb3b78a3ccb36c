pub mod client;
pub mod commands;
pub mod types;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;

use crate::application::anagram::{CanonicalKey, StoreResult, WordIndex};

pub use types::{RedisResult, RedisSettings};

/// Word index kept as one Redis list per canonical key.
///
/// `reset_all` flushes the whole selected database, so the index needs a
/// database of its own.
#[derive(Clone)]
pub struct RedisWordIndex {
    conn: MultiplexedConnection,
}

impl RedisWordIndex {
    pub async fn connect(settings: &RedisSettings) -> RedisResult<Self> {
        let conn = client::connect(settings).await?;
        log::info!("Connected to Redis at {}", settings.url);
        Ok(Self { conn })
    }
}

#[async_trait]
impl WordIndex for RedisWordIndex {
    async fn insert(&self, key: &CanonicalKey, word: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let len = commands::lpush(&mut conn, key.as_str(), word).await?;
        log::trace!("LPUSH '{}' '{}' -> {}", key, word, len);
        Ok(())
    }

    async fn lookup(&self, key: &CanonicalKey) -> StoreResult<Vec<String>> {
        let mut conn = self.conn.clone();
        Ok(commands::lrange_all(&mut conn, key.as_str()).await?)
    }

    async fn reset_all(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        commands::flushdb(&mut conn).await?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        client::ping(&mut conn).await?;
        Ok(())
    }
}
