use std::time::Duration;

use redis::RedisError;

use crate::application::anagram::StoreUnavailable;

pub type RedisResult<T> = Result<T, RedisError>;

#[derive(Debug, Clone)]
pub struct RedisSettings {
    pub url: String,
    pub connect_timeout: Duration,
    pub response_timeout: Duration,
}

impl From<RedisError> for StoreUnavailable {
    fn from(err: RedisError) -> Self {
        StoreUnavailable::new(err)
    }
}
