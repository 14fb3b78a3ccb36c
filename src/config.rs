use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::infrastructure::database::RedisSettings;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 7070;
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";
pub const DEFAULT_REDIS_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{other}', expected redis or memory")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub backend: StoreBackend,
    pub redis: RedisSettings,
    pub log_file: Option<String>,
    pub wordlist_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host: IpAddr = parse_or("APP_HOST", get("APP_HOST"), DEFAULT_HOST)?;
        let port: u16 = parse_or("APP_PORT", get("APP_PORT"), DEFAULT_PORT)?;
        let listen_addr = SocketAddr::new(host, port);

        let backend = parse_or("STORE_BACKEND", get("STORE_BACKEND"), StoreBackend::Redis)?;

        let connect_ms: u64 = parse_or(
            "REDIS_CONNECT_TIMEOUT_MS",
            get("REDIS_CONNECT_TIMEOUT_MS"),
            DEFAULT_REDIS_TIMEOUT_MS,
        )?;
        let response_ms: u64 = parse_or(
            "REDIS_RESPONSE_TIMEOUT_MS",
            get("REDIS_RESPONSE_TIMEOUT_MS"),
            DEFAULT_REDIS_TIMEOUT_MS,
        )?;

        Ok(Self {
            listen_addr,
            backend,
            redis: RedisSettings {
                url: get("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
                connect_timeout: Duration::from_millis(connect_ms),
                response_timeout: Duration::from_millis(response_ms),
            },
            log_file: get("LOG_FILE"),
            wordlist_path: get("WORDLIST_PATH").map(PathBuf::from),
        })
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|err: T::Err| ConfigError::Invalid {
            name,
            reason: err.to_string(),
            value,
        }),
    }
}
