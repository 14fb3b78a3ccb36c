use std::sync::Arc;

use anyhow::Context;

use anagrams::application::anagram::{AnagramService, WordIndex, preload_from_file};
use anagrams::config::{AppConfig, StoreBackend};
use anagrams::infrastructure::database::{MemoryWordIndex, RedisWordIndex};
use anagrams::infrastructure::logging;
use anagrams::interfaces::http::build_router;

async fn open_index(config: &AppConfig) -> anyhow::Result<Arc<dyn WordIndex>> {
    match config.backend {
        StoreBackend::Redis => {
            let index = RedisWordIndex::connect(&config.redis)
                .await
                .with_context(|| format!("failed to connect to Redis at {}", config.redis.url))?;
            Ok(Arc::new(index))
        }
        StoreBackend::Memory => {
            log::warn!("Using in-memory word index, data is lost on restart");
            Ok(Arc::new(MemoryWordIndex::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = AppConfig::from_env()?;

    if let Some(path) = logging::init(config.log_file.as_deref())? {
        eprintln!("Logging to {}", path.display());
    }
    log::info!("Store backend configured as {:?}", config.backend);

    let index = open_index(&config).await?;
    let service = AnagramService::new(index);

    if let Some(path) = &config.wordlist_path {
        if let Err(e) = preload_from_file(&service, path).await {
            log::error!("Failed to preload wordlist: {}", e);
        }
    }

    let app = build_router(service);
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    log::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
