use super::types::{RedisResult, RedisSettings};
use redis::aio::MultiplexedConnection;
use redis::{AsyncConnectionConfig, Client};

/// Opens a multiplexed connection and confirms the server answers `PING`.
pub async fn connect(settings: &RedisSettings) -> RedisResult<MultiplexedConnection> {
    let client = Client::open(settings.url.as_str())?;
    let config = AsyncConnectionConfig::new()
        .set_connection_timeout(settings.connect_timeout)
        .set_response_timeout(settings.response_timeout);
    let mut conn = client
        .get_multiplexed_async_connection_with_config(&config)
        .await?;

    ping(&mut conn).await?;
    Ok(conn)
}

pub async fn ping(conn: &mut MultiplexedConnection) -> RedisResult<()> {
    let _: String = redis::cmd("PING").query_async(conn).await?;
    Ok(())
}
