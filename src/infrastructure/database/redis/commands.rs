use super::types::RedisResult;
use redis::aio::MultiplexedConnection;

pub async fn lpush(conn: &mut MultiplexedConnection, key: &str, value: &str) -> RedisResult<usize> {
    redis::cmd("LPUSH")
        .arg(key)
        .arg(value)
        .query_async(conn)
        .await
}

pub async fn lrange_all(conn: &mut MultiplexedConnection, key: &str) -> RedisResult<Vec<String>> {
    redis::cmd("LRANGE")
        .arg(key)
        .arg(0)
        .arg(-1)
        .query_async(conn)
        .await
}

pub async fn flushdb(conn: &mut MultiplexedConnection) -> RedisResult<()> {
    let _: () = redis::cmd("FLUSHDB").query_async(conn).await?;
    Ok(())
}
