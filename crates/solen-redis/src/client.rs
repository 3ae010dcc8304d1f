use async_trait::async_trait;
use redis::AsyncCommands;
use solen_core::{RemoteClient, SolenError};

/// [`RemoteClient`] implementation over the `redis` crate.
///
/// A multiplexed async connection is obtained per operation; the underlying
/// client multiplexes commands over one TCP connection.
pub struct RedisRemoteClient {
    client: redis::Client,
}

impl RedisRemoteClient {
    /// Wrap an existing Redis client.
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    /// Connect by URL, e.g. `redis://127.0.0.1/`.
    ///
    /// # Errors
    ///
    /// Returns [`SolenError::Config`] if the URL is invalid.
    pub fn from_url(url: &str) -> Result<Self, SolenError> {
        let client = redis::Client::open(url)
            .map_err(|e| SolenError::Config(format!("invalid Redis URL: {e}")))?;
        Ok(Self { client })
    }

    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, SolenError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| SolenError::Store(format!("Redis connection error: {e}")))
    }
}

#[async_trait]
impl RemoteClient for RedisRemoteClient {
    async fn get(&self, key: &str) -> Result<Option<String>, SolenError> {
        let mut con = self.get_connection().await?;
        let raw: Option<String> = con
            .get(key)
            .await
            .map_err(|e| SolenError::Store(format!("Redis GET error for {key}: {e}")))?;
        Ok(raw)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SolenError> {
        let mut con = self.get_connection().await?;
        con.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| SolenError::Store(format!("Redis SET error for {key}: {e}")))
    }

    async fn del(&self, key: &str) -> Result<(), SolenError> {
        let mut con = self.get_connection().await?;
        con.del::<_, ()>(key)
            .await
            .map_err(|e| SolenError::Store(format!("Redis DEL error for {key}: {e}")))
    }

    async fn pexpire(&self, key: &str, ttl_ms: u64) -> Result<bool, SolenError> {
        let mut con = self.get_connection().await?;
        con.pexpire::<_, ()>(key, ttl_ms as i64)
            .await
            .map_err(|e| SolenError::Store(format!("Redis PEXPIRE error for {key}: {e}")))?;
        Ok(true)
    }

    async fn expire(&self, key: &str, ttl_secs: u64) -> Result<bool, SolenError> {
        let mut con = self.get_connection().await?;
        con.expire::<_, ()>(key, ttl_secs as i64)
            .await
            .map_err(|e| SolenError::Store(format!("Redis EXPIRE error for {key}: {e}")))?;
        Ok(true)
    }
}
