use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use solen_core::{RemoteClient, SolenError, StoreAdapter};
use tracing::warn;

/// Configuration bundle for [`RemoteStore`], for callers that assemble the
/// client elsewhere and hand it over wrapped.
#[derive(Clone)]
pub struct RemoteStoreConfig {
    /// The connected remote client the store delegates to.
    pub client: Arc<dyn RemoteClient>,
}

/// Adapter over a remote key-value backend reached through a
/// [`RemoteClient`].
///
/// Values are serialized to canonical JSON text on write, so the shape a
/// caller stores is the shape it reads back. TTLs prefer the client's
/// millisecond expiry call and fall back to whole seconds, rounded up — a
/// 1 ms TTL becomes a 1 s expiry, never an immediately expired entry.
pub struct RemoteStore {
    client: Arc<dyn RemoteClient>,
}

impl RemoteStore {
    /// Create a store over a bare client.
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }

    /// Create a store from a configuration bundle. Equivalent to
    /// [`RemoteStore::new`] on the wrapped client.
    pub fn from_config(config: RemoteStoreConfig) -> Self {
        Self {
            client: config.client,
        }
    }
}

#[async_trait]
impl StoreAdapter for RemoteStore {
    async fn set(&self, key: &str, value: Value, ttl_ms: Option<u64>) -> Result<(), SolenError> {
        let serialized = serde_json::to_string(&value).map_err(|e| {
            SolenError::Serialization(format!("JSON serialize error for {key}: {e}"))
        })?;
        self.client.set(key, &serialized).await?;

        if let Some(ms) = ttl_ms {
            if ms > 0 && !self.client.pexpire(key, ms).await? {
                let secs = ms.div_ceil(1000);
                if !self.client.expire(key, secs).await? {
                    // Documented limitation: without either expiry call the
                    // entry simply never expires.
                    warn!(key, ttl_ms = ms, "remote client exposes no expiry call; TTL not enforced");
                }
            }
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, SolenError> {
        let raw = self.client.get(key).await?;
        Ok(raw.map(|text| match serde_json::from_str(&text) {
            Ok(value) => value,
            // Legacy writers may have stored plain text; hand it back
            // verbatim instead of failing the read. Only the structured
            // type is lost.
            Err(_) => Value::String(text),
        }))
    }

    async fn del(&self, key: &str) -> Result<(), SolenError> {
        self.client.del(key).await
    }
}
