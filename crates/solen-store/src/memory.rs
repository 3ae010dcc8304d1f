use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use solen_core::{SolenError, StoreAdapter};
use tokio::sync::RwLock;

struct Entry {
    value: Value,
    expire_at: Option<Instant>,
}

impl Entry {
    fn expired(&self, now: Instant) -> bool {
        self.expire_at.is_some_and(|at| at <= now)
    }
}

/// In-process volatile adapter: a map of entries with optional absolute
/// expiry, evicted lazily on read.
///
/// There is no background sweep. An expired entry occupies memory until the
/// next `get` or `set` touches its key, or until the whole store is dropped
/// by a reconfiguration. Nothing survives a process restart.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreAdapter for MemoryStore {
    async fn set(&self, key: &str, value: Value, ttl_ms: Option<u64>) -> Result<(), SolenError> {
        let expire_at = match ttl_ms {
            Some(ms) if ms > 0 => Some(Instant::now() + Duration::from_millis(ms)),
            _ => None,
        };
        let mut data = self.data.write().await;
        data.insert(key.to_string(), Entry { value, expire_at });
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, SolenError> {
        let now = Instant::now();
        {
            let data = self.data.read().await;
            match data.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.expired(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // Expired: evict under the write lock, re-checking in case a
        // concurrent set replaced the entry in between.
        let mut data = self.data.write().await;
        if let Some(entry) = data.get(key) {
            if entry.expired(now) {
                data.remove(key);
            } else {
                return Ok(Some(entry.value.clone()));
            }
        }
        Ok(None)
    }

    async fn del(&self, key: &str) -> Result<(), SolenError> {
        let mut data = self.data.write().await;
        data.remove(key);
        Ok(())
    }
}
