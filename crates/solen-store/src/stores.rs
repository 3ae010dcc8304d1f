use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use solen_core::{RemoteClient, SolenError, StoreAdapter, DEFAULT_KEY_PREFIX};
use tokio::sync::RwLock;
use tracing::debug;

use crate::{MemoryStore, RemoteStore};

// ---------------------------------------------------------------------------
// Driver selection
// ---------------------------------------------------------------------------

/// Which backend a facade dispatches to.
///
/// The remote variant carries its client, so "a client is required when the
/// driver is remote" holds by construction.
#[derive(Clone)]
pub enum StoreDriver {
    /// A fresh in-process volatile map.
    Memory,
    /// A remote backend reached through the given client.
    Remote(Arc<dyn RemoteClient>),
}

/// The kind of the currently active driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreDriverKind {
    Memory,
    Remote,
}

/// Options accepted by [`Stores::with_options`] and [`Stores::configure`].
#[derive(Clone)]
pub struct StoreOptions {
    pub driver: StoreDriver,
    /// Key prefix prepended to every key at the facade boundary. Defaults
    /// to [`DEFAULT_KEY_PREFIX`] when `None`.
    pub prefix: Option<String>,
}

impl StoreOptions {
    /// Options for the volatile in-process driver.
    pub fn memory() -> Self {
        Self {
            driver: StoreDriver::Memory,
            prefix: None,
        }
    }

    /// Options for the remote driver over `client`.
    pub fn remote(client: Arc<dyn RemoteClient>) -> Self {
        Self {
            driver: StoreDriver::Remote(client),
            prefix: None,
        }
    }

    /// Override the key prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Facade
// ---------------------------------------------------------------------------

struct Active {
    kind: StoreDriverKind,
    prefix: String,
    adapter: Arc<dyn StoreAdapter>,
}

impl Active {
    fn from_options(options: StoreOptions) -> Self {
        let prefix = options
            .prefix
            .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string());
        match options.driver {
            StoreDriver::Memory => Self {
                kind: StoreDriverKind::Memory,
                prefix,
                adapter: Arc::new(MemoryStore::new()),
            },
            StoreDriver::Remote(client) => Self {
                kind: StoreDriverKind::Remote,
                prefix,
                adapter: Arc::new(RemoteStore::new(client)),
            },
        }
    }
}

/// The facade: applies the key prefix and dispatches to the active adapter.
///
/// Construct one at the composition root and share it by reference; there
/// is no process-global instance. The facade holds no data of its own.
///
/// [`configure`](Stores::configure) may be called again at any time. It
/// replaces the prefix and adapter together, and no call ever observes the
/// prefix of one configuration paired with the adapter of another. Existing
/// entries do not migrate between backends.
pub struct Stores {
    active: RwLock<Active>,
}

impl Stores {
    /// A facade over a fresh volatile store with the default prefix.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::memory())
    }

    /// A facade constructed directly from options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            active: RwLock::new(Active::from_options(options)),
        }
    }

    /// Replace the active configuration wholesale.
    ///
    /// The prior backend is dropped (memory) or merely disconnected from
    /// this facade (remote); nothing is drained or migrated.
    pub async fn configure(&self, options: StoreOptions) {
        let next = Active::from_options(options);
        debug!(prefix = %next.prefix, kind = ?next.kind, "stores reconfigured");
        *self.active.write().await = next;
    }

    /// Which driver is currently active.
    pub async fn driver_kind(&self) -> StoreDriverKind {
        self.active.read().await.kind
    }

    /// Snapshot the prefixed key and the adapter under one read lock, then
    /// release it before any backend I/O.
    async fn snapshot(&self, key: &str) -> (String, Arc<dyn StoreAdapter>) {
        let active = self.active.read().await;
        (
            format!("{}{key}", active.prefix),
            Arc::clone(&active.adapter),
        )
    }

    /// Store `value` under `key`, optionally expiring after `ttl_ms`
    /// milliseconds. Overwrites unconditionally.
    pub async fn set(&self, key: &str, value: Value, ttl_ms: Option<u64>) -> Result<(), SolenError> {
        let (key, adapter) = self.snapshot(key).await;
        adapter.set(&key, value, ttl_ms).await
    }

    /// Fetch the value stored under `key`, or `None` when absent, deleted,
    /// or expired.
    pub async fn get(&self, key: &str) -> Result<Option<Value>, SolenError> {
        let (key, adapter) = self.snapshot(key).await;
        adapter.get(&key).await
    }

    /// Fetch the value stored under `key` and deserialize it into `T`.
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SolenError> {
        match self.get(key).await? {
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                SolenError::Serialization(format!("JSON deserialize error for {key}: {e}"))
            }),
            None => Ok(None),
        }
    }

    /// Remove any value stored under `key`. A silent no-op when the active
    /// adapter does not implement deletion.
    pub async fn del(&self, key: &str) -> Result<(), SolenError> {
        let (key, adapter) = self.snapshot(key).await;
        adapter.del(&key).await
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}
