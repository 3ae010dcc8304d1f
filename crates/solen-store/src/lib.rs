//! Storage adapters and the facade for Solen.
//!
//! Two adapters implement the [`StoreAdapter`](solen_core::StoreAdapter)
//! contract:
//!
//! - [`MemoryStore`] — an in-process volatile map with lazy per-entry expiry.
//! - [`RemoteStore`] — a thin layer over any injected
//!   [`RemoteClient`](solen_core::RemoteClient), serializing values to JSON
//!   and translating millisecond TTLs to whatever expiry call the client
//!   exposes.
//!
//! [`Stores`] is the entry point application code talks to: it applies a key
//! prefix and dispatches to whichever adapter was configured.
//!
//! # Quick start
//!
//! ```rust
//! use solen_store::{StoreOptions, Stores};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), solen_store::SolenError> {
//! // Construct once at startup, share by reference.
//! let stores = Stores::with_options(StoreOptions::memory().with_prefix("myapp_"));
//!
//! stores.set("session", json!({"user": 42}), Some(30_000)).await?;
//! let session = stores.get("session").await?;
//! # Ok(())
//! # }
//! ```

mod memory;
mod remote;
mod stores;

pub use memory::MemoryStore;
pub use remote::{RemoteStore, RemoteStoreConfig};
pub use stores::{StoreDriver, StoreDriverKind, StoreOptions, Stores};

// Re-export core contracts for convenience.
pub use solen_core::{RemoteClient, SolenError, StoreAdapter, DEFAULT_KEY_PREFIX};
