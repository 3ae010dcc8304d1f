//! Core contracts shared by every Solen storage backend.
//!
//! This crate defines the narrow surface the rest of the workspace builds
//! on:
//!
//! - [`SolenError`] — unified error type for all store operations.
//! - [`StoreAdapter`] — the capability contract (`set`/`get`/`del`) a
//!   backend must satisfy.
//! - [`RemoteClient`] — the minimal client surface a remote backend is
//!   driven through.
//!
//! Concrete adapters and the facade live in `solen-store`; the Redis client
//! lives in `solen-redis`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Key prefix applied by the facade when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "solen_stores_";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Unified error type for Solen store operations.
///
/// A lookup miss is never an error; it is `Ok(None)` at every layer. These
/// variants cover genuine failures only.
#[derive(Debug, Error)]
pub enum SolenError {
    /// A backend rejected an operation (connection loss, protocol error).
    /// Messages carry the failing operation and key.
    #[error("store error: {0}")]
    Store(String),
    /// A value could not be encoded to, or decoded from, its canonical
    /// JSON form.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Invalid construction or configuration input.
    #[error("config error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// StoreAdapter
// ---------------------------------------------------------------------------

/// The capability contract every storage backend satisfies.
///
/// Keys arriving here are already namespaced by the facade; adapters are
/// prefix-agnostic. Backend failures propagate unmodified as
/// [`SolenError`]; the contract itself raises nothing.
#[async_trait]
pub trait StoreAdapter: Send + Sync {
    /// Store `value` under `key`, unconditionally replacing any prior value.
    ///
    /// A positive `ttl_ms` makes the entry unreadable after roughly that
    /// many milliseconds. `None` or `Some(0)` stores without expiry.
    async fn set(&self, key: &str, value: Value, ttl_ms: Option<u64>) -> Result<(), SolenError>;

    /// Fetch the value stored under `key`, or `None` if the key was never
    /// set, was deleted, or has expired.
    async fn get(&self, key: &str) -> Result<Option<Value>, SolenError>;

    /// Remove any value stored under `key`; removing a missing key is not
    /// an error.
    ///
    /// Deletion is optional on the contract. An adapter that cannot delete
    /// keeps this default body, and callers observe a silent no-op.
    async fn del(&self, _key: &str) -> Result<(), SolenError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RemoteClient
// ---------------------------------------------------------------------------

/// Minimal surface of a remote key-value client (Redis-compatible).
///
/// Values cross this boundary as raw text; the adapter layer owns
/// serialization. The two expiry calls are optional capabilities: an
/// implementation lacking one keeps the default body, which reports
/// `Ok(false)` so the adapter can fall back.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Read the raw text stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>, SolenError>;

    /// Write raw text under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), SolenError>;

    /// Delete `key`; deleting a missing key succeeds.
    async fn del(&self, key: &str) -> Result<(), SolenError>;

    /// Millisecond-granularity expiry. `Ok(false)` means the backend has no
    /// such call and nothing was issued.
    async fn pexpire(&self, _key: &str, _ttl_ms: u64) -> Result<bool, SolenError> {
        Ok(false)
    }

    /// Second-granularity expiry. `Ok(false)` means the backend has no such
    /// call and nothing was issued.
    async fn expire(&self, _key: &str, _ttl_secs: u64) -> Result<bool, SolenError> {
        Ok(false)
    }
}
