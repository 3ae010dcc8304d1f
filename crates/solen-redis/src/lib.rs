//! Redis integration for Solen stores.
//!
//! [`RedisRemoteClient`] implements the
//! [`RemoteClient`](solen_core::RemoteClient) contract over the `redis`
//! crate, including both expiry primitives (`PEXPIRE` and `EXPIRE`).
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use solen_redis::RedisRemoteClient;
//! use solen_store::{StoreOptions, Stores};
//!
//! # fn example() -> Result<(), solen_core::SolenError> {
//! let client = Arc::new(RedisRemoteClient::from_url("redis://127.0.0.1/")?);
//! let stores = Stores::with_options(StoreOptions::remote(client));
//! # Ok(())
//! # }
//! ```

mod client;

pub use client::RedisRemoteClient;

// Re-export core contracts for convenience.
pub use solen_core::{RemoteClient, SolenError};
