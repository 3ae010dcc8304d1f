use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use solen_core::{RemoteClient, SolenError, StoreAdapter};
use solen_store::{RemoteStore, RemoteStoreConfig};
use tokio::sync::Mutex;

// ---------------------------------------------------------------------------
// Fake client
// ---------------------------------------------------------------------------

/// In-memory stand-in for a Redis-like backend, recording expiry calls.
#[derive(Default)]
struct FakeClient {
    data: Mutex<HashMap<String, String>>,
    pexpire_calls: Mutex<Vec<(String, u64)>>,
    expire_calls: Mutex<Vec<(String, u64)>>,
    supports_pexpire: bool,
    supports_expire: bool,
}

impl FakeClient {
    fn with_support(pexpire: bool, expire: bool) -> Self {
        Self {
            supports_pexpire: pexpire,
            supports_expire: expire,
            ..Default::default()
        }
    }

    async fn seed(&self, key: &str, raw: &str) {
        self.data
            .lock()
            .await
            .insert(key.to_string(), raw.to_string());
    }
}

#[async_trait]
impl RemoteClient for FakeClient {
    async fn get(&self, key: &str) -> Result<Option<String>, SolenError> {
        Ok(self.data.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SolenError> {
        self.data
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), SolenError> {
        self.data.lock().await.remove(key);
        Ok(())
    }

    async fn pexpire(&self, key: &str, ttl_ms: u64) -> Result<bool, SolenError> {
        if !self.supports_pexpire {
            return Ok(false);
        }
        self.pexpire_calls
            .lock()
            .await
            .push((key.to_string(), ttl_ms));
        Ok(true)
    }

    async fn expire(&self, key: &str, ttl_secs: u64) -> Result<bool, SolenError> {
        if !self.supports_expire {
            return Ok(false);
        }
        self.expire_calls
            .lock()
            .await
            .push((key.to_string(), ttl_secs));
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Round trip & CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn round_trips_every_value_shape() {
    let store = RemoteStore::new(Arc::new(FakeClient::default()));
    let shapes = [
        json!("text"),
        json!(42),
        json!(2.5),
        json!(true),
        json!(null),
        json!([1, "two", false]),
        json!({"user": {"id": 7, "tags": ["a", "b"]}, "active": true}),
    ];

    for (i, value) in shapes.iter().enumerate() {
        let key = format!("k{i}");
        store.set(&key, value.clone(), None).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap().as_ref(), Some(value));
    }
}

#[tokio::test]
async fn get_nonexistent_key_returns_none() {
    let store = RemoteStore::new(Arc::new(FakeClient::default()));
    assert!(store.get("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn del_removes_value() {
    let store = RemoteStore::new(Arc::new(FakeClient::default()));
    store.set("k", json!(1), None).await.unwrap();
    store.del("k").await.unwrap();
    assert!(store.get("k").await.unwrap().is_none());
}

#[tokio::test]
async fn values_are_stored_as_json_text() {
    let client = Arc::new(FakeClient::default());
    let store = RemoteStore::new(client.clone());

    store.set("k", json!({"a": 1}), None).await.unwrap();
    let raw = client.data.lock().await.get("k").cloned();
    assert_eq!(raw.as_deref(), Some(r#"{"a":1}"#));
}

// ---------------------------------------------------------------------------
// TTL translation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn millisecond_expiry_is_preferred() {
    let client = Arc::new(FakeClient::with_support(true, true));
    let store = RemoteStore::new(client.clone());

    store.set("k", json!("v"), Some(1500)).await.unwrap();

    assert_eq!(
        client.pexpire_calls.lock().await.as_slice(),
        &[("k".to_string(), 1500)]
    );
    assert!(client.expire_calls.lock().await.is_empty());
}

#[tokio::test]
async fn second_expiry_fallback_rounds_up() {
    let client = Arc::new(FakeClient::with_support(false, true));
    let store = RemoteStore::new(client.clone());

    // 1ms must become a 1-second expiry, never 0.
    store.set("a", json!("v"), Some(1)).await.unwrap();
    store.set("b", json!("v"), Some(1500)).await.unwrap();
    store.set("c", json!("v"), Some(2000)).await.unwrap();

    assert_eq!(
        client.expire_calls.lock().await.as_slice(),
        &[
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 2),
        ]
    );
}

#[tokio::test]
async fn missing_expiry_support_is_not_an_error() {
    let client = Arc::new(FakeClient::with_support(false, false));
    let store = RemoteStore::new(client.clone());

    store.set("k", json!("v"), Some(50)).await.unwrap();

    // The value is written; the TTL is simply not enforced.
    assert_eq!(store.get("k").await.unwrap(), Some(json!("v")));
}

#[tokio::test]
async fn no_ttl_issues_no_expiry_calls() {
    let client = Arc::new(FakeClient::with_support(true, true));
    let store = RemoteStore::new(client.clone());

    store.set("k", json!("v"), None).await.unwrap();
    store.set("k2", json!("v"), Some(0)).await.unwrap();

    assert!(client.pexpire_calls.lock().await.is_empty());
    assert!(client.expire_calls.lock().await.is_empty());
}

// ---------------------------------------------------------------------------
// Legacy payload fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_json_payload_is_returned_verbatim() {
    let client = Arc::new(FakeClient::default());
    client.seed("legacy", "plain old value").await;

    let store = RemoteStore::new(client);
    let value = store.get("legacy").await.unwrap();
    assert_eq!(value, Some(Value::String("plain old value".to_string())));
}

// ---------------------------------------------------------------------------
// Construction forms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bare_client_and_config_forms_are_equivalent() {
    let client = Arc::new(FakeClient::default());

    let direct = RemoteStore::new(client.clone());
    direct.set("k", json!("v"), None).await.unwrap();

    let via_config = RemoteStore::from_config(RemoteStoreConfig { client });
    assert_eq!(via_config.get("k").await.unwrap(), Some(json!("v")));
}
