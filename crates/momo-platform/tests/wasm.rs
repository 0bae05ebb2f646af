//! WASM-target tests for momo-platform (Node.js runtime).
//!
//! Tests MemoryStorage under wasm32-unknown-unknown via
//! `wasm-pack test --node`.
//!
//! localStorage tests require a browser and live in browser.rs.

use wasm_bindgen_test::*;

use std::rc::Rc;

use momo_core::config_store::{load_config, CONFIG_STORAGE_KEY};
use momo_core::ports::StoragePort;
use momo_core::SessionClient;
use momo_platform::http::FetchTransport;
use momo_platform::storage::MemoryStorage;
use momo_types::config::ClientConfig;

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    assert!(storage.get("jwtToken").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_get_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("jwtToken", "first").await.unwrap();
    storage.set("jwtToken", "second").await.unwrap();
    assert_eq!(storage.get("jwtToken").await.unwrap().as_deref(), Some("second"));
}

#[wasm_bindgen_test]
async fn memory_storage_delete_is_idempotent() {
    let storage = MemoryStorage::new();
    storage.set("jwtToken", "abc").await.unwrap();
    storage.delete("jwtToken").await.unwrap();
    storage.delete("jwtToken").await.unwrap();
    assert!(!storage.exists("jwtToken").await.unwrap());
}

#[wasm_bindgen_test]
async fn memory_storage_unicode_value() {
    let storage = MemoryStorage::new();
    storage.set("momo:config", r#"{"welcome_message":"¡Hola! 🐒"}"#).await.unwrap();
    let value = storage.get("momo:config").await.unwrap().unwrap();
    assert!(value.contains("🐒"));
}

#[wasm_bindgen_test]
async fn seeded_memory_storage_restores_session() {
    let storage = Rc::new(MemoryStorage::seeded([("jwtToken", "abc")]));
    let client = SessionClient::new(ClientConfig::default(), Rc::new(FetchTransport::new()), storage.clone());

    let session = client.restore().await.unwrap();
    assert_eq!(session.token, "abc");

    client.logout().await;
    assert!(!client.is_authenticated());
    assert!(storage.get("jwtToken").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn seeded_memory_storage_feeds_config() {
    let storage = MemoryStorage::seeded([(CONFIG_STORAGE_KEY, r#"{"base_url":"https://momo.example"}"#)]);
    let config = load_config(&storage).await;
    assert_eq!(config.base_url, "https://momo.example");
    assert_eq!(config.token_key, "jwtToken");
}
