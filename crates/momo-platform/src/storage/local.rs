//! `window.localStorage` backend.
//! Persistent across page reloads; string values only.

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use momo_core::ports::StoragePort;
use momo_types::{ClientError, Result};

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Bind to the window's `localStorage`. Fails outside a browser window
    /// or when storage is disabled (e.g. some private-browsing modes).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ClientError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| ClientError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorageStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_err)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_err)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}

fn js_err(e: JsValue) -> ClientError {
    ClientError::Storage(format!("{:?}", e))
}
