//! Persisted client configuration.

use momo_types::config::ClientConfig;
use crate::ports::StoragePort;

pub const CONFIG_STORAGE_KEY: &str = "momo:config";

/// Load the saved configuration, falling back to defaults when it is
/// missing, unreadable, or fails validation.
pub async fn load_config(storage: &dyn StoragePort) -> ClientConfig {
    let raw = match storage.get(CONFIG_STORAGE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return ClientConfig::default(),
        Err(e) => {
            log::warn!("Could not read saved config: {}", e);
            return ClientConfig::default();
        }
    };

    match serde_json::from_str::<ClientConfig>(&raw) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                log::info!("Config restored from storage (backend {})", config.base_url);
                config
            }
            Err(e) => {
                log::warn!("Saved config rejected: {}", e);
                ClientConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Saved config unparsable: {}", e);
            ClientConfig::default()
        }
    }
}

/// Validate and persist a configuration.
pub async fn save_config(storage: &dyn StoragePort, config: &ClientConfig) -> momo_types::Result<()> {
    config.validate()?;
    let json = serde_json::to_string(config)?;
    storage.set(CONFIG_STORAGE_KEY, &json).await
}
