use serde::{Deserialize, Serialize};

use crate::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TOKEN_KEY: &str = "jwtToken";

/// Client configuration. Every field has a default so a partial JSON
/// document restored from storage still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Durable-storage key holding the bearer token
    pub token_key: String,
    /// Shown as a bot message when the history is empty
    pub welcome_message: String,
    /// Used when the backend answers 2xx without a `response` field
    pub reply_fallback: String,
    /// Rendered as a bot message when the send request fails in transport
    pub reply_connection_error: String,
    /// Used when a rejected auth request carries no message of its own
    pub generic_auth_error: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            reply_fallback: "Error de respuesta de la IA.".to_string(),
            reply_connection_error: "Error de conexión con el servicio de chat.".to_string(),
            generic_auth_error: "Credenciales inválidas o error de servidor.".to_string(),
        }
    }
}

impl ClientConfig {
    /// Join the base URL and an absolute API path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ClientError::Config("base_url is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base_url must start with http:// or https://, got {}",
                base
            )));
        }
        if self.token_key.trim().is_empty() {
            return Err(ClientError::Config("token_key is empty".to_string()));
        }
        Ok(())
    }
}

const DEFAULT_WELCOME_MESSAGE: &str =
    "¡Hola! Soy MoMo. Estoy aquí para escucharte y ayudarte a sentirte mejor. ¿Cómo te sientes hoy?";
