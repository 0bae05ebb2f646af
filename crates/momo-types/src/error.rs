use thiserror::Error;

/// Infrastructure failures reported by the port adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}

/// Failures returned to the UI layer by `SessionClient`.
///
/// `Display` yields the user-facing text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No local session. Never reaches the network.
    #[error("No has iniciado sesión.")]
    Unauthenticated,

    /// The backend rejected the bearer token. The session has been cleared.
    #[error("Sesión expirada o no autorizada. Por favor, inicia sesión.")]
    AuthExpired,

    /// The backend was reachable but declined the operation.
    #[error("{0}")]
    ServerRejected(String),

    /// Transport failure, or a response body that could not be parsed.
    #[error("Error de conexión con el servidor.")]
    ConnectionError,

    /// A required form field was blank.
    #[error("Completa todos los campos.")]
    MissingFields,

    /// The session was replaced or logged out while the request was in
    /// flight. The response was dropped and no session state was touched.
    #[error("La sesión cambió durante la solicitud.")]
    SessionChanged,
}

impl AuthError {
    /// Whether the UI should send the user back to the login form.
    pub fn requires_login(&self) -> bool {
        matches!(self, AuthError::Unauthenticated | AuthError::AuthExpired)
    }
}
