//! WASM-target tests for momo-types.
//!
//! Covers the serde shapes that cross the browser boundary, under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use momo_types::config::*;
use momo_types::error::*;
use momo_types::message::*;
use momo_types::session::*;

#[wasm_bindgen_test]
fn config_default_validates() {
    let config = ClientConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.endpoint("/api/chat/message"), "http://localhost:8080/api/chat/message");
}

#[wasm_bindgen_test]
fn session_parses_login_body() {
    let session: Session =
        serde_json::from_str(r#"{"token":"abc","email":"a@x.com","expiresAt":"2025-01-01T00:00:00"}"#)
            .unwrap();
    assert_eq!(session.token, "abc");
    assert!(session.expires_at.is_some());
}

#[wasm_bindgen_test]
fn interaction_parses_backend_names() {
    let list: Vec<ChatInteraction> = serde_json::from_str(
        r#"[{"mensajeUsuario":"b","respuestaChatbot":"2"},{"mensajeUsuario":"a","respuestaChatbot":"1"}]"#,
    )
    .unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].user_message, "b");
    assert_eq!(list[1].bot_response, "1");
}

#[wasm_bindgen_test]
fn auth_error_texts() {
    assert!(AuthError::AuthExpired.requires_login());
    assert_eq!(AuthError::MissingFields.to_string(), "Completa todos los campos.");
}
