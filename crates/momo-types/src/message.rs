use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::session::lenient_datetime;

/// One exchanged turn as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatInteraction {
    #[serde(rename = "mensajeUsuario", default)]
    pub user_message: String,
    #[serde(rename = "respuestaChatbot", default)]
    pub bot_response: String,
    #[serde(
        default,
        deserialize_with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(
        rename = "emocionDetectada",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub detected_emotion: Option<String>,
}

impl ChatInteraction {
    pub fn new(user_message: impl Into<String>, bot_response: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            bot_response: bot_response.into(),
            timestamp: None,
            detected_emotion: None,
        }
    }
}

/// How a bot reply came about. Every kind is rendered as a bot message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyKind {
    /// The backend produced a reply
    Answer,
    /// 2xx without a usable `response` field
    Fallback,
    /// Non-2xx that is not an authorization failure
    ServerError,
    /// Transport failure or unparsable body
    ConnectionError,
}

/// Outcome of a successful round trip of `send_message`, soft errors included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    pub kind: ReplyKind,
    pub text: String,
}

impl BotReply {
    pub fn answer(text: impl Into<String>) -> Self {
        Self { kind: ReplyKind::Answer, text: text.into() }
    }

    pub fn new(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, ReplyKind::ServerError | ReplyKind::ConnectionError)
    }
}
