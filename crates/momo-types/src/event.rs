use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::message::{BotReply, ChatInteraction};

/// Events published by the app's async dispatchers.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A persisted token was found at start-up
    SessionRestored,

    /// No persisted token at start-up; the login form must be shown
    LoginRequired,

    /// Login succeeded
    LoggedIn { email: Option<String> },

    /// Registration succeeded; the user still has to log in
    Registered,

    /// Explicit logout
    LoggedOut,

    /// Register or login failed
    AuthFailed { message: String },

    /// The backend rejected the token, or no session was present
    SessionExpired,

    /// History arrived, oldest first
    HistoryLoaded { interactions: Vec<ChatInteraction> },

    /// History could not be loaded for a reason other than authorization
    HistoryFailed { message: String },

    /// A request is in flight; input should be disabled
    RequestStarted,

    /// A bot message to render (answers and soft errors alike)
    BotReplied { reply: BotReply },
}

impl ChatEvent {
    /// Map a register/login failure to the event the UI reacts to.
    pub fn from_auth_error(err: &AuthError) -> Self {
        match err {
            AuthError::Unauthenticated | AuthError::AuthExpired => ChatEvent::SessionExpired,
            other => ChatEvent::AuthFailed { message: other.to_string() },
        }
    }
}
