use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated session: the bearer token issued at login.
///
/// Only the token is persisted. `email` and `expires_at` are kept in memory
/// when the login response carries them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        rename = "expiresAt",
        deserialize_with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<NaiveDateTime>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: None,
            expires_at: None,
        }
    }

    /// Value of the `Authorization` header for this session.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// The token never shows up in logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Deserialize an optional timestamp, mapping anything unparsable to `None`.
///
/// Accepts ISO local date-times (`2024-05-01T10:20:30.123`) and RFC 3339
/// strings with an offset.
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| v.as_str()).and_then(parse_datetime))
}

pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}
