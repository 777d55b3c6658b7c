//! Shared wire-protocol DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! The backend owns the user record. The client only needs an identifier
//! and a display name; everything else is carried through untouched.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend user identifier; numeric or string depending on the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Profile returned by `GET /user/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "user_id")]
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Backend fields the client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Name to show in the UI; falls back to the identifier.
    pub fn display_name(&self) -> String {
        self.extra
            .get("display_name")
            .and_then(serde_json::Value::as_str)
            .or(self.username.as_deref())
            .map_or_else(|| self.id.to_string(), str::to_owned)
    }
}

/// Response wrapper used by every backend endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: Option<T>,
}

/// Body of a non-2xx response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
}

/// Form payload for `POST /user/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}
