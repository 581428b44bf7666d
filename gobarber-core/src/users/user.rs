//! The signed-in user record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated user as returned by the API
///
/// Only the display fields are typed. Everything else the server assigns
/// (`id`, timestamps, ...) is kept in [`UserRecord::extra`] and serialized
/// back unchanged, so replacing the session record with a response body never
/// drops data the client does not know about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name
    pub name: String,
    /// Sign-in email
    pub email: String,
    /// Absent until the user uploads an avatar
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Server fields without a typed counterpart
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Record with only the typed display fields set
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url: None,
            extra: Map::new(),
        }
    }

    /// Set the avatar URL
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Server-assigned identifier, when the API included one
    pub fn id(&self) -> Option<&str> {
        self.extra.get("id").and_then(Value::as_str)
    }

    /// Look up an opaque server field by name
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
