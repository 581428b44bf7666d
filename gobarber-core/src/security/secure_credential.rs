//! Zeroizing wrapper for password input values

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A password field value that zeros its memory on drop
///
/// Profile forms carry the current password, the new password and its
/// confirmation between the input widgets and the request body. Wrapping them
/// keeps the plaintext out of `Debug` output and log lines.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureCredential {
    data: String,
}

impl SecureCredential {
    /// Create a new SecureCredential from a string
    pub fn new(data: String) -> Self {
        Self { data }
    }

    /// Create an empty credential, the value of an untouched password input
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a reference to the credential data as a string slice
    ///
    /// The returned reference points to memory that is zeroed on drop.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Get the length of the credential data in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// An empty credential means the user left the field blank
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Clone for SecureCredential {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl From<String> for SecureCredential {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for SecureCredential {
    fn from(data: &str) -> Self {
        Self::new(data.to_string())
    }
}

impl fmt::Debug for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureCredential")
            .field("len", &self.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[SecureCredential: {} bytes]", self.len())
    }
}

impl PartialEq for SecureCredential {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.data.as_bytes() == other.data.as_bytes()
    }
}

impl Eq for SecureCredential {}

// The request body is the one place the plaintext has to leave the wrapper.
impl Serialize for SecureCredential {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.data)
    }
}

impl<'de> Deserialize<'de> for SecureCredential {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
