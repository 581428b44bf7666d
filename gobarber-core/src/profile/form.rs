//! Profile form fields and raw input

use crate::security::SecureCredential;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of the profile form, in the order they are rendered
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Display name
    Name,
    /// Sign-in email
    Email,
    /// Current password; typing it turns the submit into a password change
    OldPassword,
    /// New password
    Password,
    /// New password, repeated
    PasswordConfirmation,
}

impl ProfileField {
    /// Form/wire name of the field
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::OldPassword => "old_password",
            ProfileField::Password => "password",
            ProfileField::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values of one profile form submission
///
/// Built fresh for every submit and dropped once the submission is handled.
/// Password fields default to empty, which is what an untouched input yields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileFormInput {
    /// Display name
    pub name: String,
    /// Sign-in email
    pub email: String,
    /// Current password, empty unless the user wants a new one
    #[serde(default)]
    pub old_password: SecureCredential,
    /// New password
    #[serde(default)]
    pub password: SecureCredential,
    /// New password, repeated
    #[serde(default)]
    pub password_confirmation: SecureCredential,
}

impl ProfileFormInput {
    /// Input with name and email set and the password inputs left blank
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Fill the three password inputs
    pub fn with_passwords(
        mut self,
        old_password: impl Into<SecureCredential>,
        password: impl Into<SecureCredential>,
        password_confirmation: impl Into<SecureCredential>,
    ) -> Self {
        self.old_password = old_password.into();
        self.password = password.into();
        self.password_confirmation = password_confirmation.into();
        self
    }

    /// A current password was typed, so the submission asks for a password
    /// change
    pub fn requests_password_change(&self) -> bool {
        !self.old_password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_change_is_driven_by_old_password_only() {
        let input = ProfileFormInput::new("Ana", "ana@x.com")
            .with_passwords("", "new1", "new1");
        assert!(!input.requests_password_change());

        let input = ProfileFormInput::new("Ana", "ana@x.com")
            .with_passwords("old1", "", "");
        assert!(input.requests_password_change());
    }

    #[test]
    fn missing_password_fields_deserialize_empty() {
        let input: ProfileFormInput = serde_json::from_str(
            r#"{"name":"Ana","email":"ana@x.com"}"#,
        )
        .unwrap();

        assert!(input.old_password.is_empty());
        assert!(input.password.is_empty());
        assert!(input.password_confirmation.is_empty());
    }
}
