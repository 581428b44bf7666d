//! Request body for the profile update endpoint

use super::errors::FieldErrors;
use super::form::ProfileFormInput;
use super::validation::{AcceptedProfile, validate_profile};
use crate::security::SecureCredential;
use serde::Serialize;

/// Password triple sent only when the user typed their current password
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    /// Current password, checked by the server
    pub old_password: SecureCredential,
    /// New password
    pub password: SecureCredential,
    /// New password, repeated
    pub password_confirmation: SecureCredential,
}

/// Request body for `PUT /profile`
///
/// Serializes to `{ name, email }`, or to the five-field form when
/// [`ProfileUpdatePayload::password_change`] is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdatePayload {
    /// Display name
    pub name: String,
    /// Sign-in email
    pub email: String,
    /// Present only when the user typed their current password
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub password_change: Option<PasswordChange>,
}

/// Outcome of validating a submission and assembling its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSubmission {
    /// Accepted; send this body
    Valid(ProfileUpdatePayload),
    /// Rejected; nothing may be sent
    Invalid(FieldErrors),
}

/// Map accepted input to the request body.
///
/// An empty `old_password` drops all three password fields, whatever the
/// other two contain, so blank or half-filled inputs never reset a password.
pub fn build_payload(accepted: AcceptedProfile) -> ProfileUpdatePayload {
    let input = accepted.into_input();
    let password_change =
        input.requests_password_change().then(|| PasswordChange {
            old_password: input.old_password.clone(),
            password: input.password.clone(),
            password_confirmation: input.password_confirmation.clone(),
        });

    ProfileUpdatePayload {
        name: input.name,
        email: input.email,
        password_change,
    }
}

/// Validate `input` and, when accepted, build its payload
pub fn prepare_submission(input: ProfileFormInput) -> ProfileSubmission {
    match validate_profile(input) {
        Ok(accepted) => ProfileSubmission::Valid(build_payload(accepted)),
        Err(errors) => ProfileSubmission::Invalid(errors),
    }
}
