//! Profile form validation rules
//!
//! Every rule runs on every submission and all violations are collected, so
//! the form can show each invalid field at once. A field reports at most one
//! message: the first rule that rejects it.

use super::errors::FieldErrors;
use super::form::{ProfileField, ProfileFormInput};
use once_cell::sync::Lazy;
use regex::Regex;

/// User-facing validation messages
pub mod messages {
    /// `name` is empty
    pub const NAME_REQUIRED: &str = "Name is required.";
    /// `email` is empty or malformed
    pub const EMAIL_INVALID: &str = "Enter a valid email.";
    /// A password input required by a password change is empty
    pub const FIELD_REQUIRED: &str = "This field is required.";
    /// `password_confirmation` differs from `password`
    pub const CONFIRMATION_MISMATCH: &str = "Confirmation does not match";
}

/// Longest address accepted by SMTP (RFC 5321 path limit minus brackets)
const EMAIL_MAX_LEN: usize = 254;

/// Non-ASCII letters accepted anywhere a letter is (BMP, no surrogates)
const INTL: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

/// Dot-atom local part, one or more domain labels, then a top-level label
/// that starts and ends with a letter. Labels may contain `_` and `~`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let atom = format!(r"[A-Za-z0-9!#$%&'*+\-/=?^_`{{|}}~{INTL}]+");
    let inner = format!(r"[A-Za-z0-9\-._~{INTL}]*");
    let label = format!(r"[A-Za-z0-9{INTL}](?:{inner}[A-Za-z0-9{INTL}])?");
    let top = format!(r"[A-Za-z{INTL}](?:{inner}[A-Za-z{INTL}])?");
    let pattern = format!(r"^{atom}(?:\.{atom})*@(?:{label}\.)+{top}$");
    Regex::new(&pattern).unwrap()
});

type Rule = fn(&ProfileFormInput) -> Option<&'static str>;

/// The rule set, in form order. `old_password` carries no rule of its own.
const RULES: [(ProfileField, Rule); 4] = [
    (ProfileField::Name, name_rule),
    (ProfileField::Email, email_rule),
    (ProfileField::Password, password_rule),
    (ProfileField::PasswordConfirmation, confirmation_rule),
];

/// Profile input that passed every rule
///
/// Only obtainable from [`validate_profile`]; the payload builder takes this
/// type so an unvalidated form can never reach the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedProfile(ProfileFormInput);

impl AcceptedProfile {
    /// The input exactly as it was submitted
    pub fn into_input(self) -> ProfileFormInput {
        self.0
    }
}

/// Run the rule set over `input`.
///
/// Accepted input is returned untouched; otherwise every rejected field is
/// reported with one message.
pub fn validate_profile(
    input: ProfileFormInput,
) -> Result<AcceptedProfile, FieldErrors> {
    let errors = collect_violations(&input);
    if errors.is_empty() {
        Ok(AcceptedProfile(input))
    } else {
        log::debug!("profile form rejected: {}", errors);
        Err(errors)
    }
}

/// Evaluate all rules without consuming the input
pub fn collect_violations(input: &ProfileFormInput) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (field, rule) in RULES {
        if let Some(message) = rule(input) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Syntactic email check used by the `email` rule
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LEN && EMAIL_PATTERN.is_match(email)
}

fn name_rule(input: &ProfileFormInput) -> Option<&'static str> {
    input
        .name
        .trim()
        .is_empty()
        .then_some(messages::NAME_REQUIRED)
}

fn email_rule(input: &ProfileFormInput) -> Option<&'static str> {
    (!is_valid_email(&input.email)).then_some(messages::EMAIL_INVALID)
}

fn password_rule(input: &ProfileFormInput) -> Option<&'static str> {
    if input.requests_password_change() && input.password.is_empty() {
        return Some(messages::FIELD_REQUIRED);
    }
    None
}

// Without a current password the new-password inputs are ignored entirely,
// including the equality check.
fn confirmation_rule(input: &ProfileFormInput) -> Option<&'static str> {
    if !input.requests_password_change() {
        return None;
    }
    if input.password_confirmation.is_empty() {
        return Some(messages::FIELD_REQUIRED);
    }
    if input.password_confirmation != input.password {
        return Some(messages::CONFIRMATION_MISMATCH);
    }
    None
}
