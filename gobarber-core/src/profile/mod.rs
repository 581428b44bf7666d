//! Profile update rules
//!
//! The profile form is validated by an explicit rule set ([`validation`]) and
//! accepted input is turned into the request body by [`payload`]. Both steps
//! are pure; the submission orchestrator in the client crate owns every side
//! effect.

pub mod errors;
pub mod form;
pub mod payload;
pub mod validation;

pub use errors::FieldErrors;
pub use form::{ProfileField, ProfileFormInput};
pub use payload::{
    PasswordChange, ProfileSubmission, ProfileUpdatePayload, build_payload,
    prepare_submission,
};
pub use validation::{AcceptedProfile, messages, validate_profile};
