//! # GoBarber Core
//!
//! Domain types and rules shared by the GoBarber client surfaces.
//!
//! ## Overview
//!
//! - **Users**: the [`users::UserRecord`] the session holds for the signed-in
//!   user, with server-assigned fields passed through untouched
//! - **Profile**: the profile form input, the validation rule set that accepts
//!   or rejects it, and the conditional payload sent to the profile API
//! - **Security**: [`security::SecureCredential`] for password fields
//! - **API**: route constants for the remote profile API
//!
//! Nothing in this crate performs I/O. The client crate wires these rules to
//! the HTTP API, the session and the notification surface.
//!
//! ## Examples
//!
//! ```
//! use gobarber_core::client_prelude::*;
//!
//! let input = ProfileFormInput::new("Ana", "ana@x.com");
//! match prepare_submission(input) {
//!     ProfileSubmission::Valid(payload) => {
//!         assert!(payload.password_change.is_none());
//!     }
//!     ProfileSubmission::Invalid(errors) => panic!("rejected: {errors}"),
//! }
//! ```

pub mod api;
pub mod profile;
pub mod security;
pub mod users;

/// Re-exports used by the client crate and its tests.
pub mod client_prelude {
    pub use crate::api::routes;
    pub use crate::profile::{
        AcceptedProfile, FieldErrors, PasswordChange, ProfileField,
        ProfileFormInput, ProfileSubmission, ProfileUpdatePayload,
        build_payload, messages, prepare_submission, validate_profile,
    };
    pub use crate::security::SecureCredential;
    pub use crate::users::UserRecord;
}
