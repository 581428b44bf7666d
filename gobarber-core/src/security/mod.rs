//! Handling for sensitive form values

pub mod secure_credential;

pub use secure_credential::SecureCredential;
