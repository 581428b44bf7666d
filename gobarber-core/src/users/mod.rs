//! User records as cached by the client session

pub mod user;

pub use user::UserRecord;
