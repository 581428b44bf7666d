//! Infrastructure shared by the client domains

pub mod api_client;
pub mod errors;
pub mod services;

pub use api_client::ApiClient;
pub use errors::{RequestError, RequestResult};
