//! Application configuration and service wiring

pub mod bootstrap;

pub use bootstrap::{AppConfig, AppServices, ConfigError};
