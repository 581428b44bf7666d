use std::sync::Arc;
use std::time::Duration;

use gobarber_core::security::SecureCredential;
use thiserror::Error;
use url::Url;

use crate::domains::profile::ProfileWorkflow;
use crate::infra::api_client::{ApiClient, DEFAULT_TIMEOUT, normalize_base_url};
use crate::infra::errors::RequestResult;
use crate::infra::services::{
    Navigator, Notifier, ProfileApiAdapter, SessionStore,
};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

pub const API_URL_VAR: &str = "GOBARBER_API_URL";
pub const API_TOKEN_VAR: &str = "GOBARBER_API_TOKEN";
pub const HTTP_TIMEOUT_VAR: &str = "GOBARBER_HTTP_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported API URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error(
        "Invalid HTTP timeout '{0}', expected a positive number of seconds"
    )]
    InvalidTimeout(String),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: Arc<str>,
    pub api_token: Option<SecureCredential>,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn new(api_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: Arc::from(validate_api_url(api_url.as_ref())?),
            api_token: None,
            http_timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_environment` passes `std::env::var`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(api_url)?;

        config.api_token = lookup(API_TOKEN_VAR)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .map(SecureCredential::from);

        if let Some(raw) = lookup(HTTP_TIMEOUT_VAR) {
            config.http_timeout = parse_timeout(&raw)?;
        }

        Ok(config)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if let Some((scheme, _)) = trimmed.split_once("://")
        && !matches!(scheme, "http" | "https")
    {
        return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
    }

    let normalized = normalize_base_url(trimmed);
    Url::parse(&normalized).map_err(|source| ConfigError::InvalidUrl {
        value: raw.to_string(),
        source,
    })?;
    Ok(normalized)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Services shared by the screens for one signed-in session
#[derive(Clone, Debug)]
pub struct AppServices {
    pub api_client: Arc<ApiClient>,
    pub profile: ProfileWorkflow,
}

impl AppServices {
    /// Build the API client from `config` and wire the profile workflow
    pub async fn build(
        config: &AppConfig,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> RequestResult<Self> {
        let api_client = Arc::new(ApiClient::with_timeout(
            config.api_url(),
            config.http_timeout,
        )?);
        api_client.set_token(config.api_token.clone()).await;

        let profile_service =
            Arc::new(ProfileApiAdapter::new(api_client.clone()));
        let profile =
            ProfileWorkflow::new(profile_service, session, notifier, navigator);

        Ok(Self {
            api_client,
            profile,
        })
    }
}
