use gobarber_core::api::routes::utils;
use gobarber_core::security::SecureCredential;

use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, multipart};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::infra::errors::{RequestError, RequestResult};

/// Timeout applied to every request unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the GoBarber API with bearer authentication
///
/// Requests are sent exactly once. Any 2xx response is decoded as JSON;
/// everything else becomes a [`RequestError`].
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    token_store: Arc<RwLock<Option<SecureCredential>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field(
                "has_token",
                &self
                    .token_store
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

/// Add `http://` when the scheme is missing and trim trailing slashes.
///
/// Users commonly type `localhost:3333`, which reqwest rejects.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized = if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    if normalized != raw {
        debug!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, normalized
        );
    }
    normalized
}

impl ApiClient {
    /// Create a new API client with the default timeout
    pub fn new(base_url: impl AsRef<str>) -> RequestResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new API client with a custom request timeout
    pub fn with_timeout(
        base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> RequestResult<Self> {
        let base_url = normalize_base_url(base_url.as_ref());
        let client = Client::builder().timeout(timeout).build()?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            token_store: Arc::new(RwLock::new(None)),
        })
    }

    /// Build an absolute URL for a route path
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        utils::join(&self.base_url, p)
    }

    /// Set the bearer token sent with every request
    pub async fn set_token(&self, token: Option<SecureCredential>) {
        *self.token_store.write().await = token;
    }

    pub async fn has_token(&self) -> bool {
        self.token_store.read().await.is_some()
    }

    /// Attach the authentication header when a token is set
    pub async fn build_request(
        &self,
        builder: RequestBuilder,
    ) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.bearer_auth(token.as_str())
        } else {
            builder
        }
    }

    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> RequestResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            return serde_json::from_slice(&bytes).map_err(RequestError::Decode);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!("[ApiClient] Request failed with status {}: {}", status, body);
        Err(RequestError::Status { status, body })
    }

    /// PUT a JSON body
    pub async fn put<T, R>(&self, path: &str, body: &T) -> RequestResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.build_url(path);
        debug!("PUT request to: {}", url);

        let request = self.client.put(&url).json(body);
        let request = self.build_request(request).await;
        self.execute_request(request).await
    }

    /// PATCH a multipart form
    pub async fn patch_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> RequestResult<R> {
        let url = self.build_url(path);
        debug!("PATCH (multipart) request to: {}", url);

        let request = self.client.patch(&url).multipart(form);
        let request = self.build_request(request).await;
        self.execute_request(request).await
    }
}
