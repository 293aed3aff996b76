//! Async client for the repository REST API.
//!
//! One [`Client`] method per endpoint. Every call issues exactly one HTTP
//! request; there is no retry, caching or deduplication at this layer.

pub mod api;
pub mod config;
pub mod error_convert;

pub use config::ClientConfig;

use error_convert::{reqwest_to_app_error, response_to_app_error};
use serde::de::DeserializeOwned;
use shared_types::AppError;

/// Handle on the repository API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let http = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client with default settings against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn head(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.head(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.delete(self.url(path))
    }
}

/// Send a request and decode a JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, AppError> {
    let response = send(request).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::internal(format!("Unexpected response body: {e}")))
}

/// Send a request and discard the body of a successful response.
pub(crate) async fn send_empty(request: reqwest::RequestBuilder) -> Result<(), AppError> {
    send(request).await.map(|_| ())
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
    let response = request.send().await.map_err(reqwest_to_app_error)?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = response_to_app_error(status.as_u16(), &body);
    tracing::warn!(status = status.as_u16(), kind = %err.kind, "API request failed");
    Err(err)
}
