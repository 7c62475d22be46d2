//! HTTP invoker for the Minds REST API.
//!
//! One [`ApiClient`] is built at startup from [`ApiConfig`] and shared by every
//! tool. Each call performs exactly one round trip; there are no retries and no
//! timeout beyond reqwest's defaults.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument};

use super::{ApiError, ApiRequest, ApiResult};
use crate::core::config::ApiConfig;

/// Authenticated client for the Minds REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_root: String,
    api_key: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_root", &self.api_root)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl ApiClient {
    /// Create a client for the configured base URL and token.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::client(e.to_string()))?;

        Ok(Self {
            http,
            api_root: config.api_root(),
            api_key: config.api_key.clone(),
        })
    }

    /// Root all API paths are resolved against (`<base_url>/api/v1`).
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Full URL for an API-relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Send a request and decode the JSON response.
    ///
    /// Returns `Value::Null` for `204 No Content` or an empty body. Non-success
    /// statuses become [`ApiError::Status`] carrying the raw response text.
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let ApiRequest { method, path, body } = request;

        let mut builder = self
            .http
            .request(method.clone(), self.url(&path))
            .bearer_auth(&self.api_key);
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        debug!("Sending request");
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "Received response");

        if !status.is_success() {
            return Err(ApiError::status(method.as_str(), path, status.as_u16(), text));
        }

        if status == StatusCode::NO_CONTENT || text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            method: method.to_string(),
            path,
            source,
        })
    }

    /// Fetch a non-JSON resource and return its body untouched.
    ///
    /// Used for CSV exports: no content-type header is sent and the body is
    /// never parsed, so large exports are passed through as-is.
    #[instrument(skip(self))]
    pub async fn fetch_text(&self, path: &str) -> ApiResult<String> {
        debug!("Sending raw request");
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "Received raw response");

        if !status.is_success() {
            return Err(ApiError::ExportFailed {
                path: path.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}
