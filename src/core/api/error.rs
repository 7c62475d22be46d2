//! Minds API error types.

use thiserror::Error;

/// Result type for Minds API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the Minds REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    ///
    /// The body is kept verbatim since error payloads are not guaranteed to be JSON.
    #[error("{method} {path} → {status}: {body}")]
    Status {
        method: String,
        path: String,
        status: u16,
        body: String,
    },

    /// The CSV export endpoint answered with a non-success status.
    #[error("Export failed: GET {path} → {status}: {body}")]
    ExportFailed {
        path: String,
        status: u16,
        body: String,
    },

    /// The request could not be completed (DNS, connection, timeout, ...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body that is not valid JSON.
    #[error("Invalid JSON in response to {method} {path}: {source}")]
    Decode {
        method: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A success response had no body where the tool needs one.
    #[error("{method} {path} returned an empty response")]
    EmptyResponse { method: String, path: String },

    /// A request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// Query parameters could not be encoded.
    #[error("Failed to encode query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The HTTP client could not be constructed.
    #[error("Client error: {0}")]
    Client(String),
}

impl ApiError {
    /// Create a status error from a failed response.
    pub fn status(
        method: impl Into<String>,
        path: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::Status {
            method: method.into(),
            path: path.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a client construction error.
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }

    /// HTTP status reported by the API, if the failure came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::ExportFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
