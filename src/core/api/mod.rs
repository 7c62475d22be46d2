//! Minds REST API access.
//!
//! - `request`: request envelopes and the optional-field body builder
//! - `client`: the single HTTP invoker shared by all tools
//! - `error`: API failure taxonomy

mod client;
mod error;
mod request;

#[cfg(test)]
pub(crate) mod mock;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, JsonBody};

/// Version prefix appended to the configured base URL.
pub const API_PREFIX: &str = "/api/v1";
