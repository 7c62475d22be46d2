//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all layers of the server, for use at startup and in library callers.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error talking to the Minds API.
    #[error("API error: {0}")]
    Api(#[from] super::api::ApiError),

    /// Error in the MCP transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
