//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, error handling, the Minds API client, server lifecycle
//! management and transport layer abstractions.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use api::{ApiClient, ApiError};
pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
