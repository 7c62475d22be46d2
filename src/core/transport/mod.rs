//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the mode MCP hosts launch servers in
//!   (feature `stdio`, default)
//! - **TCP**: one MCP session per accepted connection, line-delimited JSON-RPC
//!   (feature `tcp`)
//!
//! Each transport only moves messages; tool handling lives in [`McpServer`].
//!
//! [`McpServer`]: crate::core::McpServer

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
