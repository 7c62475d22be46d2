//! Minds MCP Server Library
//!
//! Exposes the Minds data platform REST API (datasources, Minds, chat and
//! query execution, data catalog) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the Minds API client, the MCP
//!   server handler and transports
//! - **domains**: the tools themselves, one Minds API call per tool
//!
//! # Example
//!
//! ```rust,no_run
//! use minds_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
