//! MCP Server implementation and lifecycle management.
//!
//! The server owns the shared Minds [`ApiClient`] and the rmcp tool router.
//! Tools are defined in `domains/tools/definitions/`; the router is built in
//! `domains/tools/router.rs`, so adding a tool does not touch this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::api::{ApiClient, ApiResult};
use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Tools for the Minds data platform. \
Datasources are connections to external databases; Minds are named agents that \
answer questions over one or more datasources. Use list_datasources/list_minds \
to discover names, ask_mind or query_mind to ask questions, get_query_result or \
export_query_csv to fetch tabular results, and the catalog tools to inspect or \
document tables and columns. Failed calls return `Error: <METHOD> <path> → \
<status>: <body>`, where the path is relative to the `/api/v1` API root.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client shared by every tool call.
    client: Arc<ApiClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> ApiResult<Self> {
        let client = Arc::new(ApiClient::new(&config.api)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Registry over the same client, for dispatching calls by name.
    pub fn registry(&self) -> ToolRegistry {
        ToolRegistry::new(self.client.clone())
    }

    /// Names of the tools exposed through the router.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
