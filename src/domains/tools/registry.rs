//! Tool Registry - central registration and dispatch for all tools.
//!
//! Lists tool names and metadata, and dispatches a call by name with a raw
//! JSON argument object. The rmcp router in `router.rs` is built from the
//! same definitions.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::ToolError;
use super::definitions::{
    AskMindTool, CreateDatasourceTool, CreateMindTool, DeleteDatasourceTool, DeleteMindTool,
    ExportQueryCsvTool, GetCatalogTool, GetDatasourceTool, GetMindTool, GetQueryResultTool,
    ListDatasourcesTool, ListMindsTool, LoadCatalogTablesTool, QueryMindTool, RefreshCatalogTool,
    UpdateColumnDescriptionTool, UpdateDatasourceTool, UpdateMindTool, UpdateTableDescriptionTool,
};
use super::handlers::{ApiTool, dispatch, to_tool};
use crate::core::api::ApiClient;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<ApiClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListDatasourcesTool::NAME,
            GetDatasourceTool::NAME,
            CreateDatasourceTool::NAME,
            UpdateDatasourceTool::NAME,
            DeleteDatasourceTool::NAME,
            ListMindsTool::NAME,
            GetMindTool::NAME,
            CreateMindTool::NAME,
            UpdateMindTool::NAME,
            DeleteMindTool::NAME,
            AskMindTool::NAME,
            QueryMindTool::NAME,
            GetQueryResultTool::NAME,
            ExportQueryCsvTool::NAME,
            GetCatalogTool::NAME,
            RefreshCatalogTool::NAME,
            LoadCatalogTablesTool::NAME,
            UpdateTableDescriptionTool::NAME,
            UpdateColumnDescriptionTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<ListDatasourcesTool>(),
            to_tool::<GetDatasourceTool>(),
            to_tool::<CreateDatasourceTool>(),
            to_tool::<UpdateDatasourceTool>(),
            to_tool::<DeleteDatasourceTool>(),
            to_tool::<ListMindsTool>(),
            to_tool::<GetMindTool>(),
            to_tool::<CreateMindTool>(),
            to_tool::<UpdateMindTool>(),
            to_tool::<DeleteMindTool>(),
            to_tool::<AskMindTool>(),
            to_tool::<QueryMindTool>(),
            to_tool::<GetQueryResultTool>(),
            to_tool::<ExportQueryCsvTool>(),
            to_tool::<GetCatalogTool>(),
            to_tool::<RefreshCatalogTool>(),
            to_tool::<LoadCatalogTablesTool>(),
            to_tool::<UpdateTableDescriptionTool>(),
            to_tool::<UpdateColumnDescriptionTool>(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Errors only for unknown tools or invalid arguments; API failures come
    /// back as error results.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let client = self.client.as_ref();
        match name {
            ListDatasourcesTool::NAME => dispatch::<ListDatasourcesTool>(client, arguments).await,
            GetDatasourceTool::NAME => dispatch::<GetDatasourceTool>(client, arguments).await,
            CreateDatasourceTool::NAME => dispatch::<CreateDatasourceTool>(client, arguments).await,
            UpdateDatasourceTool::NAME => dispatch::<UpdateDatasourceTool>(client, arguments).await,
            DeleteDatasourceTool::NAME => dispatch::<DeleteDatasourceTool>(client, arguments).await,
            ListMindsTool::NAME => dispatch::<ListMindsTool>(client, arguments).await,
            GetMindTool::NAME => dispatch::<GetMindTool>(client, arguments).await,
            CreateMindTool::NAME => dispatch::<CreateMindTool>(client, arguments).await,
            UpdateMindTool::NAME => dispatch::<UpdateMindTool>(client, arguments).await,
            DeleteMindTool::NAME => dispatch::<DeleteMindTool>(client, arguments).await,
            AskMindTool::NAME => dispatch::<AskMindTool>(client, arguments).await,
            QueryMindTool::NAME => dispatch::<QueryMindTool>(client, arguments).await,
            GetQueryResultTool::NAME => dispatch::<GetQueryResultTool>(client, arguments).await,
            ExportQueryCsvTool::NAME => dispatch::<ExportQueryCsvTool>(client, arguments).await,
            GetCatalogTool::NAME => dispatch::<GetCatalogTool>(client, arguments).await,
            RefreshCatalogTool::NAME => dispatch::<RefreshCatalogTool>(client, arguments).await,
            LoadCatalogTablesTool::NAME => {
                dispatch::<LoadCatalogTablesTool>(client, arguments).await
            }
            UpdateTableDescriptionTool::NAME => {
                dispatch::<UpdateTableDescriptionTool>(client, arguments).await
            }
            UpdateColumnDescriptionTool::NAME => {
                dispatch::<UpdateColumnDescriptionTool>(client, arguments).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::mock::{MockApi, unreachable_base_url};
    use crate::core::config::ApiConfig;
    use crate::domains::tools::handlers::test_support::args;
    use crate::domains::tools::response::result_text;
    use serde_json::{Value, json};

    /// Minimal valid arguments, with the method and API path each tool hits.
    fn sample_calls() -> Vec<(&'static str, Value, &'static str, &'static str)> {
        vec![
            ("list_datasources", json!({}), "GET", "/datasources"),
            ("get_datasource", json!({"name": "pg"}), "GET", "/datasources/pg"),
            (
                "create_datasource",
                json!({"name": "pg", "engine": "postgres", "connection_data": {}}),
                "POST",
                "/datasources",
            ),
            ("update_datasource", json!({"name": "pg"}), "PATCH", "/datasources/pg"),
            ("delete_datasource", json!({"name": "pg"}), "DELETE", "/datasources/pg"),
            ("list_minds", json!({}), "GET", "/minds"),
            ("get_mind", json!({"name": "m"}), "GET", "/minds/m"),
            ("create_mind", json!({"name": "m", "datasources": ["pg"]}), "POST", "/minds"),
            ("update_mind", json!({"name": "m"}), "PUT", "/minds/m"),
            ("delete_mind", json!({"name": "m"}), "DELETE", "/minds/m"),
            ("ask_mind", json!({"mind": "m", "question": "q"}), "POST", "/chat/completions"),
            ("query_mind", json!({"mind": "m", "question": "q"}), "POST", "/responses"),
            (
                "get_query_result",
                json!({"conversation_id": "c", "message_id": "i"}),
                "GET",
                "/conversations/c/items/i/result",
            ),
            (
                "export_query_csv",
                json!({"conversation_id": "c", "message_id": "i"}),
                "GET",
                "/conversations/c/items/i/export",
            ),
            ("get_catalog", json!({"datasource": "pg"}), "GET", "/datasources/pg/catalog"),
            (
                "refresh_catalog",
                json!({"datasource": "pg", "mode": "all"}),
                "POST",
                "/datasources/pg/catalog/refresh",
            ),
            (
                "load_catalog_tables",
                json!({"datasource": "pg", "table_names": ["t"]}),
                "POST",
                "/datasources/pg/catalog/tables",
            ),
            (
                "update_table_description",
                json!({"datasource": "pg", "table": "t", "description": "d"}),
                "PATCH",
                "/datasources/pg/catalog/tables/t",
            ),
            (
                "update_column_description",
                json!({"datasource": "pg", "table": "t", "column": "c", "description": "d"}),
                "PATCH",
                "/datasources/pg/catalog/tables/t/columns/c",
            ),
        ]
    }

    #[test]
    fn test_registry_tool_names() {
        let client = Arc::new(ApiClient::new(&ApiConfig::default()).unwrap());
        let names = ToolRegistry::new(client).tool_names();
        assert_eq!(names.len(), 19);

        let sampled: Vec<_> = sample_calls().into_iter().map(|(n, ..)| n).collect();
        assert_eq!(names, sampled);

        let tools = ToolRegistry::get_all_tools();
        let tool_names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(tool_names, names);
    }

    #[tokio::test]
    async fn test_every_tool_hits_its_endpoint_and_formats_success() {
        let payload = json!({"id": 7, "status": "ok"});
        let pretty = serde_json::to_string_pretty(&payload).unwrap();

        for (name, arguments, method, path) in sample_calls() {
            let api = MockApi::json(200, &payload).await;
            let registry = ToolRegistry::new(Arc::new(api.client()));
            let result = registry.call_tool(name, args(arguments)).await.unwrap();

            let req = api.last_request();
            assert_eq!(req.method, method, "{name}");
            assert_eq!(req.path, format!("/api/v1{path}"), "{name}");
            assert_eq!(api.requests().len(), 1, "{name} should make exactly one request");
            assert!(!result.is_error.unwrap_or(false), "{name}");

            let text = result_text(&result).unwrap();
            match name {
                "delete_datasource" | "delete_mind" => {
                    let reply: Value = serde_json::from_str(text).unwrap();
                    assert_eq!(reply["deleted"], true, "{name}");
                }
                "ask_mind" => assert_eq!(text, payload.to_string()),
                "export_query_csv" => assert_eq!(text, payload.to_string()),
                _ => assert_eq!(text, pretty, "{name}"),
            }
        }
    }

    #[tokio::test]
    async fn test_every_tool_reports_api_failures() {
        for (name, arguments, method, path) in sample_calls() {
            let api = MockApi::start(500, "database exploded").await;
            let registry = ToolRegistry::new(Arc::new(api.client()));
            let result = registry.call_tool(name, args(arguments)).await.unwrap();

            assert_eq!(result.is_error, Some(true), "{name}");
            let text = result_text(&result).unwrap();
            assert!(text.starts_with("Error: "), "{name}: {text}");
            assert!(text.contains(method), "{name}: {text}");
            assert!(text.contains(path), "{name}: {text}");
            assert!(text.contains("500"), "{name}: {text}");
            assert!(text.contains("database exploded"), "{name}: {text}");
        }
    }

    #[tokio::test]
    async fn test_network_failure_is_error_result() {
        let config = ApiConfig {
            base_url: unreachable_base_url().await,
            api_key: String::new(),
        };
        let registry = ToolRegistry::new(Arc::new(ApiClient::new(&config).unwrap()));
        let result = registry.call_tool("list_minds", JsonObject::new()).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).unwrap().starts_with("Error: Request failed"));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let api = MockApi::json(200, &json!({})).await;
        let registry = ToolRegistry::new(Arc::new(api.client()));
        let err = registry.call_tool("drop_everything", JsonObject::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert!(api.requests().is_empty());
    }
}
