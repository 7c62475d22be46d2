//! Tool Router - builds the rmcp ToolRouter.
//!
//! Every route shares the same [`ApiClient`]; routes are generated from the
//! tool definitions by [`create_route`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AskMindTool, CreateDatasourceTool, CreateMindTool, DeleteDatasourceTool, DeleteMindTool,
    ExportQueryCsvTool, GetCatalogTool, GetDatasourceTool, GetMindTool, GetQueryResultTool,
    ListDatasourcesTool, ListMindsTool, LoadCatalogTablesTool, QueryMindTool, RefreshCatalogTool,
    UpdateColumnDescriptionTool, UpdateDatasourceTool, UpdateMindTool, UpdateTableDescriptionTool,
};
use super::handlers::create_route;
use crate::core::api::ApiClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ApiClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        // Datasources
        .with_route(create_route::<ListDatasourcesTool, S>(client.clone()))
        .with_route(create_route::<GetDatasourceTool, S>(client.clone()))
        .with_route(create_route::<CreateDatasourceTool, S>(client.clone()))
        .with_route(create_route::<UpdateDatasourceTool, S>(client.clone()))
        .with_route(create_route::<DeleteDatasourceTool, S>(client.clone()))
        // Minds
        .with_route(create_route::<ListMindsTool, S>(client.clone()))
        .with_route(create_route::<GetMindTool, S>(client.clone()))
        .with_route(create_route::<CreateMindTool, S>(client.clone()))
        .with_route(create_route::<UpdateMindTool, S>(client.clone()))
        .with_route(create_route::<DeleteMindTool, S>(client.clone()))
        // Chat / query
        .with_route(create_route::<AskMindTool, S>(client.clone()))
        .with_route(create_route::<QueryMindTool, S>(client.clone()))
        // Query results
        .with_route(create_route::<GetQueryResultTool, S>(client.clone()))
        .with_route(create_route::<ExportQueryCsvTool, S>(client.clone()))
        // Data catalog
        .with_route(create_route::<GetCatalogTool, S>(client.clone()))
        .with_route(create_route::<RefreshCatalogTool, S>(client.clone()))
        .with_route(create_route::<LoadCatalogTablesTool, S>(client.clone()))
        .with_route(create_route::<UpdateTableDescriptionTool, S>(client.clone()))
        .with_route(create_route::<UpdateColumnDescriptionTool, S>(client))
}
