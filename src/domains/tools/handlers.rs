//! Shared tool plumbing.
//!
//! Every Minds tool is a unit struct implementing [`ApiTool`]: a name, a
//! description, a parameter type whose JSON schema is published to clients,
//! and the single API request the tool makes. Argument decoding, execution,
//! result formatting and rmcp route construction are written once here.

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::ToolError;
use super::response::{format_failure, format_success, text_result};
use crate::core::api::{ApiClient, ApiRequest, ApiResult};

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Successful outcome of a tool call.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolReply {
    /// Data rendered as pretty-printed JSON.
    Json(Value),
    /// Text handed back untouched.
    Text(String),
}

impl ToolReply {
    pub fn into_result(self) -> CallToolResult {
        match self {
            Self::Json(data) => format_success(&data),
            Self::Text(text) => text_result(text),
        }
    }
}

/// A tool backed by one Minds API request.
#[async_trait]
pub trait ApiTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Build the request for the given arguments.
    fn request(params: &Self::Params) -> ApiResult<ApiRequest>;

    /// Perform the call. The default sends [`ApiTool::request`] and returns
    /// the decoded JSON as-is.
    async fn call(client: &ApiClient, params: Self::Params) -> ApiResult<ToolReply> {
        let request = Self::request(&params)?;
        client.send(request).await.map(ToolReply::Json)
    }
}

/// Decode raw arguments into the tool's parameter type.
pub fn parse_params<T: ApiTool>(arguments: JsonObject) -> Result<T::Params, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))
}

/// Run a tool with already-validated arguments.
///
/// Never fails: API and network errors become an error envelope.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn execute<T: ApiTool>(client: &ApiClient, params: T::Params) -> CallToolResult {
    info!("Tool called");
    match T::call(client, params).await {
        Ok(reply) => reply.into_result(),
        Err(e) => {
            warn!("Tool call failed: {}", e);
            format_failure(&e)
        }
    }
}

/// Validate `arguments` and run the tool.
///
/// Invalid arguments are rejected before any request is made.
pub async fn dispatch<T: ApiTool>(
    client: &ApiClient,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    let params = parse_params::<T>(arguments)?;
    Ok(execute::<T>(client, params).await)
}

/// Create a Tool model for `T` (metadata).
pub fn to_tool<T: ApiTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for `T` bound to the shared client.
pub fn create_route<T, S>(client: Arc<ApiClient>) -> ToolRoute<S>
where
    T: ApiTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move {
            dispatch::<T>(&client, args)
                .await
                .map_err(|e| McpError::invalid_params(e.to_string(), None))
        }
        .boxed()
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use rmcp::model::JsonObject;
    use serde_json::Value;

    /// Turn a `json!` object literal into tool arguments.
    pub fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("arguments must be a JSON object, got {other}"),
        }
    }
}
