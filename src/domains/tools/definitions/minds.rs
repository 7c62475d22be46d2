//! Mind management tools.
//!
//! A Mind is a named agent on the Minds platform that answers questions by
//! reasoning over the datasources attached to it.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::api::{ApiClient, ApiRequest, ApiResult, JsonBody};
use crate::domains::tools::handlers::{ApiTool, NoParams, ToolReply};

/// A datasource attached to a Mind.
///
/// Serializes back to the shape the API expects: a bare name, or an object
/// restricting the Mind to some tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MindDatasource {
    /// Attach the datasource by name.
    Named(String),

    /// Attach the datasource, optionally restricted to some tables.
    Scoped {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tables: Option<Vec<String>>,
    },
}

impl MindDatasource {
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) | Self::Scoped { name, .. } => name,
        }
    }
}

/// Parameters naming a single Mind.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MindNameParams {
    /// Mind name
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateMindParams {
    /// Unique Mind name
    pub name: String,

    /// Datasources to attach - string names or {name, tables} objects
    pub datasources: Vec<MindDatasource>,

    /// Custom system prompt for the Mind
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Allow direct SQL queries through this Mind
    #[serde(default)]
    pub allow_direct_queries: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateMindParams {
    /// Mind name to update
    pub name: String,

    /// Rename the Mind
    #[serde(default)]
    pub new_name: Option<String>,

    /// Updated datasource list
    #[serde(default)]
    pub datasources: Option<Vec<MindDatasource>>,

    /// Updated system prompt
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Allow direct SQL queries through this Mind
    #[serde(default)]
    pub allow_direct_queries: Option<bool>,
}

fn mind_path(name: &str) -> String {
    format!("/minds/{name}")
}

/// The `parameters` sub-object shared by create and update.
fn mind_parameters(system_prompt: &Option<String>, allow_direct_queries: Option<bool>) -> JsonBody {
    JsonBody::new()
        .set_non_empty("system_prompt", system_prompt.clone())
        .set_opt("allow_direct_queries", allow_direct_queries)
}

pub struct ListMindsTool;

#[async_trait]
impl ApiTool for ListMindsTool {
    const NAME: &'static str = "list_minds";
    const DESCRIPTION: &'static str = "List all Minds in your account";
    type Params = NoParams;

    fn request(_params: &NoParams) -> ApiResult<ApiRequest> {
        Ok(ApiRequest::get("/minds"))
    }
}

pub struct GetMindTool;

#[async_trait]
impl ApiTool for GetMindTool {
    const NAME: &'static str = "get_mind";
    const DESCRIPTION: &'static str = "Get details of a specific Mind";
    type Params = MindNameParams;

    fn request(params: &MindNameParams) -> ApiResult<ApiRequest> {
        Ok(ApiRequest::get(mind_path(&params.name)))
    }
}

pub struct CreateMindTool;

#[async_trait]
impl ApiTool for CreateMindTool {
    const NAME: &'static str = "create_mind";
    const DESCRIPTION: &'static str = "Create a new Mind connected to one or more datasources";
    type Params = CreateMindParams;

    fn request(params: &CreateMindParams) -> ApiResult<ApiRequest> {
        let body = JsonBody::new()
            .set("name", params.name.clone())
            .set_serialized("datasources", &params.datasources)?
            .nest_if_any(
                "parameters",
                mind_parameters(&params.system_prompt, params.allow_direct_queries),
            );
        Ok(ApiRequest::post("/minds", body))
    }
}

pub struct UpdateMindTool;

#[async_trait]
impl ApiTool for UpdateMindTool {
    const NAME: &'static str = "update_mind";
    const DESCRIPTION: &'static str = "Update a Mind's name, datasources, or parameters";
    type Params = UpdateMindParams;

    fn request(params: &UpdateMindParams) -> ApiResult<ApiRequest> {
        let body = JsonBody::new()
            .set_non_empty("name", params.new_name.clone())
            .set_opt_serialized("datasources", params.datasources.as_ref())?
            .nest_if_any(
                "parameters",
                mind_parameters(&params.system_prompt, params.allow_direct_queries),
            );
        Ok(ApiRequest::put(mind_path(&params.name), body))
    }
}

pub struct DeleteMindTool;

#[async_trait]
impl ApiTool for DeleteMindTool {
    const NAME: &'static str = "delete_mind";
    const DESCRIPTION: &'static str = "Delete a Mind";
    type Params = MindNameParams;

    fn request(params: &MindNameParams) -> ApiResult<ApiRequest> {
        Ok(ApiRequest::delete(mind_path(&params.name)))
    }

    async fn call(client: &ApiClient, params: MindNameParams) -> ApiResult<ToolReply> {
        client.send(Self::request(&params)?).await?;
        Ok(ToolReply::Json(json!({ "deleted": true, "name": params.name })))
    }
}
