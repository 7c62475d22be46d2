//! Datasource management tools.
//!
//! A datasource is a named connection (engine + connection parameters) to an
//! external database or storage system.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::api::{ApiClient, ApiRequest, ApiResult, JsonBody};
use crate::domains::tools::handlers::{ApiTool, NoParams, ToolReply};

/// Parameters naming a single datasource.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DatasourceNameParams {
    /// Datasource name
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDatasourceParams {
    /// Datasource name
    pub name: String,

    /// Verify the connection is alive
    #[serde(default)]
    pub check_connection: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDatasourceParams {
    /// Unique datasource name
    pub name: String,

    /// Database engine: postgres, mysql, mariadb, mssql, mongodb, snowflake,
    /// bigquery, redshift, databricks, clickhouse, s3, dynamodb, elasticsearch,
    /// one_drive, teradata
    pub engine: String,

    /// Human-readable description of the data
    #[serde(default)]
    pub description: Option<String>,

    /// Connection parameters (host, port, user, password, database, schema, etc.)
    pub connection_data: Map<String, Value>,

    /// Restrict access to specific tables
    #[serde(default)]
    pub tables: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateDatasourceParams {
    /// Datasource name to update
    pub name: String,

    /// New description
    #[serde(default)]
    pub description: Option<String>,

    /// Updated connection parameters
    #[serde(default)]
    pub connection_data: Option<Map<String, Value>>,

    /// Updated table list
    #[serde(default)]
    pub tables: Option<Vec<String>>,
}

fn datasource_path(name: &str) -> String {
    format!("/datasources/{name}")
}

pub struct ListDatasourcesTool;

#[async_trait]
impl ApiTool for ListDatasourcesTool {
    const NAME: &'static str = "list_datasources";
    const DESCRIPTION: &'static str = "List all datasources in your Minds account";
    type Params = NoParams;

    fn request(_params: &NoParams) -> ApiResult<ApiRequest> {
        Ok(ApiRequest::get("/datasources"))
    }
}

pub struct GetDatasourceTool;

#[derive(Serialize)]
struct ConnectionCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    check_connection: Option<bool>,
}

#[async_trait]
impl ApiTool for GetDatasourceTool {
    const NAME: &'static str = "get_datasource";
    const DESCRIPTION: &'static str =
        "Get details of a datasource, optionally checking its connection status";
    type Params = GetDatasourceParams;

    fn request(params: &GetDatasourceParams) -> ApiResult<ApiRequest> {
        // Only an explicit `true` asks the API to probe the connection
        let check = ConnectionCheck {
            check_connection: params.check_connection.filter(|c| *c),
        };
        ApiRequest::get(datasource_path(&params.name)).with_query(&check)
    }
}

pub struct CreateDatasourceTool;

#[async_trait]
impl ApiTool for CreateDatasourceTool {
    const NAME: &'static str = "create_datasource";
    const DESCRIPTION: &'static str = "Create a new datasource connection (postgres, mysql, snowflake, bigquery, mongodb, s3, redshift, clickhouse, etc.)";
    type Params = CreateDatasourceParams;

    fn request(params: &CreateDatasourceParams) -> ApiResult<ApiRequest> {
        let body = JsonBody::new()
            .set("name", params.name.clone())
            .set("engine", params.engine.clone())
            .set("connection_data", params.connection_data.clone())
            .set_non_empty("description", params.description.clone())
            .set_opt("tables", params.tables.clone());
        Ok(ApiRequest::post("/datasources", body))
    }
}

pub struct UpdateDatasourceTool;

#[async_trait]
impl ApiTool for UpdateDatasourceTool {
    const NAME: &'static str = "update_datasource";
    const DESCRIPTION: &'static str =
        "Update a datasource's description, connection parameters, or tables";
    type Params = UpdateDatasourceParams;

    fn request(params: &UpdateDatasourceParams) -> ApiResult<ApiRequest> {
        let body = JsonBody::new()
            .set_opt("description", params.description.clone())
            .set_opt("connection_data", params.connection_data.clone())
            .set_opt("tables", params.tables.clone());
        Ok(ApiRequest::patch(datasource_path(&params.name), body))
    }
}

pub struct DeleteDatasourceTool;

#[async_trait]
impl ApiTool for DeleteDatasourceTool {
    const NAME: &'static str = "delete_datasource";
    const DESCRIPTION: &'static str = "Delete a datasource";
    type Params = DatasourceNameParams;

    fn request(params: &DatasourceNameParams) -> ApiResult<ApiRequest> {
        Ok(ApiRequest::delete(datasource_path(&params.name)))
    }

    async fn call(client: &ApiClient, params: DatasourceNameParams) -> ApiResult<ToolReply> {
        client.send(Self::request(&params)?).await?;
        Ok(ToolReply::Json(json!({ "deleted": true, "name": params.name })))
    }
}
