//! Data catalog tools.
//!
//! The catalog holds per-datasource table and column metadata, including the
//! human-written descriptions Minds use when reasoning over the data.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::{ApiRequest, ApiResult, JsonBody};
use crate::domains::tools::handlers::ApiTool;

/// How much of the catalog a refresh rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RefreshMode {
    /// Only tables not yet in the catalog.
    MissingOnly,
    /// Re-catalog existing tables.
    All,
    /// Full rebuild.
    Force,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCatalogParams {
    /// Datasource name
    pub datasource: String,

    /// Filter to tables used by a specific Mind
    #[serde(default)]
    pub mind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RefreshCatalogParams {
    /// Datasource name
    pub datasource: String,

    /// missing_only = only uncataloged tables, all = re-catalog existing, force = full rebuild
    pub mode: RefreshMode,

    /// Specific tables to refresh (omit for all)
    #[serde(default)]
    pub table_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LoadCatalogTablesParams {
    /// Datasource name
    pub datasource: String,

    /// Tables to load
    pub table_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTableDescriptionParams {
    /// Datasource name
    pub datasource: String,

    /// Table name
    pub table: String,

    /// New description
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateColumnDescriptionParams {
    /// Datasource name
    pub datasource: String,

    /// Table name
    pub table: String,

    /// Column name
    pub column: String,

    /// New description
    pub description: String,
}

#[derive(Serialize)]
struct MindFilter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    mind: Option<&'a str>,
}

fn catalog_path(datasource: &str) -> String {
    format!("/datasources/{datasource}/catalog")
}

fn table_path(datasource: &str, table: &str) -> String {
    format!("{}/tables/{table}", catalog_path(datasource))
}

pub struct GetCatalogTool;

#[async_trait]
impl ApiTool for GetCatalogTool {
    const NAME: &'static str = "get_catalog";
    const DESCRIPTION: &'static str =
        "Get the data catalog for a datasource - tables, columns, types, and statistics";
    type Params = GetCatalogParams;

    fn request(params: &GetCatalogParams) -> ApiResult<ApiRequest> {
        let filter = MindFilter {
            mind: params.mind.as_deref().filter(|m| !m.is_empty()),
        };
        ApiRequest::get(catalog_path(&params.datasource)).with_query(&filter)
    }
}

pub struct RefreshCatalogTool;

#[async_trait]
impl ApiTool for RefreshCatalogTool {
    const NAME: &'static str = "refresh_catalog";
    const DESCRIPTION: &'static str = "Refresh the data catalog for a datasource";
    type Params = RefreshCatalogParams;

    fn request(params: &RefreshCatalogParams) -> ApiResult<ApiRequest> {
        let body = JsonBody::new()
            .set_serialized("mode", &params.mode)?
            .set_opt("table_names", params.table_names.clone());
        Ok(ApiRequest::post(
            format!("{}/refresh", catalog_path(&params.datasource)),
            body,
        ))
    }
}

pub struct LoadCatalogTablesTool;

#[async_trait]
impl ApiTool for LoadCatalogTablesTool {
    const NAME: &'static str = "load_catalog_tables";
    const DESCRIPTION: &'static str = "Load specific tables into the data catalog";
    type Params = LoadCatalogTablesParams;

    fn request(params: &LoadCatalogTablesParams) -> ApiResult<ApiRequest> {
        let body = JsonBody::new().set("table_names", params.table_names.clone());
        Ok(ApiRequest::post(
            format!("{}/tables", catalog_path(&params.datasource)),
            body,
        ))
    }
}

pub struct UpdateTableDescriptionTool;

#[async_trait]
impl ApiTool for UpdateTableDescriptionTool {
    const NAME: &'static str = "update_table_description";
    const DESCRIPTION: &'static str = "Update the description of a table in the data catalog";
    type Params = UpdateTableDescriptionParams;

    fn request(params: &UpdateTableDescriptionParams) -> ApiResult<ApiRequest> {
        let body = JsonBody::new().set("description", params.description.clone());
        Ok(ApiRequest::patch(
            table_path(&params.datasource, &params.table),
            body,
        ))
    }
}

pub struct UpdateColumnDescriptionTool;

#[async_trait]
impl ApiTool for UpdateColumnDescriptionTool {
    const NAME: &'static str = "update_column_description";
    const DESCRIPTION: &'static str = "Update the description of a column in the data catalog";
    type Params = UpdateColumnDescriptionParams;

    fn request(params: &UpdateColumnDescriptionParams) -> ApiResult<ApiRequest> {
        let body = JsonBody::new().set("description", params.description.clone());
        Ok(ApiRequest::patch(
            format!(
                "{}/columns/{}",
                table_path(&params.datasource, &params.table),
                params.column
            ),
            body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::mock::MockApi;
    use crate::domains::tools::ToolError;
    use crate::domains::tools::handlers::{dispatch, parse_params, test_support::args};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_catalog() {
        let api = MockApi::json(200, &json!({"tables": []})).await;
        let client = api.client();
        dispatch::<GetCatalogTool>(&client, args(json!({"datasource": "pg"})))
            .await
            .unwrap();
        dispatch::<GetCatalogTool>(&client, args(json!({"datasource": "pg", "mind": "sales ops"})))
            .await
            .unwrap();

        let requests = api.requests();
        assert_eq!(requests[0].path_and_query(), "/api/v1/datasources/pg/catalog");
        assert_eq!(
            requests[1].path_and_query(),
            "/api/v1/datasources/pg/catalog?mind=sales+ops"
        );
    }

    #[tokio::test]
    async fn test_refresh_catalog() {
        let api = MockApi::json(202, &json!({"status": "started"})).await;
        dispatch::<RefreshCatalogTool>(
            &api.client(),
            args(json!({"datasource": "pg", "mode": "missing_only", "table_names": ["orders"]})),
        )
        .await
        .unwrap();

        let req = api.last_request();
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/v1/datasources/pg/catalog/refresh");
        assert_eq!(req.json(), json!({"mode": "missing_only", "table_names": ["orders"]}));
    }

    #[test]
    fn test_refresh_modes() {
        for (mode, expected) in [
            ("missing_only", RefreshMode::MissingOnly),
            ("all", RefreshMode::All),
            ("force", RefreshMode::Force),
        ] {
            let params = parse_params::<RefreshCatalogTool>(args(json!({
                "datasource": "pg",
                "mode": mode
            })))
            .unwrap();
            assert_eq!(params.mode, expected);
            let body = RefreshCatalogTool::request(&params).unwrap().body.unwrap();
            assert_eq!(body, json!({"mode": mode}));
        }
    }

    #[tokio::test]
    async fn test_refresh_catalog_rejects_unknown_mode() {
        let api = MockApi::json(200, &json!({})).await;
        let client = api.client();
        for arguments in [
            json!({"datasource": "pg", "mode": "everything"}),
            json!({"datasource": "pg", "mode": "ALL"}),
            json!({"datasource": "pg"}),
        ] {
            let err = dispatch::<RefreshCatalogTool>(&client, args(arguments))
                .await
                .unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)));
        }
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_tables() {
        let api = MockApi::json(200, &json!({"loaded": 2})).await;
        dispatch::<LoadCatalogTablesTool>(
            &api.client(),
            args(json!({"datasource": "pg", "table_names": ["a", "b"]})),
        )
        .await
        .unwrap();

        let req = api.last_request();
        assert_eq!(req.path, "/api/v1/datasources/pg/catalog/tables");
        assert_eq!(req.json(), json!({"table_names": ["a", "b"]}));
    }

    #[tokio::test]
    async fn test_update_descriptions() {
        let api = MockApi::json(200, &json!({"ok": true})).await;
        let client = api.client();
        dispatch::<UpdateTableDescriptionTool>(
            &client,
            args(json!({"datasource": "pg", "table": "orders", "description": "One row per order"})),
        )
        .await
        .unwrap();
        dispatch::<UpdateColumnDescriptionTool>(
            &client,
            args(json!({
                "datasource": "pg",
                "table": "orders",
                "column": "total",
                "description": "Gross total in EUR"
            })),
        )
        .await
        .unwrap();

        let requests = api.requests();
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(requests[0].path, "/api/v1/datasources/pg/catalog/tables/orders");
        assert_eq!(requests[0].json(), json!({"description": "One row per order"}));
        assert_eq!(requests[1].method, "PATCH");
        assert_eq!(
            requests[1].path,
            "/api/v1/datasources/pg/catalog/tables/orders/columns/total"
        );
        assert_eq!(requests[1].json(), json!({"description": "Gross total in EUR"}));
    }
}
