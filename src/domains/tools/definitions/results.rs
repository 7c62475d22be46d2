//! Query result retrieval tools.
//!
//! Results are addressed by conversation and message id, as returned by
//! `query_mind`.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::{ApiClient, ApiRequest, ApiResult};
use crate::domains::tools::handlers::{ApiTool, ToolReply};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetQueryResultParams {
    /// Conversation UUID
    pub conversation_id: String,

    /// Message UUID
    pub message_id: String,

    /// Max rows (1-1000, default 100)
    #[serde(default)]
    pub limit: Option<u64>,

    /// Rows to skip (default 0)
    #[serde(default)]
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExportQueryCsvParams {
    /// Conversation UUID
    pub conversation_id: String,

    /// Message UUID
    pub message_id: String,
}

#[derive(Serialize)]
struct ResultPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u64>,
}

fn item_path(conversation_id: &str, message_id: &str, action: &str) -> String {
    format!("/conversations/{conversation_id}/items/{message_id}/{action}")
}

pub struct GetQueryResultTool;

#[async_trait]
impl ApiTool for GetQueryResultTool {
    const NAME: &'static str = "get_query_result";
    const DESCRIPTION: &'static str =
        "Get paginated results from a previous query (by conversation and message ID)";
    type Params = GetQueryResultParams;

    fn request(params: &GetQueryResultParams) -> ApiResult<ApiRequest> {
        let page = ResultPage {
            limit: params.limit,
            offset: params.offset,
        };
        ApiRequest::get(item_path(&params.conversation_id, &params.message_id, "result"))
            .with_query(&page)
    }
}

pub struct ExportQueryCsvTool;

#[async_trait]
impl ApiTool for ExportQueryCsvTool {
    const NAME: &'static str = "export_query_csv";
    const DESCRIPTION: &'static str = "Export query results as CSV";
    type Params = ExportQueryCsvParams;

    fn request(params: &ExportQueryCsvParams) -> ApiResult<ApiRequest> {
        Ok(ApiRequest::get(item_path(
            &params.conversation_id,
            &params.message_id,
            "export",
        )))
    }

    // CSV is passed through as text; it never goes through JSON decoding.
    async fn call(client: &ApiClient, params: ExportQueryCsvParams) -> ApiResult<ToolReply> {
        let request = Self::request(&params)?;
        client.fetch_text(&request.path).await.map(ToolReply::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::mock::MockApi;
    use crate::domains::tools::handlers::{dispatch, test_support::args};
    use crate::domains::tools::response::result_text;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_query_result_without_paging() {
        let api = MockApi::json(200, &json!({"columns": ["n"], "rows": [[1]]})).await;
        dispatch::<GetQueryResultTool>(
            &api.client(),
            args(json!({"conversation_id": "c1", "message_id": "m1"})),
        )
        .await
        .unwrap();

        let req = api.last_request();
        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/api/v1/conversations/c1/items/m1/result");
        assert_eq!(req.query, None);
    }

    #[tokio::test]
    async fn test_get_query_result_with_paging() {
        let api = MockApi::json(200, &json!({"rows": []})).await;
        let client = api.client();
        dispatch::<GetQueryResultTool>(
            &client,
            args(json!({"conversation_id": "c1", "message_id": "m1", "limit": 50, "offset": 100})),
        )
        .await
        .unwrap();
        dispatch::<GetQueryResultTool>(
            &client,
            args(json!({"conversation_id": "c1", "message_id": "m1", "offset": 0})),
        )
        .await
        .unwrap();

        let queries: Vec<_> = api.requests().into_iter().map(|r| r.query).collect();
        assert_eq!(
            queries,
            vec![Some("limit=50&offset=100".to_string()), Some("offset=0".to_string())]
        );
    }

    #[tokio::test]
    async fn test_export_returns_raw_csv() {
        let csv = "id,name\n1,\"Acme, Inc\"\n2,{not json}\n";
        let api = MockApi::start(200, csv).await;
        let result = dispatch::<ExportQueryCsvTool>(
            &api.client(),
            args(json!({"conversation_id": "c1", "message_id": "m1"})),
        )
        .await
        .unwrap();

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), Some(csv));

        let req = api.last_request();
        assert_eq!(req.path, "/api/v1/conversations/c1/items/m1/export");
        assert_eq!(req.header("authorization"), Some("Bearer test-key"));
        assert_eq!(req.header("content-type"), None);
    }

    #[tokio::test]
    async fn test_export_failure() {
        let api = MockApi::start(404, "no result for message").await;
        let result = dispatch::<ExportQueryCsvTool>(
            &api.client(),
            args(json!({"conversation_id": "c1", "message_id": "m1"})),
        )
        .await
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            Some("Error: Export failed: GET /conversations/c1/items/m1/export → 404: no result for message")
        );
    }
}
