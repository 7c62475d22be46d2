//! Question answering tools.
//!
//! `ask_mind` goes through the OpenAI-compatible chat completions endpoint and
//! returns just the answer text; `query_mind` uses the Responses API and
//! returns the full response, optionally running a direct SQL query.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::api::{ApiClient, ApiError, ApiRequest, ApiResult, JsonBody};
use crate::domains::tools::handlers::{ApiTool, ToolReply};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// One earlier turn of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AskMindParams {
    /// Mind name to query
    pub mind: String,

    /// Natural language question
    pub question: String,

    /// Previous messages for multi-turn conversation
    #[serde(default)]
    pub history: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryMindParams {
    /// Mind name
    pub mind: String,

    /// Natural language question or instruction
    pub question: String,

    /// Conversation ID to continue a previous thread
    #[serde(default)]
    pub conversation_id: Option<String>,

    /// Direct SQL SELECT query to run (Mind must have allow_direct_queries enabled)
    #[serde(default)]
    pub sql_query: Option<String>,

    /// Max rows to return inline (1-10000, default 10000)
    #[serde(default)]
    pub max_inline_rows: Option<u64>,
}

/// Pull the assistant's answer out of a chat completion.
///
/// Falls back to the whole response as compact JSON when there is no
/// non-empty `choices[0].message.content`.
pub fn extract_answer(response: &Value) -> String {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| response.to_string())
}

pub struct AskMindTool;

#[async_trait]
impl ApiTool for AskMindTool {
    const NAME: &'static str = "ask_mind";
    const DESCRIPTION: &'static str = "Ask a question to a Mind using the Chat Completions API (OpenAI-compatible). Returns a natural-language answer based on connected data.";
    type Params = AskMindParams;

    fn request(params: &AskMindParams) -> ApiResult<ApiRequest> {
        let mut messages = params.history.clone().unwrap_or_default();
        messages.push(ChatMessage {
            role: ChatRole::User,
            content: params.question.clone(),
        });

        let body = JsonBody::new()
            .set("model", params.mind.clone())
            .set_serialized("messages", &messages)?
            .set("stream", false);
        Ok(ApiRequest::post("/chat/completions", body))
    }

    async fn call(client: &ApiClient, params: AskMindParams) -> ApiResult<ToolReply> {
        let request = Self::request(&params)?;
        let (method, path) = (request.method.to_string(), request.path.clone());

        // A 204 or empty body carries no completion to read an answer from.
        let response = client.send(request).await?;
        if response.is_null() {
            return Err(ApiError::EmptyResponse { method, path });
        }
        Ok(ToolReply::Text(extract_answer(&response)))
    }
}

pub struct QueryMindTool;

#[async_trait]
impl ApiTool for QueryMindTool {
    const NAME: &'static str = "query_mind";
    const DESCRIPTION: &'static str = "Query a Mind using the Responses API, with optional SQL query tool and conversation context";
    type Params = QueryMindParams;

    fn request(params: &QueryMindParams) -> ApiResult<ApiRequest> {
        let mut body = JsonBody::new()
            .set("model", params.mind.clone())
            .set("input", params.question.clone())
            .set("stream", false)
            .set_non_empty("conversation", params.conversation_id.clone());

        if let Some(query) = params.sql_query.as_ref().filter(|q| !q.is_empty()) {
            let sql_tool = JsonBody::new()
                .set("type", "sql_query")
                .set("query", query.clone())
                .set_opt("max_inline_rows", params.max_inline_rows);
            body = body.set("tools", vec![Value::from(sql_tool)]);
        }

        Ok(ApiRequest::post("/responses", body))
    }
}
