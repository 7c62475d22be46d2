//! Tool result envelopes.
//!
//! Every tool answers with a single text content block: pretty-printed JSON on
//! success, `Error: <message>` with the error flag set on failure.

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content, RawContent};
use serde_json::Value;

/// 2^63: whole floats below this fit an `i64` exactly.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Wrap API data as pretty-printed JSON text.
///
/// Whole floats are printed without a fraction (`1.0` and `1e2` become `1`
/// and `100`), as JavaScript clients of the API would print them.
pub fn format_success(data: &Value) -> CallToolResult {
    let data = whole_floats_as_integers(data);
    let text = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

fn whole_floats_as_integers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < I64_LIMIT => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(whole_floats_as_integers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| (key.clone(), whole_floats_as_integers(v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Wrap text that is returned to the caller verbatim.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Wrap a failure message and set the error flag.
pub fn format_failure(error: &dyn Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {error}"))])
}

/// Text of the first content block.
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|c| match &c.raw {
        RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}
