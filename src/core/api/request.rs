//! Request envelopes and JSON body assembly.
//!
//! Tool handlers describe the call they want as an [`ApiRequest`] and build
//! bodies with [`JsonBody`], which only ever adds keys for values that were
//! actually supplied. Nothing here performs I/O.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use super::ApiResult;

/// A single outbound call: method, API-relative path and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post(path: impl Into<String>, body: impl Into<Value>) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: impl Into<Value>) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    pub fn patch(path: impl Into<String>, body: impl Into<Value>) -> Self {
        Self::new(Method::PATCH, path).with_body(body)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append form-encoded query parameters.
    ///
    /// `None` fields must be skipped by the query type's `Serialize` impl; when
    /// nothing remains the path is left untouched (no dangling `?`).
    pub fn with_query<Q: Serialize>(mut self, query: &Q) -> ApiResult<Self> {
        let encoded = serde_urlencoded::to_string(query)?;
        if !encoded.is_empty() {
            self.path.push('?');
            self.path.push_str(&encoded);
        }
        Ok(self)
    }
}

/// Builder for request bodies that contain only the fields a caller supplied.
///
/// Starts from an empty object; each rule adds a key only when its source value
/// is present, so no `null` placeholders ever reach the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonBody {
    fields: Map<String, Value>,
}

impl JsonBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always set `key`.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Set `key` when a value was supplied, whatever it is.
    pub fn set_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Set `key` when a non-empty string was supplied.
    pub fn set_non_empty(self, key: &str, value: Option<String>) -> Self {
        self.set_opt(key, value.filter(|v| !v.is_empty()))
    }

    /// Always set `key` to the serialized form of `value`.
    pub fn set_serialized<T: Serialize + ?Sized>(self, key: &str, value: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(value)?;
        Ok(self.set(key, value))
    }

    /// Set `key` to the serialized form of `value` when one was supplied.
    pub fn set_opt_serialized<T: Serialize>(self, key: &str, value: Option<&T>) -> ApiResult<Self> {
        match value {
            Some(v) => self.set_serialized(key, v),
            None => Ok(self),
        }
    }

    /// Nest `inner` under `key` unless it ended up empty.
    pub fn nest_if_any(self, key: &str, inner: JsonBody) -> Self {
        if inner.is_empty() {
            self
        } else {
            self.set(key, inner)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<JsonBody> for Value {
    fn from(body: JsonBody) -> Self {
        body.into_value()
    }
}
