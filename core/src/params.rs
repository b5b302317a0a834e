//! Request parameters and their form encoding.
//!
//! Parameters are an insertion-ordered map of JSON values. The same encoding
//! is used for GET query strings and POST/PATCH bodies:
//!
//! - scalars: strings verbatim, numbers in JSON text form, booleans as `1`/`0`
//! - `null`: the key is dropped
//! - arrays: `items[0]=a&items[1]=b`
//! - objects: `address[city]=Oslo`, nested as deep as the value goes

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::error::{Error, Result};

/// Ordered parameter mapping sent with a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object, typically written with `serde_json::json!`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(Error::InvalidArgument(format!(
                "request parameters must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Insert or replace `key`. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert `key` only when a value was supplied; `None` leaves the key out
    /// of the request entirely.
    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.0.insert(key.into(), value.into());
        }
        self
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten into `(key, value)` pairs in encoding order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            flatten(key.clone(), value, &mut pairs);
        }
        pairs
    }

    /// `application/x-www-form-urlencoded` representation, e.g. `a=1&b=x`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_pairs() {
            serializer.append_pair(&key, &value);
        }
        serializer.finish()
    }
}

fn flatten(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((prefix, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => out.push((prefix, n.to_string())),
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten(format!("{prefix}[{i}]"), item, out);
            }
        }
        Value::Object(fields) => {
            for (k, v) in fields {
                flatten(format!("{prefix}[{k}]"), v, out);
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Query for list endpoints that accept either a bare limit or a full set of
/// filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListQuery {
    /// No parameters; the service applies its own defaults.
    #[default]
    All,
    /// Sent as `limit=<n>`.
    Limit(u32),
    /// Sent as given.
    Params(Params),
}

impl ListQuery {
    pub fn into_params(self) -> Params {
        match self {
            ListQuery::All => Params::new(),
            ListQuery::Limit(limit) => Params::new().with("limit", limit),
            ListQuery::Params(params) => params,
        }
    }
}

impl From<u32> for ListQuery {
    fn from(limit: u32) -> Self {
        ListQuery::Limit(limit)
    }
}

impl From<Params> for ListQuery {
    fn from(params: Params) -> Self {
        ListQuery::Params(params)
    }
}

impl From<Option<u32>> for ListQuery {
    fn from(limit: Option<u32>) -> Self {
        limit.map_or(ListQuery::All, ListQuery::Limit)
    }
}
