use crate::args::{ArgValue, CallArgs};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Field carrying the application key, attached to every call.
pub const APP_KEY_FIELD: &str = "app_key";

/// Field carrying the user key, attached whenever the client has one.
pub const USER_KEY_FIELD: &str = "user_key";

/// The flat field mapping sent to the remote endpoint.
///
/// Built fresh for every call and never shared between calls. Serializes
/// directly into a query string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct OutboundArgs(IndexMap<String, String>);

impl OutboundArgs {
    pub fn new() -> Self {
        OutboundArgs::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Apply the per-value serialization rules and attach credentials.
///
/// The user key is attached whenever one is configured, even when it is
/// empty; presence is decided by the configuration, not the value.
pub fn build_query_args(
    fields: &CallArgs,
    app_key: &str,
    user_key: Option<&str>,
) -> OutboundArgs {
    let mut out = OutboundArgs::new();

    for (name, value) in fields.iter() {
        out.insert(name, encode_value(value));
    }

    out.insert(APP_KEY_FIELD, app_key);
    if let Some(user_key) = user_key {
        out.insert(USER_KEY_FIELD, user_key);
    }

    out
}

/// Render one argument value as its query-string form.
///
/// Sequences join their elements with commas, booleans render as the
/// lowercase literals, text passes through (already UTF-8), and structured
/// values carry their JSON encoding.
pub fn encode_value(value: &ArgValue) -> String {
    match value {
        ArgValue::List(items) => items
            .iter()
            .map(encode_value)
            .collect::<Vec<_>>()
            .join(","),
        ArgValue::Text(text) => text.clone(),
        ArgValue::Bool(flag) => flag.to_string(),
        ArgValue::Int(n) => n.to_string(),
        ArgValue::Structured(json) => encode_json(json),
    }
}

fn encode_json(value: &Value) -> String {
    match value {
        // A bare string travels without its JSON quotes.
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
