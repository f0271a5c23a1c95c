use indexmap::IndexMap;
use serde_json::Value;

/// A call-time argument value, tagged with how it travels on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i64),
    Text(String),
    Bool(bool),
    List(Vec<ArgValue>),
    /// A structured payload (sequence or mapping), JSON-encoded before transmission.
    Structured(Value),
}

impl ArgValue {
    /// View of the value as JSON, used when a structured parameter needs encoding.
    pub fn to_json(&self) -> Value {
        match self {
            ArgValue::Int(n) => Value::from(*n),
            ArgValue::Text(s) => Value::from(s.as_str()),
            ArgValue::Bool(b) => Value::from(*b),
            ArgValue::List(items) => Value::Array(items.iter().map(ArgValue::to_json).collect()),
            ArgValue::Structured(v) => v.clone(),
        }
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value.into())
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        ArgValue::Int(value.into())
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        ArgValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        ArgValue::Structured(value)
    }
}

/// Ordered mapping of argument name to value for one call.
///
/// Order is preserved because parameter order is significant in the catalog
/// and in the outbound query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallArgs(IndexMap<String, ArgValue>);

impl CallArgs {
    pub fn new() -> Self {
        CallArgs(IndexMap::new())
    }

    /// Builder-style insert.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    /// Remove and return a value, keeping the remaining entries in order.
    pub fn take(&mut self, name: &str) -> Option<ArgValue> {
        self.0.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for CallArgs {
    type Item = (String, ArgValue);
    type IntoIter = indexmap::map::IntoIter<String, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
