use {
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// Loosely typed field bag handed over by the host application. Consumed
/// once per call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionBag(Map<String, Value>);

impl OptionBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// String value of `key`; non-string values count as absent.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn owned_string(&self, key: &str) -> Option<String> {
        self.string(key).map(str::to_string)
    }

    /// Flags arrive as strings. Only the exact literal `"true"` sets one;
    /// every other value, `"false"` included, leaves the SDK default.
    pub fn literal_true(&self, key: &str) -> bool {
        self.string(key) == Some("true")
    }

    pub fn array(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    /// String entries of an array field, non-strings skipped.
    pub fn strings(&self, key: &str) -> Option<Vec<&str>> {
        self.array(key)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }
}

impl From<Map<String, Value>> for OptionBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
