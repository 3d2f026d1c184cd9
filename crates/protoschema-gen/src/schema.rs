//! # Unordered Schema
//!
//! [`Schema`] is the programmatic form of a generated message schema: a
//! JSON object with `type`, `title`, `properties`, and the optional
//! `description` and `required`. Key order of the rendered text is not part
//! of its contract; use [`crate::OrderedSchema`] when byte-stable output
//! matters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use protoschema_core::SchemaError;

/// A generated JSON Schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Map<String, Value>);

impl Schema {
    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    /// The `properties` object, keyed by external field name.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.0.get("properties").and_then(Value::as_object)
    }

    /// Sub-schema of one property.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties().and_then(|p| p.get(name))
    }

    /// Names listed under `required`, in order. Empty when the key is absent.
    pub fn required(&self) -> Vec<&str> {
        self.0
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Pretty-printed JSON as bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, SchemaError> {
        Ok(serde_json::to_vec_pretty(&self.0)?)
    }

    /// Single-line JSON.
    pub fn to_json_compact(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl From<Schema> for Value {
    fn from(schema: Schema) -> Self {
        schema.into_value()
    }
}
