//! # Ordered Schema Serialization
//!
//! [`OrderedSchema`] keeps properties in field declaration order and renders
//! with a fixed key sequence:
//!
//! 1. `type`
//! 2. `title` (omitted when empty)
//! 3. `description` (omitted when empty)
//! 4. `properties`, in declaration order
//! 5. `required` (omitted when empty)
//!
//! Property sub-schemas go through the regular `serde_json` serializer.
//! Their own collections are order-stable (enum values follow declaration
//! order, object keys serialize in a fixed order), so identical input always
//! produces identical bytes. Output is compact.
//!
//! `serde_json::to_value` on an `OrderedSchema` is not order-preserving;
//! render to text with [`OrderedSchema::to_json_string`] instead.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use protoschema_core::SchemaError;

/// One named property of an [`OrderedSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedProperty {
    pub name: String,
    pub schema: Map<String, Value>,
}

/// A message schema with deterministic key order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedSchema {
    pub schema_type: String,
    pub title: String,
    pub description: String,
    pub properties: Vec<OrderedProperty>,
    pub required: Vec<String>,
}

impl OrderedSchema {
    pub fn property(&self, name: &str) -> Option<&Map<String, Value>> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.schema)
    }

    /// Property names in output order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    /// Compact, byte-stable JSON text.
    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, SchemaError> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl Serialize for OrderedSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.schema_type.is_empty() {
            map.serialize_entry("type", &self.schema_type)?;
        }
        if !self.title.is_empty() {
            map.serialize_entry("title", &self.title)?;
        }
        if !self.description.is_empty() {
            map.serialize_entry("description", &self.description)?;
        }
        map.serialize_entry("properties", &PropertyList(&self.properties))?;
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        map.end()
    }
}

struct PropertyList<'a>(&'a [OrderedProperty]);

impl Serialize for PropertyList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for property in self.0 {
            map.serialize_entry(&property.name, &property.schema)?;
        }
        map.end()
    }
}
