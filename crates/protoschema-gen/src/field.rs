//! # Field Schema Builder
//!
//! Builds the sub-schema for one field in three steps:
//!
//! 1. The element schema: the mapped primitive type, enum value names in
//!    declaration order, or the timestamp `oneOf`.
//! 2. Repeated fields are wrapped once as `{type: array, items: <element>}`.
//! 3. Present annotations are applied to the outermost schema. For repeated
//!    fields that is the array wrapper, not the item schema.
//!
//! Message-typed fields other than the timestamp are a bare
//! `{"type": "object"}`; nested messages are never expanded.

use protoschema_core::{Cardinality, FieldAnnotations, FieldDescriptor, FieldKind};
use serde_json::{Map, Value};

use crate::resolve;
use crate::types::{map_primitive, JsonType};
use crate::wellknown;

/// Build the JSON Schema for a single field.
pub fn build_field_schema<F: FieldDescriptor>(field: &F) -> Map<String, Value> {
    let mut schema = element_schema(field);

    if field.cardinality() == Cardinality::Repeated {
        let mut wrapper = Map::new();
        wrapper.insert("type".into(), JsonType::Array.as_str().into());
        wrapper.insert("items".into(), Value::Object(schema));
        schema = wrapper;
    }

    apply_annotations(&mut schema, field.annotations());
    schema
}

fn element_schema<F: FieldDescriptor>(field: &F) -> Map<String, Value> {
    if field.kind() == FieldKind::Message && field.message_type().is_some_and(wellknown::is_timestamp)
    {
        return wellknown::timestamp_schema();
    }

    let mut schema = Map::new();
    let mapping = map_primitive(field.kind());
    if let Some(json_type) = mapping.json_type {
        schema.insert("type".into(), json_type.as_str().into());
    }
    if let Some(format) = mapping.format {
        schema.insert("format".into(), format.into());
    }

    if field.kind() == FieldKind::Enum {
        let values = field
            .enum_value_names()
            .into_iter()
            .map(|name| Value::String(name.to_string()))
            .collect();
        schema.insert("enum".into(), Value::Array(values));
    }

    schema
}

fn apply_annotations<A: FieldAnnotations + ?Sized>(schema: &mut Map<String, Value>, opts: &A) {
    if let Some(description) = opts.description() {
        schema.insert("description".into(), description.into());
    }
    if let Some(example) = opts.example() {
        schema.insert("example".into(), example.into());
    }
    if let Some(format) = opts.format() {
        schema.insert("format".into(), format.into());
    }
    if let Some(default) = opts.default_literal().and_then(resolve::default_value) {
        schema.insert("default".into(), default);
    }
    if let Some(min_length) = opts.min_length() {
        schema.insert("minLength".into(), min_length.into());
    }
    if let Some(max_length) = opts.max_length() {
        schema.insert("maxLength".into(), max_length.into());
    }
    if let Some(minimum) = opts.minimum().and_then(resolve::bound_value) {
        schema.insert("minimum".into(), minimum);
    }
    if let Some(maximum) = opts.maximum().and_then(resolve::bound_value) {
        schema.insert("maximum".into(), maximum);
    }
    if let Some(pattern) = opts.pattern() {
        schema.insert("pattern".into(), pattern.into());
    }
}
