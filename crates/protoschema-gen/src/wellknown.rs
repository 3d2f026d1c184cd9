//! # Well-Known Types
//!
//! `google.protobuf.Timestamp` has two accepted JSON encodings: an RFC 3339
//! string and a `{seconds, nanos}` object. Its schema is a `oneOf` over
//! both, so validators accept either without the producer choosing one up
//! front. It is the only composite type that gets an expanded sub-schema.

use serde_json::{json, Map, Value};

/// Fully-qualified name of the protobuf timestamp type.
pub const TIMESTAMP_TYPE: &str = "google.protobuf.Timestamp";

/// Largest valid `nanos` component.
pub const MAX_NANOS: i64 = 999_999_999;

pub fn is_timestamp(type_name: &str) -> bool {
    type_name.trim_start_matches('.') == TIMESTAMP_TYPE
}

/// Schema accepting either timestamp representation.
pub fn timestamp_schema() -> Map<String, Value> {
    let rfc3339 = json!({
        "type": "string",
        "format": "date-time",
        "description": "RFC3339 timestamp string"
    });
    let seconds_nanos = json!({
        "type": "object",
        "properties": {
            "seconds": {
                "type": "integer",
                "description": "Seconds since Unix epoch"
            },
            "nanos": {
                "type": "integer",
                "minimum": 0,
                "maximum": MAX_NANOS,
                "description": "Nanoseconds within the second"
            }
        },
        "required": ["seconds"],
        "additionalProperties": false
    });

    let mut schema = Map::new();
    schema.insert("oneOf".into(), Value::Array(vec![rfc3339, seconds_nanos]));
    schema
}
