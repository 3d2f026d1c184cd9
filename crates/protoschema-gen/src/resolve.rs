//! # Annotation Resolution
//!
//! Turns the raw annotation accessors into the decisions the assembler
//! makes, with fixed precedence:
//!
//! - **Field name:** rename annotation, then the descriptor json name if
//!   non-empty, then the declared name.
//! - **Title:** title annotation, then the declared message name.
//! - **Generation:** a message is skipped only when `generate_schema` is
//!   explicitly `false`.
//! - **Required / hidden:** only an explicit `true` counts. Cardinality and
//!   kind never imply either.
//!
//! Optional annotations that cannot be represented degrade silently: a
//! malformed default literal or a non-finite bound is simply left out.

use protoschema_core::{FieldAnnotations, FieldDescriptor, MessageAnnotations, MessageDescriptor};
use serde_json::{Number, Value};

/// Whether a schema is generated for the message.
pub fn should_generate<A: MessageAnnotations + ?Sized>(annotations: &A) -> bool {
    annotations.generate_schema().unwrap_or(true)
}

/// Schema title for a message.
pub fn schema_title<M: MessageDescriptor>(message: &M) -> &str {
    message
        .annotations()
        .title()
        .unwrap_or_else(|| message.name())
}

/// Message description, if present and non-empty.
pub fn message_description<A: MessageAnnotations + ?Sized>(annotations: &A) -> Option<&str> {
    annotations.description().filter(|d| !d.is_empty())
}

/// External property name for a field.
pub fn field_name<F: FieldDescriptor>(field: &F) -> &str {
    if let Some(renamed) = field.annotations().json_name() {
        return renamed;
    }
    let json_name = field.json_name();
    if json_name.is_empty() {
        field.name()
    } else {
        json_name
    }
}

pub fn is_hidden<A: FieldAnnotations + ?Sized>(annotations: &A) -> bool {
    annotations.hidden().unwrap_or(false)
}

pub fn is_required<A: FieldAnnotations + ?Sized>(annotations: &A) -> bool {
    annotations.required().unwrap_or(false)
}

/// Parse a default-value annotation as a JSON literal.
pub fn default_value(literal: &str) -> Option<Value> {
    serde_json::from_str(literal).ok()
}

/// Render a numeric bound. Integral values become JSON integers so that
/// `minimum: 18` renders as `18`, not `18.0`.
///
/// Integral values outside the `i64`/`u64` range have no integer JSON
/// number and render in float form (`1e20`).
pub fn bound_value(bound: f64) -> Option<Value> {
    // 2^63 and 2^64, both exact in f64.
    const I64_END: f64 = 9_223_372_036_854_775_808.0;
    const U64_END: f64 = 18_446_744_073_709_551_616.0;

    if !bound.is_finite() {
        return None;
    }
    if bound.fract() == 0.0 {
        if (-I64_END..I64_END).contains(&bound) {
            return Some(Value::from(bound as i64));
        }
        if (0.0..U64_END).contains(&bound) {
            return Some(Value::from(bound as u64));
        }
    }
    Number::from_f64(bound).map(Value::Number)
}
