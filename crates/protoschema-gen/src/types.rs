//! # Type Mapping
//!
//! Maps a protobuf field kind to its JSON Schema primitive type and, for
//! byte sequences, a `format`.
//!
//! | Kind | `type` | `format` |
//! |------|--------|----------|
//! | bool | `boolean` | |
//! | (s/u)int32/64, (s)fixed32/64 | `integer` | |
//! | float, double | `number` | |
//! | string | `string` | |
//! | bytes | `string` | `byte` |
//! | enum | `string` | |
//! | message | `object` | |
//! | group, unknown | unset | |
//!
//! An unset type means "unconstrained". It is never an error.

use protoschema_core::FieldKind;

/// JSON Schema primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Boolean,
    Integer,
    Number,
    String,
    Object,
    Array,
}

impl JsonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of mapping one field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// `None` for kinds with no JSON Schema counterpart.
    pub json_type: Option<JsonType>,
    pub format: Option<&'static str>,
}

impl TypeMapping {
    const fn of(json_type: JsonType) -> Self {
        Self {
            json_type: Some(json_type),
            format: None,
        }
    }

    const UNSET: Self = Self {
        json_type: None,
        format: None,
    };
}

/// Map a field kind to its JSON Schema type and optional format.
pub fn map_primitive(kind: FieldKind) -> TypeMapping {
    match kind {
        FieldKind::Bool => TypeMapping::of(JsonType::Boolean),
        FieldKind::Int32
        | FieldKind::Sint32
        | FieldKind::Sfixed32
        | FieldKind::Int64
        | FieldKind::Sint64
        | FieldKind::Sfixed64
        | FieldKind::Uint32
        | FieldKind::Fixed32
        | FieldKind::Uint64
        | FieldKind::Fixed64 => TypeMapping::of(JsonType::Integer),
        FieldKind::Float | FieldKind::Double => TypeMapping::of(JsonType::Number),
        FieldKind::String | FieldKind::Enum => TypeMapping::of(JsonType::String),
        FieldKind::Bytes => TypeMapping {
            json_type: Some(JsonType::String),
            format: Some("byte"),
        },
        FieldKind::Message => TypeMapping::of(JsonType::Object),
        FieldKind::Group | FieldKind::Unknown => TypeMapping::UNSET,
    }
}
