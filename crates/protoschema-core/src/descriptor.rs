//! # Descriptor Model — Messages, Fields, Enums
//!
//! The generator reads message structure through the [`MessageDescriptor`]
//! and [`FieldDescriptor`] traits. Descriptors are produced upstream (an IDL
//! compiler, a hand-written YAML file, a reflection layer) and are immutable
//! once built; nothing in this workspace mutates a descriptor after
//! construction.
//!
//! [`MessageDef`], [`FieldDef`] and [`EnumDef`] are the owned, serde-loadable
//! implementation. They are what [`crate::DescriptorSet`] deserializes into.

use serde::{Deserialize, Serialize};

use crate::annotations::{FieldAnnotations, FieldOptions, MessageAnnotations, MessageOptions};

/// Protobuf field kinds.
///
/// `Group` and `Unknown` have no JSON Schema mapping; the generator leaves
/// the schema type unset for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Bool,
    Int32,
    Sint32,
    Sfixed32,
    Int64,
    Sint64,
    Sfixed64,
    Uint32,
    Fixed32,
    Uint64,
    Fixed64,
    Float,
    Double,
    String,
    Bytes,
    Enum,
    Message,
    /// Legacy proto2 group.
    Group,
    /// Any kind name this model does not recognize.
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    /// Returns every kind, in declaration order.
    pub fn all_kinds() -> &'static [FieldKind] {
        &[
            Self::Bool,
            Self::Int32,
            Self::Sint32,
            Self::Sfixed32,
            Self::Int64,
            Self::Sint64,
            Self::Sfixed64,
            Self::Uint32,
            Self::Fixed32,
            Self::Uint64,
            Self::Fixed64,
            Self::Float,
            Self::Double,
            Self::String,
            Self::Bytes,
            Self::Enum,
            Self::Message,
            Self::Group,
            Self::Unknown,
        ]
    }
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    #[default]
    Singular,
    Repeated,
}

/// Read access to a field descriptor.
pub trait FieldDescriptor {
    /// Annotation accessor type for this field.
    type Annotations: FieldAnnotations;

    /// Declared field name, e.g. `user_name`.
    fn name(&self) -> &str;

    /// Descriptor-computed external name, e.g. `userName`. May be empty.
    fn json_name(&self) -> &str;

    fn kind(&self) -> FieldKind;

    fn cardinality(&self) -> Cardinality;

    /// Enum value names in declaration order. Empty unless the kind is
    /// [`FieldKind::Enum`].
    fn enum_value_names(&self) -> Vec<&str>;

    /// Fully-qualified name of the composite type for message fields.
    fn message_type(&self) -> Option<&str>;

    fn annotations(&self) -> &Self::Annotations;
}

/// Read access to a message descriptor.
pub trait MessageDescriptor {
    type Field: FieldDescriptor;
    type Annotations: MessageAnnotations;

    /// Declared message name, e.g. `UserRequest`.
    fn name(&self) -> &str;

    /// Fully-qualified name, e.g. `acme.v1.UserRequest`.
    fn full_name(&self) -> &str;

    /// Fields in declaration order.
    fn fields(&self) -> &[Self::Field];

    fn annotations(&self) -> &Self::Annotations;
}

/// A single declared enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueDef {
    pub name: String,
    #[serde(default)]
    pub number: i32,
}

/// An enum type referenced by a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValueDef>,
}

impl EnumDef {
    /// Build an enum whose values are numbered by position.
    pub fn new(name: impl Into<String>, values: &[&str]) -> Self {
        let values = values
            .iter()
            .zip(0..)
            .map(|(value, number)| EnumValueDef {
                name: (*value).to_string(),
                number,
            })
            .collect();
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Owned field descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    /// External name. [`crate::DescriptorSet`] fills this in with the
    /// protobuf lowerCamelCase name when a document omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,
    pub kind: FieldKind,
    #[serde(default)]
    pub cardinality: Cardinality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<EnumDef>,
    /// Fully-qualified composite type name for message fields. A leading
    /// `.` (as emitted by protoc) is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub options: FieldOptions,
}

impl FieldDef {
    /// Singular field with the protobuf-computed json name and no annotations.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            json_name: Some(json_name_for(&name)),
            name,
            kind,
            cardinality: Cardinality::Singular,
            enum_type: None,
            type_name: None,
            options: FieldOptions::default(),
        }
    }

    /// Message-typed field referring to `type_name`.
    pub fn message(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let mut field = Self::new(name, FieldKind::Message);
        field.type_name = Some(type_name.into());
        field
    }

    /// Enum-typed field.
    pub fn enumeration(name: impl Into<String>, enum_type: EnumDef) -> Self {
        let mut field = Self::new(name, FieldKind::Enum);
        field.enum_type = Some(enum_type);
        field
    }

    pub fn repeated(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self
    }

    pub fn with_json_name(mut self, json_name: Option<&str>) -> Self {
        self.json_name = json_name.map(str::to_string);
        self
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }
}

impl FieldDescriptor for FieldDef {
    type Annotations = FieldOptions;

    fn name(&self) -> &str {
        &self.name
    }

    fn json_name(&self) -> &str {
        self.json_name.as_deref().unwrap_or("")
    }

    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    fn enum_value_names(&self) -> Vec<&str> {
        self.enum_type
            .as_ref()
            .map(|e| e.values.iter().map(|v| v.name.as_str()).collect())
            .unwrap_or_default()
    }

    fn message_type(&self) -> Option<&str> {
        self.type_name.as_deref().map(|t| t.trim_start_matches('.'))
    }

    fn annotations(&self) -> &FieldOptions {
        &self.options
    }
}

/// Owned message descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDef {
    pub name: String,
    /// Package-qualified name. Falls back to `name` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub options: MessageOptions,
}

impl MessageDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
            fields: Vec::new(),
            options: MessageOptions::default(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_options(mut self, options: MessageOptions) -> Self {
        self.options = options;
        self
    }
}

impl MessageDescriptor for MessageDef {
    type Field = FieldDef;
    type Annotations = MessageOptions;

    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }

    fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    fn annotations(&self) -> &MessageOptions {
        &self.options
    }
}

/// Compute the protobuf JSON name of a declared field name.
///
/// Underscores are dropped and the following ASCII letter is upper-cased,
/// matching protoc: `user_name` → `userName`, `tags` → `tags`.
pub fn json_name_for(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
