//! # protoschema-gen — JSON Schema Synthesis
//!
//! Converts protobuf-style message descriptors into JSON Schema documents
//! for validating JSON-encoded messages at runtime.
//!
//! ## Pipeline
//!
//! - [`types`] maps a field kind to its JSON Schema primitive type.
//! - [`resolve`] applies annotation precedence (names, titles, flags).
//! - [`field`] builds one field's sub-schema: type, enum values, array
//!   wrapping, annotations, and the [`wellknown`] timestamp `oneOf`.
//! - [`generator`] assembles a message schema in declaration order.
//! - [`ordered`] renders the ordered form to byte-stable JSON text.
//!
//! ## Usage
//!
//! ```
//! use protoschema_core::{FieldDef, FieldKind, FieldOptions, MessageDef};
//! use protoschema_gen::Generator;
//!
//! let message = MessageDef::new("Signup").with_field(
//!     FieldDef::new("email", FieldKind::String).with_options(FieldOptions {
//!         required: Some(true),
//!         ..Default::default()
//!     }),
//! );
//!
//! let schema = Generator::new()
//!     .generate_ordered_schema(&message)
//!     .expect("generation is enabled");
//! assert_eq!(
//!     schema.to_json_string().unwrap(),
//!     r#"{"type":"object","title":"Signup","properties":{"email":{"type":"string"}},"required":["email"]}"#
//! );
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `protoschema-core` internally.
//! - Synthesis never fails; only rendering to text returns an error.
//! - Nested message fields are not expanded (`{"type": "object"}`), except
//!   for `google.protobuf.Timestamp`.

pub mod cache;
pub mod field;
pub mod generator;
pub mod options;
pub mod ordered;
pub mod resolve;
pub mod schema;
pub mod types;
pub mod wellknown;

pub use cache::SchemaCache;
pub use field::build_field_schema;
pub use generator::{generate_from_message, generate_json_from_message, Generator, JsonSchemaMessage};
pub use options::{GeneratorOptions, OutputMode};
pub use ordered::{OrderedProperty, OrderedSchema};
pub use schema::Schema;
pub use types::{map_primitive, JsonType, TypeMapping};
