//! # protoschema-core — Descriptor Model
//!
//! Foundational types shared by the protoschema crates: the read-only view
//! of message and field descriptors the schema generator consumes, the
//! typed annotation accessors, an owned serde-loadable implementation of
//! both, and the error hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Descriptors are immutable inputs.** They are built upstream and only
//!    read here. Loading a [`DescriptorSet`] normalizes it once.
//!
//! 2. **Presence is explicit.** Every annotation getter returns `Option`.
//!    An absent `required` is not `false`, an absent `minimum` is not `0`.
//!
//! 3. **Traits at the seam.** The generator is written against
//!    [`MessageDescriptor`], [`FieldDescriptor`], [`MessageAnnotations`] and
//!    [`FieldAnnotations`], so other descriptor sources can plug in.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `protoschema-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod annotations;
pub mod descriptor;
pub mod error;
pub mod set;

// Re-export primary types for ergonomic imports.
pub use annotations::{FieldAnnotations, FieldOptions, MessageAnnotations, MessageOptions};
pub use descriptor::{
    json_name_for, Cardinality, EnumDef, EnumValueDef, FieldDef, FieldDescriptor, FieldKind,
    MessageDef, MessageDescriptor,
};
pub use error::{LoadError, SchemaError};
pub use set::DescriptorSet;
