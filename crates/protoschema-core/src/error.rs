//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared by the protoschema crates. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Schema synthesis itself never fails for a structurally valid
//!   descriptor. The only synthesis-time failure is rendering the result
//!   to text ([`SchemaError::Serialization`]).
//! - Suppressed generation is not an error in the engine. It becomes
//!   [`SchemaError::GenerationSuppressed`] only at entry points that must
//!   hand back a concrete document.
//! - Descriptor loading errors carry the path and the reason.

use thiserror::Error;

/// Error produced while synthesizing or rendering a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema value could not be rendered to JSON text.
    #[error("failed to marshal schema: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A concrete schema was demanded for a message whose generation is
    /// turned off by its annotations.
    #[error("schema generation is disabled for message '{message}'")]
    GenerationSuppressed {
        /// Fully-qualified name of the suppressed message.
        message: String,
    },

    /// A message lookup by name failed.
    #[error("message '{name}' not found in descriptor set")]
    MessageNotFound {
        /// The fully-qualified name that was looked up.
        name: String,
    },
}

/// Error while loading a descriptor set or generator options.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("load error for '{path}': {reason}")]
    Load {
        /// Path of the file that failed to load.
        path: String,
        /// Reason the file could not be loaded.
        reason: String,
    },

    /// The document was read but could not be parsed into the target type.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(format!("invalid YAML: {err}"))
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("invalid JSON: {err}"))
    }
}
