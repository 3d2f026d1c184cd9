//! # Annotations — Typed Option Accessors
//!
//! Messages and fields carry a sparse set of schema annotations drawn from a
//! fixed vocabulary. Each key is independently present or absent, and
//! absence is always `None`: a missing `required` is not the same as
//! `required: false`, and a missing `minimum` is not `0`.
//!
//! The accessor traits are the only way the generator reads annotations, so
//! any descriptor facility (owned definitions, reflection over compiled
//! descriptors, ...) can plug in by implementing one getter per key.
//! [`MessageOptions`] and [`FieldOptions`] are the owned implementations
//! used by [`crate::descriptor`].

use serde::{Deserialize, Serialize};

/// Message-level annotation accessors.
pub trait MessageAnnotations {
    /// Explicit schema title.
    fn title(&self) -> Option<&str>;
    /// Message description.
    fn description(&self) -> Option<&str>;
    /// Whether a schema is generated for the message. `Some(false)` turns
    /// generation off; absence means "generate".
    fn generate_schema(&self) -> Option<bool>;
}

/// Field-level annotation accessors.
pub trait FieldAnnotations {
    /// Field description.
    fn description(&self) -> Option<&str>;
    /// Example value, emitted verbatim as a string.
    fn example(&self) -> Option<&str>;
    /// JSON Schema `format` override.
    fn format(&self) -> Option<&str>;
    /// Default value as a JSON literal, e.g. `"42"` or `"\"pending\""`.
    fn default_literal(&self) -> Option<&str>;
    /// `minLength` bound.
    fn min_length(&self) -> Option<i32>;
    /// `maxLength` bound.
    fn max_length(&self) -> Option<i32>;
    /// `minimum` bound.
    fn minimum(&self) -> Option<f64>;
    /// `maximum` bound.
    fn maximum(&self) -> Option<f64>;
    /// `pattern` regular expression.
    fn pattern(&self) -> Option<&str>;
    /// Required flag.
    fn required(&self) -> Option<bool>;
    /// Hidden flag.
    fn hidden(&self) -> Option<bool>;
    /// Explicit external name, overriding the descriptor's json name.
    fn json_name(&self) -> Option<&str>;
}

/// Owned message annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageOptions {
    /// See [`MessageAnnotations::title`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// See [`MessageAnnotations::description`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// See [`MessageAnnotations::generate_schema`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_schema: Option<bool>,
}

impl MessageAnnotations for MessageOptions {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn generate_schema(&self) -> Option<bool> {
        self.generate_schema
    }
}

/// Owned field annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// JSON literal; see [`FieldAnnotations::default_literal`].
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_literal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Rename; see [`FieldAnnotations::json_name`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,
}

impl FieldAnnotations for FieldOptions {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    fn default_literal(&self) -> Option<&str> {
        self.default_literal.as_deref()
    }

    fn min_length(&self) -> Option<i32> {
        self.min_length
    }

    fn max_length(&self) -> Option<i32> {
        self.max_length
    }

    fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    fn required(&self) -> Option<bool> {
        self.required
    }

    fn hidden(&self) -> Option<bool> {
        self.hidden
    }

    fn json_name(&self) -> Option<&str> {
        self.json_name.as_deref()
    }
}
