//! # Descriptor Sets — Loading Message Definitions
//!
//! A [`DescriptorSet`] is a package name plus an ordered list of
//! [`MessageDef`]s, loaded from YAML or JSON. Loading normalizes the
//! definitions once so every message has a fully-qualified name and every
//! field without an explicit `json_name` gets the protobuf lowerCamelCase
//! name. After loading the set is treated as immutable.
//!
//! ```yaml
//! package: acme.v1
//! messages:
//!   - name: UserRequest
//!     options: { title: User Request }
//!     fields:
//!       - { name: email, kind: string, options: { required: true } }
//!       - { name: tags, kind: string, cardinality: repeated }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::{json_name_for, MessageDef, MessageDescriptor};
use crate::error::{LoadError, SchemaError};

/// An ordered collection of message definitions sharing one package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default)]
    pub messages: Vec<MessageDef>,
}

impl DescriptorSet {
    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        let set: Self = serde_yaml::from_str(content)?;
        Ok(set.normalized())
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let set: Self = serde_json::from_str(content)?;
        Ok(set.normalized())
    }

    /// Load a descriptor set from a file.
    ///
    /// `.yaml`/`.yml` files are parsed as YAML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Load`] if the file cannot be read and
    /// [`LoadError::Parse`] if it is not a valid descriptor document.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Load {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    /// Look up a message by fully-qualified name.
    pub fn find(&self, full_name: &str) -> Option<&MessageDef> {
        self.messages
            .iter()
            .find(|m| m.full_name() == full_name)
    }

    /// Look up a message that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MessageNotFound`] if no message has that
    /// fully-qualified name.
    pub fn get(&self, full_name: &str) -> Result<&MessageDef, SchemaError> {
        self.find(full_name).ok_or_else(|| SchemaError::MessageNotFound {
            name: full_name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn normalized(mut self) -> Self {
        for message in &mut self.messages {
            if message.full_name.is_none() {
                message.full_name = Some(match &self.package {
                    Some(pkg) if !pkg.is_empty() => format!("{pkg}.{}", message.name),
                    _ => message.name.clone(),
                });
            }
            for field in &mut message.fields {
                if field.json_name.is_none() {
                    field.json_name = Some(json_name_for(&field.name));
                }
            }
        }
        self
    }
}
