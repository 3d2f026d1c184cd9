//! # Generator Options
//!
//! Rendering choices for [`crate::Generator::render`]. Options are passed per
//! call; the generator holds no configuration of its own.
//!
//! ```yaml
//! mode: unordered
//! pretty: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use protoschema_core::LoadError;

/// Which schema form to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain JSON object; key order unspecified.
    Unordered,
    /// Declaration-ordered, byte-stable output.
    #[default]
    Ordered,
}

/// Rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    pub mode: OutputMode,
    /// Indent unordered output. Ordered output is always compact.
    pub pretty: bool,
}

impl GeneratorOptions {
    pub fn ordered() -> Self {
        Self {
            mode: OutputMode::Ordered,
            pretty: false,
        }
    }

    pub fn unordered(pretty: bool) -> Self {
        Self {
            mode: OutputMode::Unordered,
            pretty,
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load options from a YAML (`.yaml`/`.yml`) or JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Load {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

        match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Ok(serde_json::from_str(&content)?),
        }
    }
}
