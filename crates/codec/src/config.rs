//! Codec configuration via `tabyaml.toml`
//!
//! Both knobs a [`CodecFactory`](crate::CodecFactory) exposes can be read from
//! a TOML file instead of being set through the builder.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tabyaml_core::ValueKind;

use crate::error::ConfigError;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "tabyaml.toml";

/// Codec configuration loaded from `tabyaml.toml`.
///
/// # Example
///
/// ```toml
/// # Write null fields as `key: null` instead of omitting them
/// include_nulls = true
///
/// # Scalar codecs to install
/// scalars = ["string", "int", "bytes"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodecConfig {
    /// Write null fields explicitly (default: false).
    #[serde(default)]
    pub include_nulls: bool,
    /// Installed scalar codecs (default: all).
    #[serde(default = "default_scalars")]
    pub scalars: Vec<ValueKind>,
}

fn default_scalars() -> Vec<ValueKind> {
    ValueKind::ALL.to_vec()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            include_nulls: false,
            scalars: default_scalars(),
        }
    }
}

impl CodecConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# tabyaml codec configuration
#
# Write null fields as `key: null` instead of omitting the key (default: false).
# Either form reads back as null.
include_nulls = false

# Scalar codecs to install: "bool", "int", "float", "string", "bytes".
# A value whose kind has no codec cannot be exported; on import such scalars
# are read as strings.
scalars = ["bool", "int", "float", "string", "bytes"]
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize this config to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
