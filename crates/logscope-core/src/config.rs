//! Engine configuration.
//!
//! Per Iron Lotus Framework: Configuration is validated at load time (Poka-Yoke),
//! with sensible defaults and clear error messages.

use serde::{Deserialize, Serialize};

use crate::descriptor::INDIRECTION_MARKER;
use crate::error::{InspectError, Result};

/// Traversal engine configuration.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of nested nodes on one path before descent is cut off.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Marker prepended to the type names of values held through pointers.
    #[serde(default = "default_indirection_marker")]
    pub indirection_marker: String,

    /// Pretty-print the JSON body.
    #[serde(default)]
    pub pretty_json: bool,

    /// Emit a `warn` event for every diagnostic after each inspection.
    #[serde(default = "default_true")]
    pub log_diagnostics: bool,
}

fn default_max_depth() -> usize {
    64
}

fn default_indirection_marker() -> String {
    INDIRECTION_MARKER.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            indirection_marker: default_indirection_marker(),
            pretty_json: false,
            log_diagnostics: default_true(),
        }
    }
}

impl EngineConfig {
    /// Sets the depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the indirection marker.
    #[must_use]
    pub fn with_indirection_marker(mut self, marker: impl Into<String>) -> Self {
        self.indirection_marker = marker.into();
        self
    }

    /// Enables or disables pretty-printed JSON bodies.
    #[must_use]
    pub const fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(InspectError::config("max_depth must be greater than 0"));
        }
        if self.indirection_marker.is_empty() {
            return Err(InspectError::config("indirection_marker cannot be empty"));
        }
        if self.indirection_marker.chars().any(char::is_whitespace) {
            return Err(InspectError::config(
                "indirection_marker cannot contain whitespace",
            ));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns an error if the document cannot be parsed or is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| InspectError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| InspectError::serialization(e.to_string()))
    }
}
