//! Presenter configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Icon names for each row element.
///
/// Names are opaque to this crate; the defaults are Material icon names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    pub group: String,
    pub leaf: String,
    /// Expander shown on an expanded group.
    pub expanded: String,
    /// Expander shown on a collapsed group.
    pub collapsed: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            group: "corporate-fare".into(),
            leaf: "person".into(),
            expanded: "keyboard-arrow-down".into(),
            collapsed: "keyboard-arrow-right".into(),
        }
    }
}

/// Configuration for the row presenter.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Horizontal indent per tree level, in pixels.
    pub indent_px: u32,
    pub icons: IconSet,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            indent_px: 20,
            icons: IconSet::default(),
        }
    }
}

impl PickerConfig {
    /// Parse a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded picker config from {}", path.display());
        Ok(config)
    }
}
