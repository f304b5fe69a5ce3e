//! Editor configuration file.

use manglr_core::{ReleaseFraming, Variant};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Settings for one editor window.
///
/// # TOML Format
///
/// ```toml
/// variant = "without-gain"
/// release_framing = "all-parameters"
/// scale = 1.5
/// title = "WSTD MANGLR"
///
/// [window]
/// width = 640.0
/// height = 180.0
/// ```
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Panel layout.
    pub variant: Variant,

    /// Which parameters are closed when a gesture ends.
    pub release_framing: ReleaseFraming,

    /// Initial window size.
    pub window: WindowConfig,

    /// UI zoom factor.
    pub scale: f32,

    /// Window and title bar caption.
    pub title: String,
}

/// Window geometry in logical pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Inner width.
    pub width: f32,
    /// Inner height.
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 180.0,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            release_framing: ReleaseFraming::default(),
            window: WindowConfig::default(),
            scale: 1.0,
            title: "WSTD MANGLR".to_owned(),
        }
    }
}

impl EditorConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject settings the window cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::invalid_value(
                "scale",
                format!("must be a positive number, got {}", self.scale),
            ));
        }
        for (field, value) in [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
        ] {
            if !(value.is_finite() && value >= 1.0) {
                return Err(ConfigError::invalid_value(
                    field,
                    format!("must be at least 1 pixel, got {value}"),
                ));
            }
        }
        Ok(())
    }
}
