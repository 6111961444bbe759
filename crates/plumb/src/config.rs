//! Configuration types for Plumb.
//!
//! Configuration is loaded from TOML files and controls the spacing
//! parameters of the layout engine. All types implement
//! [`serde::Deserialize`] and every field carries a default, so a partial
//! file (or no file at all) still yields a usable configuration.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::PlumbError,
    layout::single_column::{DEFAULT_LEFT_PADDING, DEFAULT_VERTICAL_SPACING},
};

/// Application configuration loaded from a TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`PlumbError::Io`] when the file cannot be read and
    /// [`PlumbError::Config`] when its content is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlumbError> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the layout configuration section
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Layout configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Padding between the left edge of a container and its components
    #[serde(default = "default_left_padding")]
    left_padding: i32,

    /// Vertical spacing between neighbouring components
    #[serde(default = "default_vertical_spacing")]
    vertical_spacing: i32,
}

impl LayoutConfig {
    /// Create a layout configuration with explicit spacing values.
    pub fn new(left_padding: i32, vertical_spacing: i32) -> Self {
        Self {
            left_padding,
            vertical_spacing,
        }
    }

    /// Get the left padding
    pub fn left_padding(&self) -> i32 {
        self.left_padding
    }

    /// Get the vertical spacing
    pub fn vertical_spacing(&self) -> i32 {
        self.vertical_spacing
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_padding: DEFAULT_LEFT_PADDING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
        }
    }
}

fn default_left_padding() -> i32 {
    DEFAULT_LEFT_PADDING
}

fn default_vertical_spacing() -> i32 {
    DEFAULT_VERTICAL_SPACING
}
