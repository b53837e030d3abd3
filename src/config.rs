//! Project settings (darkicon.yaml).
//!
//! Settings hold the default replacement colours and output options, so a
//! project can be converted repeatedly without repeating flags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DarkError, Result};
use crate::render::{OutputFormat, DEFAULT_PREVIEW_SIZE};

/// Settings file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "darkicon.yaml";

/// Replacement for near-white pixels unless configured otherwise.
pub const DEFAULT_WHITE: &str = "#1a1a1a";

/// Replacement for near-black pixels unless configured otherwise.
pub const DEFAULT_BLACK: &str = "#ffffff";

/// Settings loaded from darkicon.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colour token for the white band.
    #[serde(default = "default_white")]
    pub white: String,

    /// Colour token for the black band.
    #[serde(default = "default_black")]
    pub black: String,

    /// Longest side of preview thumbnails.
    #[serde(default = "default_preview_size")]
    pub preview_size: u32,

    /// Output format used when the output path has no extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

fn default_white() -> String {
    DEFAULT_WHITE.to_string()
}

fn default_black() -> String {
    DEFAULT_BLACK.to_string()
}

fn default_preview_size() -> u32 {
    DEFAULT_PREVIEW_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            white: default_white(),
            black: default_black(),
            preview_size: default_preview_size(),
            format: None,
        }
    }
}

impl Settings {
    /// Load settings from a darkicon.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DarkError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| DarkError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `dir/darkicon.yaml` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| DarkError::Parse {
            message: format!("Failed to serialise settings: {}", e),
            help: None,
        })
    }
}
