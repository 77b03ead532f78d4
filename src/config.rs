use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Error;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Presentational settings for the assembled document.
///
/// Only the stylesheet is configurable. The conversion rules are fixed.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub headings: HeadingsConfig,
    pub links: LinksConfig,
    pub lists: ListsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub font_family: String,
    pub max_width: String,
    pub line_height: String,
    pub text_color: String,
    pub background: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            font_family:
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif"
                    .to_string(),
            max_width: "800px".to_string(),
            line_height: "1.6".to_string(),
            text_color: "#333333".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeadingsConfig {
    pub color: String,
    /// Border drawn under `h1` and `h2`.
    pub underline_color: String,
}

impl Default for HeadingsConfig {
    fn default() -> Self {
        Self {
            color: "#222222".to_string(),
            underline_color: "#eaecef".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub color: String,
    pub hover_color: String,
    pub underline: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            color: "#0366d6".to_string(),
            hover_color: "#024ea2".to_string(),
            underline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListsConfig {
    /// Vertical gap between list items.
    pub item_spacing: String,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            item_spacing: "0.25em".to_string(),
        }
    }
}

impl Config {
    /// The settings compiled in from `default_config.toml`.
    pub fn compiled_default() -> Self {
        // build.rs rejects a malformed file, so this only falls back if a
        // field type drifts out of sync with the struct.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
