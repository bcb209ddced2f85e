//! Generator configuration
//!
//! Paths default to the conventional locations relative to the working
//! directory. A `portfolio.toml` file can override them, and the CLI can
//! override both.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::HtmlConfig;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

/// Errors that can occur when loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where to read inputs and write the page, and how to render it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Profile record (JSON)
    pub data_path: PathBuf,
    /// Stylesheet injected into the page; optional on disk
    pub stylesheet_path: PathBuf,
    /// Generated HTML document
    pub output_path: PathBuf,
    /// HTML rendering options
    pub html: HtmlConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("cv.json"),
            stylesheet_path: PathBuf::from("css").join("styles.css"),
            output_path: PathBuf::from("index.html"),
            html: HtmlConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load config from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from `explicit`, else `portfolio.toml` if it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            log::debug!("using config file {}", default_path.display());
            return Self::from_file(default_path);
        }

        Ok(Self::default())
    }

    /// Set the profile data path
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the stylesheet path
    pub fn with_stylesheet_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet_path = path.into();
        self
    }

    /// Set the output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the HTML rendering options
    pub fn with_html(mut self, html: HtmlConfig) -> Self {
        self.html = html;
        self
    }

    /// Resolve every path against `root`
    ///
    /// Absolute paths are left alone.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.data_path = root.join(&self.data_path);
        self.stylesheet_path = root.join(&self.stylesheet_path);
        self.output_path = root.join(&self.output_path);
        self
    }
}
