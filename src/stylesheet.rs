//! Stylesheet loading
//!
//! The stylesheet is trusted build-time input. Its text is embedded verbatim
//! into the page's `<style>` block. A missing file is not fatal: the page is
//! still generated, just unstyled, and the caller decides how to warn.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a stylesheet that exists
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Raw CSS text to inject into the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// File the CSS was read from, if any
    pub path: Option<PathBuf>,
    /// CSS source text
    pub css: String,
}

impl Stylesheet {
    /// Wrap CSS text that did not come from a file
    pub fn from_css(css: impl Into<String>) -> Self {
        Self {
            path: None,
            css: css.into(),
        }
    }

    /// Load stylesheet from a CSS file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let css = std::fs::read_to_string(path).map_err(|source| StylesheetError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            css,
        })
    }

    /// Load the stylesheet, substituting an empty one if the file is absent
    ///
    /// Returns the stylesheet and whether it was missing. Other read failures
    /// are still errors.
    pub fn load_or_empty(path: &Path) -> Result<(Self, bool), StylesheetError> {
        match Self::from_file(path) {
            Ok(sheet) => {
                log::debug!("loaded stylesheet {} ({} bytes)", path.display(), sheet.css.len());
                Ok((sheet, false))
            }
            Err(StylesheetError::IoError { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::debug!("stylesheet {} not found, using an empty one", path.display());
                Ok((Self::default(), true))
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }
}
