//! Configuration for HTML rendering

use serde::Deserialize;

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,

    /// Appended to the name in `<title>`
    pub title_suffix: String,

    /// Location shown for experience entries without one
    pub default_location: String,

    /// Scroll offset in pixels after which the navbar collapses
    pub scroll_threshold: u32,

    /// Whether to format output with indentation
    pub pretty_print: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title_suffix: " | Portfolio".to_string(),
            default_location: "Remote".to_string(),
            scroll_threshold: 100,
            pretty_print: true,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document language
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set the title suffix
    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.title_suffix = suffix.into();
        self
    }

    /// Set the placeholder location
    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    /// Set the navbar scroll threshold
    pub fn with_scroll_threshold(mut self, pixels: u32) -> Self {
        self.scroll_threshold = pixels;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
