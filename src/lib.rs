//! Portfolio Gen - a static portfolio page generator
//!
//! This library loads a profile record (JSON) and a stylesheet (CSS) and
//! renders them into a single self-contained HTML page.
//!
//! # Example
//!
//! ```rust
//! use portfolio_gen::{render, ProfileRecord};
//!
//! let profile = ProfileRecord::from_json(r#"{
//!     "name": "Ada Lovelace",
//!     "about": "Analyst of engines.",
//!     "contact": { "email": "ada@example.com" },
//!     "experiences": [],
//!     "other": []
//! }"#).unwrap();
//!
//! let html = render(&profile, "body { margin: 0; }");
//! assert!(html.contains("<title>Ada Lovelace | Portfolio</title>"));
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod profile;
pub mod renderer;
pub mod stylesheet;
pub mod writer;

pub use config::{ConfigError, GeneratorConfig};
pub use date::format_date;
pub use error::GenerateError;
pub use profile::{load_profile, Contact, Entry, ProfileRecord};
pub use renderer::{render_html, HtmlConfig};
pub use stylesheet::{Stylesheet, StylesheetError};
pub use writer::write_output;

use std::path::PathBuf;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Where the page was written
    pub output_path: PathBuf,
    /// Size of the written page in bytes
    pub bytes: usize,
    /// The stylesheet was absent and the page is unstyled
    pub stylesheet_missing: bool,
}

/// Render a profile with the given CSS and default HTML options
pub fn render(profile: &ProfileRecord, css: &str) -> String {
    render_html(profile, &Stylesheet::from_css(css), &HtmlConfig::default())
}

/// Run the whole pipeline: load data, load stylesheet, render, write
///
/// Nothing is written unless every earlier step succeeded.
pub fn generate(config: &GeneratorConfig) -> Result<Generated, GenerateError> {
    let profile = load_profile(&config.data_path)?;
    let (stylesheet, stylesheet_missing) = Stylesheet::load_or_empty(&config.stylesheet_path)?;

    let html = render_html(&profile, &stylesheet, &config.html);
    let bytes = write_output(&config.output_path, &html)?;

    Ok(Generated {
        output_path: config.output_path.clone(),
        bytes,
        stylesheet_missing,
    })
}
