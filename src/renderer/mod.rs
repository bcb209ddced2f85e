//! HTML renderer for portfolio pages
//!
//! This module takes a ProfileRecord and a Stylesheet and produces the
//! complete page as a string. Nothing here touches the filesystem.

pub mod config;
pub mod escape;
pub mod html;

pub use config::HtmlConfig;
pub use html::{render_html, HtmlBuilder};
