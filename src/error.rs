//! Error types for the generator pipeline

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::config::ConfigError;
use crate::stylesheet::StylesheetError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that stop a generator run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The profile data file does not exist
    #[error("{} not found", path.display())]
    MissingInput { path: PathBuf },

    /// The profile data file exists but could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile data is not valid JSON or lacks a required key
    #[error("malformed data in '{}': {source}", path.display())]
    MalformedData {
        path: PathBuf,
        text: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field is present but unusable
    #[error("invalid field '{field}' in '{}': {reason}", path.display())]
    InvalidField {
        path: PathBuf,
        field: String,
        reason: String,
    },

    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),

    /// The output file could not be written
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GenerateError {
    /// Format the error for the terminal
    ///
    /// Malformed data is shown with source context using ariadne; everything
    /// else falls back to the display message.
    pub fn format(&self) -> String {
        match self {
            GenerateError::MalformedData { path, text, source } => {
                let filename = path.display().to_string();
                let span = json_error_span(text, source.line(), source.column());
                let mut buf = Vec::new();

                let written = Report::build(ReportKind::Error, filename.as_str(), span.start)
                    .with_message(format!("malformed data in {}", filename))
                    .with_label(
                        Label::new((filename.as_str(), span))
                            .with_message(source.to_string())
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename.as_str(), Source::from(text.as_str())), &mut buf);

                match written {
                    Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
                    Err(_) => self.to_string(),
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Convert serde_json's 1-based line/column into a byte span
///
/// Line 0 means the parser did not know the position; the span then points at
/// the start of the text.
fn json_error_span(text: &str, line: usize, column: usize) -> Span {
    if line == 0 {
        return 0..0;
    }
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let mut start = (line_start + column.saturating_sub(1)).min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let end = text[start..]
        .chars()
        .next()
        .map(|c| start + c.len_utf8())
        .unwrap_or(start);
    start..end
}
