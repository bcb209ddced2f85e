//! Output writing

use std::path::Path;

use crate::error::GenerateError;

/// Write the rendered page to `path`, replacing any existing file
///
/// The document is written with a single call once rendering is complete.
/// Returns the number of bytes written.
pub fn write_output(path: &Path, html: &str) -> Result<usize, GenerateError> {
    std::fs::write(path, html).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", html.len(), path.display());
    Ok(html.len())
}
