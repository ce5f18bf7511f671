//! Reading the list of root paths.

use crate::error::PathdumpError;
use std::fs;
use std::path::Path;

/// Reads the configuration file and returns its non-blank lines, trimmed, in
/// file order.
///
/// The caller is expected to have checked that the file exists.
///
/// # Errors
///
/// Returns [`PathdumpError::Io`] if the file cannot be read or is not valid UTF-8.
pub fn load_root_paths(path: &Path) -> Result<Vec<String>, PathdumpError> {
    let text = fs::read_to_string(path).map_err(|e| PathdumpError::io(path, e))?;
    let roots = parse_root_paths(&text);
    tracing::debug!("Loaded {} root path(s) from {}", roots.len(), path.display());
    Ok(roots)
}

/// Splits configuration text into trimmed, non-empty lines.
pub fn parse_root_paths(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
