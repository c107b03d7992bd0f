//! Loading the module source text.

use std::fs;
use std::path::Path;

use crate::error::{IoResultExt, SigextractError, SigextractResult};

/// Checks that an input path was given and names a regular file.
pub fn locate_source(path: Option<&Path>) -> SigextractResult<&Path> {
    let path = path.ok_or(SigextractError::MissingArgument)?;
    if !path.is_file() {
        return Err(SigextractError::not_found(path));
    }
    Ok(path)
}

/// Reads the module file into a string.
///
/// Fails with `MissingArgument` when no path is given, `FileNotFound` when the
/// path is not a regular file, and `Read` for unreadable or non-UTF-8 content.
pub fn read_source(path: Option<&Path>) -> SigextractResult<String> {
    let path = locate_source(path)?;
    let text = fs::read_to_string(path).with_path(path)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "module file read");
    Ok(text)
}
