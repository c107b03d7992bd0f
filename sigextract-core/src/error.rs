//! Typed error handling for sigextract.
//!
//! Every fatal condition of the extraction pipeline has its own variant so the
//! CLI can print a distinct message and stop without leaving output files.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sigextract operations.
#[derive(Error, Debug)]
pub enum SigextractError {
    /// No input file was given
    #[error("No input file was specified")]
    MissingArgument,

    /// The input path does not name an existing file
    #[error("No such file: {path}")]
    FileNotFound { path: PathBuf },

    /// The input file exists but could not be read (permissions, encoding)
    #[error("Failed to read {path}: {message}")]
    Read {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// An output file could not be written
    #[error("Failed to write {path}: {message}")]
    Write {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl SigextractError {
    /// Create a read error with path context.
    pub fn read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a write error with path context.
    pub fn write(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a file-not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileNotFound { path } => Some(path),
            Self::Read { path, .. } => Some(path),
            Self::Write { path, .. } => Some(path),
            Self::MissingArgument => None,
        }
    }
}

/// Convenience type alias for sigextract results.
pub type SigextractResult<T> = Result<T, SigextractError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to a read error.
    fn with_path(self, path: impl Into<PathBuf>) -> SigextractResult<T>;

    /// Add path context to a write error.
    fn with_output_path(self, path: impl Into<PathBuf>) -> SigextractResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> SigextractResult<T> {
        self.map_err(|e| SigextractError::read(path, e))
    }

    fn with_output_path(self, path: impl Into<PathBuf>) -> SigextractResult<T> {
        self.map_err(|e| SigextractError::write(path, e))
    }
}
