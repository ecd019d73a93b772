//! Error types shared by the CLI and the desktop app.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Please choose a file.")]
    NoFileSelected,

    #[error("Selected file no longer exists: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    DateFormat(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No record id left after {0}")]
    IdExhausted(u64),
}

impl Error {
    /// Attach the path an IO operation was working on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for the guard failures of `add_item`: nothing was touched on disk.
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Error::NoFileSelected | Error::SourceNotFound(_))
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
