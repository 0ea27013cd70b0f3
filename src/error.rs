//! Error types shared by the library and the binaries

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while inspecting the file system.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory could not be enumerated or an entry could not be stat'ed.
    #[error("cannot access '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A command-line value was rejected before any traversal started.
    #[error("malformed option: {0}")]
    MalformedOptions(String),

    /// The target path does not exist.
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),

    /// A file operand turned out to be a directory.
    #[error("'{}' is a directory", .0.display())]
    IsDirectory(PathBuf),

    /// Writing output failed.
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an I/O error with the path it concerns.
    pub fn access(path: &Path, source: io::Error) -> Self {
        Error::Access {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
