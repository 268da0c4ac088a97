use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while rewriting the docs index
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File is not valid UTF-8: {}", path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    /// Classify an IO error raised while touching `path`
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source: err },
            io::ErrorKind::InvalidData => Self::InvalidEncoding { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Path the failing operation was working on
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path, .. }
            | Self::InvalidEncoding { path }
            | Self::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for rewrite operations
pub type Result<T> = std::result::Result<T, RewriteError>;
