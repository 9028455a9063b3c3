use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArborError {
    #[error("Path '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("Destination path '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArborError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArborError::Io {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ArborError::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied)
    }
}

pub type Result<T> = std::result::Result<T, ArborError>;
