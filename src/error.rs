use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    // Traversal
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid source: {}", .0.display())]
    InvalidSource(PathBuf),

    #[error("IO error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output
    #[error("failed to write manifest")]
    Output(#[source] std::io::Error),

    // Third-party sources
    #[error("source error: {0}")]
    Source(String),
}

impl ViewError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::InvalidSource(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Classify an I/O error raised while reading `path`.
    pub(crate) fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            std::io::ErrorKind::NotFound         => Self::NotFound(path),
            _                                    => Self::Io { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_are_classified_by_kind() {
        let denied = ViewError::from_io(
            PathBuf::from("a"),
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(denied, ViewError::PermissionDenied(_)));

        let gone = ViewError::from_io(
            PathBuf::from("b"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(gone, ViewError::NotFound(_)));

        let other = ViewError::from_io(PathBuf::from("c"), io::Error::other("boom"));
        assert!(matches!(other, ViewError::Io { .. }));
        assert_eq!(other.path(), Some(&PathBuf::from("c")));
    }

    #[test]
    fn output_errors_carry_no_path() {
        let err = ViewError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.path().is_none());
    }
}
