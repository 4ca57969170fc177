//! Error types for directory listing
//!
//! Every failure aborts the listing. Nothing is written to the output once
//! one of these has been raised.

use std::ffi::OsString;
use std::path::PathBuf;

/// Errors that can occur while listing a directory or emitting the result
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// Path does not exist
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Path exists but is not a directory
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Process lacks rights to stat or read the directory
    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open the directory for any other reason
    #[error("Failed to read directory {}: {}", path.display(), source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read an entry while iterating the directory
    #[error("Failed to read entry in {}: {}", path.display(), source)]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Entry name cannot be represented as a JSON string
    #[error("Entry name is not valid UTF-8 in {}: {}", dir.display(), name.to_string_lossy())]
    InvalidName { dir: PathBuf, name: OsString },

    /// Failed to encode the entry list
    #[error("Failed to encode entries: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to write the encoded list
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl ListingError {
    /// Map an I/O error raised while opening `path`.
    ///
    /// `NotFound` and `PermissionDenied` get their own variants; everything
    /// else is reported as a generic read failure.
    pub(crate) fn from_open(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => ListingError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ListingError::PermissionDenied { path, source },
            _ => ListingError::ReadDir { path, source },
        }
    }

    /// True when the path does not exist or is not a directory
    pub fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            ListingError::NotFound { .. } | ListingError::NotADirectory { .. }
        )
    }

    /// True when the directory could not be read due to missing rights
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ListingError::PermissionDenied { .. })
    }

    /// True when a name or the list itself could not be encoded
    pub fn is_serialization(&self) -> bool {
        matches!(
            self,
            ListingError::InvalidName { .. } | ListingError::Serialization(_)
        )
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_from_open_not_found() {
        let err = ListingError::from_open(PathBuf::from("/missing"), Error::from(ErrorKind::NotFound));
        assert!(err.is_invalid_path());
        assert_eq!(err.to_string(), "Path not found: /missing");
    }

    #[test]
    fn test_from_open_permission_denied() {
        let err = ListingError::from_open(
            PathBuf::from("/locked"),
            Error::from(ErrorKind::PermissionDenied),
        );
        assert!(err.is_permission_denied());
        assert!(!err.is_invalid_path());
        assert_eq!(err.to_string(), "Permission denied: /locked");
    }

    #[test]
    fn test_from_open_other_kind_is_read_failure() {
        let err = ListingError::from_open(
            PathBuf::from("/busy"),
            Error::new(ErrorKind::Other, "device busy"),
        );
        assert!(matches!(err, ListingError::ReadDir { .. }));
        assert_eq!(err.to_string(), "Failed to read directory /busy: device busy");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = ListingError::from_open(
            PathBuf::from("/locked"),
            Error::from(ErrorKind::PermissionDenied),
        );
        assert!(err.source().is_some());

        let err = ListingError::NotADirectory {
            path: PathBuf::from("/etc/hosts"),
        };
        assert!(err.source().is_none());
        assert!(err.is_invalid_path());
    }

    #[test]
    fn test_invalid_name_is_serialization_class() {
        let err = ListingError::InvalidName {
            dir: PathBuf::from("/plugins"),
            name: OsString::from("plugin"),
        };
        assert!(err.is_serialization());
        assert_eq!(
            err.to_string(),
            "Entry name is not valid UTF-8 in /plugins: plugin"
        );
    }
}
