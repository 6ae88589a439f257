// Error types for the task store

use std::path::PathBuf;

/// Errors returned by [`TaskStore`](crate::TaskStore) operations.
///
/// Every operation either completes fully or returns one of these; the
/// backing file is only rewritten after the whole in-memory mutation
/// succeeds, so a failed operation leaves the store unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied description was empty or whitespace-only.
    #[error("description must not be empty")]
    EmptyDescription,

    /// A status filter did not name one of todo, in-progress, done.
    #[error("invalid status filter: {0}")]
    InvalidStatusFilter(String),

    /// No task with the given id exists in the store.
    #[error("task not found: {0}")]
    TaskNotFound(u64),

    /// The backing file could not be written.
    #[error("failed to write {path}: {source}")]
    Storage {
        /// Path of the backing file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::EmptyDescription.to_string(),
            "description must not be empty"
        );
        assert_eq!(
            Error::InvalidStatusFilter("bogus".to_string()).to_string(),
            "invalid status filter: bogus"
        );
        assert_eq!(Error::TaskNotFound(7).to_string(), "task not found: 7");
    }

    #[test]
    fn test_storage_error_display_includes_path() {
        let err = Error::Storage {
            path: PathBuf::from("/no/such/dir/tasks.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/no/such/dir/tasks.json"));
    }
}
