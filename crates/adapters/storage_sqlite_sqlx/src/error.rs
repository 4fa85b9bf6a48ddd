//! Storage-specific error type wrapping sqlx errors.

use machinehub_domain::error::MachineHubError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Whether the database rejected a write because of a unique or
    /// primary-key constraint.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(err)) => err.is_unique_violation(),
            Self::Database(_) => false,
        }
    }
}

impl From<StorageError> for MachineHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
