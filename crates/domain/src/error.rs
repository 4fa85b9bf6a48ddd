//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MachineHubError`] via `From`. Adapters box their source errors into
//! [`MachineHubError::Storage`] so the domain never depends on a driver.

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum MachineHubError {
    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The write collides with an existing record.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// No record of kind `entity` matches `id`.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A record of kind `entity` with the same `id` already exists.
#[derive(Debug, thiserror::Error)]
#[error("{entity} already exists: {id}")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}
