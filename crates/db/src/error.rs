use cubekit_core::error::CoreError;

/// Errors returned by the cube store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Validation or lookup failure in domain terms.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The storage engine itself failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
