//! Persistence-level errors

use thiserror::Error;

use crate::domain::entities::CategoryId;

/// Errors surfaced by a persistence backend.
///
/// These pass through the application layer unchanged; the hierarchy logic
/// never reinterprets or retries them.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("storage backend failure: {context}")]
    Backend {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("conflicting write for category: {0}")]
    Conflict(CategoryId),
}

impl RepositoryError {
    /// Create a backend error with context.
    pub fn backend(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// Result type for persistence operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
