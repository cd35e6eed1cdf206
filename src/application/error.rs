//! Application-level errors (wraps domain and persistence errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::RepositoryError;

/// Application errors wrap domain errors and pass persistence errors
/// through unchanged.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Persistence(#[from] RepositoryError),
}

impl ApplicationError {
    /// The underlying domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Persistence(_) => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
