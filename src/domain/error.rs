//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::CategoryId;

/// Domain errors represent hierarchy invariant violations.
/// These are independent of persistence concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    #[error("category name cannot be empty")]
    EmptyName,

    #[error("category cannot be its own parent: {0}")]
    SelfParent(CategoryId),

    #[error("parent assignment would create a cycle: {child} -> {parent}")]
    CyclicAssignment {
        child: CategoryId,
        parent: CategoryId,
    },

    #[error("parent category does not exist: {0}")]
    UnknownParent(CategoryId),

    #[error("cycle detected in stored hierarchy at: {0}")]
    CorruptHierarchy(CategoryId),

    #[error("cannot delete category associated with products: {0}")]
    HasReferencingProducts(CategoryId),

    #[error("cannot delete category with existing child categories: {0}")]
    HasChildCategories(CategoryId),
}

/// Result type for domain layer operations.
pub type DomainResult<T> = Result<T, DomainError>;
