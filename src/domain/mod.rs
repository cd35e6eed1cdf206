//! Domain layer: entities and hierarchy logic
//!
//! This layer is independent of external concerns (no I/O, no persistence).
//! Everything operates on caller-supplied snapshots and returns explicit
//! results.

pub mod entities;
pub mod error;
pub mod guard;
pub mod snapshot;
pub mod validator;

pub use entities::{Category, CategoryId, Product};
pub use error::{DomainError, DomainResult};
pub use guard::can_delete;
pub use snapshot::{CategoryNode, CategorySnapshot};
pub use validator::{legal_parent_candidates, validate_assignment};
