//! Infrastructure layer: persistence boundaries
//!
//! Boundary traits plus in-memory implementations used by services and
//! tests. A real backend (SQL, document store) would implement the same
//! traits.

pub mod error;
pub mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use traits::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryProductRepository, ProductRepository,
};
