//! catree: category hierarchy integrity for catalog admin backends.
//!
//! Maintains a forest of categories, each with an optional parent, and keeps
//! it structurally sound:
//!
//! - the **tree validator** decides which parent assignments are legal
//!   (no self-parenting, no cycles, no dangling parents) and filters the
//!   candidate parents offered on an edit form;
//! - the **deletion guard** blocks removal of a category that still has
//!   child categories or referencing products — deletion is gated, never
//!   cascaded.
//!
//! The domain logic is pure and operates on caller-supplied snapshots; the
//! application layer wires it to a persistence boundary.
//!
//! ```
//! use std::collections::HashSet;
//! use catree::domain::{
//!     legal_parent_candidates, validate_assignment, Category, CategorySnapshot, DomainError,
//! };
//!
//! let root = Category::new("Root");
//! let shoes = Category::with_parent("Shoes", root.id.clone());
//! let sneakers = Category::with_parent("Sneakers", shoes.id.clone());
//!
//! let snapshot = CategorySnapshot::from_categories([
//!     root.clone(),
//!     shoes.clone(),
//!     sneakers.clone(),
//! ]);
//!
//! // Shoes may only move under Root: itself and its descendant are excluded.
//! let candidates = legal_parent_candidates(&shoes.id, &snapshot).unwrap();
//! assert_eq!(candidates, HashSet::from([root.id.clone()]));
//!
//! // Re-parenting Shoes under Sneakers would close a cycle.
//! let err = validate_assignment(&shoes.id, Some(&sneakers.id), &snapshot).unwrap_err();
//! assert!(matches!(err, DomainError::CyclicAssignment { .. }));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, CategoryService};
pub use domain::{
    can_delete, legal_parent_candidates, validate_assignment, Category, CategoryId,
    CategorySnapshot, DomainError, DomainResult, Product,
};
