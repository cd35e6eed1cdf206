//! Domain entities: core data structures

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical category identifier.
///
/// All ancestry comparisons go through this single representation; the
/// hierarchy logic never compares anything but resolved ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Generate a fresh unique id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A catalog category with an optional parent link.
///
/// Categories form a forest: the parent relation, followed child to root,
/// must stay acyclic. `properties` is opaque auxiliary data; the hierarchy
/// logic never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Non-empty display name
    pub name: String,
    /// Parent category id, None for root categories
    pub parent_category: Option<CategoryId>,
    /// Opaque auxiliary data, passed through unchanged
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Category {
    /// Create a root category with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent_category: None,
            properties: BTreeMap::new(),
        }
    }

    /// Create a child category with a fresh id.
    pub fn with_parent(name: impl Into<String>, parent: CategoryId) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent_category: Some(parent),
            properties: BTreeMap::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_category.is_none()
    }
}

/// A catalog product referencing its category.
///
/// Read-only from the hierarchy's point of view: a category with at least
/// one referencing product cannot be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: CategoryId,
}
