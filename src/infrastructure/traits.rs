//! Persistence boundary traits for testability
//!
//! These traits abstract the storage backend, allowing services to be
//! tested with in-memory implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{Category, CategoryId, Product};
use crate::infrastructure::error::RepositoryResult;

/// Category persistence abstraction.
pub trait CategoryRepository: Send + Sync {
    /// Return a snapshot of all categories.
    fn find_all(&self) -> RepositoryResult<Vec<Category>>;

    /// Look up one category by id.
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;

    /// Insert or replace a category, returning the stored value.
    fn save(&self, category: Category) -> RepositoryResult<Category>;

    /// Remove a category. Removing an absent id is a no-op.
    fn delete(&self, id: &CategoryId) -> RepositoryResult<()>;
}

/// Product persistence abstraction (read-only for hierarchy purposes).
pub trait ProductRepository: Send + Sync {
    /// All products referencing the given category.
    fn find_by_category(&self, id: &CategoryId) -> RepositoryResult<Vec<Product>>;
}

// ============================================================
// IN-MEMORY IMPLEMENTATIONS
// ============================================================

/// In-memory category store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial set of categories.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let map = categories
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();
        Self {
            categories: Mutex::new(map),
        }
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        let categories = self.categories.lock().unwrap_or_else(|e| e.into_inner());
        Ok(categories.values().cloned().collect())
    }

    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        let categories = self.categories.lock().unwrap_or_else(|e| e.into_inner());
        Ok(categories.get(id).cloned())
    }

    fn save(&self, category: Category) -> RepositoryResult<Category> {
        let mut categories = self.categories.lock().unwrap_or_else(|e| e.into_inner());
        categories.insert(category.id.clone(), category.clone());
        Ok(category)
    }

    fn delete(&self, id: &CategoryId) -> RepositoryResult<()> {
        let mut categories = self.categories.lock().unwrap_or_else(|e| e.into_inner());
        categories.remove(id);
        Ok(())
    }
}

/// In-memory product store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial set of products.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        Self {
            products: Mutex::new(map),
        }
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_category(&self, id: &CategoryId) -> RepositoryResult<Vec<Product>> {
        let products = self.products.lock().unwrap_or_else(|e| e.into_inner());
        Ok(products
            .values()
            .filter(|p| p.category == *id)
            .cloned()
            .collect())
    }
}
