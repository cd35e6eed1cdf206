//! Category administration service
//!
//! Orchestrates the hierarchy logic against the persistence boundary:
//! snapshots are taken per call, the domain decides, the service commits.
//! Concurrent edits race at the snapshot level; an admin backend accepts
//! that instead of providing transactional isolation.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::error::ApplicationResult;
use crate::domain::{
    can_delete, legal_parent_candidates, validate_assignment, Category, CategoryId,
    CategorySnapshot, DomainError,
};
use crate::infrastructure::{CategoryRepository, ProductRepository};

/// Data for a category overview page.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    /// All categories, sorted by display name
    pub categories: Vec<Category>,
    /// Id to display name, for rendering parent references
    pub names_by_id: HashMap<CategoryId, String>,
}

/// Data for a category edit form.
#[derive(Debug, Clone)]
pub struct EditForm {
    /// The category being edited
    pub category: Category,
    /// Legal parent choices, sorted by display name
    pub parent_candidates: Vec<Category>,
    /// Currently assigned parent id, None for roots
    pub parent_id: Option<CategoryId>,
    /// Id to display name, for rendering parent references
    pub names_by_id: HashMap<CategoryId, String>,
}

/// Caller-supplied fields for creating a category.
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: String,
    pub parent_category: Option<CategoryId>,
    pub properties: BTreeMap<String, String>,
}

/// Caller-supplied fields for updating a category in place.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: String,
    pub parent_category: Option<CategoryId>,
    pub properties: BTreeMap<String, String>,
}

/// Service for category administration use cases.
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// All categories plus the id-to-name map the overview page renders with.
    #[instrument(level = "debug", skip(self))]
    pub fn list(&self) -> ApplicationResult<CategoryListing> {
        let all = self.categories.find_all()?;
        let names_by_id = names_by_id(&all);
        let categories = all
            .into_iter()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();
        Ok(CategoryListing {
            categories,
            names_by_id,
        })
    }

    /// Assemble the edit form for one category: the category itself and its
    /// legal parent choices.
    #[instrument(level = "debug", skip(self))]
    pub fn edit_form(&self, id: &CategoryId) -> ApplicationResult<EditForm> {
        let all = self.categories.find_all()?;
        let names_by_id = names_by_id(&all);
        let snapshot = CategorySnapshot::from_categories(all);

        let candidate_ids = legal_parent_candidates(id, &snapshot)?;
        debug!(%id, candidates = candidate_ids.len(), "assembled parent candidates");

        let parent_candidates = candidate_ids
            .iter()
            .filter_map(|cid| snapshot.get(cid).cloned())
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();

        let category = snapshot
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(id.clone()))?;
        let parent_id = category.parent_category.clone();

        Ok(EditForm {
            category,
            parent_candidates,
            parent_id,
            names_by_id,
        })
    }

    /// Create a category with a fresh id.
    ///
    /// The name must be non-empty and a set parent must already exist. A new
    /// node has no descendants, so no cycle check is needed here.
    #[instrument(level = "debug", skip(self, new))]
    pub fn create(&self, new: NewCategory) -> ApplicationResult<Category> {
        if new.name.trim().is_empty() {
            return Err(DomainError::EmptyName.into());
        }

        if let Some(parent) = &new.parent_category {
            if self.categories.find_by_id(parent)?.is_none() {
                return Err(DomainError::UnknownParent(parent.clone()).into());
            }
        }

        let category = Category {
            id: CategoryId::new(),
            name: new.name,
            parent_category: new.parent_category,
            properties: new.properties,
        };
        debug!(id = %category.id, "creating category");
        Ok(self.categories.save(category)?)
    }

    /// Update name, parent and properties of an existing category.
    ///
    /// The parent assignment is validated against a fresh snapshot before
    /// anything is written.
    #[instrument(level = "debug", skip(self, update))]
    pub fn update(&self, id: &CategoryId, update: CategoryUpdate) -> ApplicationResult<Category> {
        if update.name.trim().is_empty() {
            return Err(DomainError::EmptyName.into());
        }

        let mut category = self
            .categories
            .find_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(id.clone()))?;

        let snapshot = CategorySnapshot::from_categories(self.categories.find_all()?);
        validate_assignment(id, update.parent_category.as_ref(), &snapshot)?;

        category.name = update.name;
        category.parent_category = update.parent_category;
        category.properties = update.properties;
        debug!(%id, "updating category");
        Ok(self.categories.save(category)?)
    }

    /// Permanently remove a category if the deletion guard allows it.
    ///
    /// Blocked while any product references the category or any child
    /// category points at it; nothing is cascaded or re-parented.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&self, id: &CategoryId) -> ApplicationResult<()> {
        if self.categories.find_by_id(id)?.is_none() {
            return Err(DomainError::NotFound(id.clone()).into());
        }

        let product_refs: HashSet<CategoryId> = self
            .products
            .find_by_category(id)?
            .into_iter()
            .map(|p| p.category)
            .collect();

        let snapshot = CategorySnapshot::from_categories(self.categories.find_all()?);
        can_delete(id, &snapshot, &product_refs)?;

        debug!(%id, "deleting category");
        self.categories.delete(id)?;
        Ok(())
    }
}

fn names_by_id(categories: &[Category]) -> HashMap<CategoryId, String> {
    categories
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect()
}
