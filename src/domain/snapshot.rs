//! Arena-based category snapshot used for hierarchy decisions.

use std::collections::{HashMap, HashSet};

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{Category, CategoryId};
use crate::domain::error::{DomainError, DomainResult};

/// A category resolved into the snapshot arena.
#[derive(Debug)]
pub struct CategoryNode {
    /// The category as supplied by the caller
    pub category: Category,
    /// Index of the parent node, None for roots and dangling parent ids
    pub parent: Option<Index>,
    /// Indices of child nodes
    pub children: Vec<Index>,
}

/// Immutable snapshot of the full category set for one validation decision.
///
/// Built once from a caller-supplied collection; all ancestry walks run over
/// arena indices, so a walk costs O(1) per hop instead of one repository
/// lookup per hop. A parent id that references no category in the snapshot
/// stays unresolved and terminates the walk there.
#[derive(Debug, Default)]
pub struct CategorySnapshot {
    /// Arena storage for all category nodes
    arena: Arena<CategoryNode>,
    /// Canonical id to arena index
    by_id: HashMap<CategoryId, Index>,
}

impl CategorySnapshot {
    /// Build a snapshot from a collection of categories.
    ///
    /// Duplicate ids keep the last occurrence. Parent links are resolved to
    /// arena indices in a second pass; child lists are derived at the same
    /// time.
    #[instrument(level = "debug", skip(categories))]
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut arena = Arena::new();
        let mut by_id = HashMap::new();

        for category in categories {
            let id = category.id.clone();
            let idx = arena.insert(CategoryNode {
                category,
                parent: None,
                children: Vec::new(),
            });
            if let Some(previous) = by_id.insert(id, idx) {
                arena.remove(previous);
            }
        }

        // Wire parent/child indices now that every node exists.
        let indices: Vec<Index> = by_id.values().copied().collect();
        for idx in indices {
            let parent_idx = arena
                .get(idx)
                .and_then(|node| node.category.parent_category.as_ref())
                .and_then(|pid| by_id.get(pid).copied())
                // A node must not become its own parent even in corrupt input.
                .filter(|&pidx| pidx != idx);

            if let Some(pidx) = parent_idx {
                if let Some(node) = arena.get_mut(idx) {
                    node.parent = Some(pidx);
                }
                if let Some(parent) = arena.get_mut(pidx) {
                    parent.children.push(idx);
                }
            }
        }

        Self { arena, by_id }
    }

    /// Resolve an id to its arena index.
    pub fn lookup(&self, id: &CategoryId) -> Option<Index> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn node(&self, idx: Index) -> Option<&CategoryNode> {
        self.arena.get(idx)
    }

    /// Look up a category by id.
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.lookup(id).and_then(|idx| self.node(idx)).map(|n| &n.category)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterate over all nodes in the snapshot, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Index, &CategoryNode)> {
        self.arena.iter()
    }

    /// Whether any category in the snapshot has `id` as its parent.
    #[instrument(level = "trace", skip(self))]
    pub fn has_children(&self, id: &CategoryId) -> bool {
        self.lookup(id)
            .and_then(|idx| self.node(idx))
            .map(|node| !node.children.is_empty())
            .unwrap_or(false)
    }

    /// Walk `node`'s parent chain and report whether it reaches `ancestor`.
    ///
    /// The walk tracks visited indices: revisiting one means the stored data
    /// already contains a cycle, which is reported as `CorruptHierarchy`
    /// instead of looping forever.
    #[instrument(level = "trace", skip(self))]
    pub fn is_ancestor(&self, ancestor: Index, node: Index) -> DomainResult<bool> {
        let mut visited: HashSet<Index> = HashSet::new();
        let mut current = node;

        loop {
            if !visited.insert(current) {
                let id = self
                    .node(current)
                    .map(|n| n.category.id.clone())
                    .unwrap_or_default();
                return Err(DomainError::CorruptHierarchy(id));
            }

            match self.node(current).and_then(|n| n.parent) {
                Some(parent) if parent == ancestor => return Ok(true),
                Some(parent) => current = parent,
                None => return Ok(false),
            }
        }
    }
}
