//! Tree validator: keeps the category forest acyclic and well-formed.
//!
//! Both operations are pure functions over a caller-supplied snapshot; the
//! caller performs the actual persistence write after validation succeeds.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::CategoryId;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::snapshot::CategorySnapshot;

/// Determine which categories are legal parent choices for `target`.
///
/// Excluded are `target` itself (no self-parenting) and every descendant of
/// `target` (re-parenting under a descendant would close a cycle). The
/// currently assigned parent is re-added if the exclusion rules dropped it,
/// so the current selection stays visible in an editing UI; picking it again
/// is a no-op. The returned set is unordered, presentation ordering is the
/// caller's concern.
pub fn legal_parent_candidates(
    target: &CategoryId,
    snapshot: &CategorySnapshot,
) -> DomainResult<HashSet<CategoryId>> {
    let target_idx = snapshot
        .lookup(target)
        .ok_or_else(|| DomainError::NotFound(target.clone()))?;

    let mut candidates = HashSet::new();
    for (idx, node) in snapshot.iter() {
        if idx == target_idx {
            continue;
        }
        // A candidate whose parent chain reaches target is a descendant.
        if snapshot.is_ancestor(target_idx, idx)? {
            continue;
        }
        candidates.insert(node.category.id.clone());
    }

    // Current-selection carve-out: keep the assigned parent selectable even
    // when the rules above excluded it.
    let current_parent = snapshot
        .node(target_idx)
        .and_then(|n| n.category.parent_category.clone());
    if let Some(parent) = current_parent {
        if snapshot.contains(&parent) && !candidates.contains(&parent) {
            debug!(%target, %parent, "re-adding current parent to candidates");
            candidates.insert(parent);
        }
    }

    Ok(candidates)
}

/// Validate a prospective parent assignment before it is persisted.
///
/// `None` always validates: it detaches `target` to a root. A set parent
/// must exist, must not be `target` itself, and must not be one of
/// `target`'s descendants.
pub fn validate_assignment(
    target: &CategoryId,
    proposed_parent: Option<&CategoryId>,
    snapshot: &CategorySnapshot,
) -> DomainResult<()> {
    let target_idx = snapshot
        .lookup(target)
        .ok_or_else(|| DomainError::NotFound(target.clone()))?;

    let Some(parent) = proposed_parent else {
        return Ok(());
    };

    if parent == target {
        return Err(DomainError::SelfParent(target.clone()));
    }

    let parent_idx = snapshot
        .lookup(parent)
        .ok_or_else(|| DomainError::UnknownParent(parent.clone()))?;

    if snapshot.is_ancestor(target_idx, parent_idx)? {
        debug!(%target, %parent, "rejecting cyclic parent assignment");
        return Err(DomainError::CyclicAssignment {
            child: target.clone(),
            parent: parent.clone(),
        });
    }

    Ok(())
}
