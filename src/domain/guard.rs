//! Deletion guard: gates permanent category removal.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::CategoryId;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::snapshot::CategorySnapshot;

/// Decide whether `target` may be permanently removed.
///
/// The product-reference check runs before the child-category check: when
/// both conditions hold, the caller reports `HasReferencingProducts`. One
/// referencing product is as blocking as a thousand.
///
/// No remediation is performed here. Children are never cascaded or
/// re-parented; removal stays blocked until the caller restructures the
/// tree explicitly.
pub fn can_delete(
    target: &CategoryId,
    snapshot: &CategorySnapshot,
    product_refs: &HashSet<CategoryId>,
) -> DomainResult<()> {
    if product_refs.contains(target) {
        debug!(%target, "deletion blocked by referencing products");
        return Err(DomainError::HasReferencingProducts(target.clone()));
    }

    if snapshot.has_children(target) {
        debug!(%target, "deletion blocked by child categories");
        return Err(DomainError::HasChildCategories(target.clone()));
    }

    Ok(())
}
