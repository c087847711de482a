use tracing::debug;

use super::*;

/// Partition of two permission sets into added, removed, and unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionDiff {
    /// Present in the target but not in the current set.
    pub added: Vec<PermissionId>,
    /// Present in the current set but not in the target.
    pub removed: Vec<PermissionId>,
    /// Present in both sets.
    pub unchanged: Vec<PermissionId>,
    /// Size of the target set.
    pub total: usize,
}

impl PermissionEngine {
    /// Computes what changes when moving from `current` to `target`.
    ///
    /// Each list is in registry declaration order, with unregistered
    /// identifiers last.
    #[must_use]
    pub fn calculate_diff(
        &self,
        current: &PermissionSet,
        target: &PermissionSet,
    ) -> PermissionDiff {
        let added = self.declared_order(
            target
                .iter()
                .filter(|permission| !current.contains(permission)),
        );
        let removed = self.declared_order(
            current
                .iter()
                .filter(|permission| !target.contains(permission)),
        );
        let unchanged = self.declared_order(
            current
                .iter()
                .filter(|permission| target.contains(permission)),
        );

        debug!(
            added = added.len(),
            removed = removed.len(),
            unchanged = unchanged.len(),
            "permission diff calculated"
        );

        PermissionDiff {
            added,
            removed,
            unchanged,
            total: target.len(),
        }
    }
}
