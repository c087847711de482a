use std::sync::Arc;

use grantline_domain::{PermissionId, PermissionRegistry, PermissionSet, RoleCatalog};
use tracing::info;

mod catalogue;
mod diff;
mod grants;
mod risk;
mod suggestions;
mod validation;

#[cfg(test)]
mod tests;

pub use diff::PermissionDiff;
pub use suggestions::{
    DEPENDENCIES_SATISFIED_CONFIDENCE, MAX_SUGGESTIONS, PermissionSuggestion,
    ROLE_CONVENTION_CONFIDENCE, SuggestionAction, UserContext,
};
pub use validation::{IssueSeverity, ValidationIssue, ValidationIssueKind, ValidationResult};

/// Application service evaluating permission sets against the registry.
///
/// Every operation is synchronous and free of side effects; the registry and
/// role catalogue are shared read-only between clones.
#[derive(Debug, Clone)]
pub struct PermissionEngine {
    registry: Arc<PermissionRegistry>,
    roles: Arc<RoleCatalog>,
}

impl PermissionEngine {
    /// Creates an engine over a registry and a role catalogue built from it.
    #[must_use]
    pub fn new(registry: Arc<PermissionRegistry>, roles: Arc<RoleCatalog>) -> Self {
        info!(
            permissions = registry.len(),
            roles = roles.role_names().count(),
            "permission engine initialised"
        );

        Self { registry, roles }
    }

    /// Returns the registry backing this engine.
    #[must_use]
    pub fn registry(&self) -> &PermissionRegistry {
        self.registry.as_ref()
    }

    /// Returns the role catalogue backing this engine.
    #[must_use]
    pub fn roles(&self) -> &RoleCatalog {
        self.roles.as_ref()
    }

    fn declared_order<'a, I>(&self, permissions: I) -> Vec<PermissionId>
    where
        I: IntoIterator<Item = &'a PermissionId>,
    {
        self.registry.in_declaration_order(permissions)
    }

    fn labels(&self, permissions: &[PermissionId]) -> String {
        permissions
            .iter()
            .map(|permission| {
                self.registry
                    .lookup(permission)
                    .map_or(permission.as_str(), |metadata| metadata.label.as_str())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn missing_from(&self, required: &[PermissionId], held: &PermissionSet) -> Vec<PermissionId> {
        required
            .iter()
            .filter(|permission| !held.contains(permission))
            .cloned()
            .collect()
    }
}
