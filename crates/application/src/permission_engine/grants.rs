use tracing::debug;

use super::*;

impl PermissionEngine {
    /// Checks whether `permission` may be added to `current`.
    ///
    /// An admin set equal to the full registry universe short-circuits to
    /// `true`. Otherwise every dependency must already be held and no declared
    /// conflict may be held. Unregistered permissions are never grantable.
    #[must_use]
    pub fn can_grant_permission(
        &self,
        permission: &PermissionId,
        current: &PermissionSet,
        admin_permissions: Option<&PermissionSet>,
    ) -> bool {
        if admin_permissions.is_some_and(|admin| self.holds_full_universe(admin)) {
            debug!(%permission, "grant allowed by full admin permission set");
            return true;
        }

        let Some(metadata) = self.registry.lookup(permission) else {
            debug!(%permission, "grant refused for unregistered permission");
            return false;
        };

        let dependencies_met = self.missing_from(&metadata.dependencies, current).is_empty();
        let conflict_held = metadata
            .conflicts
            .iter()
            .any(|conflict| current.contains(conflict));

        dependencies_met && !conflict_held
    }

    fn holds_full_universe(&self, permissions: &PermissionSet) -> bool {
        permissions.len() == self.registry.len()
            && self
                .registry
                .all()
                .all(|permission| permissions.contains(permission))
    }
}
