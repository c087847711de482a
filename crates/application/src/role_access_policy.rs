use std::sync::Arc;

use grantline_domain::{BuiltinRole, PermissionId, PermissionRegistry, PermissionSet, RoleCatalog};
use tracing::debug;

/// Role-level access helpers over the role catalogue.
///
/// Role names are matched exactly, except that any casing of `SUPER_ADMIN`
/// is treated as holding every permission and every role.
#[derive(Debug, Clone)]
pub struct RoleAccessPolicy {
    registry: Arc<PermissionRegistry>,
    roles: Arc<RoleCatalog>,
}

impl RoleAccessPolicy {
    /// Creates a policy over a registry and a role catalogue built from it.
    #[must_use]
    pub fn new(registry: Arc<PermissionRegistry>, roles: Arc<RoleCatalog>) -> Self {
        Self { registry, roles }
    }

    /// Returns whether `role` conventionally holds `permission`.
    #[must_use]
    pub fn has_permission(&self, role: Option<&str>, permission: &PermissionId) -> bool {
        let Some(role) = present(role) else {
            return false;
        };

        is_super_admin(role) || self.roles.grants(role, permission)
    }

    /// Returns whether `role` holds every permission in `required`.
    #[must_use]
    pub fn check_permissions(&self, role: Option<&str>, required: &[PermissionId]) -> bool {
        let allowed = required
            .iter()
            .all(|permission| self.has_permission(role, permission));
        debug!(
            role = role.unwrap_or_default(),
            required = required.len(),
            allowed,
            "role permission check"
        );
        allowed
    }

    /// Returns the role's permissions; empty for a missing or unknown role.
    #[must_use]
    pub fn role_permissions(&self, role: Option<&str>) -> PermissionSet {
        match present(role) {
            None => PermissionSet::new(),
            Some(role) if is_super_admin(role) => self.registry.universe(),
            Some(role) => self.roles.permissions_for(role),
        }
    }

    /// Returns whether `role` is one of `allowed`.
    #[must_use]
    pub fn has_role(&self, role: Option<&str>, allowed: &[&str]) -> bool {
        present(role).is_some_and(|role| is_super_admin(role) || allowed.contains(&role))
    }
}

fn present(role: Option<&str>) -> Option<&str> {
    role.filter(|role| !role.trim().is_empty())
}

fn is_super_admin(role: &str) -> bool {
    role.eq_ignore_ascii_case(BuiltinRole::SuperAdmin.as_str())
}
