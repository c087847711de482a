use std::sync::Arc;

use grantline_application::{PermissionEngine, RoleAccessPolicy};
use grantline_core::AppError;
use grantline_domain::{PermissionRegistry, RoleCatalog};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub permission_engine: PermissionEngine,
    pub role_access_policy: RoleAccessPolicy,
}

impl AppState {
    /// Builds state over the built-in registry and role catalogue.
    ///
    /// Registry authoring mistakes abort startup.
    pub fn builtin() -> Result<Self, AppError> {
        let registry = Arc::new(PermissionRegistry::builtin()?);
        let roles = Arc::new(RoleCatalog::builtin(&registry)?);

        Ok(Self {
            permission_engine: PermissionEngine::new(registry.clone(), roles.clone()),
            role_access_policy: RoleAccessPolicy::new(registry, roles),
        })
    }
}
