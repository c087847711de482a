use std::collections::BTreeMap;
use std::str::FromStr;

use grantline_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{Permission, PermissionId, PermissionRegistry, PermissionSet, RegistryError};

/// Roles the product ships conventional permission sets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuiltinRole {
    /// Client portal user.
    Client,
    /// Staff member working assigned requests and tasks.
    TeamMember,
    /// Staff member coordinating a team.
    TeamLead,
    /// Tenant administrator.
    Admin,
    /// Platform operator.
    SuperAdmin,
}

impl BuiltinRole {
    /// Returns the stable role name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::TeamMember => "TEAM_MEMBER",
            Self::TeamLead => "TEAM_LEAD",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Returns all built-in roles from least to most privileged.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[BuiltinRole] = &[
            BuiltinRole::Client,
            BuiltinRole::TeamMember,
            BuiltinRole::TeamLead,
            BuiltinRole::Admin,
            BuiltinRole::SuperAdmin,
        ];

        ALL
    }

    fn grant(self) -> RoleGrant {
        match self {
            Self::Client => RoleGrant::Permissions(
                [
                    Permission::ServiceRequestsCreate,
                    Permission::ServiceRequestsReadOwn,
                    Permission::TasksReadAssigned,
                ]
                .into_iter()
                .collect(),
            ),
            Self::TeamMember => RoleGrant::Permissions(
                [
                    Permission::ServiceRequestsReadAll,
                    Permission::ServiceRequestsUpdate,
                    Permission::TasksCreate,
                    Permission::TasksReadAssigned,
                    Permission::TasksUpdate,
                    Permission::TeamView,
                    Permission::AnalyticsView,
                    Permission::ServicesView,
                    Permission::ServicesAnalytics,
                    Permission::ServicesExport,
                    Permission::BookingSettingsView,
                    Permission::OrgSettingsView,
                ]
                .into_iter()
                .collect(),
            ),
            Self::TeamLead => RoleGrant::Permissions(
                [
                    Permission::ServiceRequestsReadAll,
                    Permission::ServiceRequestsUpdate,
                    Permission::ServiceRequestsAssign,
                    Permission::TasksCreate,
                    Permission::TasksReadAll,
                    Permission::TasksUpdate,
                    Permission::TasksAssign,
                    Permission::TeamView,
                    Permission::TeamManage,
                    Permission::AnalyticsView,
                    Permission::AnalyticsExport,
                    Permission::ServicesView,
                    Permission::ServicesAnalytics,
                    Permission::ServicesExport,
                    // No import or reset of booking settings for leads.
                    Permission::BookingSettingsView,
                    Permission::BookingSettingsEdit,
                    Permission::BookingSettingsExport,
                    Permission::OrgSettingsView,
                    Permission::OrgSettingsEdit,
                    Permission::OrgSettingsExport,
                    Permission::FinancialSettingsView,
                    Permission::IntegrationHubView,
                    Permission::IntegrationHubTest,
                ]
                .into_iter()
                .collect(),
            ),
            Self::Admin | Self::SuperAdmin => RoleGrant::AllPermissions,
        }
    }
}

impl FromStr for BuiltinRole {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown role '{value}'")))
    }
}

/// Permission set conventionally granted to a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleGrant {
    /// An explicit list of permissions.
    Permissions(PermissionSet),
    /// Every permission in the registry.
    AllPermissions,
}

/// Static mapping from role name to its conventional permission set.
///
/// This is a ranking signal for suggestions, not an enforcement boundary.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: BTreeMap<String, PermissionSet>,
}

impl RoleCatalog {
    /// Resolves role grants against a registry.
    ///
    /// Fails when a role name repeats or a role names a permission the
    /// registry does not declare.
    pub fn new<I, R>(registry: &PermissionRegistry, grants: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (R, RoleGrant)>,
        R: Into<String>,
    {
        let mut roles = BTreeMap::new();
        for (role, grant) in grants {
            let role = role.into();
            let permissions = match grant {
                RoleGrant::AllPermissions => registry.universe(),
                RoleGrant::Permissions(permissions) => {
                    if let Some(unknown) = permissions
                        .iter()
                        .find(|permission| !registry.contains(permission))
                    {
                        return Err(RegistryError::UnknownRolePermission {
                            role,
                            permission: unknown.clone(),
                        });
                    }
                    permissions
                }
            };
            if roles.contains_key(&role) {
                return Err(RegistryError::DuplicateRole(role));
            }
            roles.insert(role, permissions);
        }

        Ok(Self { roles })
    }

    /// Builds the catalogue of built-in roles.
    pub fn builtin(registry: &PermissionRegistry) -> Result<Self, RegistryError> {
        Self::new(
            registry,
            BuiltinRole::all()
                .iter()
                .map(|role| (role.as_str(), role.grant())),
        )
    }

    /// Returns the role's conventional permissions; empty for unknown roles.
    #[must_use]
    pub fn permissions_for(&self, role: &str) -> PermissionSet {
        self.roles.get(role).cloned().unwrap_or_default()
    }

    /// Returns the role's conventional permissions if the role is catalogued.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<&PermissionSet> {
        self.roles.get(role)
    }

    /// Returns whether the role is catalogued.
    #[must_use]
    pub fn contains_role(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Iterates catalogued role names.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Returns whether the role's entry contains the permission.
    #[must_use]
    pub fn grants(&self, role: &str, permission: &PermissionId) -> bool {
        self.roles
            .get(role)
            .is_some_and(|permissions| permissions.contains(permission))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{
        Permission, PermissionCategory, PermissionId, PermissionMetadata, PermissionRegistry,
        PermissionSet, RegistryError, RiskLevel,
    };

    use super::{BuiltinRole, RoleCatalog, RoleGrant};

    fn builtin() -> (PermissionRegistry, RoleCatalog) {
        let Ok(registry) = PermissionRegistry::builtin() else {
            panic!("builtin registry must build");
        };
        let Ok(catalog) = RoleCatalog::builtin(&registry) else {
            panic!("builtin role catalog must build");
        };
        (registry, catalog)
    }

    #[test]
    fn admin_roles_resolve_to_full_universe() {
        let (registry, catalog) = builtin();

        assert_eq!(catalog.permissions_for("ADMIN"), registry.universe());
        assert_eq!(catalog.permissions_for("SUPER_ADMIN"), registry.universe());
    }

    #[test]
    fn unknown_role_resolves_to_empty_set() {
        let (_, catalog) = builtin();

        assert!(catalog.permissions_for("UNKNOWN_ROLE").is_empty());
        assert!(!catalog.contains_role("UNKNOWN_ROLE"));
    }

    #[test]
    fn role_names_are_case_sensitive() {
        let (_, catalog) = builtin();
        assert!(catalog.permissions_for("admin").is_empty());
    }

    #[test]
    fn role_hierarchy_is_monotonic_in_size() {
        let (_, catalog) = builtin();

        let sizes: Vec<usize> = BuiltinRole::all()
            .iter()
            .map(|role| catalog.permissions_for(role.as_str()).len())
            .collect();
        assert!(sizes.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(sizes, vec![3, 12, 23, 80, 80]);
    }

    #[test]
    fn team_lead_cannot_import_or_reset_booking_settings() {
        let (_, catalog) = builtin();

        assert!(catalog.grants("TEAM_LEAD", &Permission::BookingSettingsEdit.into()));
        assert!(!catalog.grants("TEAM_LEAD", &Permission::BookingSettingsImport.into()));
        assert!(!catalog.grants("TEAM_LEAD", &Permission::BookingSettingsReset.into()));
    }

    #[test]
    fn unknown_role_permission_is_rejected() {
        let Ok(registry) = PermissionRegistry::builder()
            .register(PermissionMetadata::new(
                Permission::UsersView,
                "View Users",
                "View user information",
                PermissionCategory::Users,
                RiskLevel::Low,
            ))
            .build()
        else {
            panic!("registry must build");
        };

        let Ok(ghost) = PermissionId::new("ghost.permission") else {
            panic!("identifier must be valid");
        };
        let permissions: PermissionSet = [ghost].into_iter().collect();
        let result = RoleCatalog::new(&registry, [("GHOST", RoleGrant::Permissions(permissions))]);

        assert!(matches!(
            result,
            Err(RegistryError::UnknownRolePermission { role, .. }) if role == "GHOST"
        ));
    }

    #[test]
    fn repeated_role_name_is_rejected() {
        let (registry, _) = builtin();
        let client: PermissionSet = [Permission::ServiceRequestsCreate].into_iter().collect();

        let result = RoleCatalog::new(
            &registry,
            [
                ("CLIENT", RoleGrant::Permissions(client)),
                ("CLIENT", RoleGrant::AllPermissions),
            ],
        );

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateRole(role)) if role == "CLIENT"
        ));
    }

    #[test]
    fn builtin_role_parses_stable_names() {
        assert_eq!(
            BuiltinRole::from_str("TEAM_LEAD").ok(),
            Some(BuiltinRole::TeamLead)
        );
        assert!(BuiltinRole::from_str("team_lead").is_err());
    }
}
