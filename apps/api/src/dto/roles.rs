use grantline_domain::PermissionId;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Conventional permissions of one role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-permissions-response.ts"
)]
pub struct RolePermissionsResponse {
    pub role: String,
    pub permissions: Vec<String>,
}

impl RolePermissionsResponse {
    /// Creates a response for a role and its permissions.
    #[must_use]
    pub fn new(role: String, permissions: Vec<PermissionId>) -> Self {
        Self {
            role,
            permissions: permissions.into_iter().map(String::from).collect(),
        }
    }
}

/// Incoming payload for a role-level access check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-access-check-request.ts"
)]
pub struct RoleAccessCheckRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub allowed_roles: Option<Vec<String>>,
}

/// Outcome of a role-level access check.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-access-check-response.ts"
)]
pub struct RoleAccessCheckResponse {
    pub has_permissions: bool,
    /// Present only when `allowed_roles` was supplied.
    pub has_role: Option<bool>,
}
