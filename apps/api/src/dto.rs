mod common;
mod permissions;
mod roles;

pub use common::HealthResponse;
pub use permissions::{
    CanGrantPermissionRequest, CanGrantPermissionResponse, PermissionCategoryResponse,
    PermissionDiffRequest, PermissionDiffResponse, PermissionMetadataResponse,
    PermissionRiskResponse, PermissionSearchQuery, PermissionSetRequest,
    PermissionSuggestionResponse, PermissionSuggestionsRequest, ValidationResultResponse,
    parse_permission_ids, parse_permission_set,
};
pub use roles::{RoleAccessCheckRequest, RoleAccessCheckResponse, RolePermissionsResponse};
