use axum::Json;
use axum::extract::{Path, State};

use crate::dto::{
    RoleAccessCheckRequest, RoleAccessCheckResponse, RolePermissionsResponse,
    parse_permission_ids,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn role_permissions_handler(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<RolePermissionsResponse> {
    let engine = &state.permission_engine;
    let permissions = engine
        .registry()
        .in_declaration_order(&engine.get_common_permissions_for_role(role.as_str()));

    Json(RolePermissionsResponse::new(role, permissions))
}

pub async fn role_access_check_handler(
    State(state): State<AppState>,
    Json(payload): Json<RoleAccessCheckRequest>,
) -> ApiResult<Json<RoleAccessCheckResponse>> {
    let required = parse_permission_ids(payload.required)?;
    let role = payload.role.as_deref();
    let policy = &state.role_access_policy;

    let has_role = payload.allowed_roles.map(|allowed| {
        let allowed: Vec<&str> = allowed.iter().map(String::as_str).collect();
        policy.has_role(role, &allowed)
    });

    Ok(Json(RoleAccessCheckResponse {
        has_permissions: policy.check_permissions(role, &required),
        has_role,
    }))
}
