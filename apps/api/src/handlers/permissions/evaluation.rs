use super::*;

pub async fn permission_diff_handler(
    State(state): State<AppState>,
    Json(payload): Json<PermissionDiffRequest>,
) -> ApiResult<Json<PermissionDiffResponse>> {
    let current = parse_permission_set(payload.current)?;
    let target = parse_permission_set(payload.target)?;

    Ok(Json(
        state
            .permission_engine
            .calculate_diff(&current, &target)
            .into(),
    ))
}

pub async fn validate_permissions_handler(
    State(state): State<AppState>,
    Json(payload): Json<PermissionSetRequest>,
) -> ApiResult<Json<ValidationResultResponse>> {
    let permissions = parse_permission_set(payload.permissions)?;

    Ok(Json(state.permission_engine.validate(&permissions).into()))
}

pub async fn permission_risk_handler(
    State(state): State<AppState>,
    Json(payload): Json<PermissionSetRequest>,
) -> ApiResult<Json<PermissionRiskResponse>> {
    let permissions = parse_permission_set(payload.permissions)?;
    let risk_level = state.permission_engine.calculate_risk_level(&permissions);

    Ok(Json(PermissionRiskResponse {
        risk_level: risk_level.as_str().to_owned(),
    }))
}

pub async fn permission_suggestions_handler(
    State(state): State<AppState>,
    Json(payload): Json<PermissionSuggestionsRequest>,
) -> ApiResult<Json<Vec<PermissionSuggestionResponse>>> {
    let current = parse_permission_set(payload.current)?;
    let context = payload.context.unwrap_or_default().into_context()?;

    let suggestions = state
        .permission_engine
        .get_suggestions(payload.role.as_str(), &current, &context)
        .into_iter()
        .map(PermissionSuggestionResponse::from)
        .collect();

    Ok(Json(suggestions))
}

pub async fn can_grant_permission_handler(
    State(state): State<AppState>,
    Json(payload): Json<CanGrantPermissionRequest>,
) -> ApiResult<Json<CanGrantPermissionResponse>> {
    let permission = PermissionId::new(payload.permission)?;
    let current = parse_permission_set(payload.current)?;
    let admin_permissions = payload
        .admin_permissions
        .map(parse_permission_set)
        .transpose()?;

    let allowed = state.permission_engine.can_grant_permission(
        &permission,
        &current,
        admin_permissions.as_ref(),
    );

    Ok(Json(CanGrantPermissionResponse { allowed }))
}
