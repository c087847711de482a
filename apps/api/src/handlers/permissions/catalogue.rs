use super::*;

pub async fn list_permissions_handler(
    State(state): State<AppState>,
) -> Json<Vec<PermissionMetadataResponse>> {
    Json(
        state
            .permission_engine
            .get_all_permission_metadata()
            .iter()
            .map(PermissionMetadataResponse::from)
            .collect(),
    )
}

pub async fn search_permissions_handler(
    State(state): State<AppState>,
    Query(query): Query<PermissionSearchQuery>,
) -> Json<Vec<PermissionMetadataResponse>> {
    let engine = &state.permission_engine;
    let matches = engine
        .search_permissions(query.q.as_deref().unwrap_or_default())
        .iter()
        .filter_map(|permission| engine.registry().lookup(permission))
        .map(PermissionMetadataResponse::from)
        .collect();

    Json(matches)
}

pub async fn list_permission_categories_handler(
    State(state): State<AppState>,
) -> Json<Vec<PermissionCategoryResponse>> {
    Json(
        state
            .permission_engine
            .get_permissions_by_categories()
            .into_iter()
            .map(|(category, permissions)| PermissionCategoryResponse::new(category, permissions))
            .collect(),
    )
}

pub async fn permission_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<PermissionCategoryResponse>> {
    let category = PermissionCategory::from_str(category.as_str()).map_err(|_| {
        AppError::NotFound(format!("permission category '{category}' does not exist"))
    })?;

    Ok(Json(PermissionCategoryResponse::new(
        category,
        state.permission_engine.get_permissions_by_category(category),
    )))
}
