use axum::Router;
use axum::routing::{get, post};
use grantline_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url)?;

    let permission_routes = Router::new()
        .route(
            "/api/permissions",
            get(handlers::permissions::list_permissions_handler),
        )
        .route(
            "/api/permissions/search",
            get(handlers::permissions::search_permissions_handler),
        )
        .route(
            "/api/permissions/categories",
            get(handlers::permissions::list_permission_categories_handler),
        )
        .route(
            "/api/permissions/categories/{category}",
            get(handlers::permissions::permission_category_handler),
        )
        .route(
            "/api/permissions/diff",
            post(handlers::permissions::permission_diff_handler),
        )
        .route(
            "/api/permissions/validate",
            post(handlers::permissions::validate_permissions_handler),
        )
        .route(
            "/api/permissions/risk",
            post(handlers::permissions::permission_risk_handler),
        )
        .route(
            "/api/permissions/suggestions",
            post(handlers::permissions::permission_suggestions_handler),
        )
        .route(
            "/api/permissions/can-grant",
            post(handlers::permissions::can_grant_permission_handler),
        );

    let role_routes = Router::new()
        .route(
            "/api/roles/{role}/permissions",
            get(handlers::roles::role_permissions_handler),
        )
        .route(
            "/api/roles/access-check",
            post(handlers::roles::role_access_check_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(permission_routes)
        .merge(role_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
