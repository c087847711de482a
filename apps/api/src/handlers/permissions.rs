use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use grantline_core::AppError;
use grantline_domain::{PermissionCategory, PermissionId};

use crate::dto::{
    CanGrantPermissionRequest, CanGrantPermissionResponse, PermissionCategoryResponse,
    PermissionDiffRequest, PermissionDiffResponse, PermissionMetadataResponse,
    PermissionRiskResponse, PermissionSearchQuery, PermissionSetRequest,
    PermissionSuggestionResponse, PermissionSuggestionsRequest, ValidationResultResponse,
    parse_permission_set,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod catalogue;
mod evaluation;


pub use catalogue::{
    list_permission_categories_handler, list_permissions_handler, permission_category_handler,
    search_permissions_handler,
};
pub use evaluation::{
    can_grant_permission_handler, permission_diff_handler, permission_risk_handler,
    permission_suggestions_handler, validate_permissions_handler,
};
