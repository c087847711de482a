mod conversions;
mod types;

pub use conversions::{parse_permission_ids, parse_permission_set};
pub use types::{
    CanGrantPermissionRequest, CanGrantPermissionResponse, PermissionCategoryResponse,
    PermissionDiffRequest, PermissionDiffResponse, PermissionMetadataResponse,
    PermissionRiskResponse, PermissionSearchQuery, PermissionSetRequest,
    PermissionSuggestionResponse, PermissionSuggestionsRequest, ValidationResultResponse,
};
