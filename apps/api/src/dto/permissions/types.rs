use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of one registry record.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-metadata-response.ts"
)]
pub struct PermissionMetadataResponse {
    pub key: String,
    pub label: String,
    pub description: String,
    pub category: String,
    pub category_label: String,
    pub risk: String,
    pub dependencies: Vec<String>,
    pub conflicts: Vec<String>,
    pub icon: Option<String>,
    pub tags: Vec<String>,
}

/// Permissions grouped under one category.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-category-response.ts"
)]
pub struct PermissionCategoryResponse {
    pub category: String,
    pub label: String,
    pub permissions: Vec<String>,
}

/// Query string for permission search.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-search-query.ts"
)]
pub struct PermissionSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Incoming payload for diffing two permission sets.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-diff-request.ts"
)]
pub struct PermissionDiffRequest {
    pub current: Vec<String>,
    pub target: Vec<String>,
}

/// API representation of a permission diff.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-diff-response.ts"
)]
pub struct PermissionDiffResponse {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub unchanged: Vec<String>,
    pub total: usize,
}

/// Incoming payload carrying one permission set.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-set-request.ts"
)]
pub struct PermissionSetRequest {
    pub permissions: Vec<String>,
}

/// API representation of one validation issue.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-issue-response.ts"
)]
pub struct ValidationIssueResponse {
    pub permission: String,
    pub kind: &'static str,
    pub severity: &'static str,
    pub message: String,
    pub related: Vec<String>,
}

/// API representation of a validation result.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-result-response.ts"
)]
pub struct ValidationResultResponse {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssueResponse>,
    pub warnings: Vec<ValidationIssueResponse>,
    pub risk_level: String,
}

/// Aggregated risk level of a permission set.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-risk-response.ts"
)]
pub struct PermissionRiskResponse {
    pub risk_level: String,
}

/// Optional user context accompanying a suggestions request.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-context-request.ts"
)]
pub struct UserContextRequest {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub recent_access: Vec<String>,
}

/// Incoming payload for permission suggestions.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-suggestions-request.ts"
)]
pub struct PermissionSuggestionsRequest {
    pub role: String,
    #[serde(default)]
    pub current: Vec<String>,
    #[serde(default)]
    pub context: Option<UserContextRequest>,
}

/// API representation of one suggestion.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-suggestion-response.ts"
)]
pub struct PermissionSuggestionResponse {
    pub permission: String,
    pub reason: String,
    pub confidence: f64,
    pub action: &'static str,
}

/// Incoming payload for a single grant check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/can-grant-permission-request.ts"
)]
pub struct CanGrantPermissionRequest {
    pub permission: String,
    #[serde(default)]
    pub current: Vec<String>,
    #[serde(default)]
    pub admin_permissions: Option<Vec<String>>,
}

/// Outcome of a single grant check.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/can-grant-permission-response.ts"
)]
pub struct CanGrantPermissionResponse {
    pub allowed: bool,
}
