use grantline_application::{
    PermissionDiff, PermissionSuggestion, UserContext, ValidationIssue, ValidationResult,
};
use grantline_core::AppResult;
use grantline_domain::{PermissionCategory, PermissionId, PermissionMetadata, PermissionSet};

use super::types::{
    PermissionCategoryResponse, PermissionDiffResponse, PermissionMetadataResponse,
    PermissionSuggestionResponse, UserContextRequest, ValidationIssueResponse,
    ValidationResultResponse,
};

/// Parses transport identifiers, rejecting blank values.
pub fn parse_permission_ids(values: Vec<String>) -> AppResult<Vec<PermissionId>> {
    values.into_iter().map(PermissionId::new).collect()
}

/// Parses transport identifiers into a set, rejecting blank values.
pub fn parse_permission_set(values: Vec<String>) -> AppResult<PermissionSet> {
    values.into_iter().map(PermissionId::new).collect()
}

fn to_strings(permissions: Vec<PermissionId>) -> Vec<String> {
    permissions.into_iter().map(String::from).collect()
}

impl From<&PermissionMetadata> for PermissionMetadataResponse {
    fn from(metadata: &PermissionMetadata) -> Self {
        Self {
            key: metadata.key.to_string(),
            label: metadata.label.clone(),
            description: metadata.description.clone(),
            category: metadata.category.as_str().to_owned(),
            category_label: metadata.category.label().to_owned(),
            risk: metadata.risk.as_str().to_owned(),
            dependencies: to_strings(metadata.dependencies.clone()),
            conflicts: to_strings(metadata.conflicts.clone()),
            icon: metadata.icon.clone(),
            tags: metadata.tags.clone(),
        }
    }
}

impl PermissionCategoryResponse {
    /// Creates a response for one category and its permissions.
    #[must_use]
    pub fn new(category: PermissionCategory, permissions: Vec<PermissionId>) -> Self {
        Self {
            category: category.as_str().to_owned(),
            label: category.label().to_owned(),
            permissions: to_strings(permissions),
        }
    }
}

impl From<PermissionDiff> for PermissionDiffResponse {
    fn from(diff: PermissionDiff) -> Self {
        Self {
            added: to_strings(diff.added),
            removed: to_strings(diff.removed),
            unchanged: to_strings(diff.unchanged),
            total: diff.total,
        }
    }
}

impl From<ValidationIssue> for ValidationIssueResponse {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            permission: issue.permission.into(),
            kind: issue.kind.as_str(),
            severity: issue.severity.as_str(),
            message: issue.message,
            related: to_strings(issue.related),
        }
    }
}

impl From<ValidationResult> for ValidationResultResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            is_valid: result.is_valid,
            errors: result.errors.into_iter().map(Into::into).collect(),
            warnings: result.warnings.into_iter().map(Into::into).collect(),
            risk_level: result.risk_level.as_str().to_owned(),
        }
    }
}

impl From<PermissionSuggestion> for PermissionSuggestionResponse {
    fn from(suggestion: PermissionSuggestion) -> Self {
        Self {
            permission: suggestion.permission.into(),
            reason: suggestion.reason,
            confidence: suggestion.confidence,
            action: suggestion.action.as_str(),
        }
    }
}

impl UserContextRequest {
    /// Converts the payload into engine context.
    pub fn into_context(self) -> AppResult<UserContext> {
        Ok(UserContext {
            department: self.department,
            team: self.team,
            job_title: self.job_title,
            recent_access: parse_permission_ids(self.recent_access)?,
        })
    }
}
