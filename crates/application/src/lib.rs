//! Application services evaluating permission sets and role access.

#![forbid(unsafe_code)]

mod permission_engine;
mod role_access_policy;

pub use permission_engine::{
    DEPENDENCIES_SATISFIED_CONFIDENCE, IssueSeverity, MAX_SUGGESTIONS, PermissionDiff,
    PermissionEngine, PermissionSuggestion, ROLE_CONVENTION_CONFIDENCE, SuggestionAction,
    UserContext, ValidationIssue, ValidationIssueKind, ValidationResult,
};
pub use role_access_policy::RoleAccessPolicy;
