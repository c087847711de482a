use std::collections::HashSet;

use tracing::{debug, debug_span};

use super::*;

/// Confidence attached to permissions the role conventionally holds.
pub const ROLE_CONVENTION_CONFIDENCE: f64 = 0.85;

/// Confidence attached to permissions whose dependencies are already held.
pub const DEPENDENCIES_SATISFIED_CONFIDENCE: f64 = 0.70;

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 10;

/// Change a suggestion proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionAction {
    /// Grant the permission.
    Add,
    /// Revoke the permission.
    Remove,
}

impl SuggestionAction {
    /// Returns a stable transport value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

/// Ranked recommendation to change one permission.
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionSuggestion {
    /// Permission to change.
    pub permission: PermissionId,
    /// Why the permission was proposed.
    pub reason: String,
    /// Ranking weight in `[0, 1]`.
    pub confidence: f64,
    /// Change to apply.
    pub action: SuggestionAction,
}

impl PermissionSuggestion {
    /// Returns `current` with this suggestion applied.
    #[must_use]
    pub fn applied_to(&self, current: &PermissionSet) -> PermissionSet {
        match self.action {
            SuggestionAction::Add => current.with(&self.permission),
            SuggestionAction::Remove => current.without(&self.permission),
        }
    }
}

/// Optional description of the user permissions are being suggested for.
///
/// Carried into diagnostics only; it does not influence ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    /// Department name.
    pub department: Option<String>,
    /// Team name.
    pub team: Option<String>,
    /// Job title.
    pub job_title: Option<String>,
    /// Permissions the user exercised recently.
    pub recent_access: Vec<PermissionId>,
}

impl PermissionEngine {
    /// Ranks permissions worth granting to a holder of `role`.
    ///
    /// Unknown roles yield no suggestions. Every returned suggestion leaves
    /// `current` valid once applied, and at most [`MAX_SUGGESTIONS`] are
    /// returned in non-increasing confidence order.
    #[must_use]
    pub fn get_suggestions(
        &self,
        role: &str,
        current: &PermissionSet,
        context: &UserContext,
    ) -> Vec<PermissionSuggestion> {
        let span = debug_span!(
            "permission_suggestions",
            role,
            department = context.department.as_deref(),
            team = context.team.as_deref(),
            job_title = context.job_title.as_deref(),
            recent_access = context.recent_access.len(),
        );
        let _entered = span.enter();

        let Some(conventional) = self.roles.get(role) else {
            debug!("unknown role, no suggestions");
            return Vec::new();
        };

        let mut candidates: Vec<PermissionSuggestion> = self
            .declared_order(
                conventional
                    .iter()
                    .filter(|permission| !current.contains(permission)),
            )
            .into_iter()
            .map(|permission| PermissionSuggestion {
                permission,
                reason: format!("Commonly granted to {role} users"),
                confidence: ROLE_CONVENTION_CONFIDENCE,
                action: SuggestionAction::Add,
            })
            .collect();

        candidates.extend(
            self.registry
                .metadata()
                .iter()
                .filter(|metadata| !current.contains(&metadata.key))
                .filter(|metadata| !metadata.dependencies.is_empty())
                .filter(|metadata| self.missing_from(&metadata.dependencies, current).is_empty())
                .map(|metadata| PermissionSuggestion {
                    permission: metadata.key.clone(),
                    reason: "All dependencies are present".to_owned(),
                    confidence: DEPENDENCIES_SATISFIED_CONFIDENCE,
                    action: SuggestionAction::Add,
                }),
        );

        let mut seen = HashSet::new();
        candidates.retain(|candidate| seen.insert(candidate.permission.clone()));
        candidates.sort_by(|left, right| right.confidence.total_cmp(&left.confidence));

        let considered = candidates.len();
        let suggestions: Vec<PermissionSuggestion> = candidates
            .into_iter()
            .filter(|candidate| self.validate(&candidate.applied_to(current)).is_valid)
            .take(MAX_SUGGESTIONS)
            .collect();

        debug!(
            considered,
            returned = suggestions.len(),
            "permission suggestions ranked"
        );

        suggestions
    }
}
