use grantline_domain::RiskLevel;
use tracing::debug;

use super::*;

/// Two or more critical permissions in one set trip the combination warning.
const CRITICAL_COMBINATION_THRESHOLD: usize = 2;

/// Kind of problem found while validating a permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationIssueKind {
    /// A declared dependency is not in the set.
    MissingDependency,
    /// A declared conflict is in the set.
    Conflict,
    /// The permission is high risk on its own.
    HighRisk,
    /// A constraint outside the dependency graph is violated.
    ConstraintViolation,
    /// Several critical permissions are held together.
    UnusualCombination,
}

impl ValidationIssueKind {
    /// Returns a stable transport value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingDependency => "missing-dependency",
            Self::Conflict => "conflict",
            Self::HighRisk => "high-risk",
            Self::ConstraintViolation => "constraint-violation",
            Self::UnusualCombination => "unusual-combination",
        }
    }
}

/// Whether an issue makes the set invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueSeverity {
    /// Fatal; the set is invalid.
    Error,
    /// Advisory only.
    Warning,
}

impl IssueSeverity {
    /// Returns a stable transport value for this severity.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// One problem attached to a permission in the validated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Permission the issue is reported against.
    pub permission: PermissionId,
    /// Issue kind.
    pub kind: ValidationIssueKind,
    /// Issue severity.
    pub severity: IssueSeverity,
    /// Human-readable explanation.
    pub message: String,
    /// Missing, conflicting, or co-held permissions the issue refers to.
    pub related: Vec<PermissionId>,
}

/// Outcome of validating a candidate permission set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True when `errors` is empty.
    pub is_valid: bool,
    /// Dependency violations.
    pub errors: Vec<ValidationIssue>,
    /// Conflicts and risky combinations.
    pub warnings: Vec<ValidationIssue>,
    /// Highest risk level in the set.
    pub risk_level: RiskLevel,
}

impl PermissionEngine {
    /// Checks a candidate set against the dependency and conflict graph.
    ///
    /// Unregistered identifiers are skipped without any check. Warnings never
    /// affect validity.
    #[must_use]
    pub fn validate(&self, permissions: &PermissionSet) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut critical = Vec::new();

        for permission in self.declared_order(permissions) {
            let Some(metadata) = self.registry.lookup(&permission) else {
                debug!(%permission, "skipping unregistered permission during validation");
                continue;
            };

            if metadata.risk == RiskLevel::Critical {
                critical.push(permission.clone());
            }

            let missing = self.missing_from(&metadata.dependencies, permissions);
            if !missing.is_empty() {
                errors.push(ValidationIssue {
                    permission: permission.clone(),
                    kind: ValidationIssueKind::MissingDependency,
                    severity: IssueSeverity::Error,
                    message: format!("Requires: {}", self.labels(&missing)),
                    related: missing,
                });
            }

            let conflicting: Vec<PermissionId> = metadata
                .conflicts
                .iter()
                .filter(|conflict| permissions.contains(conflict))
                .cloned()
                .collect();
            if !conflicting.is_empty() {
                warnings.push(ValidationIssue {
                    permission,
                    kind: ValidationIssueKind::Conflict,
                    severity: IssueSeverity::Warning,
                    message: format!("Conflicts with: {}", self.labels(&conflicting)),
                    related: conflicting,
                });
            }
        }

        if critical.len() >= CRITICAL_COMBINATION_THRESHOLD {
            let related = critical.split_off(1);
            if let Some(first) = critical.pop() {
                warnings.push(ValidationIssue {
                    permission: first,
                    kind: ValidationIssueKind::UnusualCombination,
                    severity: IssueSeverity::Warning,
                    message: "Granting multiple critical permissions. Ensure this is intentional."
                        .to_owned(),
                    related,
                });
            }
        }

        let risk_level = self.calculate_risk_level(permissions);
        debug!(
            permissions = permissions.len(),
            errors = errors.len(),
            warnings = warnings.len(),
            risk_level = %risk_level,
            "permission set validated"
        );

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            risk_level,
        }
    }
}
