use std::fmt::{Display, Formatter};
use std::str::FromStr;

use grantline_core::AppError;
use serde::{Deserialize, Serialize};

use crate::PermissionId;

/// Functional area a permission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    /// Service requests, tasks, services and entities.
    Content,
    /// Dashboards, exports and reports.
    Analytics,
    /// User accounts and access.
    Users,
    /// Organisation-wide configuration.
    System,
    /// Booking configuration.
    Bookings,
    /// Payment and financial configuration.
    Financial,
    /// Team membership and collaboration.
    Team,
    /// Secrets and compliance.
    Security,
}

impl PermissionCategory {
    /// Returns a stable storage value for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Analytics => "analytics",
            Self::Users => "users",
            Self::System => "system",
            Self::Bookings => "bookings",
            Self::Financial => "financial",
            Self::Team => "team",
            Self::Security => "security",
        }
    }

    /// Returns the display label shown in permission matrices.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Content => "Content Management",
            Self::Analytics => "Analytics & Reports",
            Self::Users => "User Management",
            Self::System => "System Settings",
            Self::Bookings => "Booking Management",
            Self::Financial => "Financial Operations",
            Self::Team => "Team Collaboration",
            Self::Security => "Security & Access",
        }
    }

    /// Returns every declared category.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[PermissionCategory] = &[
            PermissionCategory::Content,
            PermissionCategory::Analytics,
            PermissionCategory::Users,
            PermissionCategory::System,
            PermissionCategory::Bookings,
            PermissionCategory::Financial,
            PermissionCategory::Team,
            PermissionCategory::Security,
        ];

        ALL
    }
}

impl FromStr for PermissionCategory {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|category| {
                category.as_str().eq_ignore_ascii_case(value) || category.label() == value
            })
            .ok_or_else(|| AppError::Validation(format!("unknown permission category '{value}'")))
    }
}

impl Display for PermissionCategory {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Ordinal severity attached to a permission.
///
/// Variants are declared in ascending order so `Ord` gives
/// `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Read-only or self-scoped access.
    #[default]
    Low,
    /// Routine edits.
    Medium,
    /// Destructive or organisation-wide changes.
    High,
    /// Access, secrets, money, or resets.
    Critical,
}

impl RiskLevel {
    /// Returns a stable storage value for this risk level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Registry record describing one permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMetadata {
    /// Identifier this record describes.
    pub key: PermissionId,
    /// Display name.
    pub label: String,
    /// One-sentence description.
    pub description: String,
    /// Functional area.
    pub category: PermissionCategory,
    /// Severity of holding this permission.
    pub risk: RiskLevel,
    /// Permissions that must also be held.
    pub dependencies: Vec<PermissionId>,
    /// Permissions that should not be held at the same time.
    pub conflicts: Vec<PermissionId>,
    /// Icon hint for the UI.
    pub icon: Option<String>,
    /// Free-text search aids.
    pub tags: Vec<String>,
}

impl PermissionMetadata {
    /// Creates a record with no dependencies, conflicts, icon, or tags.
    #[must_use]
    pub fn new(
        key: impl Into<PermissionId>,
        label: impl Into<String>,
        description: impl Into<String>,
        category: PermissionCategory,
        risk: RiskLevel,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
            category,
            risk,
            dependencies: Vec::new(),
            conflicts: Vec::new(),
            icon: None,
            tags: Vec::new(),
        }
    }

    /// Sets the permissions this one depends on.
    #[must_use]
    pub fn with_dependencies<I, P>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionId>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the permissions this one conflicts with.
    #[must_use]
    pub fn with_conflicts<I, P>(mut self, conflicts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionId>,
    {
        self.conflicts = conflicts.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the UI icon hint.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the search tags.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
