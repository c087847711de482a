use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use grantline_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a single grantable capability.
///
/// Identifiers outside the built-in [`Permission`] catalogue are representable
/// so callers can pass identifiers defined elsewhere through the engine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionId(String);

impl PermissionId {
    /// Creates a validated permission identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        NonEmptyString::new(value).map(|value| Self(value.into()))
    }

    /// Returns the identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the built-in permission matching this identifier, if any.
    #[must_use]
    pub fn builtin(&self) -> Option<Permission> {
        Permission::from_str(self.as_str()).ok()
    }
}

impl From<Permission> for PermissionId {
    fn from(value: Permission) -> Self {
        Self(value.as_str().to_owned())
    }
}

impl TryFrom<String> for PermissionId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PermissionId> for String {
    fn from(value: PermissionId) -> Self {
        value.0
    }
}

impl Display for PermissionId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

impl PartialEq<Permission> for PermissionId {
    fn eq(&self, other: &Permission) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Unordered collection of unique permission identifiers held by a subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<PermissionId>);

impl PermissionSet {
    /// Creates an empty permission set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a permission, returning whether it was newly inserted.
    pub fn insert(&mut self, permission: impl Into<PermissionId>) -> bool {
        self.0.insert(permission.into())
    }

    /// Removes a permission, returning whether it was present.
    pub fn remove(&mut self, permission: &PermissionId) -> bool {
        self.0.remove(permission)
    }

    /// Returns whether the set holds the permission.
    #[must_use]
    pub fn contains(&self, permission: &PermissionId) -> bool {
        self.0.contains(permission)
    }

    /// Returns whether the set holds every permission of `other`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Returns a copy of this set with one more permission.
    #[must_use]
    pub fn with(&self, permission: &PermissionId) -> Self {
        let mut next = self.clone();
        next.0.insert(permission.clone());
        next
    }

    /// Returns a copy of this set without the permission.
    #[must_use]
    pub fn without(&self, permission: &PermissionId) -> Self {
        let mut next = self.clone();
        next.0.remove(permission);
        next
    }

    /// Number of permissions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates permissions in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionId> {
        self.0.iter()
    }
}

impl FromIterator<PermissionId> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = PermissionId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().map(PermissionId::from).collect())
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = &'a PermissionId;
    type IntoIter = std::collections::btree_set::Iter<'a, PermissionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PermissionSet {
    type Item = PermissionId;
    type IntoIter = std::collections::btree_set::IntoIter<PermissionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Permissions shipped with the built-in registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Permission {
    #[serde(rename = "service_requests.create")]
    ServiceRequestsCreate,
    #[serde(rename = "service_requests.read.all")]
    ServiceRequestsReadAll,
    #[serde(rename = "service_requests.read.own")]
    ServiceRequestsReadOwn,
    #[serde(rename = "service_requests.update")]
    ServiceRequestsUpdate,
    #[serde(rename = "service_requests.delete")]
    ServiceRequestsDelete,
    #[serde(rename = "service_requests.assign")]
    ServiceRequestsAssign,
    #[serde(rename = "tasks.create")]
    TasksCreate,
    #[serde(rename = "tasks.read.all")]
    TasksReadAll,
    #[serde(rename = "tasks.read.assigned")]
    TasksReadAssigned,
    #[serde(rename = "tasks.update")]
    TasksUpdate,
    #[serde(rename = "tasks.delete")]
    TasksDelete,
    #[serde(rename = "tasks.assign")]
    TasksAssign,
    #[serde(rename = "team.manage")]
    TeamManage,
    #[serde(rename = "team.view")]
    TeamView,
    #[serde(rename = "users.manage")]
    UsersManage,
    #[serde(rename = "users.view")]
    UsersView,
    #[serde(rename = "analytics.view")]
    AnalyticsView,
    #[serde(rename = "analytics.export")]
    AnalyticsExport,
    #[serde(rename = "services.view")]
    ServicesView,
    #[serde(rename = "services.create")]
    ServicesCreate,
    #[serde(rename = "services.edit")]
    ServicesEdit,
    #[serde(rename = "services.delete")]
    ServicesDelete,
    #[serde(rename = "services.bulk.edit")]
    ServicesBulkEdit,
    #[serde(rename = "services.export")]
    ServicesExport,
    #[serde(rename = "services.analytics")]
    ServicesAnalytics,
    #[serde(rename = "services.manage.featured")]
    ServicesManageFeatured,
    #[serde(rename = "booking.settings.view")]
    BookingSettingsView,
    #[serde(rename = "booking.settings.edit")]
    BookingSettingsEdit,
    #[serde(rename = "booking.settings.export")]
    BookingSettingsExport,
    #[serde(rename = "booking.settings.import")]
    BookingSettingsImport,
    #[serde(rename = "booking.settings.reset")]
    BookingSettingsReset,
    #[serde(rename = "org.settings.view")]
    OrgSettingsView,
    #[serde(rename = "org.settings.edit")]
    OrgSettingsEdit,
    #[serde(rename = "org.settings.export")]
    OrgSettingsExport,
    #[serde(rename = "org.settings.import")]
    OrgSettingsImport,
    #[serde(rename = "org.settings.reset")]
    OrgSettingsReset,
    #[serde(rename = "financial.settings.view")]
    FinancialSettingsView,
    #[serde(rename = "financial.settings.edit")]
    FinancialSettingsEdit,
    #[serde(rename = "financial.settings.export")]
    FinancialSettingsExport,
    #[serde(rename = "integration.settings.view")]
    IntegrationHubView,
    #[serde(rename = "integration.settings.edit")]
    IntegrationHubEdit,
    #[serde(rename = "integration.settings.test")]
    IntegrationHubTest,
    #[serde(rename = "integration.settings.secrets.write")]
    IntegrationHubSecretsWrite,
    #[serde(rename = "integrations.manage")]
    IntegrationsManage,
    #[serde(rename = "client.settings.view")]
    ClientSettingsView,
    #[serde(rename = "client.settings.edit")]
    ClientSettingsEdit,
    #[serde(rename = "client.settings.export")]
    ClientSettingsExport,
    #[serde(rename = "client.settings.import")]
    ClientSettingsImport,
    #[serde(rename = "team.settings.view")]
    TeamSettingsView,
    #[serde(rename = "team.settings.edit")]
    TeamSettingsEdit,
    #[serde(rename = "team.settings.export")]
    TeamSettingsExport,
    #[serde(rename = "team.settings.import")]
    TeamSettingsImport,
    #[serde(rename = "task.settings.view")]
    TaskWorkflowSettingsView,
    #[serde(rename = "task.settings.edit")]
    TaskWorkflowSettingsEdit,
    #[serde(rename = "task.settings.export")]
    TaskWorkflowSettingsExport,
    #[serde(rename = "task.settings.import")]
    TaskWorkflowSettingsImport,
    #[serde(rename = "analytics-reporting.settings.view")]
    AnalyticsReportingSettingsView,
    #[serde(rename = "analytics-reporting.settings.edit")]
    AnalyticsReportingSettingsEdit,
    #[serde(rename = "analytics-reporting.settings.export")]
    AnalyticsReportingSettingsExport,
    #[serde(rename = "analytics-reporting.settings.import")]
    AnalyticsReportingSettingsImport,
    #[serde(rename = "communication.settings.view")]
    CommunicationSettingsView,
    #[serde(rename = "communication.settings.edit")]
    CommunicationSettingsEdit,
    #[serde(rename = "communication.settings.export")]
    CommunicationSettingsExport,
    #[serde(rename = "communication.settings.import")]
    CommunicationSettingsImport,
    #[serde(rename = "security-compliance.settings.view")]
    SecurityComplianceSettingsView,
    #[serde(rename = "security-compliance.settings.edit")]
    SecurityComplianceSettingsEdit,
    #[serde(rename = "system-admin.settings.view")]
    SystemAdminSettingsView,
    #[serde(rename = "system-admin.settings.edit")]
    SystemAdminSettingsEdit,
    #[serde(rename = "languages.view")]
    LanguagesView,
    #[serde(rename = "languages.manage")]
    LanguagesManage,
    #[serde(rename = "reports.create")]
    ReportsCreate,
    #[serde(rename = "reports.read")]
    ReportsRead,
    #[serde(rename = "reports.write")]
    ReportsWrite,
    #[serde(rename = "reports.delete")]
    ReportsDelete,
    #[serde(rename = "reports.generate")]
    ReportsGenerate,
    #[serde(rename = "users.export")]
    UsersExport,
    #[serde(rename = "entities.create")]
    EntitiesCreate,
    #[serde(rename = "entities.read")]
    EntitiesRead,
    #[serde(rename = "entities.update")]
    EntitiesUpdate,
    #[serde(rename = "entities.delete")]
    EntitiesDelete,
}

impl Permission {
    /// Returns the stable identifier for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceRequestsCreate => "service_requests.create",
            Self::ServiceRequestsReadAll => "service_requests.read.all",
            Self::ServiceRequestsReadOwn => "service_requests.read.own",
            Self::ServiceRequestsUpdate => "service_requests.update",
            Self::ServiceRequestsDelete => "service_requests.delete",
            Self::ServiceRequestsAssign => "service_requests.assign",
            Self::TasksCreate => "tasks.create",
            Self::TasksReadAll => "tasks.read.all",
            Self::TasksReadAssigned => "tasks.read.assigned",
            Self::TasksUpdate => "tasks.update",
            Self::TasksDelete => "tasks.delete",
            Self::TasksAssign => "tasks.assign",
            Self::TeamManage => "team.manage",
            Self::TeamView => "team.view",
            Self::UsersManage => "users.manage",
            Self::UsersView => "users.view",
            Self::AnalyticsView => "analytics.view",
            Self::AnalyticsExport => "analytics.export",
            Self::ServicesView => "services.view",
            Self::ServicesCreate => "services.create",
            Self::ServicesEdit => "services.edit",
            Self::ServicesDelete => "services.delete",
            Self::ServicesBulkEdit => "services.bulk.edit",
            Self::ServicesExport => "services.export",
            Self::ServicesAnalytics => "services.analytics",
            Self::ServicesManageFeatured => "services.manage.featured",
            Self::BookingSettingsView => "booking.settings.view",
            Self::BookingSettingsEdit => "booking.settings.edit",
            Self::BookingSettingsExport => "booking.settings.export",
            Self::BookingSettingsImport => "booking.settings.import",
            Self::BookingSettingsReset => "booking.settings.reset",
            Self::OrgSettingsView => "org.settings.view",
            Self::OrgSettingsEdit => "org.settings.edit",
            Self::OrgSettingsExport => "org.settings.export",
            Self::OrgSettingsImport => "org.settings.import",
            Self::OrgSettingsReset => "org.settings.reset",
            Self::FinancialSettingsView => "financial.settings.view",
            Self::FinancialSettingsEdit => "financial.settings.edit",
            Self::FinancialSettingsExport => "financial.settings.export",
            Self::IntegrationHubView => "integration.settings.view",
            Self::IntegrationHubEdit => "integration.settings.edit",
            Self::IntegrationHubTest => "integration.settings.test",
            Self::IntegrationHubSecretsWrite => "integration.settings.secrets.write",
            Self::IntegrationsManage => "integrations.manage",
            Self::ClientSettingsView => "client.settings.view",
            Self::ClientSettingsEdit => "client.settings.edit",
            Self::ClientSettingsExport => "client.settings.export",
            Self::ClientSettingsImport => "client.settings.import",
            Self::TeamSettingsView => "team.settings.view",
            Self::TeamSettingsEdit => "team.settings.edit",
            Self::TeamSettingsExport => "team.settings.export",
            Self::TeamSettingsImport => "team.settings.import",
            Self::TaskWorkflowSettingsView => "task.settings.view",
            Self::TaskWorkflowSettingsEdit => "task.settings.edit",
            Self::TaskWorkflowSettingsExport => "task.settings.export",
            Self::TaskWorkflowSettingsImport => "task.settings.import",
            Self::AnalyticsReportingSettingsView => "analytics-reporting.settings.view",
            Self::AnalyticsReportingSettingsEdit => "analytics-reporting.settings.edit",
            Self::AnalyticsReportingSettingsExport => "analytics-reporting.settings.export",
            Self::AnalyticsReportingSettingsImport => "analytics-reporting.settings.import",
            Self::CommunicationSettingsView => "communication.settings.view",
            Self::CommunicationSettingsEdit => "communication.settings.edit",
            Self::CommunicationSettingsExport => "communication.settings.export",
            Self::CommunicationSettingsImport => "communication.settings.import",
            Self::SecurityComplianceSettingsView => "security-compliance.settings.view",
            Self::SecurityComplianceSettingsEdit => "security-compliance.settings.edit",
            Self::SystemAdminSettingsView => "system-admin.settings.view",
            Self::SystemAdminSettingsEdit => "system-admin.settings.edit",
            Self::LanguagesView => "languages.view",
            Self::LanguagesManage => "languages.manage",
            Self::ReportsCreate => "reports.create",
            Self::ReportsRead => "reports.read",
            Self::ReportsWrite => "reports.write",
            Self::ReportsDelete => "reports.delete",
            Self::ReportsGenerate => "reports.generate",
            Self::UsersExport => "users.export",
            Self::EntitiesCreate => "entities.create",
            Self::EntitiesRead => "entities.read",
            Self::EntitiesUpdate => "entities.update",
            Self::EntitiesDelete => "entities.delete",
        }
    }

    /// Returns all built-in permissions in declaration order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ServiceRequestsCreate,
            Permission::ServiceRequestsReadAll,
            Permission::ServiceRequestsReadOwn,
            Permission::ServiceRequestsUpdate,
            Permission::ServiceRequestsDelete,
            Permission::ServiceRequestsAssign,
            Permission::TasksCreate,
            Permission::TasksReadAll,
            Permission::TasksReadAssigned,
            Permission::TasksUpdate,
            Permission::TasksDelete,
            Permission::TasksAssign,
            Permission::TeamManage,
            Permission::TeamView,
            Permission::UsersManage,
            Permission::UsersView,
            Permission::AnalyticsView,
            Permission::AnalyticsExport,
            Permission::ServicesView,
            Permission::ServicesCreate,
            Permission::ServicesEdit,
            Permission::ServicesDelete,
            Permission::ServicesBulkEdit,
            Permission::ServicesExport,
            Permission::ServicesAnalytics,
            Permission::ServicesManageFeatured,
            Permission::BookingSettingsView,
            Permission::BookingSettingsEdit,
            Permission::BookingSettingsExport,
            Permission::BookingSettingsImport,
            Permission::BookingSettingsReset,
            Permission::OrgSettingsView,
            Permission::OrgSettingsEdit,
            Permission::OrgSettingsExport,
            Permission::OrgSettingsImport,
            Permission::OrgSettingsReset,
            Permission::FinancialSettingsView,
            Permission::FinancialSettingsEdit,
            Permission::FinancialSettingsExport,
            Permission::IntegrationHubView,
            Permission::IntegrationHubEdit,
            Permission::IntegrationHubTest,
            Permission::IntegrationHubSecretsWrite,
            Permission::IntegrationsManage,
            Permission::ClientSettingsView,
            Permission::ClientSettingsEdit,
            Permission::ClientSettingsExport,
            Permission::ClientSettingsImport,
            Permission::TeamSettingsView,
            Permission::TeamSettingsEdit,
            Permission::TeamSettingsExport,
            Permission::TeamSettingsImport,
            Permission::TaskWorkflowSettingsView,
            Permission::TaskWorkflowSettingsEdit,
            Permission::TaskWorkflowSettingsExport,
            Permission::TaskWorkflowSettingsImport,
            Permission::AnalyticsReportingSettingsView,
            Permission::AnalyticsReportingSettingsEdit,
            Permission::AnalyticsReportingSettingsExport,
            Permission::AnalyticsReportingSettingsImport,
            Permission::CommunicationSettingsView,
            Permission::CommunicationSettingsEdit,
            Permission::CommunicationSettingsExport,
            Permission::CommunicationSettingsImport,
            Permission::SecurityComplianceSettingsView,
            Permission::SecurityComplianceSettingsEdit,
            Permission::SystemAdminSettingsView,
            Permission::SystemAdminSettingsEdit,
            Permission::LanguagesView,
            Permission::LanguagesManage,
            Permission::ReportsCreate,
            Permission::ReportsRead,
            Permission::ReportsWrite,
            Permission::ReportsDelete,
            Permission::ReportsGenerate,
            Permission::UsersExport,
            Permission::EntitiesCreate,
            Permission::EntitiesRead,
            Permission::EntitiesUpdate,
            Permission::EntitiesDelete,
        ];

        ALL
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

impl Display for Permission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
