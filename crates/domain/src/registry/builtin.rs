//! Permission metadata shipped with the product.

use crate::{Permission, PermissionCategory, PermissionMetadata, RiskLevel};

fn define(
    permission: Permission,
    label: &str,
    description: &str,
    category: PermissionCategory,
    risk: RiskLevel,
) -> PermissionMetadata {
    PermissionMetadata::new(permission, label, description, category, risk)
}

/// Returns built-in metadata in [`Permission::all`] order.
pub(super) fn builtin_metadata() -> Vec<PermissionMetadata> {
    vec![
        define(
            Permission::ServiceRequestsCreate,
            "Create Service Requests",
            "Create new service request entries",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("Plus")
        .with_tags(["service-requests", "create", "content"]),
        define(
            Permission::ServiceRequestsReadAll,
            "View All Service Requests",
            "View all service requests across the organization",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("Eye")
        .with_tags(["service-requests", "view", "all", "content"]),
        define(
            Permission::ServiceRequestsReadOwn,
            "View Own Service Requests",
            "View only service requests created by the user",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("Eye")
        .with_tags(["service-requests", "view", "own", "content"]),
        define(
            Permission::ServiceRequestsUpdate,
            "Update Service Requests",
            "Edit existing service request entries",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::ServiceRequestsReadAll])
        .with_icon("Edit")
        .with_tags(["service-requests", "edit", "update", "content"]),
        define(
            Permission::ServiceRequestsDelete,
            "Delete Service Requests",
            "Delete service request entries",
            PermissionCategory::Content,
            RiskLevel::High,
        )
        .with_dependencies([Permission::ServiceRequestsReadAll])
        .with_icon("Trash")
        .with_tags(["service-requests", "delete", "content"]),
        define(
            Permission::ServiceRequestsAssign,
            "Assign Service Requests",
            "Assign service requests to team members",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::ServiceRequestsReadAll, Permission::TeamView])
        .with_icon("Share")
        .with_tags(["service-requests", "assign", "team", "content"]),
        define(
            Permission::TasksCreate,
            "Create Tasks",
            "Create new task entries",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("CheckSquare")
        .with_tags(["tasks", "create", "content"]),
        define(
            Permission::TasksReadAll,
            "View All Tasks",
            "View all tasks across the organization",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("Eye")
        .with_tags(["tasks", "view", "all", "content"]),
        define(
            Permission::TasksReadAssigned,
            "View Assigned Tasks",
            "View only tasks assigned to the user",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("Eye")
        .with_tags(["tasks", "view", "assigned", "content"]),
        define(
            Permission::TasksUpdate,
            "Update Tasks",
            "Edit existing task entries",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::TasksCreate])
        .with_icon("Edit")
        .with_tags(["tasks", "edit", "update", "content"]),
        define(
            Permission::TasksDelete,
            "Delete Tasks",
            "Delete task entries",
            PermissionCategory::Content,
            RiskLevel::High,
        )
        .with_dependencies([Permission::TasksReadAll])
        .with_icon("Trash")
        .with_tags(["tasks", "delete", "content"]),
        define(
            Permission::TasksAssign,
            "Assign Tasks",
            "Assign tasks to team members",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::TasksReadAll, Permission::TeamView])
        .with_icon("Share")
        .with_tags(["tasks", "assign", "team", "content"]),
        define(
            Permission::TeamManage,
            "Manage Team Members",
            "Add, remove, and manage team member information",
            PermissionCategory::Team,
            RiskLevel::High,
        )
        .with_dependencies([Permission::TeamView])
        .with_icon("Users")
        .with_tags(["team", "manage", "collaboration"]),
        define(
            Permission::TeamView,
            "View Team Members",
            "View team member information and organization",
            PermissionCategory::Team,
            RiskLevel::Low,
        )
        .with_icon("Users")
        .with_tags(["team", "view", "collaboration"]),
        define(
            Permission::UsersManage,
            "Manage Users",
            "Manage user accounts, roles, and access",
            PermissionCategory::Users,
            RiskLevel::Critical,
        )
        .with_dependencies([Permission::UsersView])
        .with_icon("User")
        .with_tags(["users", "manage", "rbac"]),
        define(
            Permission::UsersView,
            "View Users",
            "View user information and account details",
            PermissionCategory::Users,
            RiskLevel::Low,
        )
        .with_icon("User")
        .with_tags(["users", "view", "rbac"]),
        define(
            Permission::AnalyticsView,
            "View Analytics",
            "Access analytics dashboards and view reports",
            PermissionCategory::Analytics,
            RiskLevel::Low,
        )
        .with_icon("BarChart3")
        .with_tags(["analytics", "reports", "dashboard", "view"]),
        define(
            Permission::AnalyticsExport,
            "Export Analytics",
            "Export analytics data and generate reports",
            PermissionCategory::Analytics,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::AnalyticsView])
        .with_icon("Download")
        .with_tags(["analytics", "export", "reports"]),
        define(
            Permission::ServicesView,
            "View Services",
            "View service catalog and details",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("Package")
        .with_tags(["services", "view", "catalog"]),
        define(
            Permission::ServicesCreate,
            "Create Services",
            "Create new service entries",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::ServicesView])
        .with_icon("Plus")
        .with_tags(["services", "create", "catalog"]),
        define(
            Permission::ServicesEdit,
            "Edit Services",
            "Edit existing service information",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::ServicesView])
        .with_icon("Edit")
        .with_tags(["services", "edit", "catalog"]),
        define(
            Permission::ServicesDelete,
            "Delete Services",
            "Delete services from the catalog",
            PermissionCategory::Content,
            RiskLevel::High,
        )
        .with_dependencies([Permission::ServicesView])
        .with_icon("Trash")
        .with_tags(["services", "delete", "catalog"]),
        define(
            Permission::ServicesBulkEdit,
            "Bulk Edit Services",
            "Edit multiple services at once",
            PermissionCategory::Content,
            RiskLevel::High,
        )
        .with_dependencies([Permission::ServicesEdit])
        .with_icon("Zap")
        .with_tags(["services", "bulk", "edit"]),
        define(
            Permission::ServicesExport,
            "Export Services",
            "Export service data in various formats",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::ServicesView])
        .with_icon("Download")
        .with_tags(["services", "export", "data"]),
        define(
            Permission::ServicesAnalytics,
            "View Service Analytics",
            "View analytics for individual services",
            PermissionCategory::Analytics,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::ServicesView, Permission::AnalyticsView])
        .with_icon("BarChart3")
        .with_tags(["services", "analytics", "reports"]),
        define(
            Permission::ServicesManageFeatured,
            "Manage Featured Services",
            "Manage which services are featured in the catalog",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::ServicesView, Permission::ServicesEdit])
        .with_icon("Star")
        .with_tags(["services", "featured", "catalog"]),
        define(
            Permission::BookingSettingsView,
            "View Booking Settings",
            "View booking configuration and availability",
            PermissionCategory::Bookings,
            RiskLevel::Low,
        )
        .with_icon("Settings")
        .with_tags(["bookings", "settings", "view"]),
        define(
            Permission::BookingSettingsEdit,
            "Edit Booking Settings",
            "Modify booking configurations and availability",
            PermissionCategory::Bookings,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::BookingSettingsView])
        .with_icon("Settings")
        .with_tags(["bookings", "settings", "edit"]),
        define(
            Permission::BookingSettingsExport,
            "Export Booking Settings",
            "Export booking configuration data",
            PermissionCategory::Bookings,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::BookingSettingsView])
        .with_icon("Download")
        .with_tags(["bookings", "settings", "export"]),
        define(
            Permission::BookingSettingsImport,
            "Import Booking Settings",
            "Import booking configuration from file",
            PermissionCategory::Bookings,
            RiskLevel::High,
        )
        .with_dependencies([Permission::BookingSettingsEdit])
        .with_icon("Upload")
        .with_tags(["bookings", "settings", "import"]),
        define(
            Permission::BookingSettingsReset,
            "Reset Booking Settings",
            "Reset booking settings to defaults",
            PermissionCategory::Bookings,
            RiskLevel::Critical,
        )
        .with_dependencies([Permission::BookingSettingsEdit])
        .with_icon("RotateCcw")
        .with_tags(["bookings", "settings", "reset"]),
        define(
            Permission::OrgSettingsView,
            "View Organization Settings",
            "View general organization configuration",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Settings")
        .with_tags(["org", "settings", "view"]),
        define(
            Permission::OrgSettingsEdit,
            "Edit Organization Settings",
            "Modify organization configuration and branding",
            PermissionCategory::System,
            RiskLevel::High,
        )
        .with_dependencies([Permission::OrgSettingsView])
        .with_icon("Settings")
        .with_tags(["org", "settings", "edit"]),
        define(
            Permission::OrgSettingsExport,
            "Export Organization Settings",
            "Export organization configuration data",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::OrgSettingsView])
        .with_icon("Download")
        .with_tags(["org", "settings", "export"]),
        define(
            Permission::OrgSettingsImport,
            "Import Organization Settings",
            "Import organization configuration from file",
            PermissionCategory::System,
            RiskLevel::High,
        )
        .with_dependencies([Permission::OrgSettingsEdit])
        .with_icon("Upload")
        .with_tags(["org", "settings", "import"]),
        define(
            Permission::OrgSettingsReset,
            "Reset Organization Settings",
            "Reset organization settings to defaults",
            PermissionCategory::System,
            RiskLevel::Critical,
        )
        .with_dependencies([Permission::OrgSettingsEdit])
        .with_icon("RotateCcw")
        .with_tags(["org", "settings", "reset"]),
        define(
            Permission::FinancialSettingsView,
            "View Financial Settings",
            "View financial configuration and payment settings",
            PermissionCategory::Financial,
            RiskLevel::Medium,
        )
        .with_icon("DollarSign")
        .with_tags(["financial", "settings", "view"]),
        define(
            Permission::FinancialSettingsEdit,
            "Edit Financial Settings",
            "Modify financial configuration and payment methods",
            PermissionCategory::Financial,
            RiskLevel::Critical,
        )
        .with_dependencies([Permission::FinancialSettingsView])
        .with_icon("DollarSign")
        .with_tags(["financial", "settings", "edit"]),
        define(
            Permission::FinancialSettingsExport,
            "Export Financial Settings",
            "Export financial configuration and data",
            PermissionCategory::Financial,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::FinancialSettingsView])
        .with_icon("Download")
        .with_tags(["financial", "settings", "export"]),
        define(
            Permission::IntegrationHubView,
            "View Integration Settings",
            "View available integrations and status",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Link")
        .with_tags(["integration", "settings", "view"]),
        define(
            Permission::IntegrationHubEdit,
            "Edit Integration Settings",
            "Configure and manage integrations",
            PermissionCategory::System,
            RiskLevel::High,
        )
        .with_dependencies([Permission::IntegrationHubView])
        .with_icon("Link")
        .with_tags(["integration", "settings", "edit"]),
        define(
            Permission::IntegrationHubTest,
            "Test Integrations",
            "Test integration connections and functionality",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::IntegrationHubView])
        .with_icon("Zap")
        .with_tags(["integration", "test"]),
        define(
            Permission::IntegrationHubSecretsWrite,
            "Manage Integration Secrets",
            "Write and manage integration API keys and secrets",
            PermissionCategory::Security,
            RiskLevel::Critical,
        )
        .with_dependencies([Permission::IntegrationHubEdit])
        .with_icon("Lock")
        .with_tags(["integration", "secrets", "security"]),
        define(
            Permission::IntegrationsManage,
            "Manage Integrations",
            "Full management of filter bar integrations (Slack, Teams, Zapier, Webhooks)",
            PermissionCategory::System,
            RiskLevel::High,
        )
        .with_dependencies([Permission::IntegrationHubView])
        .with_icon("Plug")
        .with_tags(["integration", "manage", "slack", "teams", "zapier", "webhook"]),
        define(
            Permission::ClientSettingsView,
            "View Client Settings",
            "View client management configuration",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Settings")
        .with_tags(["client", "settings", "view"]),
        define(
            Permission::ClientSettingsEdit,
            "Edit Client Settings",
            "Modify client management configuration",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::ClientSettingsView])
        .with_icon("Settings")
        .with_tags(["client", "settings", "edit"]),
        define(
            Permission::ClientSettingsExport,
            "Export Client Settings",
            "Export client configuration data",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::ClientSettingsView])
        .with_icon("Download")
        .with_tags(["client", "settings", "export"]),
        define(
            Permission::ClientSettingsImport,
            "Import Client Settings",
            "Import client configuration from file",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::ClientSettingsEdit])
        .with_icon("Upload")
        .with_tags(["client", "settings", "import"]),
        define(
            Permission::TeamSettingsView,
            "View Team Settings",
            "View team management configuration",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Settings")
        .with_tags(["team", "settings", "view"]),
        define(
            Permission::TeamSettingsEdit,
            "Edit Team Settings",
            "Modify team management configuration",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::TeamSettingsView])
        .with_icon("Settings")
        .with_tags(["team", "settings", "edit"]),
        define(
            Permission::TeamSettingsExport,
            "Export Team Settings",
            "Export team configuration data",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::TeamSettingsView])
        .with_icon("Download")
        .with_tags(["team", "settings", "export"]),
        define(
            Permission::TeamSettingsImport,
            "Import Team Settings",
            "Import team configuration from file",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::TeamSettingsEdit])
        .with_icon("Upload")
        .with_tags(["team", "settings", "import"]),
        define(
            Permission::TaskWorkflowSettingsView,
            "View Task & Workflow Settings",
            "View task and workflow configuration",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Settings")
        .with_tags(["task", "workflow", "settings", "view"]),
        define(
            Permission::TaskWorkflowSettingsEdit,
            "Edit Task & Workflow Settings",
            "Modify task and workflow configuration",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::TaskWorkflowSettingsView])
        .with_icon("Settings")
        .with_tags(["task", "workflow", "settings", "edit"]),
        define(
            Permission::TaskWorkflowSettingsExport,
            "Export Task & Workflow Settings",
            "Export task and workflow configuration data",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::TaskWorkflowSettingsView])
        .with_icon("Download")
        .with_tags(["task", "workflow", "settings", "export"]),
        define(
            Permission::TaskWorkflowSettingsImport,
            "Import Task & Workflow Settings",
            "Import task and workflow configuration from file",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::TaskWorkflowSettingsEdit])
        .with_icon("Upload")
        .with_tags(["task", "workflow", "settings", "import"]),
        define(
            Permission::AnalyticsReportingSettingsView,
            "View Analytics & Reporting Settings",
            "View analytics and reporting configuration",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Settings")
        .with_tags(["analytics", "reporting", "settings", "view"]),
        define(
            Permission::AnalyticsReportingSettingsEdit,
            "Edit Analytics & Reporting Settings",
            "Modify analytics and reporting configuration",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::AnalyticsReportingSettingsView])
        .with_icon("Settings")
        .with_tags(["analytics", "reporting", "settings", "edit"]),
        define(
            Permission::AnalyticsReportingSettingsExport,
            "Export Analytics & Reporting Settings",
            "Export analytics and reporting configuration data",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::AnalyticsReportingSettingsView])
        .with_icon("Download")
        .with_tags(["analytics", "reporting", "settings", "export"]),
        define(
            Permission::AnalyticsReportingSettingsImport,
            "Import Analytics & Reporting Settings",
            "Import analytics and reporting configuration from file",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::AnalyticsReportingSettingsEdit])
        .with_icon("Upload")
        .with_tags(["analytics", "reporting", "settings", "import"]),
        define(
            Permission::CommunicationSettingsView,
            "View Communication Settings",
            "View communication and notification configuration",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Settings")
        .with_tags(["communication", "settings", "view"]),
        define(
            Permission::CommunicationSettingsEdit,
            "Edit Communication Settings",
            "Modify communication and notification configuration",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::CommunicationSettingsView])
        .with_icon("Settings")
        .with_tags(["communication", "settings", "edit"]),
        define(
            Permission::CommunicationSettingsExport,
            "Export Communication Settings",
            "Export communication configuration data",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::CommunicationSettingsView])
        .with_icon("Download")
        .with_tags(["communication", "settings", "export"]),
        define(
            Permission::CommunicationSettingsImport,
            "Import Communication Settings",
            "Import communication configuration from file",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::CommunicationSettingsEdit])
        .with_icon("Upload")
        .with_tags(["communication", "settings", "import"]),
        define(
            Permission::SecurityComplianceSettingsView,
            "View Security & Compliance Settings",
            "View security and compliance configuration",
            PermissionCategory::Security,
            RiskLevel::Low,
        )
        .with_icon("Shield")
        .with_tags(["security", "compliance", "settings", "view"]),
        define(
            Permission::SecurityComplianceSettingsEdit,
            "Edit Security & Compliance Settings",
            "Modify security and compliance configuration",
            PermissionCategory::Security,
            RiskLevel::Critical,
        )
        .with_dependencies([Permission::SecurityComplianceSettingsView])
        .with_icon("Shield")
        .with_tags(["security", "compliance", "settings", "edit"]),
        define(
            Permission::SystemAdminSettingsView,
            "View System Administration Settings",
            "View system administration configuration",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Settings")
        .with_tags(["system", "admin", "settings", "view"]),
        define(
            Permission::SystemAdminSettingsEdit,
            "Edit System Administration Settings",
            "Modify system administration configuration",
            PermissionCategory::System,
            RiskLevel::Critical,
        )
        .with_dependencies([Permission::SystemAdminSettingsView])
        .with_icon("Settings")
        .with_tags(["system", "admin", "settings", "edit"]),
        define(
            Permission::LanguagesView,
            "View Languages",
            "View available languages and localization settings",
            PermissionCategory::System,
            RiskLevel::Low,
        )
        .with_icon("Globe")
        .with_tags(["languages", "localization", "view"]),
        define(
            Permission::LanguagesManage,
            "Manage Languages",
            "Add, remove, and manage languages and localization",
            PermissionCategory::System,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::LanguagesView])
        .with_icon("Globe")
        .with_tags(["languages", "localization", "manage"]),
        define(
            Permission::ReportsCreate,
            "Create Reports",
            "Create new custom reports",
            PermissionCategory::Analytics,
            RiskLevel::Low,
        )
        .with_icon("PlusSquare")
        .with_tags(["reports", "create", "analytics"]),
        define(
            Permission::ReportsRead,
            "View Reports",
            "View existing reports and report templates",
            PermissionCategory::Analytics,
            RiskLevel::Low,
        )
        .with_icon("Eye")
        .with_tags(["reports", "view", "analytics"]),
        define(
            Permission::ReportsWrite,
            "Edit Reports",
            "Edit and modify existing reports",
            PermissionCategory::Analytics,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::ReportsRead])
        .with_icon("Edit")
        .with_tags(["reports", "edit", "analytics"]),
        define(
            Permission::ReportsDelete,
            "Delete Reports",
            "Delete reports and report templates",
            PermissionCategory::Analytics,
            RiskLevel::High,
        )
        .with_dependencies([Permission::ReportsRead])
        .with_icon("Trash")
        .with_tags(["reports", "delete", "analytics"]),
        define(
            Permission::ReportsGenerate,
            "Generate Reports",
            "Generate and export reports in various formats",
            PermissionCategory::Analytics,
            RiskLevel::Low,
        )
        .with_dependencies([Permission::ReportsRead])
        .with_icon("Download")
        .with_tags(["reports", "generate", "export", "analytics"]),
        define(
            Permission::UsersExport,
            "Export Users",
            "Export user data to CSV, Excel, PDF, and other formats",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("Download")
        .with_tags(["users", "export", "reports", "data"]),
        define(
            Permission::EntitiesCreate,
            "Create Entities",
            "Create new business entities and tax registrations",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_icon("Plus")
        .with_tags(["entities", "create", "business"]),
        define(
            Permission::EntitiesRead,
            "View Entities",
            "View entity information and registration details",
            PermissionCategory::Content,
            RiskLevel::Low,
        )
        .with_icon("Eye")
        .with_tags(["entities", "view", "business"]),
        define(
            Permission::EntitiesUpdate,
            "Edit Entities",
            "Update entity information and settings",
            PermissionCategory::Content,
            RiskLevel::Medium,
        )
        .with_dependencies([Permission::EntitiesRead])
        .with_icon("Edit")
        .with_tags(["entities", "update", "business"]),
        define(
            Permission::EntitiesDelete,
            "Delete Entities",
            "Archive or delete business entities",
            PermissionCategory::Content,
            RiskLevel::High,
        )
        .with_dependencies([Permission::EntitiesRead])
        .with_icon("Trash")
        .with_tags(["entities", "delete", "business"]),
    ]
}
