use std::collections::BTreeMap;

use grantline_domain::{PermissionCategory, PermissionMetadata};

use super::*;

impl PermissionEngine {
    /// Returns the role's conventional permission set; empty for unknown roles.
    #[must_use]
    pub fn get_common_permissions_for_role(&self, role: &str) -> PermissionSet {
        self.roles.permissions_for(role)
    }

    /// Finds permissions whose label, description, tags, or identifier
    /// contain `query`, ignoring case. Results follow registry order.
    #[must_use]
    pub fn search_permissions(&self, query: &str) -> Vec<PermissionId> {
        let needle = query.to_lowercase();

        self.registry
            .metadata()
            .iter()
            .filter(|metadata| {
                metadata.label.to_lowercase().contains(&needle)
                    || metadata.description.to_lowercase().contains(&needle)
                    || metadata
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
                    || metadata.key.as_str().to_lowercase().contains(&needle)
            })
            .map(|metadata| metadata.key.clone())
            .collect()
    }

    /// Returns the permissions in one category, in registry order.
    #[must_use]
    pub fn get_permissions_by_category(&self, category: PermissionCategory) -> Vec<PermissionId> {
        self.registry.by_category(category)
    }

    /// Groups permissions by category. Every declared category has an entry.
    #[must_use]
    pub fn get_permissions_by_categories(&self) -> BTreeMap<PermissionCategory, Vec<PermissionId>> {
        PermissionCategory::all()
            .iter()
            .map(|category| (*category, self.registry.by_category(*category)))
            .collect()
    }

    /// Returns every registry record in declaration order.
    #[must_use]
    pub fn get_all_permission_metadata(&self) -> &[PermissionMetadata] {
        self.registry.metadata()
    }
}
