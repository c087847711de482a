use grantline_domain::RiskLevel;

use super::*;

impl PermissionEngine {
    /// Reduces a set to the highest risk level among its registered members.
    ///
    /// Empty sets and sets of unregistered identifiers are [`RiskLevel::Low`].
    #[must_use]
    pub fn calculate_risk_level(&self, permissions: &PermissionSet) -> RiskLevel {
        permissions
            .iter()
            .filter_map(|permission| self.registry.lookup(permission))
            .map(|metadata| metadata.risk)
            .max()
            .unwrap_or_default()
    }
}
