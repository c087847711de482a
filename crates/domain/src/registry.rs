//! Immutable permission registry and its construction-time checks.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use grantline_core::AppError;
use thiserror::Error;

use crate::{PermissionCategory, PermissionId, PermissionMetadata, PermissionSet};

mod builtin;

/// Edge type between two registry entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryRelation {
    /// The referenced permission must also be held.
    Dependency,
    /// The referenced permission should not be held at the same time.
    Conflict,
}

impl Display for RegistryRelation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dependency => formatter.write_str("dependency"),
            Self::Conflict => formatter.write_str("conflict"),
        }
    }
}

/// Authoring mistakes detected while building a registry or role catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same identifier was registered twice.
    #[error("permission '{0}' is registered more than once")]
    DuplicatePermission(PermissionId),

    /// A dependency or conflict points at an undeclared identifier.
    #[error("permission '{permission}' declares unknown {relation} '{reference}'")]
    UnknownReference {
        /// Declaring permission.
        permission: PermissionId,
        /// Undeclared identifier.
        reference: PermissionId,
        /// Kind of edge.
        relation: RegistryRelation,
    },

    /// A permission lists itself as a dependency or conflict.
    #[error("permission '{permission}' declares itself as a {relation}")]
    SelfReference {
        /// Offending permission.
        permission: PermissionId,
        /// Kind of edge.
        relation: RegistryRelation,
    },

    /// Dependencies form a cycle. The path starts and ends on the same permission.
    #[error("dependency cycle detected: {}", format_path(.path))]
    DependencyCycle {
        /// Permissions along the cycle.
        path: Vec<PermissionId>,
    },

    /// A role catalogue entry names an undeclared permission.
    #[error("role '{role}' grants unknown permission '{permission}'")]
    UnknownRolePermission {
        /// Role name.
        role: String,
        /// Undeclared identifier.
        permission: PermissionId,
    },

    /// The same role name appears twice in a role catalogue.
    #[error("role '{0}' is declared more than once")]
    DuplicateRole(String),
}

impl From<RegistryError> for AppError {
    fn from(value: RegistryError) -> Self {
        Self::Validation(value.to_string())
    }
}

fn format_path(path: &[PermissionId]) -> String {
    path.iter()
        .map(PermissionId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Read-only table of permission metadata in declaration order.
#[derive(Debug, Clone)]
pub struct PermissionRegistry {
    entries: Vec<PermissionMetadata>,
    index: HashMap<PermissionId, usize>,
}

impl PermissionRegistry {
    /// Starts building a custom registry.
    #[must_use]
    pub fn builder() -> PermissionRegistryBuilder {
        PermissionRegistryBuilder::default()
    }

    /// Builds the registry shipped with the product.
    pub fn builtin() -> Result<Self, RegistryError> {
        builtin::builtin_metadata()
            .into_iter()
            .fold(Self::builder(), PermissionRegistryBuilder::register)
            .build()
    }

    /// Returns metadata for a permission, if registered.
    #[must_use]
    pub fn lookup(&self, permission: &PermissionId) -> Option<&PermissionMetadata> {
        self.index
            .get(permission)
            .and_then(|position| self.entries.get(*position))
    }

    /// Returns whether the permission is registered.
    #[must_use]
    pub fn contains(&self, permission: &PermissionId) -> bool {
        self.index.contains_key(permission)
    }

    /// Returns the declaration position of a permission.
    #[must_use]
    pub fn position(&self, permission: &PermissionId) -> Option<usize> {
        self.index.get(permission).copied()
    }

    /// Iterates registered permissions in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &PermissionId> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Returns every metadata record in declaration order.
    #[must_use]
    pub fn metadata(&self) -> &[PermissionMetadata] {
        self.entries.as_slice()
    }

    /// Returns permissions of one category in declaration order.
    #[must_use]
    pub fn by_category(&self, category: PermissionCategory) -> Vec<PermissionId> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Returns the full permission universe as a set.
    #[must_use]
    pub fn universe(&self) -> PermissionSet {
        self.all().cloned().collect()
    }

    /// Number of registered permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no permission is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Orders identifiers by declaration position.
    ///
    /// Unregistered identifiers sort after registered ones, by identifier.
    #[must_use]
    pub fn in_declaration_order<'a, I>(&self, permissions: I) -> Vec<PermissionId>
    where
        I: IntoIterator<Item = &'a PermissionId>,
    {
        let mut ordered: Vec<(usize, &PermissionId)> = permissions
            .into_iter()
            .map(|permission| (self.position(permission).unwrap_or(usize::MAX), permission))
            .collect();
        ordered.sort();
        ordered
            .into_iter()
            .map(|(_, permission)| permission.clone())
            .collect()
    }
}

/// Collects metadata records and validates them into a [`PermissionRegistry`].
#[derive(Debug, Default)]
pub struct PermissionRegistryBuilder {
    entries: Vec<PermissionMetadata>,
}

impl PermissionRegistryBuilder {
    /// Adds one metadata record.
    #[must_use]
    pub fn register(mut self, metadata: PermissionMetadata) -> Self {
        self.entries.push(metadata);
        self
    }

    /// Validates the collected records and freezes them.
    pub fn build(self) -> Result<PermissionRegistry, RegistryError> {
        let mut index = HashMap::with_capacity(self.entries.len());
        for (position, entry) in self.entries.iter().enumerate() {
            if index.insert(entry.key.clone(), position).is_some() {
                return Err(RegistryError::DuplicatePermission(entry.key.clone()));
            }
        }

        for entry in &self.entries {
            check_references(entry, &entry.dependencies, RegistryRelation::Dependency, &index)?;
            check_references(entry, &entry.conflicts, RegistryRelation::Conflict, &index)?;
        }

        if let Some(path) = find_dependency_cycle(&self.entries, &index) {
            return Err(RegistryError::DependencyCycle { path });
        }

        Ok(PermissionRegistry {
            entries: self.entries,
            index,
        })
    }
}

fn check_references(
    entry: &PermissionMetadata,
    references: &[PermissionId],
    relation: RegistryRelation,
    index: &HashMap<PermissionId, usize>,
) -> Result<(), RegistryError> {
    for reference in references {
        if reference == &entry.key {
            return Err(RegistryError::SelfReference {
                permission: entry.key.clone(),
                relation,
            });
        }

        if !index.contains_key(reference) {
            return Err(RegistryError::UnknownReference {
                permission: entry.key.clone(),
                reference: reference.clone(),
                relation,
            });
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

fn find_dependency_cycle(
    entries: &[PermissionMetadata],
    index: &HashMap<PermissionId, usize>,
) -> Option<Vec<PermissionId>> {
    let mut states = vec![VisitState::Unvisited; entries.len()];
    let mut path = Vec::new();

    (0..entries.len()).find_map(|start| {
        if states[start] == VisitState::Unvisited {
            visit_dependencies(start, entries, index, &mut states, &mut path)
        } else {
            None
        }
    })
}

fn visit_dependencies(
    node: usize,
    entries: &[PermissionMetadata],
    index: &HashMap<PermissionId, usize>,
    states: &mut [VisitState],
    path: &mut Vec<usize>,
) -> Option<Vec<PermissionId>> {
    states[node] = VisitState::InProgress;
    path.push(node);

    for dependency in &entries[node].dependencies {
        let Some(&next) = index.get(dependency) else {
            continue;
        };

        match states[next] {
            VisitState::InProgress => {
                let start = path.iter().position(|step| *step == next).unwrap_or(0);
                let mut cycle: Vec<PermissionId> = path[start..]
                    .iter()
                    .map(|step| entries[*step].key.clone())
                    .collect();
                cycle.push(entries[next].key.clone());
                return Some(cycle);
            }
            VisitState::Unvisited => {
                if let Some(cycle) = visit_dependencies(next, entries, index, states, path) {
                    return Some(cycle);
                }
            }
            VisitState::Done => {}
        }
    }

    path.pop();
    states[node] = VisitState::Done;
    None
}

#[cfg(test)]
mod tests {
    use crate::{
        Permission, PermissionCategory, PermissionId, PermissionMetadata, RiskLevel,
    };

    use super::{PermissionRegistry, RegistryError, RegistryRelation};

    fn id(value: &str) -> PermissionId {
        PermissionId::new(value).unwrap_or_else(|_| PermissionId::from(Permission::UsersView))
    }

    fn entry(key: &str) -> PermissionMetadata {
        PermissionMetadata::new(
            id(key),
            key,
            format!("{key} description"),
            PermissionCategory::Content,
            RiskLevel::Low,
        )
    }

    #[test]
    fn builtin_registry_builds() {
        let registry = PermissionRegistry::builtin();
        assert!(registry.is_ok());

        let registry = registry.ok();
        assert_eq!(
            registry.as_ref().map(PermissionRegistry::len),
            Some(Permission::all().len())
        );
    }

    #[test]
    fn builtin_registry_follows_declaration_order() {
        let Ok(registry) = PermissionRegistry::builtin() else {
            panic!("builtin registry must build");
        };

        let declared: Vec<&str> = registry.all().map(PermissionId::as_str).collect();
        let expected: Vec<&str> = Permission::all().iter().map(Permission::as_str).collect();
        assert_eq!(declared, expected);
    }

    #[test]
    fn builtin_registry_has_no_dependency_on_missing_metadata() {
        let Ok(registry) = PermissionRegistry::builtin() else {
            panic!("builtin registry must build");
        };

        for metadata in registry.metadata() {
            assert_eq!(registry.lookup(&metadata.key), Some(metadata));
            for dependency in &metadata.dependencies {
                assert!(registry.contains(dependency));
            }
        }
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let result = PermissionRegistry::builder()
            .register(entry("a"))
            .register(entry("a"))
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::DuplicatePermission(key)) if key.as_str() == "a"
        ));
    }

    #[test]
    fn unknown_dependency_is_rejected() {
        let result = PermissionRegistry::builder()
            .register(entry("a").with_dependencies([id("ghost")]))
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::UnknownReference {
                relation: RegistryRelation::Dependency,
                ..
            })
        ));
    }

    #[test]
    fn unknown_conflict_is_rejected() {
        let result = PermissionRegistry::builder()
            .register(entry("a").with_conflicts([id("ghost")]))
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::UnknownReference {
                relation: RegistryRelation::Conflict,
                ..
            })
        ));
    }

    #[test]
    fn self_dependency_is_rejected() {
        let result = PermissionRegistry::builder()
            .register(entry("a").with_dependencies([id("a")]))
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::SelfReference {
                relation: RegistryRelation::Dependency,
                ..
            })
        ));
    }

    #[test]
    fn self_conflict_is_rejected() {
        let result = PermissionRegistry::builder()
            .register(entry("a").with_conflicts([id("a")]))
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::SelfReference {
                relation: RegistryRelation::Conflict,
                ..
            })
        ));
    }

    #[test]
    fn dependency_cycle_is_rejected_with_path() {
        let result = PermissionRegistry::builder()
            .register(entry("a").with_dependencies([id("b")]))
            .register(entry("b").with_dependencies([id("c")]))
            .register(entry("c").with_dependencies([id("a")]))
            .build();

        let Err(RegistryError::DependencyCycle { path }) = result else {
            panic!("expected a dependency cycle");
        };
        let path: Vec<&str> = path.iter().map(PermissionId::as_str).collect();
        assert_eq!(path, vec!["a", "b", "c", "a"]);
    }

    #[test]
    fn mutual_conflicts_are_allowed() {
        let result = PermissionRegistry::builder()
            .register(entry("a").with_conflicts([id("b")]))
            .register(entry("b").with_conflicts([id("a")]))
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn shared_dependency_is_not_a_cycle() {
        let result = PermissionRegistry::builder()
            .register(entry("base"))
            .register(entry("left").with_dependencies([id("base")]))
            .register(entry("right").with_dependencies([id("base")]))
            .register(entry("top").with_dependencies([id("left"), id("right")]))
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn declaration_order_puts_unknown_identifiers_last() {
        let Ok(registry) = PermissionRegistry::builder()
            .register(entry("z"))
            .register(entry("a"))
            .build()
        else {
            panic!("registry must build");
        };

        let input = [id("unknown"), id("a"), id("z")];
        let ordered = registry.in_declaration_order(input.iter());
        let ordered: Vec<&str> = ordered.iter().map(PermissionId::as_str).collect();
        assert_eq!(ordered, vec!["z", "a", "unknown"]);
    }

    #[test]
    fn by_category_filters_in_declaration_order() {
        let Ok(registry) = PermissionRegistry::builtin() else {
            panic!("builtin registry must build");
        };

        let users = registry.by_category(PermissionCategory::Users);
        let users: Vec<&str> = users.iter().map(PermissionId::as_str).collect();
        assert_eq!(users, vec!["users.manage", "users.view"]);
    }
}
