use std::sync::Arc;

use grantline_domain::{
    BuiltinRole, Permission, PermissionCategory, PermissionId, PermissionMetadata,
    PermissionRegistry, PermissionSet, RiskLevel, RoleCatalog, RoleGrant,
};
use proptest::prelude::*;

use super::{
    DEPENDENCIES_SATISFIED_CONFIDENCE, IssueSeverity, MAX_SUGGESTIONS, PermissionEngine,
    ROLE_CONVENTION_CONFIDENCE, SuggestionAction, UserContext, ValidationIssueKind,
};

fn builtin_engine() -> PermissionEngine {
    let Ok(registry) = PermissionRegistry::builtin() else {
        panic!("builtin registry must build");
    };
    let Ok(roles) = RoleCatalog::builtin(&registry) else {
        panic!("builtin role catalog must build");
    };
    PermissionEngine::new(Arc::new(registry), Arc::new(roles))
}

fn id(value: &str) -> PermissionId {
    let Ok(permission) = PermissionId::new(value) else {
        panic!("'{value}' must be a valid identifier");
    };
    permission
}

fn set(values: &[&str]) -> PermissionSet {
    values.iter().map(|value| id(value)).collect()
}

fn ids(values: &[&str]) -> Vec<PermissionId> {
    values.iter().map(|value| id(value)).collect()
}

/// Small document/vault registry with one conflict and two critical entries.
fn documents_registry() -> PermissionRegistry {
    let Ok(registry) = PermissionRegistry::builder()
        .register(PermissionMetadata::new(
            id("doc.read"),
            "Read Documents",
            "Read any document",
            PermissionCategory::Content,
            RiskLevel::Low,
        ))
        .register(
            PermissionMetadata::new(
                id("doc.write"),
                "Write Documents",
                "Edit any document",
                PermissionCategory::Content,
                RiskLevel::Medium,
            )
            .with_dependencies([id("doc.read")]),
        )
        .register(
            PermissionMetadata::new(
                id("doc.audit"),
                "Audit Documents",
                "Review document history independently of authors",
                PermissionCategory::Security,
                RiskLevel::High,
            )
            .with_conflicts([id("doc.write")]),
        )
        .register(PermissionMetadata::new(
            id("vault.open"),
            "Open Vault",
            "Read stored secrets",
            PermissionCategory::Security,
            RiskLevel::Critical,
        ))
        .register(
            PermissionMetadata::new(
                id("vault.purge"),
                "Purge Vault",
                "Delete stored secrets",
                PermissionCategory::Security,
                RiskLevel::Critical,
            )
            .with_dependencies([id("vault.open")]),
        )
        .build()
    else {
        panic!("document registry must build");
    };
    registry
}

fn documents_engine(role: &str, permissions: &[&str]) -> PermissionEngine {
    let registry = documents_registry();
    let grants = [(role, RoleGrant::Permissions(set(permissions)))];
    let Ok(catalog) = RoleCatalog::new(&registry, grants) else {
        panic!("document roles must resolve");
    };
    PermissionEngine::new(Arc::new(registry), Arc::new(catalog))
}

#[test]
fn diff_partitions_unregistered_identifiers() {
    let engine = builtin_engine();

    let diff = engine.calculate_diff(&set(&["a", "b"]), &set(&["b", "c"]));

    assert_eq!(diff.added, ids(&["c"]));
    assert_eq!(diff.removed, ids(&["a"]));
    assert_eq!(diff.unchanged, ids(&["b"]));
    assert_eq!(diff.total, 2);
}

#[test]
fn diff_lists_follow_registry_order() {
    let engine = builtin_engine();

    let diff = engine.calculate_diff(
        &PermissionSet::new(),
        &set(&["users.view", "zz.custom", "service_requests.create"]),
    );

    assert_eq!(
        diff.added,
        ids(&["service_requests.create", "users.view", "zz.custom"])
    );
}

#[test]
fn missing_dependency_is_an_error() {
    let engine = builtin_engine();

    let result = engine.validate(&set(&["users.manage"]));

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    let issue = &result.errors[0];
    assert_eq!(issue.kind, ValidationIssueKind::MissingDependency);
    assert_eq!(issue.severity, IssueSeverity::Error);
    assert_eq!(issue.permission, Permission::UsersManage);
    assert_eq!(issue.related, ids(&["users.view"]));
    assert_eq!(issue.message, "Requires: View Users");
    assert_eq!(result.risk_level, RiskLevel::Critical);
}

#[test]
fn satisfied_dependencies_validate_cleanly() {
    let engine = builtin_engine();

    let result = engine.validate(&set(&["users.view", "users.manage"]));

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn multiple_critical_permissions_warn_without_invalidating() {
    let engine = builtin_engine();

    let result = engine.validate(&set(&[
        "users.view",
        "users.manage",
        "financial.settings.view",
        "financial.settings.edit",
    ]));

    assert!(result.is_valid);
    let combinations: Vec<_> = result
        .warnings
        .iter()
        .filter(|issue| issue.kind == ValidationIssueKind::UnusualCombination)
        .collect();
    assert_eq!(combinations.len(), 1);
    assert_eq!(combinations[0].permission, Permission::UsersManage);
    assert_eq!(combinations[0].related, ids(&["financial.settings.edit"]));
    assert_eq!(combinations[0].severity, IssueSeverity::Warning);
}

#[test]
fn single_critical_permission_does_not_warn() {
    let engine = builtin_engine();

    let result = engine.validate(&set(&["users.view", "users.manage"]));

    assert!(
        result
            .warnings
            .iter()
            .all(|issue| issue.kind != ValidationIssueKind::UnusualCombination)
    );
}

#[test]
fn held_conflict_is_a_warning() {
    let engine = documents_engine("READER", &["doc.read"]);

    let result = engine.validate(&set(&["doc.read", "doc.write", "doc.audit"]));

    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1);
    let issue = &result.warnings[0];
    assert_eq!(issue.kind, ValidationIssueKind::Conflict);
    assert_eq!(issue.permission, id("doc.audit"));
    assert_eq!(issue.related, ids(&["doc.write"]));
    assert_eq!(issue.message, "Conflicts with: Write Documents");
    assert_eq!(result.risk_level, RiskLevel::High);
}

// Unregistered identifiers are currently accepted without any issue. If they
// should become errors, this test is the one to change.
#[test]
fn unregistered_permissions_pass_validation_unchecked() {
    let engine = builtin_engine();

    let result = engine.validate(&set(&["ghost.permission"]));

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn risk_level_is_maximum_over_set() {
    let engine = builtin_engine();

    assert_eq!(
        engine.calculate_risk_level(&PermissionSet::new()),
        RiskLevel::Low
    );
    assert_eq!(
        engine.calculate_risk_level(&set(&["users.view", "service_requests.update"])),
        RiskLevel::Medium
    );
    assert_eq!(
        engine.calculate_risk_level(&set(&["users.view", "users.manage"])),
        RiskLevel::Critical
    );
}

#[test]
fn unknown_role_has_no_common_permissions() {
    let engine = builtin_engine();

    assert!(engine.get_common_permissions_for_role("UNKNOWN_ROLE").is_empty());
}

#[test]
fn common_permissions_grow_with_role_seniority() {
    let engine = builtin_engine();

    let member = engine.get_common_permissions_for_role("TEAM_MEMBER").len();
    let lead = engine.get_common_permissions_for_role("TEAM_LEAD").len();
    let admin = engine.get_common_permissions_for_role("ADMIN").len();

    assert!(member <= lead);
    assert!(lead <= admin);
    assert_eq!(admin, engine.registry().len());
}

#[test]
fn client_suggestions_come_from_role_convention() {
    let engine = builtin_engine();

    let suggestions =
        engine.get_suggestions("CLIENT", &PermissionSet::new(), &UserContext::default());

    let permissions: Vec<_> = suggestions
        .iter()
        .map(|suggestion| suggestion.permission.clone())
        .collect();
    assert_eq!(
        permissions,
        ids(&[
            "service_requests.create",
            "service_requests.read.own",
            "tasks.read.assigned",
        ])
    );
    assert!(suggestions.iter().all(|suggestion| {
        suggestion.action == SuggestionAction::Add
            && suggestion.confidence == ROLE_CONVENTION_CONFIDENCE
            && suggestion.reason == "Commonly granted to CLIENT users"
    }));
}

#[test]
fn suggestions_include_permissions_with_satisfied_dependencies() {
    let engine = documents_engine("AUDITOR", &["doc.read", "doc.audit"]);

    let suggestions = engine.get_suggestions(
        "AUDITOR",
        &set(&["doc.read"]),
        &UserContext::default(),
    );

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].permission, id("doc.audit"));
    assert_eq!(suggestions[0].confidence, ROLE_CONVENTION_CONFIDENCE);
    assert_eq!(suggestions[1].permission, id("doc.write"));
    assert_eq!(suggestions[1].confidence, DEPENDENCIES_SATISFIED_CONFIDENCE);
    assert_eq!(suggestions[1].reason, "All dependencies are present");
}

#[test]
fn duplicate_candidates_keep_role_convention() {
    let engine = documents_engine("WRITER", &["doc.read", "doc.write"]);

    let suggestions =
        engine.get_suggestions("WRITER", &set(&["doc.read"]), &UserContext::default());

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].permission, id("doc.write"));
    assert_eq!(suggestions[0].confidence, ROLE_CONVENTION_CONFIDENCE);
}

#[test]
fn suggestions_that_would_break_dependencies_are_dropped() {
    let engine = documents_engine("WRITER", &["doc.write"]);

    let suggestions =
        engine.get_suggestions("WRITER", &PermissionSet::new(), &UserContext::default());

    assert!(suggestions.is_empty());
}

#[test]
fn unknown_role_yields_no_suggestions() {
    let engine = documents_engine("READER", &["doc.read"]);

    let suggestions =
        engine.get_suggestions("UNKNOWN_ROLE", &set(&["doc.read"]), &UserContext::default());

    assert!(suggestions.is_empty());
}

#[test]
fn suggestions_are_truncated() {
    let permissions: Vec<PermissionId> = (0..15)
        .map(|index| id(&format!("bulk.p{index:02}")))
        .collect();
    let registry = permissions
        .iter()
        .fold(PermissionRegistry::builder(), |builder, permission| {
            builder.register(PermissionMetadata::new(
                permission.clone(),
                permission.as_str(),
                "Bulk permission",
                PermissionCategory::Content,
                RiskLevel::Low,
            ))
        })
        .build();
    let Ok(registry) = registry else {
        panic!("bulk registry must build");
    };
    let Ok(catalog) = RoleCatalog::new(&registry, [("BULK", RoleGrant::AllPermissions)]) else {
        panic!("bulk role must resolve");
    };
    let engine = PermissionEngine::new(Arc::new(registry), Arc::new(catalog));

    let suggestions =
        engine.get_suggestions("BULK", &PermissionSet::new(), &UserContext::default());

    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    assert_eq!(suggestions[0].permission, id("bulk.p00"));
}

#[test]
fn user_context_does_not_change_ranking() {
    let engine = builtin_engine();
    let current = set(&["service_requests.read.all"]);
    let context = UserContext {
        department: Some("Operations".to_owned()),
        team: Some("Dispatch".to_owned()),
        job_title: Some("Coordinator".to_owned()),
        recent_access: ids(&["tasks.create"]),
    };

    assert_eq!(
        engine.get_suggestions("TEAM_MEMBER", &current, &context),
        engine.get_suggestions("TEAM_MEMBER", &current, &UserContext::default())
    );
}

#[test]
fn grant_requires_dependencies() {
    let engine = builtin_engine();
    let manage = PermissionId::from(Permission::UsersManage);

    assert!(!engine.can_grant_permission(&manage, &PermissionSet::new(), None));
    assert!(engine.can_grant_permission(&manage, &set(&["users.view"]), None));
}

#[test]
fn full_admin_set_overrides_grant_checks() {
    let engine = builtin_engine();
    let manage = PermissionId::from(Permission::UsersManage);
    let universe = engine.registry().universe();
    let partial = set(&["users.view", "users.manage"]);

    assert!(engine.can_grant_permission(&manage, &PermissionSet::new(), Some(&universe)));
    assert!(!engine.can_grant_permission(&manage, &PermissionSet::new(), Some(&partial)));
    assert!(engine.can_grant_permission(
        &id("ghost.permission"),
        &PermissionSet::new(),
        Some(&universe)
    ));

    let mut oversized = universe;
    oversized.insert(id("extra.custom"));
    assert_eq!(oversized.len(), engine.registry().len() + 1);
    assert!(!engine.can_grant_permission(&manage, &PermissionSet::new(), Some(&oversized)));
    assert!(engine.can_grant_permission(&manage, &set(&["users.view"]), Some(&oversized)));
}

#[test]
fn unregistered_permission_is_never_granted() {
    let engine = builtin_engine();

    assert!(!engine.can_grant_permission(
        &id("ghost.permission"),
        &PermissionSet::new(),
        None
    ));
}

#[test]
fn held_conflict_blocks_grant() {
    let engine = documents_engine("READER", &["doc.read"]);

    assert!(!engine.can_grant_permission(
        &id("doc.audit"),
        &set(&["doc.read", "doc.write"]),
        None
    ));
    assert!(engine.can_grant_permission(&id("doc.audit"), &set(&["doc.read"]), None));
}

#[test]
fn search_matches_label_tags_and_identifier() {
    let engine = builtin_engine();

    let by_label = engine.search_permissions("MANAGE USERS");
    assert_eq!(by_label, ids(&["users.manage"]));

    let by_tag = engine.search_permissions("rbac");
    assert_eq!(by_tag, ids(&["users.manage", "users.view"]));

    let by_identifier = engine.search_permissions("users.view");
    assert!(by_identifier.contains(&id("users.view")));

    assert!(engine.search_permissions("no-such-permission").is_empty());
}

#[test]
fn search_keeps_surrounding_whitespace() {
    let engine = documents_engine("READER", &["doc.read"]);

    assert_eq!(
        engine.search_permissions("READ"),
        ids(&["doc.read", "vault.open"])
    );
    assert!(engine.search_permissions(" read").is_empty());
    assert_eq!(
        engine.search_permissions("").len(),
        engine.get_all_permission_metadata().len()
    );
}

#[test]
fn categories_cover_every_declared_category() {
    let engine = builtin_engine();

    let grouped = engine.get_permissions_by_categories();

    assert_eq!(grouped.len(), PermissionCategory::all().len());
    let total: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(total, engine.get_all_permission_metadata().len());
    assert_eq!(
        grouped.get(&PermissionCategory::Users).cloned().unwrap_or_default(),
        engine.get_permissions_by_category(PermissionCategory::Users)
    );
}

fn permission_set() -> impl Strategy<Value = PermissionSet> {
    (
        prop::sample::subsequence(Permission::all().to_vec(), 0..=24),
        prop::collection::vec("[a-z]{1,6}", 0..3),
    )
        .prop_map(|(known, unknown)| {
            let mut permissions: PermissionSet = known.into_iter().collect();
            for value in unknown {
                if let Ok(permission) = PermissionId::new(value) {
                    permissions.insert(permission);
                }
            }
            permissions
        })
}

proptest! {
    #[test]
    fn prop_diff_is_a_disjoint_partition(current in permission_set(), target in permission_set()) {
        let engine = builtin_engine();
        let diff = engine.calculate_diff(&current, &target);

        for permission in &diff.added {
            prop_assert!(!diff.removed.contains(permission));
            prop_assert!(!diff.unchanged.contains(permission));
        }
        for permission in &diff.removed {
            prop_assert!(!diff.unchanged.contains(permission));
        }

        let rebuilt: PermissionSet = diff.added.iter().chain(&diff.unchanged).cloned().collect();
        prop_assert_eq!(rebuilt, target.clone());
        prop_assert_eq!(diff.total, target.len());
    }

    #[test]
    fn prop_diff_of_identical_sets_is_unchanged(permissions in permission_set()) {
        let engine = builtin_engine();
        let diff = engine.calculate_diff(&permissions, &permissions);

        prop_assert!(diff.added.is_empty());
        prop_assert!(diff.removed.is_empty());
        prop_assert_eq!(diff.unchanged.len(), permissions.len());
    }

    #[test]
    fn prop_validate_is_deterministic_and_agrees_with_risk(permissions in permission_set()) {
        let engine = builtin_engine();
        let first = engine.validate(&permissions);
        let second = engine.validate(&permissions);

        prop_assert_eq!(first.risk_level, engine.calculate_risk_level(&permissions));
        prop_assert_eq!(first.is_valid, first.errors.is_empty());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_suggestions_are_bounded_sorted_and_valid(
        role in prop::sample::select(BuiltinRole::all().to_vec()),
        current in permission_set(),
    ) {
        let engine = builtin_engine();
        let suggestions = engine.get_suggestions(role.as_str(), &current, &UserContext::default());

        prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);
        prop_assert!(suggestions.windows(2).all(|pair| pair[0].confidence >= pair[1].confidence));
        for suggestion in &suggestions {
            prop_assert!(engine.validate(&suggestion.applied_to(&current)).is_valid);
        }
    }

    #[test]
    fn prop_grant_into_empty_set_tracks_dependencies(
        permission in prop::sample::select(Permission::all().to_vec()),
    ) {
        let engine = builtin_engine();
        let permission = PermissionId::from(permission);
        let has_dependencies = engine
            .registry()
            .lookup(&permission)
            .is_some_and(|metadata| !metadata.dependencies.is_empty());

        prop_assert_eq!(
            engine.can_grant_permission(&permission, &PermissionSet::new(), None),
            !has_dependencies
        );
    }
}
