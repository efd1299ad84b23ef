//! Integration tests for the request enforcement flow.
//!
//! Tests the complete path a panel request takes:
//! - settings store read → gate evaluation
//! - administrative setting changes taking effect between requests
//! - delegation endpoint work (scope resolution + validation) behind
//!   the gate

use moray_auth::{
    assignable_permissions, Actor, DelegationError, DelegationRequest, GrantedPermissions,
    PermissionCatalog, PermissionCategory, ServerId, UserId,
};
use moray_guard::{
    evaluate, GateDecision, InMemorySettings, SettingsSource, TwoFactorRequirement, SETTING_KEY,
    SETUP_ROUTE,
};

// =============================================================================
// Test Fixtures
// =============================================================================

fn ordinary_user() -> Actor {
    Actor::new(
        UserId::new(),
        GrantedPermissions::from_keys(["control.start", "user.create", "user.update"]),
    )
}

/// Two-category catalog used by the delegation scenarios.
fn server_catalog() -> PermissionCatalog {
    PermissionCatalog::new(vec![PermissionCategory::new("server", "Server management.")
        .key("create", "Create servers.")
        .key("delete", "Delete servers.")])
}

/// One request through the gate, then through the delegation endpoint
/// if allowed. Mirrors the order the panel applies: the gate decides
/// on the request as a whole before any endpoint logic runs.
fn request_delegation(
    settings: &InMemorySettings,
    actor: &Actor,
    catalog: &PermissionCatalog,
    request: DelegationRequest,
    can_mutate: bool,
) -> Result<Result<Vec<String>, DelegationError>, GateDecision> {
    let requirement = settings.two_factor_requirement();
    match evaluate(Some(actor), "server.users", requirement) {
        GateDecision::Allow => {
            let assignable = assignable_permissions(actor, catalog);
            Ok(request
                .validate(&assignable, can_mutate)
                .map(|validated| validated.into_permissions()))
        }
        blocked => Err(blocked),
    }
}

// =============================================================================
// Gate + Settings Store
// =============================================================================

mod gate_with_settings {
    use super::*;

    #[test]
    fn default_store_enforces_nothing() {
        let settings = InMemorySettings::new();
        let admin = Actor::new(UserId::new(), GrantedPermissions::none()).with_root_admin();

        let decision = evaluate(Some(&admin), "admin.settings", settings.two_factor_requirement());
        assert!(decision.is_allowed());
    }

    #[test]
    fn setting_change_applies_to_the_next_request() {
        let settings = InMemorySettings::new();
        let user = ordinary_user();

        let first = evaluate(Some(&user), "server.files", settings.two_factor_requirement());
        assert!(first.is_allowed());

        // Administrator flips the site to Everyone between requests.
        settings.put(SETTING_KEY, TwoFactorRequirement::Everyone.as_setting());

        let second = evaluate(Some(&user), "server.files", settings.two_factor_requirement());
        assert!(second.is_blocked());
    }

    #[test]
    fn enrolled_user_keeps_working_after_the_change() {
        let settings = InMemorySettings::new();
        settings.put(SETTING_KEY, TwoFactorRequirement::Everyone.as_setting());

        let enrolled = ordinary_user().with_two_factor_enrolled();
        let decision = evaluate(Some(&enrolled), "server.files", settings.two_factor_requirement());
        assert!(decision.is_allowed());
    }

    #[test]
    fn admins_only_gates_admins_but_not_users() {
        let settings = InMemorySettings::new();
        settings.put(SETTING_KEY, TwoFactorRequirement::AdminsOnly.as_setting());
        let requirement = settings.two_factor_requirement();

        let user = ordinary_user();
        assert!(evaluate(Some(&user), "server.files", requirement).is_allowed());

        // Enrollment does not exempt an administrator under this mode.
        let admin = Actor::new(UserId::new(), GrantedPermissions::none())
            .with_root_admin()
            .with_two_factor_enrolled();
        assert!(evaluate(Some(&admin), "admin.settings", requirement).is_blocked());
    }

    #[test]
    fn blocked_admin_can_still_reach_the_setup_surface() {
        let settings = InMemorySettings::new();
        settings.put(SETTING_KEY, TwoFactorRequirement::AdminsOnly.as_setting());
        let requirement = settings.two_factor_requirement();

        let admin = Actor::new(UserId::new(), GrantedPermissions::none()).with_root_admin();
        assert!(evaluate(Some(&admin), SETUP_ROUTE, requirement).is_allowed());
        assert!(evaluate(Some(&admin), "auth.logout", requirement).is_allowed());
        assert!(evaluate(Some(&admin), "admin.settings", requirement).is_blocked());
    }
}

// =============================================================================
// Delegation Behind the Gate
// =============================================================================

mod delegation_behind_gate {
    use super::*;

    #[test]
    fn holder_of_one_key_cannot_delegate_two() {
        let settings = InMemorySettings::new();
        let catalog = server_catalog();
        let actor = Actor::new(UserId::new(), GrantedPermissions::from_keys(["server.create"]));

        let request =
            DelegationRequest::for_existing(ServerId::new(), UserId::new(), ["server.create", "server.delete"]);
        let outcome = request_delegation(&settings, &actor, &catalog, request, true)
            .expect("gate is disabled by default");

        assert_eq!(
            outcome,
            Err(DelegationError::NotAssignable {
                offending: vec!["server.delete".to_string()],
            })
        );
    }

    #[test]
    fn wildcard_holder_delegates_any_catalog_key() {
        let settings = InMemorySettings::new();
        let catalog = server_catalog();
        let actor = Actor::new(UserId::new(), GrantedPermissions::from_keys(["*"]));

        let request = DelegationRequest::for_existing(ServerId::new(), UserId::new(), ["server.delete"]);
        let outcome = request_delegation(&settings, &actor, &catalog, request, true)
            .expect("gate is disabled by default");

        assert_eq!(outcome, Ok(vec!["server.delete".to_string()]));
    }

    #[test]
    fn view_only_actor_is_rejected_server_side() {
        let settings = InMemorySettings::new();
        let catalog = server_catalog();
        let actor = Actor::new(UserId::new(), GrantedPermissions::all());

        let request = DelegationRequest::for_existing(ServerId::new(), UserId::new(), ["server.create"]);
        let outcome = request_delegation(&settings, &actor, &catalog, request, false)
            .expect("gate is disabled by default");

        assert!(matches!(outcome, Err(DelegationError::Forbidden { .. })));
    }

    #[test]
    fn overlong_invite_email_fails_before_permission_analysis() {
        let settings = InMemorySettings::new();
        let catalog = server_catalog();
        let actor = Actor::new(UserId::new(), GrantedPermissions::all());

        let email = "a@b.com".repeat(30);
        assert!(email.len() > moray_auth::EMAIL_MAX_LEN);
        let request = DelegationRequest::invite(ServerId::new(), email, ["server.create"]);
        let outcome = request_delegation(&settings, &actor, &catalog, request, true)
            .expect("gate is disabled by default");

        assert!(matches!(outcome, Err(DelegationError::InvalidEmail { .. })));
    }

    #[test]
    fn unenrolled_actor_never_reaches_the_endpoint_under_everyone() {
        let settings = InMemorySettings::new();
        settings.put(SETTING_KEY, TwoFactorRequirement::Everyone.as_setting());
        let catalog = server_catalog();
        let actor = Actor::new(UserId::new(), GrantedPermissions::all());

        let request = DelegationRequest::for_existing(ServerId::new(), UserId::new(), ["server.create"]);
        let blocked = request_delegation(&settings, &actor, &catalog, request, true)
            .expect_err("gate must block");

        let GateDecision::Redirect { location, .. } = blocked else {
            panic!("expected a redirect");
        };
        assert_eq!(location, SETUP_ROUTE);
    }

    #[test]
    fn accepted_requests_are_always_within_the_assignable_scope() {
        let catalog = server_catalog();
        let actors = [
            Actor::new(UserId::new(), GrantedPermissions::from_keys(["server.create"])),
            Actor::new(UserId::new(), GrantedPermissions::all()),
            Actor::new(UserId::new(), GrantedPermissions::none()).with_root_admin(),
            Actor::new(UserId::new(), GrantedPermissions::none()),
        ];
        let requests: &[&[&str]] = &[
            &[],
            &["server.create"],
            &["server.delete"],
            &["server.create", "server.delete"],
        ];

        for actor in &actors {
            let assignable = assignable_permissions(actor, &catalog);
            for keys in requests {
                let request = DelegationRequest::for_existing(ServerId::new(), UserId::new(), keys.iter().copied());
                if let Ok(validated) = request.validate(&assignable, true) {
                    for key in validated.permissions() {
                        assert!(
                            assignable.contains(key),
                            "accepted key {key} outside assignable scope {assignable:?}"
                        );
                    }
                }
            }
        }
    }
}

// =============================================================================
// Payload Shapes
// =============================================================================

mod payload_shapes {
    use super::*;

    #[test]
    fn blocked_decision_serializes_for_the_frontend() {
        let settings = InMemorySettings::new();
        settings.put(SETTING_KEY, TwoFactorRequirement::Everyone.as_setting());

        let user = ordinary_user();
        let decision = evaluate(Some(&user), "server.files", settings.two_factor_requirement());

        let json = serde_json::to_value(&decision).expect("serialize");
        assert_eq!(json["decision"], "redirect");
        assert_eq!(json["location"], "account.security");
        assert_eq!(json["notice"]["severity"], "danger");
        assert!(json["notice"]["message"]
            .as_str()
            .expect("message is a string")
            .contains("required 2FA"));
    }

    #[test]
    fn stored_wildcard_grant_round_trips_through_the_actor() {
        let json = r#"{
            "id": "7b1f44a5-5dcb-4a9a-a43c-1f2b6f0f8a2e",
            "root_admin": false,
            "permissions": ["*"],
            "two_factor_enrolled": true
        }"#;
        let actor: Actor = serde_json::from_str(json).expect("deserialize");
        assert!(actor.permissions().is_all());
        assert!(actor.two_factor_enrolled());
    }
}
