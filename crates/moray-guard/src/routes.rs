//! Routes exempt from two-factor enforcement.
//!
//! A user who has not completed enrollment must still be able to reach
//! the pages that let them comply, and the exit. Everything else is
//! gated.

/// Route identifiers the gate never blocks, regardless of the active
/// requirement.
///
/// The set covers exactly the bootstrap surface:
///
/// - the security overview and setup page
/// - token revocation and enrollment confirmation
/// - disabling an existing factor
/// - the challenge page itself (an enrolled user mid-login)
/// - logout
///
/// # Matching
///
/// Route identifiers are opaque names supplied by the routing
/// collaborator and are compared exactly, case-sensitively.
pub const EXEMPT_ROUTES: &[&str] = &[
    "account.security",
    "account.security.revoke",
    "account.security.totp",
    "account.security.totp.set",
    "account.security.totp.disable",
    "auth.totp",
    "auth.logout",
];

/// Returns `true` if `route` is exempt from enforcement.
#[must_use]
pub fn is_exempt(route: &str) -> bool {
    EXEMPT_ROUTES.contains(&route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_surface_is_exempt() {
        assert!(is_exempt("account.security"));
        assert!(is_exempt("account.security.totp.set"));
        assert!(is_exempt("auth.totp"));
        assert!(is_exempt("auth.logout"));
    }

    #[test]
    fn ordinary_routes_are_not_exempt() {
        assert!(!is_exempt("index"));
        assert!(!is_exempt("server.files"));
        assert!(!is_exempt("admin.settings"));
    }

    #[test]
    fn matching_is_exact() {
        assert!(!is_exempt("Account.Security"));
        assert!(!is_exempt("account.security.totp.set.extra"));
        assert!(!is_exempt("account"));
        assert!(!is_exempt(""));
    }
}
