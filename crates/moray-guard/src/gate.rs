//! The two-factor enforcement gate.
//!
//! Evaluated once per inbound request, before the request handler
//! runs. A blocked request is not an error: it is a policy decision
//! that redirects the user to the setup page with a persistent notice
//! until they comply.

use crate::requirement::TwoFactorRequirement;
use crate::routes::is_exempt;
use moray_auth::Actor;
use serde::{Deserialize, Serialize};

/// Route the user is redirected to when blocked: the second-factor
/// setup page.
pub const SETUP_ROUTE: &str = "account.security";

/// Fixed notice text shown with every blocked request.
pub const ENROLLMENT_NOTICE: &str =
    "The administrator has required 2FA to be enabled. You must enable it before you can do any other action.";

/// Severity of a flash notice, matching the alert levels the panel
/// frontend renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Info,
    Success,
}

/// A flash-style notice payload surfaced to the user alongside a
/// redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Rendering severity.
    pub severity: Severity,
    /// Message text.
    pub message: String,
}

impl Notice {
    /// Creates a danger-severity notice.
    #[must_use]
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Danger,
            message: message.into(),
        }
    }
}

/// Outcome of evaluating the gate for one request.
///
/// # Example
///
/// ```
/// use moray_guard::{GateDecision, Notice};
///
/// let allow = GateDecision::Allow;
/// assert!(allow.is_allowed());
///
/// let blocked = GateDecision::Redirect {
///     location: "account.security".to_string(),
///     notice: Notice::danger("enroll first"),
/// };
/// assert!(blocked.is_blocked());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    /// The request proceeds to its handler.
    Allow,
    /// The request is not executed; the user is sent to `location`
    /// with `notice` flashed.
    Redirect {
        /// Redirect target route.
        location: String,
        /// Flash payload to surface.
        notice: Notice,
    },
}

impl GateDecision {
    /// Returns `true` if the request may proceed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns `true` if the request was blocked and redirected.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Decides whether a request passes the two-factor gate.
///
/// Decision procedure, in order:
///
/// 1. No authenticated actor → allow; authentication is enforced
///    elsewhere.
/// 2. Exempt route (see [`crate::routes`]) → allow; the compliance
///    surface must stay reachable.
/// 3. [`Disabled`](TwoFactorRequirement::Disabled) → allow.
/// 4. [`AdminsOnly`](TwoFactorRequirement::AdminsOnly) → allow unless
///    the actor is a root administrator.
/// 5. [`Everyone`](TwoFactorRequirement::Everyone) → allow if the
///    actor has completed enrollment.
///
/// Under `AdminsOnly` the actor's enrollment state is never consulted:
/// a root administrator who has already enrolled is still redirected
/// on every non-exempt route while the mode is active, whereas
/// `Everyone` lets enrolled users through. The asymmetry is
/// long-standing observed panel behavior and is kept deliberately;
/// callers must not paper over it.
///
/// The requirement value must be read once from the
/// [`SettingsSource`](crate::SettingsSource) per request and reused
/// for the whole decision.
#[must_use]
pub fn evaluate(
    actor: Option<&Actor>,
    route: &str,
    requirement: TwoFactorRequirement,
) -> GateDecision {
    let Some(actor) = actor else {
        return GateDecision::Allow;
    };

    if is_exempt(route) {
        return GateDecision::Allow;
    }

    let compliant = match requirement {
        TwoFactorRequirement::Disabled => true,
        TwoFactorRequirement::AdminsOnly => !actor.is_root_admin(),
        TwoFactorRequirement::Everyone => actor.two_factor_enrolled(),
    };

    if compliant {
        GateDecision::Allow
    } else {
        tracing::debug!(
            actor = %actor.id(),
            route,
            %requirement,
            "second factor required; redirecting to setup"
        );
        GateDecision::Redirect {
            location: SETUP_ROUTE.to_string(),
            notice: Notice::danger(ENROLLMENT_NOTICE),
        }
    }
}
