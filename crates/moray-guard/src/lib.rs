//! Request-time two-factor enforcement for the Moray panel.
//!
//! Every inbound panel request passes through the enforcement gate
//! before it reaches its handler. The gate decides, from a per-request
//! snapshot, whether the request proceeds or is redirected to the
//! second-factor setup page.
//!
//! # Decision Inputs
//!
//! ```text
//! evaluate(actor?, route, requirement) → Allow | Redirect
//!            │       │         │
//!            │       │         └── site-wide TwoFactorRequirement,
//!            │       │             read once per request from a
//!            │       │             SettingsSource
//!            │       └── opaque route identifier, checked against the
//!            │           fixed exempt table
//!            └── authenticated actor snapshot, or None when
//!                authentication has not happened yet
//! ```
//!
//! # Design Principles
//!
//! - **Pure gate** — the requirement value is passed in as a
//!   parameter, not read from ambient global state; the gate is a pure
//!   function and independently testable
//! - **Redirect, not error** — a blocked request is a successful
//!   policy decision that redirects to setup with a notice; the
//!   original action is simply not executed
//! - **Opaque routes** — the gate never inspects paths or HTTP
//!   methods; the routing collaborator supplies route names
//!
//! # Example
//!
//! ```
//! use moray_auth::{Actor, GrantedPermissions, UserId};
//! use moray_guard::{evaluate, TwoFactorRequirement};
//!
//! let visitor = Actor::new(UserId::new(), GrantedPermissions::none());
//!
//! // Policy disabled: everything passes.
//! let decision = evaluate(Some(&visitor), "server.files", TwoFactorRequirement::Disabled);
//! assert!(decision.is_allowed());
//!
//! // Everyone must be enrolled: an unenrolled actor is redirected.
//! let decision = evaluate(Some(&visitor), "server.files", TwoFactorRequirement::Everyone);
//! assert!(decision.is_blocked());
//! ```

pub mod gate;
pub mod requirement;
pub mod routes;
pub mod store;

pub use gate::{evaluate, GateDecision, Notice, Severity, ENROLLMENT_NOTICE, SETUP_ROUTE};
pub use requirement::{TwoFactorRequirement, SETTING_KEY};
pub use routes::{is_exempt, EXEMPT_ROUTES};
pub use store::{InMemorySettings, SettingsSource};

// Re-export the actor snapshot type gate callers hold.
pub use moray_auth::Actor;
