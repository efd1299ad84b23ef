//! Permission primitives for the Moray panel.
//!
//! This crate provides the delegation decision model: which capability
//! keys an acting identity may assign to a subuser, and whether a
//! concrete delegation request is acceptable.
//!
//! # Decision Model
//!
//! ```text
//! Assignable = Catalog(WHAT exists) ∩ Granted(WHAT the actor holds)
//! Delegation accepted = can_mutate(WHO may submit)
//!                     ∧ requested ⊆ Assignable
//!                     ∧ target well-formed
//! ```
//!
//! | Layer | Type | Controls |
//! |-------|------|----------|
//! | [`PermissionCatalog`] | Registry | What capability keys exist |
//! | [`GrantedPermissions`] | Tagged union | What the actor holds (`All` or an explicit set) |
//! | [`resolver`] | Function | What the actor may pass on |
//! | [`DelegationRequest`] | Struct | What the actor is trying to pass on, and to whom |
//!
//! # Crate Architecture
//!
//! ```text
//! moray-types  (UserId, ServerId, ErrorCode)
//!      ↑
//! moray-auth   ◄── THIS CRATE (pure decisions, no runtime deps)
//!      ↑
//! moray-guard  (two-factor gate, settings source)
//! ```
//!
//! # Design Principles
//!
//! - **Pure decisions** — every function here is total and side-effect
//!   free over request-scoped snapshots; persistence, routing and
//!   identity resolution live in external collaborators
//! - **Narrowing only** — a delegating actor can never hand out a key
//!   it does not itself hold
//! - **Wholesale rejection** — a request carrying any unassignable key
//!   is rejected in full; there is no partial application

pub mod actor;
pub mod catalog;
pub mod delegation;
pub mod error;
pub mod grant;
pub mod resolver;

pub use actor::Actor;
pub use catalog::{PermissionCatalog, PermissionCategory, PermissionKey};
pub use delegation::{DelegationRequest, DelegationTarget, ValidatedDelegation, EMAIL_MAX_LEN};
pub use error::DelegationError;
pub use grant::GrantedPermissions;
pub use resolver::assignable_permissions;

// Re-export the id types most call sites need alongside this crate.
pub use moray_types::{ServerId, UserId};
