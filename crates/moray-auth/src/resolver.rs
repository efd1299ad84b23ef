//! Assignable-scope resolution.
//!
//! Computes the subset of the catalog an actor may pass on to a
//! subuser. The rule is narrowing only: apart from root administrators
//! and holders of the full grant, an actor can assign exactly the
//! catalog identifiers they themselves hold.

use crate::{Actor, GrantedPermissions, PermissionCatalog};

/// Resolves the capability keys `actor` may assign to someone else.
///
/// - Root administrators and holders of
///   [`GrantedPermissions::All`] resolve to the full catalog
///   identifier list.
/// - Everyone else resolves to the intersection of the catalog with
///   their explicit grant, in catalog order (category order, then key
///   order within a category). Order matters only for presentation,
///   but it is deterministic: identical inputs yield identical output.
/// - An actor with an empty explicit grant resolves to the empty list.
///   That is a valid outcome, not an error.
///
/// Stored identifiers that are missing from the catalog cannot be
/// assigned and are dropped from the result. Such entries indicate
/// stored data referencing keys the catalog no longer defines; they
/// are logged for operator attention and never cause the request to
/// fail.
///
/// # Example
///
/// ```
/// use moray_auth::{assignable_permissions, Actor, GrantedPermissions, PermissionCatalog, UserId};
///
/// let catalog = PermissionCatalog::builtin();
///
/// let actor = Actor::new(
///     UserId::new(),
///     GrantedPermissions::from_keys(["control.stop", "control.start"]),
/// );
/// // Catalog order, not insertion order.
/// assert_eq!(
///     assignable_permissions(&actor, catalog),
///     ["control.start", "control.stop"]
/// );
/// ```
#[must_use]
pub fn assignable_permissions(actor: &Actor, catalog: &PermissionCatalog) -> Vec<String> {
    if actor.is_root_admin() {
        return catalog.identifiers();
    }

    match actor.permissions() {
        GrantedPermissions::All => catalog.identifiers(),
        GrantedPermissions::Explicit(held) => {
            let unknown: Vec<&str> = held
                .iter()
                .filter(|key| !catalog.contains(key))
                .map(String::as_str)
                .collect();
            if !unknown.is_empty() {
                tracing::error!(
                    actor = %actor.id(),
                    ?unknown,
                    "stored grant references identifiers missing from the permission catalog"
                );
            }

            catalog
                .identifiers()
                .into_iter()
                .filter(|identifier| held.contains(identifier))
                .collect()
        }
    }
}
