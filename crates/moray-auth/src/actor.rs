//! Actor snapshot types.

use crate::GrantedPermissions;
use moray_types::UserId;
use serde::{Deserialize, Serialize};

/// The authenticated identity behind a request.
///
/// An Actor is a request-scoped snapshot supplied by the external
/// identity collaborator: who is acting, whether they hold root
/// administrator rights, which permissions they were granted on the
/// resource under management, and whether they have completed
/// second-factor enrollment.
///
/// # Immutability
///
/// Actors are immutable value types. The decision functions in this
/// workspace never mutate an actor; a fresh snapshot is taken per
/// request.
///
/// # Why No Default?
///
/// **DO NOT implement `Default` for Actor.**
///
/// An actor requires a valid [`UserId`]; there is no sensible default
/// identity. Always construct with [`Actor::new`].
///
/// # Example
///
/// ```
/// use moray_auth::{Actor, GrantedPermissions, UserId};
///
/// let subuser = Actor::new(
///     UserId::new(),
///     GrantedPermissions::from_keys(["control.start", "user.create"]),
/// );
/// assert!(!subuser.is_root_admin());
///
/// let admin = Actor::new(UserId::new(), GrantedPermissions::none()).with_root_admin();
/// assert!(admin.is_root_admin());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// The acting user.
    id: UserId,
    /// Site-wide root administrator flag.
    root_admin: bool,
    /// Permissions granted on the resource under management.
    permissions: GrantedPermissions,
    /// Whether second-factor enrollment is complete.
    two_factor_enrolled: bool,
}

impl Actor {
    /// Creates an ordinary actor: no root rights, not enrolled.
    #[must_use]
    pub fn new(id: UserId, permissions: GrantedPermissions) -> Self {
        Self {
            id,
            root_admin: false,
            permissions,
            two_factor_enrolled: false,
        }
    }

    /// Returns a copy holding site-wide root administrator rights.
    #[must_use]
    pub fn with_root_admin(mut self) -> Self {
        self.root_admin = true;
        self
    }

    /// Returns a copy that has completed second-factor enrollment.
    #[must_use]
    pub fn with_two_factor_enrolled(mut self) -> Self {
        self.two_factor_enrolled = true;
        self
    }

    /// Returns the acting user's id.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns `true` for site-wide root administrators.
    #[must_use]
    pub fn is_root_admin(&self) -> bool {
        self.root_admin
    }

    /// Returns the permissions granted on the managed resource.
    #[must_use]
    pub fn permissions(&self) -> &GrantedPermissions {
        &self.permissions
    }

    /// Returns `true` if second-factor enrollment is complete.
    #[must_use]
    pub fn two_factor_enrolled(&self) -> bool {
        self.two_factor_enrolled
    }
}
