//! Identifier types for the Moray panel.
//!
//! All identifiers are UUID-based so that records can be referenced
//! safely across the panel, its API and its daemon processes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a panel user account.
///
/// A user may be the owner of servers, a root administrator, or a
/// subuser holding delegated permissions on someone else's server.
///
/// # Example
///
/// ```
/// use moray_types::UserId;
///
/// let owner = UserId::new();
/// let subuser = UserId::new();
///
/// assert_ne!(owner, subuser);
/// println!("Acting user: {}", owner);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new [`UserId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Identifier for a managed server instance.
///
/// A server is the resource over which management rights are
/// delegated: the owner (or an administrator) grants capability keys
/// to subusers scoped to one server.
///
/// # Example
///
/// ```
/// use moray_types::ServerId;
///
/// let server = ServerId::new();
/// println!("Delegating on: {}", server);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerId(pub Uuid);

impl ServerId {
    /// Creates a new [`ServerId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ServerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "server:{}", self.0)
    }
}
