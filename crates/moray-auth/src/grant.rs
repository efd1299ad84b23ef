//! Granted-permission sets.
//!
//! Stored grants are lists of identifier strings in which the single
//! entry `"*"` means "all current and future permissions". This module
//! replaces that sentinel with an explicit tagged union so the
//! dominance rule is carried by the type instead of by string
//! comparisons scattered across call sites.
//!
//! # Wildcard Dominance
//!
//! Well-formed data never mixes `"*"` with explicit entries, but
//! stored data is not always well-formed. Construction treats the
//! presence of the wildcard as dominant:
//!
//! ```
//! use moray_auth::GrantedPermissions;
//!
//! let mixed = GrantedPermissions::from_keys(["control.start", "*"]);
//! assert!(mixed.is_all());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The stored sentinel meaning "all current and future permissions".
pub const WILDCARD: &str = "*";

/// The set of permissions an actor holds on a resource.
///
/// # Serialized Shape
///
/// Serializes to the stored-string shape: `["*"]` for
/// [`All`](Self::All), the sorted identifier list for
/// [`Explicit`](Self::Explicit).
///
/// # Example
///
/// ```
/// use moray_auth::GrantedPermissions;
///
/// let owner = GrantedPermissions::all();
/// assert!(owner.contains("file.delete"));
///
/// let limited = GrantedPermissions::from_keys(["control.start", "control.stop"]);
/// assert!(limited.contains("control.start"));
/// assert!(!limited.contains("file.delete"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum GrantedPermissions {
    /// Every catalog identifier, current and future.
    All,
    /// An explicit identifier set.
    Explicit(BTreeSet<String>),
}

impl GrantedPermissions {
    /// The full grant.
    #[must_use]
    pub fn all() -> Self {
        Self::All
    }

    /// The empty grant. A valid state, not an error: such an actor
    /// simply resolves to an empty assignable scope.
    #[must_use]
    pub fn none() -> Self {
        Self::Explicit(BTreeSet::new())
    }

    /// Builds a grant from stored identifier strings.
    ///
    /// A [`WILDCARD`] entry anywhere in the input dominates any
    /// explicit entries that accompany it.
    #[must_use]
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut explicit = BTreeSet::new();
        for key in keys {
            let key = key.into();
            if key == WILDCARD {
                return Self::All;
            }
            explicit.insert(key);
        }
        Self::Explicit(explicit)
    }

    /// Returns `true` for the full grant.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns `true` if no identifiers are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => false,
            Self::Explicit(keys) => keys.is_empty(),
        }
    }

    /// Returns `true` if `identifier` is held.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        match self {
            Self::All => true,
            Self::Explicit(keys) => keys.contains(identifier),
        }
    }
}

impl Default for GrantedPermissions {
    fn default() -> Self {
        Self::none()
    }
}

impl From<Vec<String>> for GrantedPermissions {
    fn from(keys: Vec<String>) -> Self {
        Self::from_keys(keys)
    }
}

impl From<GrantedPermissions> for Vec<String> {
    fn from(grant: GrantedPermissions) -> Self {
        match grant {
            GrantedPermissions::All => vec![WILDCARD.to_string()],
            GrantedPermissions::Explicit(keys) => keys.into_iter().collect(),
        }
    }
}
