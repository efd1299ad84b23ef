//! Delegation request validation.
//!
//! A delegation request proposes a set of capability keys for a target
//! identity: either an existing subuser being edited, or a new user
//! being invited by email. Validation checks, in order:
//!
//! 1. the actor may submit delegation changes at all (`can_mutate`),
//! 2. the invite target, if any, is a well-formed email address,
//! 3. every requested key is inside the actor's assignable scope.
//!
//! A request that survives all three is handed to the persistence
//! collaborator unmodified.

use crate::error::DelegationError;
use moray_types::{ServerId, UserId};
use serde::{Deserialize, Serialize};

/// Maximum accepted length of an invite email address.
///
/// Matches the column width of the backing user store; longer
/// addresses could never be persisted.
pub const EMAIL_MAX_LEN: usize = 191;

/// Who the delegation is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelegationTarget {
    /// An existing subuser whose permissions are being changed.
    Existing(UserId),
    /// A new user to invite by email.
    Invite {
        /// Address the invitation is sent to.
        email: String,
    },
}

impl DelegationTarget {
    /// Returns the capability key the actor must hold to submit this
    /// delegation: `user.create` for invitations, `user.update` for
    /// edits of an existing subuser.
    #[must_use]
    pub fn required_capability(&self) -> &'static str {
        match self {
            Self::Existing(_) => "user.update",
            Self::Invite { .. } => "user.create",
        }
    }
}

/// A proposed delegation, constructed per incoming call and discarded
/// after validation.
///
/// # Example
///
/// ```
/// use moray_auth::{DelegationRequest, ServerId};
///
/// let request = DelegationRequest::invite(
///     ServerId::new(),
///     "colleague@example.com",
///     ["control.start", "control.stop"],
/// );
/// assert_eq!(request.target().required_capability(), "user.create");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRequest {
    server: ServerId,
    target: DelegationTarget,
    permissions: Vec<String>,
}

impl DelegationRequest {
    /// Creates a request against an existing subuser.
    #[must_use]
    pub fn for_existing<I, S>(server: ServerId, user: UserId, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            server,
            target: DelegationTarget::Existing(user),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an invitation request for a new user.
    #[must_use]
    pub fn invite<I, S>(server: ServerId, email: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            server,
            target: DelegationTarget::Invite {
                email: email.into(),
            },
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the server the delegation is scoped to.
    #[must_use]
    pub fn server(&self) -> ServerId {
        self.server
    }

    /// Returns the delegation target.
    #[must_use]
    pub fn target(&self) -> &DelegationTarget {
        &self.target
    }

    /// Returns the requested capability keys, in request order.
    #[must_use]
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Validates this request against the actor's assignable scope.
    ///
    /// `assignable` is the output of
    /// [`assignable_permissions`](crate::assignable_permissions) for
    /// the acting identity; `can_mutate` is the externally computed
    /// answer to whether the actor holds
    /// [`required_capability`](DelegationTarget::required_capability).
    ///
    /// On success the requested set is returned exactly as submitted,
    /// ready for the persistence collaborator. Rejection is wholesale:
    /// every offending key is reported and nothing is applied.
    ///
    /// # Errors
    ///
    /// - [`DelegationError::Forbidden`] if `can_mutate` is false.
    /// - [`DelegationError::InvalidEmail`] if an invite address is
    ///   missing, malformed or over [`EMAIL_MAX_LEN`] characters.
    /// - [`DelegationError::NotAssignable`] if any requested key is
    ///   outside `assignable`.
    pub fn validate(
        self,
        assignable: &[String],
        can_mutate: bool,
    ) -> Result<ValidatedDelegation, DelegationError> {
        if !can_mutate {
            return Err(DelegationError::Forbidden {
                required: self.target.required_capability().to_string(),
            });
        }

        if let DelegationTarget::Invite { email } = &self.target {
            validate_email(email)?;
        }

        let offending: Vec<String> = self
            .permissions
            .iter()
            .filter(|key| !assignable.contains(key))
            .cloned()
            .collect();
        if !offending.is_empty() {
            return Err(DelegationError::NotAssignable { offending });
        }

        Ok(ValidatedDelegation {
            server: self.server,
            target: self.target,
            permissions: self.permissions,
        })
    }
}

/// A delegation that passed validation, carrying the exact requested
/// set for the persistence collaborator to store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedDelegation {
    server: ServerId,
    target: DelegationTarget,
    permissions: Vec<String>,
}

impl ValidatedDelegation {
    /// Returns the server the delegation is scoped to.
    #[must_use]
    pub fn server(&self) -> ServerId {
        self.server
    }

    /// Returns the delegation target.
    #[must_use]
    pub fn target(&self) -> &DelegationTarget {
        &self.target
    }

    /// Returns the validated capability keys, unmodified.
    #[must_use]
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Consumes the delegation, yielding the keys to persist.
    #[must_use]
    pub fn into_permissions(self) -> Vec<String> {
        self.permissions
    }
}

fn validate_email(email: &str) -> Result<(), DelegationError> {
    if email.is_empty() {
        return Err(DelegationError::InvalidEmail {
            reason: "an email address is required".to_string(),
        });
    }
    if email.len() > EMAIL_MAX_LEN {
        return Err(DelegationError::InvalidEmail {
            reason: format!("must not exceed {EMAIL_MAX_LEN} characters"),
        });
    }
    if !is_email_shaped(email) {
        return Err(DelegationError::InvalidEmail {
            reason: "must be a valid email address".to_string(),
        });
    }
    Ok(())
}

/// Format check, not RFC 5322: one `@`, non-empty local part, dotted
/// domain, no whitespace. Deliverability is the mailer's problem.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.split('.').all(|label| !label.is_empty())
}
