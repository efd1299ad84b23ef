//! Delegation failure taxonomy.
//!
//! [`DelegationError`] separates the three ways a delegation request
//! can be refused:
//!
//! ```text
//! Forbidden        — the actor may not submit delegation changes at all
//! NotAssignable    — a specific requested key is outside the actor's scope
//! InvalidEmail     — the invite target field is malformed
//! ```
//!
//! The distinction matters for remediation: `Forbidden` means "you may
//! not perform this action", `NotAssignable` means "you may not grant
//! this specific capability", and `InvalidEmail` is an ordinary form
//! error.

use moray_types::ErrorCode;
use thiserror::Error;

/// Why a delegation request was refused.
///
/// All variants are expected policy outcomes, returned as values and
/// computed eagerly. No partial write ever precedes them.
///
/// # Example
///
/// ```
/// use moray_auth::DelegationError;
/// use moray_types::ErrorCode;
///
/// let err = DelegationError::NotAssignable {
///     offending: vec!["file.delete".to_string()],
/// };
/// assert!(err.to_string().contains("file.delete"));
/// assert_eq!(err.code(), "DELEGATION_KEY_NOT_ASSIGNABLE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelegationError {
    /// The actor may view delegations but not change them.
    ///
    /// Checked server-side independently of any client control state:
    /// a disabled submit button is not an authorization boundary.
    #[error("missing the '{required}' permission to modify subusers")]
    Forbidden {
        /// The capability key the mutation would have required.
        required: String,
    },

    /// The request asked for keys outside the actor's assignable
    /// scope. The request is rejected wholesale; no subset is applied.
    #[error("cannot assign permissions not held: {}", .offending.join(", "))]
    NotAssignable {
        /// Every requested identifier that fell outside the scope, in
        /// request order.
        offending: Vec<String>,
    },

    /// The invite email field is missing or malformed.
    #[error("invalid email address: {reason}")]
    InvalidEmail {
        /// Field-level message for the caller to surface.
        reason: String,
    },
}

impl ErrorCode for DelegationError {
    fn code(&self) -> &'static str {
        match self {
            Self::Forbidden { .. } => "DELEGATION_FORBIDDEN",
            Self::NotAssignable { .. } => "DELEGATION_KEY_NOT_ASSIGNABLE",
            Self::InvalidEmail { .. } => "DELEGATION_INVALID_EMAIL",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A narrower selection or a corrected address can succeed on
        // retry; a Forbidden actor cannot fix the request themselves.
        !matches!(self, Self::Forbidden { .. })
    }
}
