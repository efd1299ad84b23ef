//! Unified error interface for the Moray panel.
//!
//! This module provides the [`ErrorCode`] trait for standardized
//! error handling across all Moray crates.
//!
//! # Design
//!
//! All Moray error types should implement [`ErrorCode`] to provide:
//!
//! - **Machine-readable codes**: For API responses and programmatic
//!   error handling
//! - **Recoverability info**: For retry logic and user feedback
//!
//! # Example
//!
//! ```
//! use moray_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum InviteError {
//!     MailboxRejected(String),
//!     DeliveryTimeout,
//! }
//!
//! impl ErrorCode for InviteError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::MailboxRejected(_) => "INVITE_MAILBOX_REJECTED",
//!             Self::DeliveryTimeout => "INVITE_DELIVERY_TIMEOUT",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::DeliveryTimeout)
//!     }
//! }
//!
//! let err = InviteError::DeliveryTimeout;
//! assert_eq!(err.code(), "INVITE_DELIVERY_TIMEOUT");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface for Moray errors.
///
/// # Code Format
///
/// Error codes should be:
///
/// - **UPPER_SNAKE_CASE**: e.g., `"FORBIDDEN"`, `"INVALID_EMAIL"`
/// - **Namespace-prefixed for specificity**: e.g.,
///   `"DELEGATION_KEY_NOT_ASSIGNABLE"`
/// - **Stable**: Codes are an API contract and must not change once
///   published
///
/// # Recoverability
///
/// An error is recoverable if the caller can take an action that makes
/// a retry succeed — trimming a permission selection, correcting an
/// email address. Authorization failures are not recoverable: no retry
/// of the same request by the same actor can succeed.
pub trait ErrorCode {
    /// Returns the machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns `true` if the caller can correct the input and retry.
    fn is_recoverable(&self) -> bool;
}
