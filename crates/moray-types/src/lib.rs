//! Core types for the Moray panel.
//!
//! This crate provides the foundational identifier types shared by every
//! layer of the Moray access-control stack.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Foundation Layer                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  moray-types    : UserId, ServerId, ErrorCode  ◄── HERE      │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Decision Layer                            │
//! │  (Pure functions over request-scoped snapshots)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  moray-auth     : catalog, scope resolution, delegation      │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Enforcement Layer                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  moray-guard    : two-factor gate, settings source           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Identifier Design
//!
//! All identifiers are UUID-based for:
//!
//! - **Network compatibility**: Safe to transmit between the panel
//!   frontend, API and daemon processes
//! - **Multi-tenancy**: Globally unique without coordination
//! - **Serialization**: First-class serde support
//!
//! # Example
//!
//! ```
//! use moray_types::{ServerId, UserId};
//!
//! let owner = UserId::new();
//! let server = ServerId::new();
//!
//! assert_ne!(owner.uuid(), server.uuid());
//! assert!(owner.to_string().starts_with("user:"));
//! ```

pub mod error;
pub mod id;

pub use error::ErrorCode;
pub use id::{ServerId, UserId};
