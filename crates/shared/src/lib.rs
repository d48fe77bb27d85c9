//! # swimdesk-shared
//!
//! Shared error handling for the swimdesk workspace.
//!
//! This crate provides foundational types that are used across all other crates:
//!
//! - Error envelope types
//! - Proof wrappers for validated values
//! - The bilingual [`ValidationError`] raised by params DTOs
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Serde-compatible** - All public error types support serialization

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod invariants;
pub mod validation;

pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use invariants::{BoundedU64, BoundsError, Validated};
pub use validation::{ValidationError, ValidationErrorKind};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
