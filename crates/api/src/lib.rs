//! # swimdesk-api
//!
//! API v1 request parameters and error contracts.
//!
//! Every backend operation the back-office calls has one params DTO under
//! [`v1::params`]. [`v1::ApiOperation`] names them all and dispatches raw JSON
//! to the right model, returning either the normalized parameters or an
//! [`v1::ApiV1ErrorDto`]-ready [`swimdesk_shared::ErrorEnvelope`].
//!
//! This crate depends only on `domain`, `validation` and `shared`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

/// API v1 DTOs.
pub mod v1;

/// Returns the API crate version.
#[must_use]
pub const fn api_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
