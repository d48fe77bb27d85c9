//! API v1 error and result wrappers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error kind exposed in API v1 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiV1ErrorKind {
    /// Expected, user-facing errors (validation, bad input).
    Expected,
    /// Invariant violations that indicate a bug.
    Invariant,
}

/// API v1 error code string (stable contract value).
pub type ApiV1ErrorCode = String;

/// Metadata map attached to API v1 errors.
pub type ApiV1ErrorMeta = BTreeMap<String, String>;

/// API v1 error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiV1ErrorDto {
    /// Stable error code (e.g. `ERR_VALIDATION_OUT_OF_RANGE`).
    pub code: ApiV1ErrorCode,
    /// Developer-facing message.
    pub message: String,
    /// Spanish text shown verbatim to back-office users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
    /// Error category.
    pub kind: ApiV1ErrorKind,
    /// Optional metadata such as the offending `field`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ApiV1ErrorMeta>,
}

/// API v1 result wrapper for success or failure payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiV1Result<T> {
    /// Success response.
    Ok {
        /// Indicates success.
        ok: bool,
        /// Success payload.
        data: T,
    },
    /// Error response.
    Err {
        /// Indicates failure.
        ok: bool,
        /// Error payload.
        error: ApiV1ErrorDto,
    },
}

impl<T> ApiV1Result<T> {
    /// Build a success response wrapper.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self::Ok { ok: true, data }
    }

    /// Build an error response wrapper.
    #[must_use]
    pub const fn err(error: ApiV1ErrorDto) -> Self {
        Self::Err { ok: false, error }
    }
}
