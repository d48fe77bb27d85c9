//! API v1 DTO mapping helpers.

use crate::v1::{ApiV1ErrorCode, ApiV1ErrorDto, ApiV1ErrorKind, ApiV1ErrorMeta, ApiV1Result};
use swimdesk_shared::{ErrorCode, ErrorEnvelope, ErrorKind};

/// Convert a shared `ErrorCode` into an API v1 error code string.
#[must_use]
pub fn error_code_to_api_v1(code: &ErrorCode) -> ApiV1ErrorCode {
    let namespace = sanitize_code_segment(code.namespace());
    let detail = sanitize_code_segment(code.code());
    format!("ERR_{namespace}_{detail}")
}

/// Map an `ErrorEnvelope` into an API v1 error DTO.
///
/// `extra_meta` wins over envelope metadata on key collisions.
#[must_use]
pub fn error_envelope_to_api_v1_error(
    envelope: &ErrorEnvelope,
    extra_meta: Option<ApiV1ErrorMeta>,
) -> ApiV1ErrorDto {
    let mut merged = ApiV1ErrorMeta::new();
    for (key, value) in &envelope.metadata {
        merged.insert(key.clone(), value.clone());
    }
    if let Some(extra) = extra_meta {
        merged.extend(extra);
    }

    ApiV1ErrorDto {
        code: error_code_to_api_v1(&envelope.code),
        message: envelope.message.clone(),
        user_message: envelope.user_message.clone(),
        kind: map_error_kind(envelope.kind),
        meta: (!merged.is_empty()).then_some(merged),
    }
}

/// Map a shared result into an API v1 result wrapper.
#[must_use]
pub fn result_to_api_v1_result<T>(
    result: Result<T, ErrorEnvelope>,
    extra_meta: Option<ApiV1ErrorMeta>,
) -> ApiV1Result<T> {
    match result {
        Ok(data) => ApiV1Result::ok(data),
        Err(error) => ApiV1Result::err(error_envelope_to_api_v1_error(&error, extra_meta)),
    }
}

const fn map_error_kind(kind: ErrorKind) -> ApiV1ErrorKind {
    match kind {
        ErrorKind::Expected | ErrorKind::Unexpected => ApiV1ErrorKind::Expected,
        ErrorKind::Invariant => ApiV1ErrorKind::Invariant,
    }
}

fn sanitize_code_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
