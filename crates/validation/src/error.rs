//! Errors raised while validating a params model.

use swimdesk_shared::{ErrorCode, ErrorEnvelope, ValidationError};

/// Params validation failure.
///
/// Only [`ParamsError::Validation`] is caused by user input. The other
/// variants are defects in the calling code or in a model declaration.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    /// A field or cross-field rule rejected the input.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The caller asked for a property the model does not declare.
    #[error("{model} does not declare a property named '{property}'")]
    UnknownProperty {
        /// Model name.
        model: &'static str,
        /// Requested property.
        property: String,
    },
    /// Normalized values did not fit the model's Rust types.
    #[error("{model} could not be decoded after validation: {source}")]
    Decode {
        /// Model name.
        model: &'static str,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
}

impl ParamsError {
    /// The validation error, when the failure was caused by user input.
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::UnknownProperty { .. } | Self::Decode { .. } => None,
        }
    }
}

impl From<ParamsError> for ErrorEnvelope {
    fn from(error: ParamsError) -> Self {
        let message = error.to_string();
        match error {
            ParamsError::Validation(error) => error.into(),
            ParamsError::UnknownProperty { model, property } => {
                Self::invariant(ErrorCode::new("params", "unknown_property"), message)
                    .with_metadata("model", model)
                    .with_metadata("property", property)
            },
            ParamsError::Decode { model, .. } => {
                Self::invariant(ErrorCode::new("params", "decode_failed"), message)
                    .with_metadata("model", model)
            },
        }
    }
}
