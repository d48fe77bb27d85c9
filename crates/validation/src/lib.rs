//! # swimdesk-validation
//!
//! Declarative request-parameter validation.
//!
//! Raw input becomes a params model through a single projector
//! ([`model_from_object`] / [`ParamsModel::from_dto`]), which keeps only
//! declared keys. The projected values are then checked field by field with
//! the primitives in [`primitives`], in the order of the model's rule table,
//! stopping at the first failure. Cross-field rules run last.
//!
//! Models are declared with `#[derive(Params)]`:
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Params)]
//! #[serde(rename_all = "camelCase")]
//! #[params(update)]
//! pub struct PoolUpdateParams {
//!     #[params(label = "piscina", integer(min = 1))]
//!     pub pool_id: i64,
//!     #[params(label = "nombre", string(min = 1, max = 80))]
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub name: Option<String>,
//! }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

extern crate self as swimdesk_validation;

pub mod dates;
pub mod error;
pub mod model;
pub mod pattern;
pub mod primitives;
pub mod projection;
pub mod ranges;
pub mod registry;
pub mod rules;

pub use error::ParamsError;
pub use model::{FieldName, FieldSpec, ParamsModel};
pub use pattern::Pattern;
pub use primitives::FieldRef;
pub use projection::{Projected, model_from_object};
pub use ranges::RangeBound;
pub use registry::{ConstantRegistry, RegistryEntry, RegistrySnapshot};
pub use rules::{
    ArrayItems, ArrayRule, CommaIntegersRule, ConstantRule, IntegerRule, Rule, StringRule,
};
pub use swimdesk_shared::{Validated, ValidationError, ValidationErrorKind};
pub use swimdesk_validate_derive::Params;
