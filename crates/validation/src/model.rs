//! Params model contract implemented by `#[derive(Params)]`.

use crate::primitives::FieldRef;
use crate::projection::{Projected, model_from_object};
use crate::rules::{IntegerRule, Rule};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use swimdesk_shared::ValidationError;

/// Exhaustive set of a model's declared fields.
pub trait FieldName: Copy + Eq + fmt::Debug + 'static {
    /// Wire key of the field.
    fn key(self) -> &'static str;

    /// Field for a wire key, if declared.
    fn from_key(key: &str) -> Option<Self>;
}

/// One row of a model's ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<F> {
    /// Field identifier.
    pub field: F,
    /// Wire key.
    pub key: &'static str,
    /// Human label used in user messages.
    pub label: &'static str,
    /// Absent values are accepted.
    pub optional: bool,
    /// Validation applied to the value.
    pub rule: Rule,
}

impl<F> FieldSpec<F> {
    /// Build a table row.
    pub const fn new(
        field: F,
        key: &'static str,
        label: &'static str,
        optional: bool,
        rule: Rule,
    ) -> Self {
        Self {
            field,
            key,
            label,
            optional,
            rule,
        }
    }

    /// Field reference handed to the primitives.
    pub const fn field_ref(&self) -> FieldRef<'static> {
        FieldRef {
            key: self.key,
            label: self.label,
            optional: self.optional,
        }
    }

    /// Absent or null input is rejected rather than defaulted.
    pub const fn is_mandatory(&self) -> bool {
        !self.optional
            && !matches!(
                self.rule,
                Rule::Integer(IntegerRule {
                    default: Some(_),
                    ..
                })
            )
    }

    /// Re-tag the row for the model that flattens this one.
    pub fn map_field<G>(self, wrap: impl FnOnce(F) -> G) -> FieldSpec<G> {
        FieldSpec {
            field: wrap(self.field),
            key: self.key,
            label: self.label,
            optional: self.optional,
            rule: self.rule,
        }
    }
}

/// Parameters accepted by one API operation.
///
/// Implementations are generated by `#[derive(Params)]`: the rule table lists
/// fields in declaration order, with embedded models first.
pub trait ParamsModel: Serialize + DeserializeOwned {
    /// Generated field enum.
    type Field: FieldName;

    /// Model name used in diagnostics.
    const MODEL_NAME: &'static str;

    /// When set, at least one optional field must be present.
    const REQUIRES_UPDATE: bool = false;

    /// Ordered rule table.
    fn field_specs() -> Vec<FieldSpec<Self::Field>>;

    /// Cross-field rules, run after every field passed.
    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Declared wire keys in table order.
    fn declared_keys() -> Vec<&'static str> {
        Self::field_specs().iter().map(|spec| spec.key).collect()
    }

    /// Keys that must be present and non-null.
    fn required_keys() -> Vec<&'static str> {
        Self::field_specs()
            .iter()
            .filter(|spec| spec.is_mandatory())
            .map(|spec| spec.key)
            .collect()
    }

    /// Project an arbitrary serializable value onto this model.
    fn from_dto<I>(input: &I) -> Result<Projected<Self>, ValidationError>
    where
        I: Serialize + ?Sized,
    {
        model_from_object(input)
    }
}
