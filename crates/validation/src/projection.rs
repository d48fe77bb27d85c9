//! Projection of raw input onto a params model, and the validation passes
//! over the projected values.

use crate::error::ParamsError;
use crate::model::{FieldName, FieldSpec, ParamsModel};
use serde::Serialize;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use swimdesk_shared::{Validated, ValidationError, ValidationErrorKind};

/// Raw values restricted to the declared keys of `T`.
///
/// Field values are normalized in place by [`Projected::validate_field`] and
/// [`Projected::normalize`]; [`Projected::validate`] consumes the projection
/// and yields the typed model.
#[derive(Debug, Clone, PartialEq)]
pub struct Projected<T> {
    values: Map<String, Value>,
    model: PhantomData<fn() -> T>,
}

/// Copy the keys declared by `T` out of `input`; unknown keys are dropped.
///
/// The input goes through `serde_json`, so date-time types serialize to
/// ISO-8601 strings. `null` projects to an empty model. No value is checked
/// here.
pub fn model_from_object<T, I>(input: &I) -> Result<Projected<T>, ValidationError>
where
    T: ParamsModel,
    I: Serialize + ?Sized,
{
    let raw = serde_json::to_value(input).map_err(|error| {
        invalid_shape(&format!("request parameters could not be serialized: {error}"))
    })?;
    let mut source = match raw {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(invalid_shape(&format!(
                "request parameters must be a JSON object, found {}",
                json_type(&other)
            )));
        },
    };

    let mut values = Map::new();
    for key in T::declared_keys() {
        if let Some(value) = source.remove(key) {
            values.insert(key.to_owned(), value);
        }
    }
    tracing::trace!(
        model = T::MODEL_NAME,
        kept = values.len(),
        dropped = source.len(),
        "projected request parameters"
    );
    Ok(Projected {
        values,
        model: PhantomData,
    })
}

fn invalid_shape(message: &str) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::InvalidInput,
        message,
        "Los parámetros de la solicitud no son válidos.",
    )
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<T: ParamsModel> Projected<T> {
    /// Current value of a wire key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Current value of a field.
    pub fn field_value(&self, field: T::Field) -> Option<&Value> {
        self.values.get(field.key())
    }

    /// All projected values.
    pub const fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Consume into the raw value map.
    pub fn into_values(self) -> Map<String, Value> {
        self.values
    }

    /// Validate and normalize one field.
    pub fn validate_field(&mut self, field: T::Field) -> Result<(), ParamsError> {
        let spec = T::field_specs()
            .into_iter()
            .find(|spec| spec.field == field)
            .ok_or_else(|| ParamsError::UnknownProperty {
                model: T::MODEL_NAME,
                property: field.key().to_owned(),
            })?;
        self.apply(&spec).map_err(ParamsError::from)
    }

    /// Validate and normalize one field named by its wire key.
    ///
    /// A name the model does not declare is a caller defect and yields
    /// [`ParamsError::UnknownProperty`].
    pub fn validate_property(&mut self, property: &str) -> Result<(), ParamsError> {
        let field = T::Field::from_key(property).ok_or_else(|| ParamsError::UnknownProperty {
            model: T::MODEL_NAME,
            property: property.to_owned(),
        })?;
        self.validate_field(field)
    }

    /// Run every field rule in table order, then the update rule.
    ///
    /// Stops at the first failure. Values already normalized stay in place.
    pub fn normalize(&mut self) -> Result<(), ValidationError> {
        let specs = T::field_specs();
        for spec in &specs {
            self.apply(spec)?;
        }
        if T::REQUIRES_UPDATE
            && !specs
                .iter()
                .any(|spec| spec.optional && self.values.contains_key(spec.key))
        {
            tracing::debug!(model = T::MODEL_NAME, "update request without values");
            return Err(ValidationError::nothing_to_update());
        }
        Ok(())
    }

    /// Full validation: every field, the update rule, then cross-field rules.
    pub fn validate(mut self) -> Result<Validated<T>, ParamsError> {
        self.normalize()?;
        let typed: T = serde_json::from_value(Value::Object(self.values)).map_err(|source| {
            ParamsError::Decode {
                model: T::MODEL_NAME,
                source,
            }
        })?;
        typed.check().inspect_err(|error| {
            tracing::debug!(
                model = T::MODEL_NAME,
                code = error.kind().as_str(),
                "cross-field rule rejected params"
            );
        })?;
        Ok(Validated::new(typed))
    }

    fn apply(&mut self, spec: &FieldSpec<T::Field>) -> Result<(), ValidationError> {
        let normalized = spec
            .rule
            .apply(self.values.get(spec.key), spec.field_ref())
            .inspect_err(|error| {
                tracing::debug!(
                    model = T::MODEL_NAME,
                    field = spec.key,
                    code = error.kind().as_str(),
                    "params field rejected"
                );
            })?;
        match normalized {
            Some(value) => {
                self.values.insert(spec.key.to_owned(), value);
            },
            None => {
                self.values.remove(spec.key);
            },
        }
        tracing::trace!(
            model = T::MODEL_NAME,
            field = spec.key,
            rule = spec.rule.name(),
            "params field normalized"
        );
        Ok(())
    }
}
