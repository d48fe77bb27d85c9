//! Student operations.
//!
//! A student's document number must match the pattern of its document type,
//! so both add and update carry a cross-field check.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_domain::{StudentIdType, SwimLevel};
use swimdesk_validation::{Params, ValidationError, ranges};

const ID_NUMBER_KEY: &str = "idNumber";
const ID_NUMBER_LABEL: &str = "número de documento";

fn check_document(id_type: StudentIdType, id_number: &str) -> Result<(), ValidationError> {
    ranges::ensure_pattern(ID_NUMBER_KEY, ID_NUMBER_LABEL, id_number, id_type.pattern())
}

/// `student.add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(check = "check_student_add")]
pub struct StudentAddParams {
    #[params(label = "socio", integer(min = 1))]
    pub member_id: i64,
    #[params(label = "nombre", string(min = 1, max = 60))]
    pub first_name: String,
    #[params(label = "apellidos", string(min = 1, max = 80))]
    pub last_name: String,
    #[params(label = "fecha de nacimiento", iso_date)]
    pub birth_date: String,
    #[params(label = "tipo de documento", constant = "StudentIdType")]
    pub id_type: StudentIdType,
    #[params(label = "número de documento", string(min = 1, max = 20))]
    pub id_number: String,
    #[params(label = "consentimiento de imagen", boolean)]
    pub image_consent: bool,
    #[params(label = "nivel", constant = "SwimLevel")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SwimLevel>,
    #[params(label = "observaciones médicas", string(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
}

fn check_student_add(params: &StudentAddParams) -> Result<(), ValidationError> {
    check_document(params.id_type, &params.id_number)
}

/// `student.update`
///
/// The document number is checked only when the type is sent with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(update, check = "check_student_update")]
pub struct StudentUpdateParams {
    #[params(label = "alumno", integer(min = 1))]
    pub student_id: i64,
    #[params(label = "nombre", string(min = 1, max = 60))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[params(label = "apellidos", string(min = 1, max = 80))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[params(label = "fecha de nacimiento", iso_date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[params(label = "tipo de documento", constant = "StudentIdType")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_type: Option<StudentIdType>,
    #[params(label = "número de documento", string(min = 1, max = 20))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[params(label = "consentimiento de imagen", boolean)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_consent: Option<bool>,
    #[params(label = "nivel", constant = "SwimLevel")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SwimLevel>,
    #[params(label = "observaciones médicas", string(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
}

fn check_student_update(params: &StudentUpdateParams) -> Result<(), ValidationError> {
    match (params.id_type, params.id_number.as_deref()) {
        (Some(id_type), Some(id_number)) => check_document(id_type, id_number),
        _ => Ok(()),
    }
}

/// `student.get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct StudentGetParams {
    #[params(label = "alumno", integer(min = 1))]
    pub student_id: i64,
}

/// `student.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    #[params(label = "socio", integer(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,
    #[params(label = "búsqueda", string(max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Comma-separated `SwimLevel` keys.
    #[params(label = "niveles", comma_constants = "SwimLevel")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<String>,
    /// Query flag sent as `"true"`/`"false"`.
    #[params(label = "incluir bajas", string_boolean)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_inactive: Option<bool>,
}
