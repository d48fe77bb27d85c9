//! Course operations.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_domain::patterns::CODE;
use swimdesk_domain::{CourseCapacityType, SwimLevel};
use swimdesk_validation::{Params, RangeBound, ValidationError, ranges};

const VALIDITY_FROM: (&str, &str) = ("validityFrom", "inicio de vigencia");
const VALIDITY_TO: (&str, &str) = ("validityTo", "fin de vigencia");

fn check_validity(from: &str, to: &str) -> Result<(), ValidationError> {
    ranges::ensure_before(
        RangeBound::new(VALIDITY_FROM.0, VALIDITY_FROM.1, from),
        RangeBound::new(VALIDITY_TO.0, VALIDITY_TO.1, to),
    )
}

/// `course.add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(check = "check_course_add")]
pub struct CourseAddParams {
    #[params(label = "piscina", integer(min = 1))]
    pub pool_id: i64,
    #[params(label = "código", string(pattern = "CODE"))]
    pub code: String,
    #[params(label = "nombre", string(min = 1, max = 80))]
    pub name: String,
    #[params(label = "tipo de aforo", constant = "CourseCapacityType")]
    pub capacity_type: CourseCapacityType,
    #[params(label = "aforo", integer(min = 1, max = 200))]
    pub capacity: i64,
    /// Monthly fee, two decimals at most.
    #[params(label = "precio", decimal)]
    pub price: String,
    #[params(label = "inicio de vigencia", iso_date)]
    pub validity_from: String,
    #[params(label = "fin de vigencia", iso_date)]
    pub validity_to: String,
    /// Comma-separated `SwimLevel` keys.
    #[params(label = "niveles", comma_constants = "SwimLevel")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<String>,
    #[params(label = "descripción", string(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn check_course_add(params: &CourseAddParams) -> Result<(), ValidationError> {
    check_validity(&params.validity_from, &params.validity_to)
}

/// `course.update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(update, check = "check_course_update")]
pub struct CourseUpdateParams {
    #[params(label = "curso", integer(min = 1))]
    pub course_id: i64,
    #[params(label = "nombre", string(min = 1, max = 80))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[params(label = "aforo", integer(min = 1, max = 200))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[params(label = "precio", decimal)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[params(label = "inicio de vigencia", iso_date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_from: Option<String>,
    #[params(label = "fin de vigencia", iso_date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_to: Option<String>,
    #[params(label = "descripción", string(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn check_course_update(params: &CourseUpdateParams) -> Result<(), ValidationError> {
    match (params.validity_from.as_deref(), params.validity_to.as_deref()) {
        (Some(from), Some(to)) => check_validity(from, to),
        _ => Ok(()),
    }
}

/// `course.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    #[params(label = "piscina", integer(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<i64>,
    /// Comma-separated `CourseCapacityType` keys.
    #[params(label = "tipos de aforo", comma_constants = "CourseCapacityType")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_types: Option<String>,
    /// Only courses valid on this day.
    #[params(label = "fecha de vigencia", date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_on: Option<String>,
}
