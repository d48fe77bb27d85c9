//! Attendance marks and reports.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_domain::AttendanceState;
use swimdesk_validation::{Params, RangeBound, ValidationError, ranges};

/// Longest window an attendance report may cover.
pub const MAX_REPORT_DAYS: i64 = 90;

/// `attendance.add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceAddParams {
    #[params(label = "horario", integer(min = 1))]
    pub schedule_id: i64,
    #[params(label = "alumno", integer(min = 1))]
    pub student_id: i64,
    #[params(label = "fecha de la sesión", iso_date)]
    pub session_date: String,
    #[params(label = "asistencia", constant = "AttendanceState")]
    pub state: AttendanceState,
    #[params(label = "observaciones", string(max = 200))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `attendance.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(check = "check_report_window")]
pub struct AttendanceListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    #[params(label = "fecha de inicio", iso_date)]
    pub start_date: String,
    #[params(label = "fecha de fin", iso_date)]
    pub end_date: String,
    #[params(label = "curso", integer(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    /// Comma-separated `AttendanceState` keys.
    #[params(label = "asistencias", comma_constants = "AttendanceState")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<String>,
}

fn check_report_window(params: &AttendanceListParams) -> Result<(), ValidationError> {
    let start = RangeBound::new("startDate", "fecha de inicio", &params.start_date);
    let end = RangeBound::new("endDate", "fecha de fin", &params.end_date);
    ranges::ensure_not_after(start, end)?;
    ranges::ensure_max_span(start, end, MAX_REPORT_DAYS)
}
