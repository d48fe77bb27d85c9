//! Weekly schedules and the quota calendar.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_domain::WeekDay;
use swimdesk_domain::patterns::TIME_OF_DAY;
use swimdesk_validation::{Params, RangeBound, ValidationError, ranges};

/// `schedule.add`: one weekly slot of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(check = "check_schedule_add")]
pub struct ScheduleAddParams {
    #[params(label = "curso", integer(min = 1))]
    pub course_id: i64,
    #[params(label = "día de la semana", constant = "WeekDay")]
    pub week_day: WeekDay,
    #[params(label = "hora de inicio", string(pattern = "TIME_OF_DAY"))]
    pub start_time: String,
    #[params(label = "hora de fin", string(pattern = "TIME_OF_DAY"))]
    pub end_time: String,
    /// Instructors assigned to the slot; at least one.
    #[params(label = "monitores", array(items = "integer", min = 1))]
    pub instructor_ids: Vec<i64>,
    #[params(label = "calle", integer(min = 1, max = 20))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<i64>,
}

fn check_schedule_add(params: &ScheduleAddParams) -> Result<(), ValidationError> {
    ranges::ensure_time_before(
        RangeBound::new("startTime", "hora de inicio", &params.start_time),
        RangeBound::new("endTime", "hora de fin", &params.end_time),
    )
}

/// `quotaCalendar.list`: a whole month, never paginated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct QuotaCalendarListParams {
    #[params(label = "piscina", integer(min = 1))]
    pub pool_id: i64,
    #[params(label = "mes", integer(min = 1, max = 12))]
    pub month: i64,
    #[params(label = "año", integer(min = 2000, max = 2100))]
    pub year: i64,
    /// Comma-separated course ids.
    #[params(label = "cursos", comma_integers(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_ids: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error;
    use swimdesk_validation::{ParamsError, ParamsModel, ValidationErrorKind};

    #[test]
    fn slot_end_must_follow_start() -> Result<(), Box<dyn Error>> {
        let slot = ScheduleAddParams::from_dto(&json!({
            "courseId": 9,
            "weekDay": "TUESDAY",
            "startTime": "17:30",
            "endTime": "18:15",
            "instructorIds": ["4", 5]
        }))?
        .validate()?;
        assert_eq!(slot.instructor_ids, vec![4, 5]);

        let error = ScheduleAddParams::from_dto(&json!({
            "courseId": 9,
            "weekDay": "TUESDAY",
            "startTime": "18:15",
            "endTime": "17:30",
            "instructorIds": [4]
        }))?
        .validate()
        .err();
        assert!(matches!(
            error.as_ref().and_then(ParamsError::as_validation),
            Some(error) if error.kind() == ValidationErrorKind::InvalidRange
        ));
        Ok(())
    }

    #[test]
    fn slot_needs_an_instructor() -> Result<(), Box<dyn Error>> {
        let error = ScheduleAddParams::from_dto(&json!({
            "courseId": 9,
            "weekDay": "MONDAY",
            "startTime": "09:00",
            "endTime": "10:00",
            "instructorIds": []
        }))?
        .validate()
        .err();
        assert!(matches!(
            error.as_ref().and_then(ParamsError::as_validation),
            Some(error) if error.kind() == ValidationErrorKind::EmptyCollection
        ));
        Ok(())
    }

    #[test]
    fn calendar_month_is_bounded_and_unpaginated() -> Result<(), Box<dyn Error>> {
        let keys = QuotaCalendarListParams::declared_keys();
        assert!(!keys.contains(&"maxResults"));

        let calendar =
            QuotaCalendarListParams::from_dto(&json!({"poolId": 1, "month": "2", "year": 2025}))?
                .validate()?;
        assert_eq!(calendar.month, 2);

        let error = QuotaCalendarListParams::from_dto(&json!({"poolId": 1, "month": 13, "year": 2025}))?
            .validate()
            .err();
        assert!(matches!(
            error.as_ref().and_then(ParamsError::as_validation),
            Some(error) if error.field() == Some("month")
        ));
        Ok(())
    }
}
