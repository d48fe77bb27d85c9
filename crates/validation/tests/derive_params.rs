//! End-to-end checks for `#[derive(Params)]` models.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::error::Error;
use swimdesk_validation::{
    ConstantRegistry, FieldName, ParamsError, ParamsModel, Params, Pattern, RangeBound,
    ValidationError, ValidationErrorKind, ranges,
};

static CODE: Pattern = Pattern::new(
    r"^[a-zA-Z0-9-_]{1,40}$",
    "solo letras, números, guiones y guiones bajos",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Lane {
    #[serde(rename = "FAST")]
    Fast,
    #[serde(rename = "SLOW")]
    Slow,
}

impl ConstantRegistry for Lane {
    const NAME: &'static str = "Pool.Lanes";
    const ALL: &'static [Self] = &[Self::Fast, Self::Slow];
    const KEYS: &'static [&'static str] = &["FAST", "SLOW"];

    fn key(self) -> &'static str {
        match self {
            Self::Fast => "FAST",
            Self::Slow => "SLOW",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Fast => "Calle rápida",
            Self::Slow => "Calle lenta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Params)]
#[serde(rename_all = "camelCase")]
struct Paging {
    #[params(label = "número máximo de resultados", integer(min = 1, max = 40, default = 10))]
    max_results: i64,
    #[params(label = "índice inicial", integer(min = 0, default = 0))]
    start_index: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Params)]
#[serde(rename_all = "camelCase")]
#[params(check = "check_window")]
struct LaneList {
    #[serde(flatten)]
    #[params(flatten)]
    paging: Paging,
    #[params(label = "calle", constant = "Lane")]
    #[serde(skip_serializing_if = "Option::is_none")]
    lane: Option<Lane>,
    #[params(label = "fecha de inicio", iso_date)]
    start_date: String,
    #[params(label = "fecha de fin", iso_date)]
    end_date: String,
}

fn check_window(params: &LaneList) -> Result<(), ValidationError> {
    let start = RangeBound::new("startDate", "fecha de inicio", &params.start_date);
    let end = RangeBound::new("endDate", "fecha de fin", &params.end_date);
    ranges::ensure_not_after(start, end)?;
    ranges::ensure_max_span(start, end, 90)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Params)]
#[serde(rename_all = "camelCase")]
#[params(update)]
struct LaneUpdate {
    #[params(label = "calle", integer(min = 1))]
    lane_id: i64,
    #[params(label = "código", string(min = 1, max = 40, pattern = "CODE"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[params(label = "activa", string_boolean)]
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Params)]
#[serde(rename_all = "camelCase")]
struct LaneBooking {
    #[params(label = "calles", integer(max = 12))]
    lanes: i64,
    #[params(label = "nadadores", array(items = "integer", min = 1))]
    swimmer_ids: Vec<i64>,
}

fn validation_kind(error: Option<ParamsError>) -> Option<ValidationErrorKind> {
    error
        .as_ref()
        .and_then(ParamsError::as_validation)
        .map(ValidationError::kind)
}

#[test]
fn pagination_defaults_are_applied() -> Result<(), Box<dyn Error>> {
    let paging = Paging::from_dto(&json!({}))?.validate()?;

    assert_eq!(paging.max_results, 10);
    assert_eq!(paging.start_index, 0);
    Ok(())
}

#[test]
fn embedded_fields_run_first_and_resolve_by_key() -> Result<(), Box<dyn Error>> {
    let keys = LaneList::declared_keys();
    assert_eq!(keys, ["maxResults", "startIndex", "lane", "startDate", "endDate"]);
    assert_eq!(
        LaneListField::from_key("maxResults"),
        Some(LaneListField::Paging(PagingField::MaxResults))
    );
    assert_eq!(LaneListField::Lane.key(), "lane");

    let error = LaneList::from_dto(&json!({"maxResults": 99, "startDate": "bad"}))?
        .validate()
        .err();
    assert!(matches!(
        error.as_ref().and_then(ParamsError::as_validation),
        Some(error) if error.field() == Some("maxResults")
    ));
    Ok(())
}

#[test]
fn list_validation_normalizes_and_decodes_registry_values() -> Result<(), Box<dyn Error>> {
    let validated = LaneList::from_dto(&json!({
        "maxResults": "25",
        "lane": "FAST",
        "startDate": "2024-01-01",
        "endDate": "2024-01-31",
        "ignored": true
    }))?
    .validate()?;

    assert_eq!(validated.paging.max_results, 25);
    assert_eq!(validated.lane, Some(Lane::Fast));
    Ok(())
}

#[test]
fn list_cross_field_rules_run_after_fields() -> Result<(), Box<dyn Error>> {
    let inverted = LaneList::from_dto(&json!({"startDate": "2024-02-01", "endDate": "2024-01-01"}))?
        .validate()
        .err();
    assert_eq!(validation_kind(inverted), Some(ValidationErrorKind::InvalidRange));

    let too_long = LaneList::from_dto(&json!({"startDate": "2024-01-01", "endDate": "2024-04-01"}))?
        .validate()
        .err();
    assert_eq!(validation_kind(too_long), Some(ValidationErrorKind::InvalidRange));

    let exact = LaneList::from_dto(&json!({"startDate": "2024-01-01", "endDate": "2024-03-31"}))?
        .validate();
    assert!(exact.is_ok());
    Ok(())
}

#[test]
fn unknown_registry_key_is_rejected() -> Result<(), Box<dyn Error>> {
    let error = LaneList::from_dto(&json!({
        "lane": "MEDIUM",
        "startDate": "2024-01-01",
        "endDate": "2024-01-02"
    }))?
    .validate()
    .err();

    assert_eq!(validation_kind(error), Some(ValidationErrorKind::NotAllowed));
    Ok(())
}

#[test]
fn update_without_values_is_rejected() -> Result<(), Box<dyn Error>> {
    let error = LaneUpdate::from_dto(&json!({"laneId": 3}))?.validate().err();
    assert_eq!(validation_kind(error), Some(ValidationErrorKind::NothingToUpdate));

    let updated = LaneUpdate::from_dto(&json!({"laneId": "3", "active": "true"}))?.validate()?;
    assert_eq!(updated.active, Some(true));
    assert_eq!(updated.code, None);
    Ok(())
}

#[test]
fn required_identifier_is_checked_before_update_rule() -> Result<(), Box<dyn Error>> {
    let error = LaneUpdate::from_dto(&json!({"laneId": null}))?.validate().err();
    assert_eq!(validation_kind(error), Some(ValidationErrorKind::MissingValue));
    Ok(())
}

#[test]
fn single_property_mode_by_name() -> Result<(), Box<dyn Error>> {
    let mut projected = LaneUpdate::from_dto(&json!({"laneId": "4", "code": "bad char!"}))?;
    projected.validate_property("laneId")?;
    assert_eq!(projected.get("laneId"), Some(&json!(4)));

    let error = projected.validate_property("code").err();
    assert_eq!(validation_kind(error), Some(ValidationErrorKind::PatternMismatch));

    let error = projected.validate_property("nickname").err();
    assert!(matches!(error, Some(ParamsError::UnknownProperty { .. })));
    Ok(())
}

#[test]
fn validation_is_idempotent_on_normalized_models() -> Result<(), Box<dyn Error>> {
    let first = LaneList::from_dto(&json!({
        "startIndex": "5",
        "startDate": "2024-01-01",
        "endDate": "2024-01-02"
    }))?
    .validate()?;
    let second = LaneList::from_dto(first.as_ref())?.validate()?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn numeric_input_failures_are_validation_errors() -> Result<(), Box<dyn Error>> {
    let huge = LaneBooking::from_dto(&json!({"lanes": 1e20, "swimmerIds": [1]}))?
        .validate()
        .err();
    assert_eq!(validation_kind(huge), Some(ValidationErrorKind::InvalidType));

    let above = LaneBooking::from_dto(&json!({"lanes": 300, "swimmerIds": [1]}))?
        .validate()
        .err();
    assert_eq!(validation_kind(above), Some(ValidationErrorKind::OutOfRange));

    let bad_item = LaneBooking::from_dto(&json!({"lanes": 2, "swimmerIds": ["a"]}))?
        .validate()
        .err();
    assert!(matches!(
        bad_item.as_ref().and_then(ParamsError::as_validation),
        Some(error) if error.kind() == ValidationErrorKind::InvalidType
            && error.field() == Some("swimmerIds[0]")
    ));

    let booking = LaneBooking::from_dto(&json!({"lanes": "2", "swimmerIds": ["7", 8.0]}))?
        .validate()?;
    assert_eq!(booking.swimmer_ids, [7, 8]);
    Ok(())
}
