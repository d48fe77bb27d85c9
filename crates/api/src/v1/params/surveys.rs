//! Satisfaction surveys and their answers.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use swimdesk_domain::SurveyQuestionType;
use swimdesk_validation::Params;

/// Largest page of answers a report may request.
pub const MAX_ANSWER_RESULTS: i64 = 100;

/// `survey.add`
///
/// The description is required even though the form treats it as optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAddParams {
    #[params(label = "título", string(min = 1, max = 120))]
    pub title: String,
    #[params(label = "descripción", string(max = 500))]
    pub description: String,
    /// Question definitions, kept as sent.
    #[params(label = "preguntas", array)]
    pub questions: Vec<Value>,
    #[params(label = "anónima", boolean)]
    pub anonymous: bool,
    #[params(label = "fecha de cierre", iso_date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<String>,
}

/// `survey.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct SurveyListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    #[params(label = "búsqueda", string(max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[params(label = "activa", string_boolean)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// `surveyAnswer.list`
///
/// Declares its own paging fields: answer reports allow larger pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswerListParams {
    #[params(
        label = "número máximo de resultados",
        integer(min = 1, max = MAX_ANSWER_RESULTS, default = 10)
    )]
    pub max_results: i64,
    #[params(label = "índice de inicio", integer(min = 0, default = 0))]
    pub start_index: i64,
    #[params(label = "encuesta", integer(min = 1))]
    pub survey_id: i64,
    /// Comma-separated `SurveyQuestionType` keys.
    #[params(label = "tipos de pregunta", comma_constants = "SurveyQuestionType")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_types: Option<String>,
}
