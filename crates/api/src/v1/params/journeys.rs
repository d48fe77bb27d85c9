//! Marketing journeys.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use swimdesk_domain::{JourneyChannel, JourneyState};
use swimdesk_validation::Params;

/// `journey.add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct JourneyAddParams {
    #[params(label = "nombre", string(min = 1, max = 80))]
    pub name: String,
    #[params(label = "canal", constant = "JourneyChannel")]
    pub channel: JourneyChannel,
    #[params(label = "fecha de inicio", iso_date)]
    pub start_date: String,
    /// Ordered step definitions, kept as sent.
    #[params(label = "pasos", array)]
    pub steps: Vec<Value>,
    /// Audience filter as a JSON document.
    #[params(label = "audiencia", json)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[params(label = "estado", constant = "JourneyState")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<JourneyState>,
}

/// `journey.update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(update)]
pub struct JourneyUpdateParams {
    #[params(label = "recorrido", integer(min = 1))]
    pub journey_id: i64,
    #[params(label = "nombre", string(min = 1, max = 80))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[params(label = "canal", constant = "JourneyChannel")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<JourneyChannel>,
    #[params(label = "fecha de inicio", iso_date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[params(label = "pasos", array)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Value>>,
    #[params(label = "audiencia", json)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[params(label = "estado", constant = "JourneyState")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<JourneyState>,
}

/// `journey.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct JourneyListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    /// Comma-separated `JourneyState` keys.
    #[params(label = "estados", comma_constants = "JourneyState")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<String>,
    /// Comma-separated `JourneyChannel` keys.
    #[params(label = "canales", comma_constants = "JourneyChannel")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<String>,
}
