//! Club member operations.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_domain::MemberState;
use swimdesk_domain::patterns::{EMAIL, IBAN, PHONE, POSTAL_CODE};
use swimdesk_validation::Params;

/// `member.add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct MemberAddParams {
    #[params(label = "nombre", string(min = 1, max = 60))]
    pub first_name: String,
    #[params(label = "apellidos", string(min = 1, max = 80))]
    pub last_name: String,
    #[params(label = "fecha de nacimiento", iso_date)]
    pub birth_date: String,
    #[params(label = "estado", constant = "MemberState")]
    pub state: MemberState,
    #[params(label = "correo electrónico", string(max = 120, pattern = "EMAIL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[params(label = "teléfono", string(pattern = "PHONE"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[params(label = "código postal", string(pattern = "POSTAL_CODE"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[params(label = "IBAN", string(pattern = "IBAN"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

/// `member.update`: at least one field besides `memberId` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(update)]
pub struct MemberUpdateParams {
    #[params(label = "socio", integer(min = 1))]
    pub member_id: i64,
    #[params(label = "nombre", string(min = 1, max = 60))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[params(label = "apellidos", string(min = 1, max = 80))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[params(label = "estado", constant = "MemberState")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<MemberState>,
    #[params(label = "correo electrónico", string(max = 120, pattern = "EMAIL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[params(label = "teléfono", string(pattern = "PHONE"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[params(label = "código postal", string(pattern = "POSTAL_CODE"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[params(label = "IBAN", string(pattern = "IBAN"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

/// `member.get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct MemberGetParams {
    #[params(label = "socio", integer(min = 1))]
    pub member_id: i64,
}

/// `member.delete`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct MemberDeleteParams {
    #[params(label = "socio", integer(min = 1))]
    pub member_id: i64,
}

/// `member.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct MemberListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    /// Free-text search over name, email and phone.
    #[params(label = "búsqueda", string(max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Comma-separated `MemberState` keys.
    #[params(label = "estados", comma_constants = "MemberState")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<String>,
    /// Comma-separated member ids.
    #[params(label = "socios", comma_integers(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<String>,
}
