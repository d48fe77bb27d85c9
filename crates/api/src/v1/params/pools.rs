//! Pool operations.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_domain::PoolType;
use swimdesk_domain::patterns::{CODE, POSTAL_CODE};
use swimdesk_validation::Params;

/// `pool.add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct PoolAddParams {
    #[params(label = "código", string(pattern = "CODE"))]
    pub code: String,
    #[params(label = "nombre", string(min = 1, max = 60))]
    pub name: String,
    #[params(label = "tipo de piscina", constant = "PoolType")]
    pub pool_type: PoolType,
    #[params(label = "número de calles", integer(min = 1, max = 20))]
    pub lanes: i64,
    #[params(label = "longitud", integer(min = 10, max = 50))]
    pub length_meters: i64,
    #[params(label = "dirección", string(max = 200))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[params(label = "código postal", string(pattern = "POSTAL_CODE"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// `pool.update`: at least one field besides `poolId` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(update)]
pub struct PoolUpdateParams {
    #[params(label = "piscina", integer(min = 1))]
    pub pool_id: i64,
    #[params(label = "nombre", string(min = 1, max = 60))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[params(label = "tipo de piscina", constant = "PoolType")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_type: Option<PoolType>,
    #[params(label = "número de calles", integer(min = 1, max = 20))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lanes: Option<i64>,
    #[params(label = "dirección", string(max = 200))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[params(label = "activa", boolean)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// `pool.delete`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct PoolDeleteParams {
    #[params(label = "piscina", integer(min = 1))]
    pub pool_id: i64,
}

/// `pool.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct PoolListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    #[params(label = "búsqueda", string(max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Comma-separated `PoolType` keys.
    #[params(label = "tipos de piscina", comma_constants = "PoolType")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_types: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error;
    use swimdesk_validation::{ParamsError, ParamsModel, ValidationErrorKind};

    #[test]
    fn update_requires_a_value() -> Result<(), Box<dyn Error>> {
        let error = PoolUpdateParams::from_dto(&json!({"poolId": 4, "name": null}))?
            .validate()
            .err();
        assert!(matches!(
            error.as_ref().and_then(ParamsError::as_validation),
            Some(error) if error.kind() == ValidationErrorKind::NothingToUpdate
                && error.user_message() == "No hay valores para actualizar."
        ));

        let updated = PoolUpdateParams::from_dto(&json!({"poolId": 4, "active": false}))?
            .validate()?;
        assert_eq!(updated.active, Some(false));
        Ok(())
    }

    #[test]
    fn add_reports_the_first_failing_field() -> Result<(), Box<dyn Error>> {
        let error = PoolAddParams::from_dto(&json!({
            "code": "bad code!",
            "name": "",
            "poolType": "INDOOR",
            "lanes": 6,
            "lengthMeters": 25
        }))?
        .validate()
        .err();
        assert!(matches!(
            error.as_ref().and_then(ParamsError::as_validation),
            Some(error) if error.field() == Some("code")
        ));
        Ok(())
    }
}
