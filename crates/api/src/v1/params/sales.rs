//! Point-of-sale operations.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_domain::{PaymentMethod, SaleState};
use swimdesk_validation::{Params, RangeBound, ValidationError, ranges};

/// `sale.add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct SaleAddParams {
    #[params(label = "productos", array(items = "integer", min = 1))]
    pub product_ids: Vec<i64>,
    #[params(label = "total", decimal)]
    pub total: String,
    #[params(label = "forma de pago", constant = "PaymentMethod")]
    pub method: PaymentMethod,
    /// Walk-in customers have no member.
    #[params(label = "socio", integer(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,
    #[params(label = "notas", string(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `sale.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(check = "check_sale_list")]
pub struct SaleListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    /// Comma-separated `SaleState` keys.
    #[params(label = "estados", comma_constants = "SaleState")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<String>,
    #[params(label = "fecha desde", iso_date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[params(label = "fecha hasta", iso_date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

fn check_sale_list(params: &SaleListParams) -> Result<(), ValidationError> {
    match (params.date_from.as_deref(), params.date_to.as_deref()) {
        (Some(from), Some(to)) => ranges::ensure_not_after(
            RangeBound::new("dateFrom", "fecha desde", from),
            RangeBound::new("dateTo", "fecha hasta", to),
        ),
        _ => Ok(()),
    }
}

/// `saleDetail.refundPartial`
///
/// Every field is required, the reason included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetailRefundPartialParams {
    #[params(label = "línea de venta", integer(min = 1))]
    pub sale_detail_id: i64,
    #[params(label = "importe", decimal)]
    pub amount: String,
    #[params(label = "motivo", string(max = 200))]
    pub reason: String,
}
