//! Payment operations.

use crate::v1::params::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_domain::{PaymentMethod, PaymentState};
use swimdesk_validation::{Params, RangeBound, ValidationError, ranges};

/// `payment.add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAddParams {
    #[params(label = "socio", integer(min = 1))]
    pub member_id: i64,
    #[params(label = "importe", decimal)]
    pub amount: String,
    #[params(label = "forma de pago", constant = "PaymentMethod")]
    pub method: PaymentMethod,
    #[params(label = "concepto", string(min = 1, max = 200))]
    pub concept: String,
    #[params(label = "fecha de pago", iso_date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    #[params(label = "referencia", string(max = 60))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Free-form JSON document forwarded to the payment gateway.
    #[params(label = "datos adicionales", json)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// `payment.updateState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdateStateParams {
    #[params(label = "pago", integer(min = 1))]
    pub payment_id: i64,
    #[params(label = "estado", constant = "PaymentState")]
    pub state: PaymentState,
    #[params(label = "motivo", string(max = 200))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `payment.list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Params)]
#[serde(rename_all = "camelCase")]
#[params(check = "check_payment_list")]
pub struct PaymentListParams {
    #[serde(flatten)]
    #[params(flatten)]
    pub pagination: PaginationParams,
    #[params(label = "socio", integer(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,
    /// Comma-separated `PaymentState` keys.
    #[params(label = "estados", comma_constants = "PaymentState")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<String>,
    /// Comma-separated `PaymentMethod` keys.
    #[params(label = "formas de pago", comma_constants = "PaymentMethod")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<String>,
    #[params(label = "fecha desde", date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[params(label = "fecha hasta", date)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

fn check_payment_list(params: &PaymentListParams) -> Result<(), ValidationError> {
    match (params.date_from.as_deref(), params.date_to.as_deref()) {
        (Some(from), Some(to)) => ranges::ensure_not_after(
            RangeBound::new("dateFrom", "fecha desde", from),
            RangeBound::new("dateTo", "fecha hasta", to),
        ),
        _ => Ok(()),
    }
}
