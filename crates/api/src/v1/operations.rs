//! Operation catalogue: one entry per backend call, bound to its params DTO.

use crate::v1::params::{
    AttendanceAddParams, AttendanceListParams, CourseAddParams, CourseListParams,
    CourseUpdateParams, JourneyAddParams, JourneyListParams, JourneyUpdateParams, MemberAddParams,
    MemberDeleteParams, MemberGetParams, MemberListParams, MemberUpdateParams, PaymentAddParams,
    PaymentListParams, PaymentUpdateStateParams, PoolAddParams, PoolDeleteParams, PoolListParams,
    PoolUpdateParams, QuotaCalendarListParams, SaleAddParams, SaleDetailRefundPartialParams,
    SaleListParams, ScheduleAddParams, StudentAddParams, StudentGetParams, StudentListParams,
    StudentUpdateParams, SurveyAddParams, SurveyAnswerListParams, SurveyListParams,
};
use schemars::Schema;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use swimdesk_shared::{ErrorCode, ErrorEnvelope};
use swimdesk_validation::ParamsModel;

/// An operation name that is not in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperationError {
    name: String,
}

impl UnknownOperationError {
    /// The rejected name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: {}", self.name)
    }
}

impl std::error::Error for UnknownOperationError {}

impl From<UnknownOperationError> for ErrorEnvelope {
    fn from(error: UnknownOperationError) -> Self {
        let message = error.to_string();
        Self::expected(ErrorCode::new("api", "unknown_operation"), message)
            .with_metadata("operation", error.name)
    }
}

macro_rules! operations {
    ($($variant:ident = $key:literal => $params:ty,)+) => {
        /// Every operation whose parameters are validated here.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ApiOperation {
            $(
                #[doc = concat!("`", $key, "`")]
                $variant,
            )+
        }

        impl ApiOperation {
            /// Catalogue order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Wire name, e.g. `member.update`.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// Name of the params DTO.
            #[must_use]
            pub const fn model_name(self) -> &'static str {
                match self {
                    $(Self::$variant => <$params as ParamsModel>::MODEL_NAME,)+
                }
            }

            /// Whether the operation needs at least one optional value.
            #[must_use]
            pub const fn requires_update(self) -> bool {
                match self {
                    $(Self::$variant => <$params as ParamsModel>::REQUIRES_UPDATE,)+
                }
            }

            /// Accepted keys in validation order.
            #[must_use]
            pub fn declared_keys(self) -> Vec<&'static str> {
                match self {
                    $(Self::$variant => <$params as ParamsModel>::declared_keys(),)+
                }
            }

            /// Keys rejected when absent or null.
            #[must_use]
            pub fn required_keys(self) -> Vec<&'static str> {
                match self {
                    $(Self::$variant => <$params as ParamsModel>::required_keys(),)+
                }
            }

            /// JSON Schema of the params DTO.
            #[must_use]
            pub fn schema(self) -> Schema {
                match self {
                    $(Self::$variant => schemars::schema_for!($params),)+
                }
            }

            fn validate(self, input: &Value) -> Result<Value, ErrorEnvelope> {
                match self {
                    $(Self::$variant => validate_params::<$params>(input),)+
                }
            }

            fn validate_field(self, input: &Value, field: &str) -> Result<Value, ErrorEnvelope> {
                match self {
                    $(Self::$variant => validate_params_field::<$params>(input, field),)+
                }
            }
        }

        impl FromStr for ApiOperation {
            type Err = UnknownOperationError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $($key => Ok(Self::$variant),)+
                    _ => Err(UnknownOperationError {
                        name: name.to_owned(),
                    }),
                }
            }
        }
    };
}

operations! {
    MemberAdd = "member.add" => MemberAddParams,
    MemberUpdate = "member.update" => MemberUpdateParams,
    MemberGet = "member.get" => MemberGetParams,
    MemberDelete = "member.delete" => MemberDeleteParams,
    MemberList = "member.list" => MemberListParams,
    StudentAdd = "student.add" => StudentAddParams,
    StudentUpdate = "student.update" => StudentUpdateParams,
    StudentGet = "student.get" => StudentGetParams,
    StudentList = "student.list" => StudentListParams,
    PoolAdd = "pool.add" => PoolAddParams,
    PoolUpdate = "pool.update" => PoolUpdateParams,
    PoolDelete = "pool.delete" => PoolDeleteParams,
    PoolList = "pool.list" => PoolListParams,
    CourseAdd = "course.add" => CourseAddParams,
    CourseUpdate = "course.update" => CourseUpdateParams,
    CourseList = "course.list" => CourseListParams,
    ScheduleAdd = "schedule.add" => ScheduleAddParams,
    QuotaCalendarList = "quotaCalendar.list" => QuotaCalendarListParams,
    PaymentAdd = "payment.add" => PaymentAddParams,
    PaymentUpdateState = "payment.updateState" => PaymentUpdateStateParams,
    PaymentList = "payment.list" => PaymentListParams,
    SaleAdd = "sale.add" => SaleAddParams,
    SaleList = "sale.list" => SaleListParams,
    SaleDetailRefundPartial = "saleDetail.refundPartial" => SaleDetailRefundPartialParams,
    AttendanceAdd = "attendance.add" => AttendanceAddParams,
    AttendanceList = "attendance.list" => AttendanceListParams,
    SurveyAdd = "survey.add" => SurveyAddParams,
    SurveyList = "survey.list" => SurveyListParams,
    SurveyAnswerList = "surveyAnswer.list" => SurveyAnswerListParams,
    JourneyAdd = "journey.add" => JourneyAddParams,
    JourneyUpdate = "journey.update" => JourneyUpdateParams,
    JourneyList = "journey.list" => JourneyListParams,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn encode_failed(model: &str, error: &serde_json::Error) -> ErrorEnvelope {
    ErrorEnvelope::invariant(
        ErrorCode::new("params", "encode_failed"),
        format!("{model}: normalized params could not be encoded: {error}"),
    )
}

fn validate_params<T: ParamsModel>(input: &Value) -> Result<Value, ErrorEnvelope> {
    let validated = T::from_dto(input)?.validate()?;
    serde_json::to_value(validated.as_ref()).map_err(|error| encode_failed(T::MODEL_NAME, &error))
}

fn validate_params_field<T: ParamsModel>(input: &Value, field: &str) -> Result<Value, ErrorEnvelope> {
    let mut projected = T::from_dto(input)?;
    projected.validate_property(field)?;
    Ok(projected.get(field).cloned().unwrap_or(Value::Null))
}

/// Validate `input` as the parameters of `operation`.
///
/// Returns the normalized parameters: coerced numbers, applied defaults,
/// unknown keys dropped and absent optionals omitted. Feeding the result back
/// in yields the same value.
pub fn validate_operation(operation: ApiOperation, input: &Value) -> Result<Value, ErrorEnvelope> {
    let result = operation.validate(input);
    match &result {
        Ok(_) => tracing::debug!(operation = operation.as_str(), "params accepted"),
        Err(error) => tracing::debug!(
            operation = operation.as_str(),
            code = %error.code,
            "params rejected"
        ),
    }
    result
}

/// Validate a single field of `operation`, as a form does on blur.
///
/// Returns the normalized value, or `null` when an optional field is absent.
/// A key the operation does not declare is an invariant error.
pub fn validate_operation_field(
    operation: ApiOperation,
    input: &Value,
    field: &str,
) -> Result<Value, ErrorEnvelope> {
    operation.validate_field(input, field)
}
