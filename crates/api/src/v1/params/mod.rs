//! Params DTOs, one per backend operation.
//!
//! Field labels are the Spanish names shown in user messages. List models
//! embed [`PaginationParams`], whose fields are validated before their own.

#![allow(missing_docs, reason = "fields are described by their #[params] labels")]

pub mod attendance;
pub mod courses;
pub mod journeys;
pub mod members;
pub mod pagination;
pub mod payments;
pub mod pools;
pub mod sales;
pub mod schedules;
pub mod students;
pub mod surveys;

pub use attendance::{AttendanceAddParams, AttendanceListParams};
pub use courses::{CourseAddParams, CourseListParams, CourseUpdateParams};
pub use journeys::{JourneyAddParams, JourneyListParams, JourneyUpdateParams};
pub use members::{
    MemberAddParams, MemberDeleteParams, MemberGetParams, MemberListParams, MemberUpdateParams,
};
pub use pagination::{DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT, PaginationParams};
pub use payments::{PaymentAddParams, PaymentListParams, PaymentUpdateStateParams};
pub use pools::{PoolAddParams, PoolDeleteParams, PoolListParams, PoolUpdateParams};
pub use sales::{SaleAddParams, SaleDetailRefundPartialParams, SaleListParams};
pub use schedules::{QuotaCalendarListParams, ScheduleAddParams};
pub use students::{StudentAddParams, StudentGetParams, StudentListParams, StudentUpdateParams};
pub use surveys::{SurveyAddParams, SurveyAnswerListParams, SurveyListParams};
