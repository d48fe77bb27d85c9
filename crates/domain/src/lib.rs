//! # swimdesk-domain
//!
//! Constant registries and field patterns for the swim-school back-office.
//!
//! Registries are immutable key tables shared by the validators (membership
//! checks) and by presentation code (label lookup):
//!
//! - **People** - `MemberState`, `StudentIdType`, `SwimLevel`
//! - **Payments** - `PaymentState`, `PaymentMethod`, `SaleState`
//! - **Facilities** - `PoolType`, `CourseCapacityType`, `WeekDay`, `AttendanceState`
//! - **Engagement** - `SurveyQuestionType`, `JourneyChannel`, `JourneyState`
//!
//! ## Dependency Rules
//!
//! - Depends only on the `shared` and `validation` crates
//! - No I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use swimdesk_shared::shared_crate_version;

mod macros;

pub mod engagement;
pub mod facilities;
pub mod patterns;
pub mod payments;
pub mod people;

pub use engagement::{JourneyChannel, JourneyState, SurveyQuestionType};
pub use facilities::{AttendanceState, CourseCapacityType, PoolType, WeekDay};
pub use payments::{PaymentMethod, PaymentState, SaleState};
pub use people::{MemberState, StudentIdType, SwimLevel};

use swimdesk_validation::{ConstantRegistry, RegistrySnapshot};

/// Snapshots of every registry, in a stable order.
pub fn all_registries() -> Vec<RegistrySnapshot> {
    vec![
        MemberState::snapshot(),
        StudentIdType::snapshot(),
        SwimLevel::snapshot(),
        PaymentState::snapshot(),
        PaymentMethod::snapshot(),
        SaleState::snapshot(),
        PoolType::snapshot(),
        CourseCapacityType::snapshot(),
        WeekDay::snapshot(),
        AttendanceState::snapshot(),
        SurveyQuestionType::snapshot(),
        JourneyChannel::snapshot(),
        JourneyState::snapshot(),
    ]
}

/// Snapshot of the registry with the given name (e.g. `Payment.States`).
pub fn registry_by_name(name: &str) -> Option<RegistrySnapshot> {
    all_registries()
        .into_iter()
        .find(|snapshot| snapshot.name.eq_ignore_ascii_case(name))
}

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
