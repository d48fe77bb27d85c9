//! Integration coverage for the constant registries.

use std::collections::BTreeSet;
use std::error::Error;
use swimdesk_domain::{
    CourseCapacityType, PaymentState, StudentIdType, WeekDay, all_registries,
};
use swimdesk_validation::ConstantRegistry;

#[test]
fn registry_names_are_unique_and_non_empty() {
    let registries = all_registries();
    let names: BTreeSet<_> = registries.iter().map(|snapshot| snapshot.name).collect();

    assert_eq!(names.len(), registries.len());
    for snapshot in &registries {
        assert!(!snapshot.entries.is_empty(), "{} is empty", snapshot.name);
        let keys: BTreeSet<_> = snapshot.entries.iter().map(|entry| entry.key).collect();
        assert_eq!(keys.len(), snapshot.entries.len(), "{} repeats a key", snapshot.name);
    }
}

#[test]
fn keys_match_all_variants() {
    assert_eq!(PaymentState::KEYS.len(), PaymentState::ALL.len());
    for (state, key) in PaymentState::ALL.iter().zip(PaymentState::KEYS) {
        assert_eq!(state.key(), *key);
    }
    assert_eq!(WeekDay::KEYS.first(), Some(&"MONDAY"));
}

#[test]
fn registries_serialize_as_their_keys() -> Result<(), Box<dyn Error>> {
    assert_eq!(serde_json::to_value(PaymentState::PartiallyRefunded)?, "PARTIALLY_REFUNDED");
    let parsed: CourseCapacityType = serde_json::from_value(serde_json::json!("PER_SESSION"))?;
    assert_eq!(parsed, CourseCapacityType::PerSession);
    assert!(serde_json::from_value::<CourseCapacityType>(serde_json::json!("per_session")).is_err());
    Ok(())
}

#[test]
fn descriptions_serve_as_labels() {
    let snapshot = StudentIdType::snapshot();
    assert_eq!(snapshot.describe("PASSPORT"), Some("Pasaporte"));
    assert_eq!(PaymentState::Paid.to_string(), "PAID");
    assert_eq!(PaymentState::Paid.description(), "Pagado");
}
