//! JSON Schema exports for API v1 params DTOs.

use crate::v1::ApiOperation;
use schemars::Schema;
use std::collections::BTreeMap;

/// JSON Schema of the params accepted by `operation`.
#[must_use]
pub fn schema_for_operation(operation: ApiOperation) -> Schema {
    operation.schema()
}

/// Schemas of every operation, keyed by wire name.
#[must_use]
pub fn operation_schemas() -> BTreeMap<&'static str, Schema> {
    ApiOperation::ALL
        .iter()
        .map(|operation| (operation.as_str(), operation.schema()))
        .collect()
}
