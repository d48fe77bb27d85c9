//! API v1 DTOs and helpers.

mod mappers;
mod operations;
pub mod params;
mod schema;
mod types;

pub use mappers::{error_code_to_api_v1, error_envelope_to_api_v1_error, result_to_api_v1_result};
pub use operations::{
    ApiOperation, UnknownOperationError, validate_operation, validate_operation_field,
};
pub use schema::{operation_schemas, schema_for_operation};
pub use types::*;
