//! Paging window shared by list operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swimdesk_validation::Params;

/// Page size used when `maxResults` is absent.
pub const DEFAULT_MAX_RESULTS: i64 = 10;

/// Largest page size a list operation accepts.
pub const MAX_RESULTS_LIMIT: i64 = 40;

/// Paging window embedded by list params.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Params,
)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page size.
    #[params(
        label = "número máximo de resultados",
        integer(min = 1, max = MAX_RESULTS_LIMIT, default = DEFAULT_MAX_RESULTS)
    )]
    pub max_results: i64,
    /// Offset of the first row.
    #[params(label = "índice de inicio", integer(min = 0, default = 0))]
    pub start_index: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            start_index: 0,
        }
    }
}
