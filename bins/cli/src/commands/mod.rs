//! CLI command handlers.

pub mod catalog;
pub mod config;
pub mod info;
pub mod registry;
pub mod validate;

pub use catalog::{run_operations, run_schema};
pub use config::{run_config_check, run_config_show};
pub use info::run_info;
pub use registry::run_registry;
pub use validate::{run_validate, run_validate_field};
