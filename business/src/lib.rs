//! Business layer for PeopleGrid: configuration, HTTP and the users table domain.

pub mod config;
pub mod http;
pub mod users_table;

pub use config::{BusinessConfig, ConfigError, DEFAULT_API_BASE_URL, StaleResponsePolicy};
pub use users_table::*;
