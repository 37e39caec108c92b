//! Users table domain module.
//!
//! Home of:
//! - the row model and wire types (`model`)
//! - view and sort states stored in `StateCtx` (`view_state`, `sort`)
//! - query-string construction and the API call (`query`, `api`)
//! - the fetch command and the interaction handlers (`fetch_users`, `actions`)
//!
//! UI code should read `UsersViewState` / `SortState` and change them only through
//! `apply_action`.

pub mod actions;
pub mod api;
pub mod fetch_users;
pub mod model;
pub mod query;
pub mod sort;
pub mod view_state;

pub use actions::{TableAction, apply_action, register_users_table};
pub use api::{ApiResult, UsersApiError, list_users};
pub use fetch_users::{FetchUsersCommand, FetchUsersInput};
pub use model::{BATCH_SIZE, RandomUser, RandomUsersResponse, UserRow, format_register_date};
pub use query::UsersQuery;
pub use sort::{SortColumn, SortDirection, SortState};
pub use view_state::{GenderFilter, RowsPerPage, UsersViewState};
