//! Users table screen.
//!
//! Widgets here only read `UsersViewState` / `SortState` and report interactions as
//! `TableAction`s; the app applies them after the frame is laid out.
//! - `toolbar`: filter input, search, gender selector, reset
//! - `table`: sortable header and the visible rows
//! - `pagination`: page size selector, range label, previous/next

mod pagination;
pub mod table;
mod toolbar;

pub use pagination::users_pagination;
pub use table::users_table;
pub use toolbar::users_toolbar;
