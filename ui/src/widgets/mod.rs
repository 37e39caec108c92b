pub mod users;

pub use users::{users_pagination, users_table, users_toolbar};
