//! Table view state: the last fetched batch plus paging and filter inputs.

use std::any::Any;

use peoplegrid_states::{State, state_assign_impl};

use super::model::UserRow;
use super::query::UsersQuery;

/// Page-size options offered by the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowsPerPage {
    #[default]
    Five,
    Ten,
}

impl RowsPerPage {
    pub const OPTIONS: [Self; 2] = [Self::Five, Self::Ten];

    pub const fn get(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
        }
    }
}

impl std::fmt::Display for RowsPerPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Gender selector value. Most requests omit `gender` for `All`; sorting sends it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    pub const OPTIONS: [Self; 3] = [Self::All, Self::Male, Self::Female];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// State behind the users table.
///
/// `users` only ever holds the last fetched batch; paging slices into it client side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersViewState {
    pub users: Vec<UserRow>,
    pub page: u32,
    pub rows_per_page: RowsPerPage,
    pub filter: String,
    pub gender: GenderFilter,
}

impl UsersViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a completed fetch back. `filter` is left alone: only handlers change it.
    pub fn apply_batch(&mut self, users: Vec<UserRow>, query: &UsersQuery) {
        self.users = users;
        self.page = query.effective_page();
        self.rows_per_page = query.effective_size();
        self.gender = query.gender.unwrap_or_default();
    }

    fn start_index(&self) -> usize {
        self.page as usize * self.rows_per_page.get() as usize
    }

    /// `users[page*rows .. page*rows + rows]`, clamped to the batch.
    pub fn visible_rows(&self) -> &[UserRow] {
        let start = self.start_index().min(self.users.len());
        let end = (start + self.rows_per_page.get() as usize).min(self.users.len());
        &self.users[start..end]
    }

    /// Item count shown by the pagination control: the size of the fetched batch, not a
    /// server total.
    pub fn total_count(&self) -> usize {
        self.users.len()
    }

    /// One-based `(from, to)` of the visible rows, `(0, 0)` when nothing is visible.
    pub fn visible_range(&self) -> (usize, usize) {
        let visible = self.visible_rows().len();
        if visible == 0 {
            (0, 0)
        } else {
            let start = self.start_index();
            (start + 1, start + visible)
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.start_index() + (self.rows_per_page.get() as usize) < self.total_count()
    }
}

impl State for UsersViewState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
