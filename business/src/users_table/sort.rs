//! Sort column/direction state, kept apart from the view state.

use std::any::Any;

use peoplegrid_states::{State, state_assign_impl};

/// The five table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortColumn {
    #[default]
    Username,
    Name,
    Email,
    Gender,
    RegisterDate,
}

impl SortColumn {
    pub const ALL: [Self; 5] = [
        Self::Username,
        Self::Name,
        Self::Email,
        Self::Gender,
        Self::RegisterDate,
    ];

    /// Column id, also the `sortBy` query value.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Name => "name",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::RegisterDate => "register_date",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Gender => "Gender",
            Self::RegisterDate => "Register Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `sortOrder` query value.
    pub const fn wire(self) -> &'static str {
        match self {
            Self::Asc => "ascend",
            Self::Desc => "descend",
        }
    }

    pub const fn accessibility_label(self) -> &'static str {
        match self {
            Self::Asc => "sorted ascending",
            Self::Desc => "sorted descending",
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "⏶",
            Self::Desc => "⏷",
        }
    }
}

/// Current sort column and direction. Defaults to username ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub order_by: SortColumn,
    pub order: SortDirection,
}

impl SortState {
    /// Clicking the active ascending column flips it to descending; every other click
    /// sorts the clicked column ascending.
    pub fn toggled(self, column: SortColumn) -> Self {
        let order = if self.order_by == column && self.order == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self {
            order_by: column,
            order,
        }
    }

    /// Direction for `column` when it is the active one.
    pub fn direction_of(self, column: SortColumn) -> Option<SortDirection> {
        (self.order_by == column).then_some(self.order)
    }
}

impl State for SortState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
