//! Interaction handlers for the users table.
//!
//! UI code turns widget events into a [`TableAction`] and calls [`apply_action`]. Handlers
//! update `UsersViewState` / `SortState` and, where the action calls for it, dispatch
//! `FetchUsersCommand`.

use log::debug;
use peoplegrid_states::{StateCtx, StateError};

use super::fetch_users::{FetchUsersCommand, FetchUsersInput};
use super::query::UsersQuery;
use super::sort::{SortColumn, SortState};
use super::view_state::{GenderFilter, RowsPerPage, UsersViewState};
use crate::BusinessConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Resets both states and fetches the first page.
    Mount,
    ChangePage(u32),
    ChangeRowsPerPage(RowsPerPage),
    RequestSort(SortColumn),
    ChangeGender(GenderFilter),
    ResetFilter,
    /// Filter text edit. Clears the gender selection locally; never fetches, `Search` does.
    InputFilter(String),
    Search,
}

/// Registers the states and command the users table needs.
pub fn register_users_table(ctx: &mut StateCtx) {
    ctx.add_state(UsersViewState::default());
    ctx.add_state(SortState::default());
    ctx.add_state(FetchUsersInput::default());
    ctx.record_command(FetchUsersCommand);
}

pub fn apply_action(ctx: &mut StateCtx, action: TableAction) -> Result<(), StateError> {
    debug!("apply_action: {action:?}");

    match action {
        TableAction::Mount => {
            *ctx.try_state_mut::<UsersViewState>()? = UsersViewState::default();
            *ctx.try_state_mut::<SortState>()? = SortState::default();
            fetch(ctx, UsersQuery::page(0, RowsPerPage::default()))
        }
        TableAction::ChangePage(page) => {
            let view = ctx.try_state_mut::<UsersViewState>()?;
            view.page = page;
            let query = UsersQuery::page(page, view.rows_per_page);
            fetch(ctx, query)
        }
        TableAction::ChangeRowsPerPage(rows_per_page) => {
            fetch(ctx, UsersQuery::page(0, rows_per_page))
        }
        TableAction::RequestSort(column) => {
            let sort = ctx.try_state_mut::<SortState>()?;
            *sort = sort.toggled(column);
            let sort = *sort;

            let view = ctx.try_state::<UsersViewState>()?;
            let query = UsersQuery::page(view.page, view.rows_per_page)
                .with_gender_as_is(view.gender)
                .with_keywords(&view.filter)
                .with_sort(sort);
            fetch(ctx, query)
        }
        TableAction::ChangeGender(gender) => {
            let view = ctx.try_state_mut::<UsersViewState>()?;
            view.gender = gender;
            let query = UsersQuery::page(view.page, view.rows_per_page).with_gender(gender);
            fetch(ctx, query)
        }
        TableAction::ResetFilter => {
            let view = ctx.try_state_mut::<UsersViewState>()?;
            view.gender = GenderFilter::All;
            view.filter.clear();
            let query = UsersQuery::page(view.page, view.rows_per_page);
            fetch(ctx, query)
        }
        TableAction::InputFilter(text) => {
            let view = ctx.try_state_mut::<UsersViewState>()?;
            view.gender = GenderFilter::All;
            view.filter = text;
            Ok(())
        }
        TableAction::Search => {
            let view = ctx.try_state::<UsersViewState>()?;
            let query = UsersQuery::page(view.page, view.rows_per_page)
                .with_gender(view.gender)
                .with_keywords(&view.filter);
            fetch(ctx, query)
        }
    }
}

fn fetch(ctx: &mut StateCtx, query: UsersQuery) -> Result<(), StateError> {
    let policy = ctx.try_state::<BusinessConfig>()?.stale_responses.dispatch_policy();
    ctx.try_state_mut::<FetchUsersInput>()?.query = query;
    ctx.dispatch_with::<FetchUsersCommand>(policy)?;
    Ok(())
}
