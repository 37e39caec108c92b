//! Table components for the users screen.
//!
//! - `columns`: column definitions and sizes
//! - `header`: sortable header cells
//! - `row`: one user per row

pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use peoplegrid_business::{SortState, TableAction, UsersViewState};
use peoplegrid_states::StateCtx;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the visible slice of the current batch under a sortable header.
pub fn users_table(state_ctx: &StateCtx, ui: &mut Ui, actions: &mut Vec<TableAction>) {
    let view = state_ctx.state::<UsersViewState>();
    let sort = *state_ctx.state::<SortState>();

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, sort, actions);
        })
        .body(|mut body| {
            for user in view.visible_rows() {
                body.row(ROW_HEIGHT, |mut row| render_user_row(&mut row, user));
            }
        });
}
