use egui::{Button, ComboBox, Layout, Ui};
use peoplegrid_business::{RowsPerPage, TableAction, UsersViewState};
use peoplegrid_states::StateCtx;

/// Formats the `"{from}–{to} of {count}"` range label.
pub fn range_label(view: &UsersViewState) -> String {
    let (from, to) = view.visible_range();
    format!("{from}–{to} of {}", view.total_count())
}

/// Rows-per-page selector, range label and previous/next buttons, right aligned.
pub fn users_pagination(state_ctx: &StateCtx, ui: &mut Ui, actions: &mut Vec<TableAction>) {
    let view = state_ctx.state::<UsersViewState>();

    ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
        // Right to left: last widget first.
        if ui
            .add_enabled(view.has_next_page(), Button::new("Next"))
            .clicked()
        {
            actions.push(TableAction::ChangePage(view.page + 1));
        }
        if ui
            .add_enabled(view.has_previous_page(), Button::new("Previous"))
            .clicked()
        {
            actions.push(TableAction::ChangePage(view.page.saturating_sub(1)));
        }

        ui.label(range_label(view));

        let mut rows_per_page = view.rows_per_page;
        ComboBox::from_id_salt("rows_per_page")
            .selected_text(rows_per_page.to_string())
            .show_ui(ui, |ui| {
                for option in RowsPerPage::OPTIONS {
                    ui.selectable_value(&mut rows_per_page, option, option.to_string());
                }
            });
        if rows_per_page != view.rows_per_page {
            actions.push(TableAction::ChangeRowsPerPage(rows_per_page));
        }
        ui.label("Rows per page");
    });
}
