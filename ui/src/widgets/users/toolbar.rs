use egui::{ComboBox, TextEdit, Ui};
use peoplegrid_business::{GenderFilter, TableAction, UsersViewState};
use peoplegrid_states::StateCtx;

const FILTER_WIDTH: f32 = 220.0;

/// Filter text, Search, gender selector and Reset Filter in one row.
pub fn users_toolbar(state_ctx: &StateCtx, ui: &mut Ui, actions: &mut Vec<TableAction>) {
    let view = state_ctx.state::<UsersViewState>();

    ui.horizontal(|ui| {
        ui.label("Filter");
        let mut filter = view.filter.clone();
        let response = ui.add(
            TextEdit::singleline(&mut filter)
                .hint_text("Enter keywords")
                .desired_width(FILTER_WIDTH),
        );
        if response.changed() {
            actions.push(TableAction::InputFilter(filter));
        }

        if ui.button("Search").clicked() {
            actions.push(TableAction::Search);
        }

        let mut gender = view.gender;
        ComboBox::from_label("Gender")
            .selected_text(gender.label())
            .show_ui(ui, |ui| {
                for option in GenderFilter::OPTIONS {
                    ui.selectable_value(&mut gender, option, option.label());
                }
            });
        if gender != view.gender {
            actions.push(TableAction::ChangeGender(gender));
        }

        if ui.button("Reset Filter").clicked() {
            actions.push(TableAction::ResetFilter);
        }
    });
}
