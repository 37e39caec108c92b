//! Row rendering for the users table.

use egui_extras::TableRow;
use peoplegrid_business::UserRow;

#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRow) {
    row.col(|ui| {
        ui.label(&user.username);
    });
    row.col(|ui| {
        ui.label(&user.name);
    });
    row.col(|ui| {
        ui.label(&user.email);
    });
    row.col(|ui| {
        ui.label(&user.gender);
    });
    row.col(|ui| {
        ui.label(user.register_date_display());
    });
}
