//! Column definitions for the users table.

use egui_extras::Column;

pub const USERNAME_WIDTH: f32 = 140.0;
pub const GENDER_WIDTH: f32 = 80.0;
pub const REGISTER_DATE_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Username, Name, Email, Gender, Register Date.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::initial(USERNAME_WIDTH).at_least(80.0).clip(true),
        Column::auto().at_least(120.0).clip(true),
        Column::remainder().at_least(160.0).clip(true),
        Column::exact(GENDER_WIDTH),
        Column::exact(REGISTER_DATE_WIDTH),
    ]
}
