//! Sortable header for the users table.

use egui::{Button, Response, RichText, Ui, WidgetInfo, WidgetType};
use egui_extras::TableRow;
use peoplegrid_business::{SortColumn, SortDirection, SortState, TableAction};

/// One clickable sort label per column.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sort: SortState,
    actions: &mut Vec<TableAction>,
) {
    for column in SortColumn::ALL {
        header.col(|ui| {
            if sort_label(ui, column, sort.direction_of(column)).clicked() {
                actions.push(TableAction::RequestSort(column));
            }
        });
    }
}

/// Text shown in the header cell: the label plus an arrow on the active column.
pub fn header_text(column: SortColumn, direction: Option<SortDirection>) -> String {
    match direction {
        Some(direction) => format!("{} {}", column.label(), direction.arrow()),
        None => column.label().to_owned(),
    }
}

/// Label exposed to assistive tech. The direction is spoken, never drawn.
pub fn accessible_label(column: SortColumn, direction: Option<SortDirection>) -> String {
    match direction {
        Some(direction) => format!("{}, {}", column.label(), direction.accessibility_label()),
        None => column.label().to_owned(),
    }
}

fn sort_label(ui: &mut Ui, column: SortColumn, direction: Option<SortDirection>) -> Response {
    let enabled = ui.is_enabled();
    let text = RichText::new(header_text(column, direction)).strong();
    let response = ui.add(Button::new(text).frame(false));
    let label = accessible_label(column, direction);
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, &label));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_column_gets_arrow_and_spoken_direction() {
        assert_eq!(
            header_text(SortColumn::RegisterDate, Some(SortDirection::Desc)),
            "Register Date ⏷"
        );
        assert_eq!(
            accessible_label(SortColumn::RegisterDate, Some(SortDirection::Desc)),
            "Register Date, sorted descending"
        );
    }

    #[test]
    fn inactive_column_is_plain() {
        assert_eq!(header_text(SortColumn::Email, None), "Email");
        assert_eq!(accessible_label(SortColumn::Email, None), "Email");
    }
}
