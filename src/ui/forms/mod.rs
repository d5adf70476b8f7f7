//! Survey form rendering

mod field_renderer;

use crate::app::App;
use crate::state::{
    FieldId, BUTTONS_ROW, CHECKBOX_FIELD, FIELD_COUNT, LAST_NAME_FIELD, NAME_FIELD, RADIO_FIELD,
    RESET_BUTTON, SELECT_FIELD, SUBMIT_BUTTON, SWITCH_FIELD,
};
use crate::ui::components::render_button;
use field_renderer::{
    draw_checkbox_group, draw_radio_group, draw_select, draw_switch, draw_text_field,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Row heights of each tab stop inside the form pane, in tab order
pub const FIELD_HEIGHTS: [u16; FIELD_COUNT] = [
    3, // name
    3, // last name
    7, // radio group: description + four options
    7, // checkbox group
    4, // select: description + value
    3, // switch
    3, // buttons row
];

/// Draw the survey form pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Framework Survey ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> =
        FIELD_HEIGHTS.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let active = form.active_field_index;

    draw_text_field(
        frame,
        chunks[NAME_FIELD],
        &form.name,
        active == NAME_FIELD,
        form.error_for(FieldId::Name),
    );
    draw_text_field(
        frame,
        chunks[LAST_NAME_FIELD],
        &form.last_name,
        active == LAST_NAME_FIELD,
        form.error_for(FieldId::LastName),
    );
    draw_radio_group(
        frame,
        chunks[RADIO_FIELD],
        &form.radio,
        active == RADIO_FIELD,
        form.error_for(FieldId::RadioValue),
    );
    draw_checkbox_group(
        frame,
        chunks[CHECKBOX_FIELD],
        &form.checkboxes,
        active == CHECKBOX_FIELD,
        form.error_for(FieldId::CheckboxValue),
    );
    draw_select(
        frame,
        chunks[SELECT_FIELD],
        &form.select,
        active == SELECT_FIELD,
        form.error_for(FieldId::SelectValue),
    );
    draw_switch(frame, chunks[SWITCH_FIELD], &form.privacy, active == SWITCH_FIELD);

    draw_buttons_row(frame, chunks[BUTTONS_ROW], app);
}

/// Submit and Reset, side by side
fn draw_buttons_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let on_buttons = form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Submit
            Constraint::Length(11), // Reset
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Submit",
        on_buttons && form.selected_button == SUBMIT_BUTTON,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        "Reset",
        on_buttons && form.selected_button == RESET_BUTTON,
        Some(Color::Gray),
    );
}

/// Tab stop under a form-pane row (absolute row; the pane starts at row 0
/// and row 0 is the border, so fields begin at row 1)
pub fn field_index_at(row: u16) -> Option<usize> {
    let mut offset = 1u16;
    for (index, height) in FIELD_HEIGHTS.iter().enumerate() {
        if row >= offset && row < offset + height {
            return Some(index);
        }
        offset += height;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_at_border_is_none() {
        assert_eq!(field_index_at(0), None);
    }

    #[test]
    fn test_field_index_at_each_band() {
        assert_eq!(field_index_at(1), Some(NAME_FIELD));
        assert_eq!(field_index_at(3), Some(NAME_FIELD));
        assert_eq!(field_index_at(4), Some(LAST_NAME_FIELD));
        assert_eq!(field_index_at(7), Some(RADIO_FIELD));
        assert_eq!(field_index_at(13), Some(RADIO_FIELD));
        assert_eq!(field_index_at(14), Some(CHECKBOX_FIELD));
        assert_eq!(field_index_at(21), Some(SELECT_FIELD));
        assert_eq!(field_index_at(25), Some(SWITCH_FIELD));
        assert_eq!(field_index_at(28), Some(BUTTONS_ROW));
    }

    #[test]
    fn test_field_index_below_form_is_none() {
        let total: u16 = FIELD_HEIGHTS.iter().sum();
        assert_eq!(field_index_at(total + 1), None);
    }
}
