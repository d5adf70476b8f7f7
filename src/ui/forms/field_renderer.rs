//! Renderers for each field kind of the survey form

use crate::state::{ChoiceField, MultiChoiceField, SwitchField, TextField, Violation, FRAMEWORKS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool, error: Option<&Violation>) -> Block<'static> {
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    if let Some(violation) = error {
        block = block.title_bottom(
            Line::from(format!(" {violation} ")).style(Style::default().fg(Color::Red)),
        );
    }
    block
}

/// Draw a single-line text input with placeholder and cursor
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    is_active: bool,
    error: Option<&Violation>,
) {
    let cursor = if is_active { "▌" } else { "" };

    let content = if field.value().is_empty() && !is_active {
        Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(field.value().to_string()),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = field_block(&field.label, is_active, error);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw a radio group: one marker line per option
pub fn draw_radio_group(
    frame: &mut Frame,
    area: Rect,
    field: &ChoiceField,
    is_active: bool,
    error: Option<&Violation>,
) {
    let mut lines = vec![Line::from(Span::styled(
        field.description.clone(),
        Style::default().fg(Color::DarkGray),
    ))];

    for (index, option) in FRAMEWORKS.iter().enumerate() {
        let selected = field.selected() == Some(index);
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", option.label),
            style,
        )));
    }

    let block = field_block(&field.label, is_active, error);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw a checkbox group: cursor-navigable markers, any number checked
pub fn draw_checkbox_group(
    frame: &mut Frame,
    area: Rect,
    field: &MultiChoiceField,
    is_active: bool,
    error: Option<&Violation>,
) {
    let mut lines = vec![Line::from(Span::styled(
        field.description.clone(),
        Style::default().fg(Color::DarkGray),
    ))];

    for (index, option) in FRAMEWORKS.iter().enumerate() {
        let checked = field.is_selected(option.value);
        let marker = if checked { "[x]" } else { "[ ]" };
        let mut style = if checked {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        if is_active && field.cursor() == index {
            style = style.add_modifier(Modifier::BOLD).add_modifier(Modifier::UNDERLINED);
        }
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", option.label),
            style,
        )));
    }

    let block = field_block(&field.label, is_active, error);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw a select control: description plus the current choice
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    field: &ChoiceField,
    is_active: bool,
    error: Option<&Violation>,
) {
    let value_line = match field.selected_label() {
        Some(label) => Line::from(vec![
            Span::raw(label),
            Span::styled(" ▾", Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(
            "Pick one ▾",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let lines = vec![
        Line::from(Span::styled(
            field.description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        value_line,
    ];

    let block = field_block(&field.label, is_active, error);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the privacy switch: an ON/OFF badge plus its label
pub fn draw_switch(frame: &mut Frame, area: Rect, field: &SwitchField, is_active: bool) {
    let badge = if field.is_on() {
        Span::styled(
            " ON ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" OFF ", Style::default().fg(Color::Gray).bg(Color::DarkGray))
    };

    let line = Line::from(vec![badge, Span::raw(format!(" {}", field.label))]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active, false));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
