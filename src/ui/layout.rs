//! Layout: form pane, output pane, status bar

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the output pane on the right
pub const OUTPUT_PANE_WIDTH: u16 = 42;

/// Split the screen into (form, output, status bar)
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for the status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                   // Form pane
            Constraint::Length(OUTPUT_PANE_WIDTH), // Output pane
        ])
        .split(rows[0]);

    (panes[0], panes[1], rows[1])
}

/// Draw the status bar: feedback message or key help
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = &app.status_message {
        let line = Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled(" Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": change  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(": toggle  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled(COPY_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": copy  "),
        Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
