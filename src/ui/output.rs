//! Output pane: the last submitted value bag, rendered as JSON

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the display shell for submitted values
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut block = Block::default()
        .title(" Form values ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(submission) = app.state.submission.borrow().as_ref() {
        block = block.title_bottom(
            Line::from(format!(
                " submitted {} ",
                submission.received_at.format("%H:%M:%S")
            ))
            .style(Style::default().fg(Color::DarkGray)),
        );
    }

    let paragraph = match app.state.serialized_submission(app.pretty_output()) {
        Some(json) => Paragraph::new(json),
        None => Paragraph::new("(nothing submitted yet)")
            .style(Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
