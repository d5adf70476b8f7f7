//! UI module for rendering the TUI

mod components;
pub mod forms;
mod layout;
mod output;

pub use layout::OUTPUT_PANE_WIDTH;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, output_area, status_area) = layout::create_layout(frame.area());

    forms::draw(frame, form_area, app);
    output::draw(frame, output_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
