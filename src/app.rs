//! Application core: key and mouse handling, submit wiring

use crate::config::TuiConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, LAST_NAME_FIELD, NAME_FIELD, SUBMIT_BUTTON};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown on the status line
    pub status_message: Option<String>,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::new(),
            config,
            quit: false,
            status_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn pretty_output(&self) -> bool {
        self.config.pretty_output.unwrap_or(true)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global shortcuts first
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit();
            return Ok(());
        }
        if key.modifiers.contains(COPY_MODIFIER) && key.code == KeyCode::Char('y') {
            self.copy_output();
            return Ok(());
        }

        let form = &mut self.state.form;
        let on_buttons = form.is_buttons_row_active();
        let in_text_field = matches!(form.active_field_index, NAME_FIELD | LAST_NAME_FIELD);

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Esc => self.status_message = None,
            // Enter on the buttons row triggers the selected button
            KeyCode::Enter if on_buttons => {
                if form.selected_button == SUBMIT_BUTTON {
                    self.submit();
                } else {
                    self.reset();
                }
            }
            KeyCode::Left | KeyCode::Up => form.cycle_prev(),
            KeyCode::Right | KeyCode::Down => form.cycle_next(),
            // Space types into text fields, toggles everywhere else
            KeyCode::Char(' ') if !in_text_field => form.toggle(),
            KeyCode::Enter => form.toggle(),
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event: click-to-focus on form fields
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let form_width = self
                .terminal_size
                .map(|(_, w)| w.saturating_sub(ui::OUTPUT_PANE_WIDTH))
                .unwrap_or(0);
            if mouse.column < form_width {
                if let Some(index) = ui::forms::field_index_at(mouse.row) {
                    self.state.form.set_active_field(index);
                }
            }
        }
        Ok(())
    }

    fn submit(&mut self) {
        if self.state.form.submit() {
            self.status_message = Some("Form submitted!".to_string());
        } else {
            self.status_message = Some("Please fix the highlighted fields".to_string());
        }
    }

    fn reset(&mut self) {
        self.state.form.reset();
        self.status_message = Some("Form reset".to_string());
    }

    /// Copy the serialized last submission to the system clipboard
    fn copy_output(&mut self) {
        let Some(json) = self.state.serialized_submission(self.pretty_output()) else {
            self.status_message = Some("Nothing submitted yet".to_string());
            return;
        };
        match copy_to_clipboard(&json) {
            Ok(()) => self.status_message = Some("Output copied to clipboard".to_string()),
            Err(err) => {
                tracing::warn!(%err, "clipboard copy failed");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CHECKBOX_FIELD, RADIO_FIELD, SELECT_FIELD, SWITCH_FIELD};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn fill_valid(app: &mut App) {
        type_text(app, "Ada");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Lovelace");
        app.handle_key(key(KeyCode::Tab)).unwrap(); // radio
        app.handle_key(key(KeyCode::Right)).unwrap(); // react
        app.handle_key(key(KeyCode::Tab)).unwrap(); // checkboxes
        app.handle_key(key(KeyCode::Left)).unwrap(); // cursor on vue
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap(); // select
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Right)).unwrap(); // svelte
        app.handle_key(key(KeyCode::Tab)).unwrap(); // switch
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(TuiConfig::default());
        assert!(!app.should_quit());
        app.handle_key(ctrl('c')).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_fills_active_text_field() {
        let mut app = App::new(TuiConfig::default());
        type_text(&mut app, "Ada x");
        assert_eq!(app.state.form.name.value(), "Ada x");
    }

    #[test]
    fn test_submit_shortcut_rejects_empty_form() {
        let mut app = App::new(TuiConfig::default());
        app.handle_key(ctrl('s')).unwrap();
        assert_eq!(app.state.form.errors().len(), 5);
        assert!(app.state.submission.borrow().is_none());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please fix the highlighted fields")
        );
    }

    #[test]
    fn test_full_flow_records_submission() {
        let mut app = App::new(TuiConfig::default());
        fill_valid(&mut app);
        app.handle_key(ctrl('s')).unwrap();

        let slot = app.state.submission.borrow();
        let values = &slot.as_ref().unwrap().values;
        assert_eq!(values.name, "Ada");
        assert_eq!(values.last_name, "Lovelace");
        assert_eq!(values.radio_value, "react");
        assert_eq!(values.checkbox_value, ["vue"]);
        assert_eq!(values.select_value, "svelte");
        assert_eq!(values.privacy_data, "true");
    }

    #[test]
    fn test_enter_on_submit_button_submits() {
        let mut app = App::new(TuiConfig::default());
        fill_valid(&mut app);
        app.handle_key(key(KeyCode::Tab)).unwrap(); // buttons row
        assert!(app.state.form.is_buttons_row_active());
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.state.submission.borrow().is_some());
    }

    #[test]
    fn test_enter_on_reset_button_clears_form() {
        let mut app = App::new(TuiConfig::default());
        fill_valid(&mut app);
        app.handle_key(key(KeyCode::Tab)).unwrap(); // buttons row
        app.handle_key(key(KeyCode::Right)).unwrap(); // Reset
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.form.name.value(), "");
        assert!(!app.state.form.is_dirty());
    }

    #[test]
    fn test_space_types_into_text_field_but_toggles_switch() {
        let mut app = App::new(TuiConfig::default());
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.state.form.name.value(), " ");

        app.state.form.set_active_field(SWITCH_FIELD);
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(app.state.form.privacy.is_on());
    }

    #[test]
    fn test_arrows_cycle_choice_fields() {
        let mut app = App::new(TuiConfig::default());
        app.state.form.set_active_field(RADIO_FIELD);
        app.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(app.state.form.radio.value(), "react");

        app.state.form.set_active_field(SELECT_FIELD);
        app.handle_key(key(KeyCode::Up)).unwrap();
        assert_eq!(app.state.form.select.value(), "vue");
    }

    #[test]
    fn test_esc_clears_status_message() {
        let mut app = App::new(TuiConfig::default());
        app.handle_key(ctrl('s')).unwrap();
        assert!(app.status_message.is_some());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_mouse_click_focuses_field() {
        let mut app = App::new(TuiConfig::default());
        app.terminal_size = Some((40, 120));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 14, // first checkbox band row
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click).unwrap();
        assert_eq!(app.state.form.active_field_index, CHECKBOX_FIELD);
    }

    #[test]
    fn test_mouse_click_in_output_pane_is_ignored() {
        let mut app = App::new(TuiConfig::default());
        app.terminal_size = Some((40, 120));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 100, // inside the output pane
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click).unwrap();
        assert_eq!(app.state.form.active_field_index, NAME_FIELD);
    }
}
