//! The survey form engine: field state, navigation and the submit path

use super::field::{ChoiceField, FieldId, MultiChoiceField, SwitchField, TextField};
use super::rules::{self, FieldErrors, Violation};
use super::values::FormValues;
use crate::submit::SubmitHandler;

/// Positions in tab order
pub const NAME_FIELD: usize = 0;
pub const LAST_NAME_FIELD: usize = 1;
pub const RADIO_FIELD: usize = 2;
pub const CHECKBOX_FIELD: usize = 3;
pub const SELECT_FIELD: usize = 4;
pub const SWITCH_FIELD: usize = 5;
/// The buttons row is a pseudo field at the end of the tab order
pub const BUTTONS_ROW: usize = 6;

/// Total tab stops, buttons row included
pub const FIELD_COUNT: usize = 7;

/// Buttons on the buttons row
pub const SUBMIT_BUTTON: usize = 0;
pub const RESET_BUTTON: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Holds every field of the survey plus validity, dirty and submitting
/// status. Constructed with the handler that receives accepted value bags.
pub struct SurveyForm {
    pub name: TextField,
    pub last_name: TextField,
    pub radio: ChoiceField,
    pub checkboxes: MultiChoiceField,
    pub select: ChoiceField,
    pub privacy: SwitchField,
    pub active_field_index: usize,
    /// Which button is selected on the buttons row (0=Submit, 1=Reset)
    pub selected_button: usize,
    errors: FieldErrors,
    dirty: bool,
    submitting: bool,
    handler: Box<dyn SubmitHandler>,
}

impl SurveyForm {
    pub fn new(handler: Box<dyn SubmitHandler>) -> Self {
        Self {
            name: TextField::new("First Name:", "Name"),
            last_name: TextField::new("Last Name:", "Last name"),
            radio: ChoiceField::new(
                "Select your favorite framework/library",
                "This is anonymous",
            ),
            checkboxes: MultiChoiceField::new(
                "Select your favorite framework/library",
                "This is NOT anonymous",
            ),
            select: ChoiceField::new(
                "Select your favorite framework/library",
                "This is somewhat anonymous",
            ),
            privacy: SwitchField::new("I agree to sell my privacy"),
            active_field_index: 0,
            selected_button: SUBMIT_BUTTON,
            errors: FieldErrors::new(),
            dirty: false,
            submitting: false,
            handler,
        }
    }

    /// Snapshot of the current values, in wire representation
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            radio_value: self.radio.value().to_string(),
            checkbox_value: self.checkboxes.selected().to_vec(),
            select_value: self.select.value().to_string(),
            privacy_data: self.privacy.as_literal().to_string(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: FieldId) -> Option<&Violation> {
        self.errors.get(&field)
    }

    /// Whether any field has been edited since creation or reset
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True only while the submit handler is being invoked
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Field identity of the active tab stop (None on the buttons row)
    pub fn active_field_id(&self) -> Option<FieldId> {
        Self::field_id(self.active_field_index)
    }

    fn field_id(index: usize) -> Option<FieldId> {
        match index {
            NAME_FIELD => Some(FieldId::Name),
            LAST_NAME_FIELD => Some(FieldId::LastName),
            RADIO_FIELD => Some(FieldId::RadioValue),
            CHECKBOX_FIELD => Some(FieldId::CheckboxValue),
            SELECT_FIELD => Some(FieldId::SelectValue),
            SWITCH_FIELD => Some(FieldId::PrivacyData),
            _ => None,
        }
    }

    /// Move focus forward (wraps); the field being left is re-validated
    pub fn next_field(&mut self) {
        self.blur_active();
        self.active_field_index = (self.active_field_index + 1) % FIELD_COUNT;
    }

    /// Move focus backward (wraps); the field being left is re-validated
    pub fn prev_field(&mut self) {
        self.blur_active();
        if self.active_field_index == 0 {
            self.active_field_index = FIELD_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Focus a specific tab stop (mouse click)
    pub fn set_active_field(&mut self, index: usize) {
        if index != self.active_field_index {
            self.blur_active();
        }
        self.active_field_index = index.min(FIELD_COUNT - 1);
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Type a character into the active text field
    pub fn input_char(&mut self, c: char) {
        match self.active_field_index {
            NAME_FIELD => self.name.push_char(c),
            LAST_NAME_FIELD => self.last_name.push_char(c),
            _ => return,
        }
        self.edited();
    }

    /// Backspace in the active text field
    pub fn backspace(&mut self) {
        match self.active_field_index {
            NAME_FIELD => self.name.pop_char(),
            LAST_NAME_FIELD => self.last_name.pop_char(),
            _ => return,
        }
        self.edited();
    }

    /// Left/Up on the active field
    pub fn cycle_prev(&mut self) {
        match self.active_field_index {
            RADIO_FIELD => {
                self.radio.select_prev();
                self.edited();
            }
            SELECT_FIELD => {
                self.select.select_prev();
                self.edited();
            }
            // Moving the checkbox cursor is not an edit
            CHECKBOX_FIELD => self.checkboxes.cursor_prev(),
            BUTTONS_ROW => self.prev_button(),
            _ => {}
        }
    }

    /// Right/Down on the active field
    pub fn cycle_next(&mut self) {
        match self.active_field_index {
            RADIO_FIELD => {
                self.radio.select_next();
                self.edited();
            }
            SELECT_FIELD => {
                self.select.select_next();
                self.edited();
            }
            CHECKBOX_FIELD => self.checkboxes.cursor_next(),
            BUTTONS_ROW => self.next_button(),
            _ => {}
        }
    }

    /// Space on the active field: checkbox membership or switch state
    pub fn toggle(&mut self) {
        match self.active_field_index {
            CHECKBOX_FIELD => {
                self.checkboxes.toggle_at_cursor();
                self.edited();
            }
            SWITCH_FIELD => {
                self.privacy.toggle();
                self.edited();
            }
            _ => {}
        }
    }

    /// Run the ruleset; on success hand the snapshot to the handler.
    ///
    /// Returns whether the submission was accepted. On failure the error
    /// map holds every failing field and the handler is not invoked.
    pub fn submit(&mut self) -> bool {
        let values = self.values();
        let errors = rules::validate(&values);
        if !errors.is_empty() {
            let failing: Vec<&str> = errors.keys().map(|field| field.as_str()).collect();
            tracing::debug!(?failing, "validation rejected submission");
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        self.submitting = true;
        self.handler.on_submit(values);
        self.submitting = false;
        tracing::info!("form submitted");
        true
    }

    /// Restore default values; errors and dirty state are cleared
    pub fn reset(&mut self) {
        self.name.clear();
        self.last_name.clear();
        self.radio.clear();
        self.checkboxes.clear();
        self.select.clear();
        self.privacy.reset();
        self.errors.clear();
        self.dirty = false;
        self.active_field_index = 0;
        self.selected_button = SUBMIT_BUTTON;
        tracing::debug!("form reset");
    }

    /// An edit marks the form dirty and re-validates the edited field
    fn edited(&mut self) {
        self.dirty = true;
        if let Some(field) = self.active_field_id() {
            self.revalidate(field);
        }
    }

    fn blur_active(&mut self) {
        if let Some(field) = self.active_field_id() {
            self.revalidate(field);
        }
    }

    /// Re-run a single field's rules, but only once it already carries an
    /// error: untouched fields stay clean until the first submit attempt.
    fn revalidate(&mut self, field: FieldId) {
        if !self.errors.contains_key(&field) {
            return;
        }
        let values = self.values();
        match rules::validate_field(field, &values) {
            Some(violation) => {
                self.errors.insert(field, violation);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}
