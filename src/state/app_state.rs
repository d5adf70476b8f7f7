//! Application state definitions

use crate::state::SurveyForm;
use crate::submit::{SubmissionSlot, SubmissionStore};
use std::cell::RefCell;
use std::rc::Rc;

/// Top-level state: the form engine and the shared submission slot
pub struct AppState {
    /// The survey form engine
    pub form: SurveyForm,
    /// Latest accepted submission, written by the form's handler and read
    /// by the output pane
    pub submission: SubmissionSlot,
}

impl AppState {
    pub fn new() -> Self {
        let slot: SubmissionSlot = Rc::new(RefCell::new(None));
        let form = SurveyForm::new(Box::new(SubmissionStore::new(Rc::clone(&slot))));
        Self {
            form,
            submission: slot,
        }
    }

    /// Serialized view of the last submission, for the output pane and the
    /// clipboard. None before the first successful submit.
    pub fn serialized_submission(&self, pretty: bool) -> Option<String> {
        let guard = self.submission.borrow();
        let submission = guard.as_ref()?;
        let json = if pretty {
            serde_json::to_string_pretty(&submission.values)
        } else {
            serde_json::to_string(&submission.values)
        };
        json.ok()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_serialized_output_before_first_submit() {
        let state = AppState::new();
        assert!(state.serialized_submission(true).is_none());
    }

    #[test]
    fn test_serialized_output_after_submit() {
        let mut state = AppState::new();
        // Drive the engine to a valid submission
        state.form.set_active_field(crate::state::NAME_FIELD);
        state.form.input_char('A');
        state.form.set_active_field(crate::state::LAST_NAME_FIELD);
        state.form.input_char('L');
        state.form.set_active_field(crate::state::RADIO_FIELD);
        state.form.cycle_next();
        state.form.set_active_field(crate::state::CHECKBOX_FIELD);
        state.form.toggle();
        state.form.set_active_field(crate::state::SELECT_FIELD);
        state.form.cycle_next();
        assert!(state.form.submit());

        let compact = state.serialized_submission(false).unwrap();
        assert!(compact.contains("\"lastName\":\"L\""));
        let pretty = state.serialized_submission(true).unwrap();
        assert!(pretty.contains('\n'));
    }
}
