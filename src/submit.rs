//! Submit handler seam between the form engine and the display shell

use crate::state::FormValues;
use chrono::{DateTime, Local};
use std::cell::RefCell;
use std::rc::Rc;

/// Receiver for validated value bags
///
/// The form engine is handed one of these at construction and invokes it
/// exactly once per successful submission.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn on_submit(&mut self, values: FormValues);
}

/// A value bag accepted by validation, plus when it arrived
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub values: FormValues,
    pub received_at: DateTime<Local>,
}

/// Shared slot the output pane renders from
pub type SubmissionSlot = Rc<RefCell<Option<Submission>>>;

/// Handler that records the latest submission for display
pub struct SubmissionStore {
    slot: SubmissionSlot,
}

impl SubmissionStore {
    pub fn new(slot: SubmissionSlot) -> Self {
        Self { slot }
    }
}

impl SubmitHandler for SubmissionStore {
    fn on_submit(&mut self, values: FormValues) {
        tracing::info!(name = %values.name, "submission received");
        *self.slot.borrow_mut() = Some(Submission {
            values,
            received_at: Local::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_records_latest_submission() {
        let slot: SubmissionSlot = Rc::new(RefCell::new(None));
        let mut store = SubmissionStore::new(Rc::clone(&slot));

        let values = FormValues {
            name: "Ada".to_string(),
            ..Default::default()
        };
        store.on_submit(values.clone());

        let recorded = slot.borrow();
        assert_eq!(recorded.as_ref().map(|s| &s.values), Some(&values));
    }

    #[test]
    fn test_store_overwrites_previous_submission() {
        let slot: SubmissionSlot = Rc::new(RefCell::new(None));
        let mut store = SubmissionStore::new(Rc::clone(&slot));

        store.on_submit(FormValues {
            name: "first".to_string(),
            ..Default::default()
        });
        store.on_submit(FormValues {
            name: "second".to_string(),
            ..Default::default()
        });

        assert_eq!(slot.borrow().as_ref().map(|s| s.values.name.clone()),
            Some("second".to_string()));
    }
}
