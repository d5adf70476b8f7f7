//! Typed field state for the survey form

use super::options::FRAMEWORKS;

/// Identity of each form field, used as the error-map key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    LastName,
    RadioValue,
    CheckboxValue,
    SelectValue,
    PrivacyData,
}

impl FieldId {
    /// Wire name of the field, matching the serialized value bag
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::LastName => "lastName",
            FieldId::RadioValue => "radioValue",
            FieldId::CheckboxValue => "checkboxValue",
            FieldId::SelectValue => "selectValue",
            FieldId::PrivacyData => "privacyData",
        }
    }
}

/// A free-text input with label and placeholder
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: String,
    pub placeholder: String,
    value: String,
}

impl TextField {
    pub fn new(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// True when the value is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// A pick-one-of-the-options control (radio group or select)
#[derive(Debug, Clone)]
pub struct ChoiceField {
    pub label: String,
    pub description: String,
    selected: Option<usize>,
}

impl ChoiceField {
    pub fn new(label: &str, description: &str) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
            selected: None,
        }
    }

    /// Index of the selected option, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Internal value of the selected option, empty string when unset
    pub fn value(&self) -> &'static str {
        self.selected
            .and_then(|i| FRAMEWORKS.get(i))
            .map(|option| option.value)
            .unwrap_or("")
    }

    /// Display label of the selected option, if any
    pub fn selected_label(&self) -> Option<&'static str> {
        self.selected
            .and_then(|i| FRAMEWORKS.get(i))
            .map(|option| option.label)
    }

    /// Move selection to the next option (first when unset, wraps)
    pub fn select_next(&mut self) {
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % FRAMEWORKS.len(),
        });
    }

    /// Move selection to the previous option (last when unset, wraps)
    pub fn select_prev(&mut self) {
        self.selected = Some(match self.selected {
            None | Some(0) => FRAMEWORKS.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// A pick-any-of-the-options control (checkbox group)
///
/// Membership is stored name-only, in toggle order.
#[derive(Debug, Clone)]
pub struct MultiChoiceField {
    pub label: String,
    pub description: String,
    cursor: usize,
    selected: Vec<String>,
}

impl MultiChoiceField {
    pub fn new(label: &str, description: &str) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
            cursor: 0,
            selected: Vec::new(),
        }
    }

    /// Option the cursor currently rests on
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected option values, in the order they were toggled on
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1) % FRAMEWORKS.len();
    }

    pub fn cursor_prev(&mut self) {
        if self.cursor == 0 {
            self.cursor = FRAMEWORKS.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Toggle membership of the option under the cursor
    pub fn toggle_at_cursor(&mut self) {
        if let Some(option) = FRAMEWORKS.get(self.cursor) {
            let value = option.value;
            self.toggle(value);
        }
    }

    /// Toggle membership of `value`: add when absent, remove when present
    pub fn toggle(&mut self, value: &str) {
        if self.is_selected(value) {
            self.selected.retain(|v| v != value);
        } else {
            self.selected.push(value.to_string());
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    pub fn clear(&mut self) {
        self.cursor = 0;
        self.selected.clear();
    }
}

/// A boolean switch control
#[derive(Debug, Clone)]
pub struct SwitchField {
    pub label: String,
    on: bool,
}

impl SwitchField {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            on: false,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    pub fn reset(&mut self) {
        self.on = false;
    }

    /// The value bag carries the switch as a string literal
    pub fn as_literal(&self) -> &'static str {
        if self.on {
            "true"
        } else {
            "false"
        }
    }
}
