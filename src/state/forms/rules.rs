//! Declarative validation ruleset evaluated on submit

use super::field::FieldId;
use super::options::is_known_framework;
use super::values::FormValues;
use std::collections::BTreeMap;
use thiserror::Error;

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{message}")]
    Required { message: &'static str },
    #[error("{message}")]
    MinSelection { min: usize, message: &'static str },
}

/// A single constraint kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank text, or a choice that is one of the known option values
    Required,
    /// At least this many options selected
    MinSelection(usize),
}

/// One row of the schema: which field, which rule, which message
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: FieldId,
    pub rule: Rule,
    pub message: &'static str,
}

/// The schema the submit path evaluates
///
/// `privacyData` is intentionally absent: the switch is optional.
pub const RULESET: &[FieldRule] = &[
    FieldRule {
        field: FieldId::Name,
        rule: Rule::Required,
        message: "First name is a required field.",
    },
    FieldRule {
        field: FieldId::LastName,
        rule: Rule::Required,
        message: "Last name is a required field.",
    },
    FieldRule {
        field: FieldId::RadioValue,
        rule: Rule::Required,
        message: "Radio is a required field.",
    },
    FieldRule {
        field: FieldId::CheckboxValue,
        rule: Rule::MinSelection(1),
        message: "Must select at least one item",
    },
    FieldRule {
        field: FieldId::SelectValue,
        rule: Rule::Required,
        message: "Select one item",
    },
];

/// Violations keyed by field; empty when the values pass
pub type FieldErrors = BTreeMap<FieldId, Violation>;

/// Evaluate the full ruleset
///
/// Every failing field is reported; evaluation never short-circuits.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for entry in RULESET {
        if let Some(violation) = check(entry, values) {
            errors.insert(entry.field, violation);
        }
    }
    errors
}

/// Re-evaluate the rules of a single field
pub fn validate_field(field: FieldId, values: &FormValues) -> Option<Violation> {
    RULESET
        .iter()
        .filter(|entry| entry.field == field)
        .find_map(|entry| check(entry, values))
}

fn check(entry: &FieldRule, values: &FormValues) -> Option<Violation> {
    match entry.rule {
        Rule::Required => {
            let satisfied = match entry.field {
                FieldId::Name => !values.name.trim().is_empty(),
                FieldId::LastName => !values.last_name.trim().is_empty(),
                FieldId::RadioValue => is_known_framework(&values.radio_value),
                FieldId::SelectValue => is_known_framework(&values.select_value),
                FieldId::CheckboxValue => !values.checkbox_value.is_empty(),
                FieldId::PrivacyData => true,
            };
            (!satisfied).then_some(Violation::Required {
                message: entry.message,
            })
        }
        Rule::MinSelection(min) => {
            let count = match entry.field {
                FieldId::CheckboxValue => values.checkbox_value.len(),
                // Only the checkbox group carries a cardinality rule
                _ => return None,
            };
            (count < min).then_some(Violation::MinSelection {
                min,
                message: entry.message,
            })
        }
    }
}
