//! The value bag handed to the submit handler

use serde::{Deserialize, Serialize};

/// Snapshot of every field value at submit time
///
/// Serialized names match the survey's original wire format, which is also
/// what the output pane shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "radioValue")]
    pub radio_value: String,
    #[serde(rename = "checkboxValue")]
    pub checkbox_value: Vec<String>,
    #[serde(rename = "selectValue")]
    pub select_value: String,
    #[serde(rename = "privacyData")]
    pub privacy_data: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            last_name: String::new(),
            radio_value: String::new(),
            checkbox_value: Vec::new(),
            select_value: String::new(),
            // The switch defaults to off
            privacy_data: "false".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> FormValues {
        FormValues {
            name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            radio_value: "react".to_string(),
            checkbox_value: vec!["vue".to_string()],
            select_value: "svelte".to_string(),
            privacy_data: "true".to_string(),
        }
    }

    #[test]
    fn test_default_values() {
        let values = FormValues::default();
        assert_eq!(values.name, "");
        assert_eq!(values.last_name, "");
        assert_eq!(values.radio_value, "");
        assert!(values.checkbox_value.is_empty());
        assert_eq!(values.select_value, "");
        assert_eq!(values.privacy_data, "false");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "lastName": "Lovelace",
                "radioValue": "react",
                "checkboxValue": ["vue"],
                "selectValue": "svelte",
                "privacyData": "true",
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let values = sample();
        let json = serde_json::to_string(&values).unwrap();
        let parsed: FormValues = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, values);
    }
}
