use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FieldAttributes, FieldDefinition};

/// A runtime form value. `Absent` is the "no value" state of a number field
/// without a default or a cleared number input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Absent,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Falsiness as the target runtime defines it.
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Bool(value) => !value,
            FieldValue::Number(value) => *value == 0.0 || value.is_nan(),
            FieldValue::Text(value) => value.is_empty(),
            FieldValue::Absent => true,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, FieldValue::Number(value) if *value == 0.0)
    }

    /// The string a control shows for this value (`value ?? ''` coerced to text).
    pub fn display(&self) -> String {
        match self {
            FieldValue::Bool(value) => value.to_string(),
            FieldValue::Number(value) => format_number(*value),
            FieldValue::Text(value) => value.clone(),
            FieldValue::Absent => String::new(),
        }
    }

    /// JSON form used on submission; absent values are dropped and non-finite
    /// numbers become `null`, matching `JSON.stringify`.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            FieldValue::Bool(value) => Some(Value::Bool(*value)),
            FieldValue::Number(value) => Some(
                serde_json::Number::from_f64(*value)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
            ),
            FieldValue::Text(value) => Some(Value::String(value.clone())),
            FieldValue::Absent => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Number)
    }
}

/// Formats a number the way the target runtime prints it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    value.to_string()
}

/// Initial runtime value of a field.
pub fn default_value(field: &FieldDefinition) -> FieldValue {
    match field.attributes() {
        FieldAttributes::Text(text) => FieldValue::text(text.default_value.as_deref().unwrap_or("")),
        FieldAttributes::Textarea(textarea) => {
            FieldValue::text(textarea.default_value.as_deref().unwrap_or(""))
        }
        FieldAttributes::Number(number) => number.default_value.into(),
        FieldAttributes::Select(choice) | FieldAttributes::Radio(choice) => {
            let value = choice
                .default_value
                .as_deref()
                .or_else(|| choice.options.first().map(|option| option.value.as_str()))
                .unwrap_or("");
            FieldValue::text(value)
        }
        FieldAttributes::Checkbox(toggle) | FieldAttributes::Switch(toggle) => {
            FieldValue::Bool(toggle.default_checked.unwrap_or(false))
        }
        FieldAttributes::Date(date) => FieldValue::text(date.default_value.as_deref().unwrap_or("")),
    }
}

impl FieldDefinition {
    pub fn default_value(&self) -> FieldValue {
        default_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ChoiceAttributes, DateAttributes, FieldId, FieldOption, NumberAttributes, TextAttributes,
        TextareaAttributes, ToggleAttributes,
    };

    fn field(attributes: FieldAttributes) -> FieldDefinition {
        FieldDefinition::new(FieldId::new("id"), "field", attributes)
    }

    #[test]
    fn text_defaults_to_empty_string() {
        assert_eq!(
            field(FieldAttributes::Text(TextAttributes::default())).default_value(),
            FieldValue::text("")
        );
        assert_eq!(
            field(FieldAttributes::Textarea(TextareaAttributes {
                default_value: Some("hello".into()),
                ..Default::default()
            }))
            .default_value(),
            FieldValue::text("hello")
        );
    }

    #[test]
    fn number_without_default_is_absent() {
        assert_eq!(
            field(FieldAttributes::Number(NumberAttributes::default())).default_value(),
            FieldValue::Absent
        );
        assert_eq!(
            field(FieldAttributes::Number(NumberAttributes {
                default_value: Some(0.0),
                ..Default::default()
            }))
            .default_value(),
            FieldValue::Number(0.0)
        );
    }

    #[test]
    fn select_falls_back_to_first_option() {
        let options = vec![FieldOption::new("A", "a"), FieldOption::new("B", "b")];
        let select = field(FieldAttributes::Select(ChoiceAttributes {
            options: options.clone(),
            default_value: None,
        }));
        assert_eq!(select.default_value(), FieldValue::text("a"));

        let radio = field(FieldAttributes::Radio(ChoiceAttributes {
            options,
            default_value: Some("b".into()),
        }));
        assert_eq!(radio.default_value(), FieldValue::text("b"));

        let empty = field(FieldAttributes::Select(ChoiceAttributes::default()));
        assert_eq!(empty.default_value(), FieldValue::text(""));
    }

    #[test]
    fn explicit_empty_choice_default_is_kept() {
        let select = field(FieldAttributes::Select(ChoiceAttributes {
            options: vec![FieldOption::new("A", "a")],
            default_value: Some(String::new()),
        }));
        assert_eq!(select.default_value(), FieldValue::text(""));
    }

    #[test]
    fn toggles_coerce_to_bool() {
        assert_eq!(
            field(FieldAttributes::Checkbox(ToggleAttributes::default())).default_value(),
            FieldValue::Bool(false)
        );
        assert_eq!(
            field(FieldAttributes::Switch(ToggleAttributes {
                default_checked: Some(true)
            }))
            .default_value(),
            FieldValue::Bool(true)
        );
    }

    #[test]
    fn date_defaults_to_empty_string() {
        assert_eq!(
            field(FieldAttributes::Date(DateAttributes::default())).default_value(),
            FieldValue::text("")
        );
    }

    #[test]
    fn falsiness() {
        assert!(FieldValue::Absent.is_falsy());
        assert!(FieldValue::text("").is_falsy());
        assert!(FieldValue::Bool(false).is_falsy());
        assert!(FieldValue::Number(0.0).is_falsy());
        assert!(FieldValue::Number(f64::NAN).is_falsy());
        assert!(!FieldValue::text("0").is_falsy());
        assert!(!FieldValue::Number(-1.5).is_falsy());
    }

    #[test]
    fn numbers_format_like_the_runtime() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn submission_json_drops_absent() {
        assert_eq!(FieldValue::Absent.to_json(), None);
        assert_eq!(FieldValue::Number(f64::NAN).to_json(), Some(Value::Null));
        assert_eq!(
            FieldValue::text("x").to_json(),
            Some(Value::String("x".into()))
        );
    }
}
