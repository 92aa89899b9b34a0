use model::{format_number, FieldValue};
use serde_json::Value;

/// Double-quoted string literal. JSON escaping is a subset of what the target
/// accepts, so quotes, backslashes and control characters cannot leak out.
pub fn string(value: &str) -> String {
    Value::from(value).to_string()
}

/// String literal wrapped in an expression container, safe in attribute and
/// child position alike.
pub fn expression(value: &str) -> String {
    format!("{{{}}}", string(value))
}

pub fn number(value: f64) -> String {
    format_number(value)
}

pub fn value(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(value) => value.to_string(),
        FieldValue::Number(value) => number(*value),
        FieldValue::Text(value) => string(value),
        FieldValue::Absent => "undefined".to_owned(),
    }
}
