use model::{
    ChoiceAttributes, DateAttributes, FieldAttributes, FieldDefinition, NumberAttributes,
    TextAttributes, TextareaAttributes, ValidationRule,
};
use serde::Serialize;

use crate::literal;

const CONTROL_INDENT: usize = 6;

const READ_VALUE: &str = "value={field.state.value ?? ''}";
const WRITE_TEXT: &str = "onChange={(e) => field.handleChange(e.target.value)}";
const WRITE_NUMBER: &str =
    "onChange={(e) => field.handleChange(e.target.value === '' ? undefined : Number(e.target.value))}";
const READ_CHECKED: &str = "checked={!!field.state.value}";
const WRITE_CHECKED: &str = "onChange={(e) => field.handleChange(e.target.checked)}";

/// Template context of one `<form.Field>` fragment.
#[derive(Debug, Serialize)]
pub(crate) struct FieldFragment {
    name: String,
    validators: String,
    caption: String,
    control: String,
}

impl FieldFragment {
    pub(crate) fn new(field: &FieldDefinition) -> Self {
        Self {
            name: literal::expression(field.name()),
            validators: field.validation_rule().map(validators).unwrap_or_default(),
            caption: literal::expression(&field.caption()),
            control: indent(&control(field), CONTROL_INDENT),
        }
    }
}

fn validators(rule: ValidationRule) -> String {
    match rule {
        ValidationRule::Required => format!(
            " validators={{{{ onChange: ({{ value }}) => (!value && value !== 0 ? {} : undefined) }}}}",
            required_message()
        ),
    }
}

fn required_message() -> String {
    format!("'{}'", ValidationRule::REQUIRED_MESSAGE)
}

/// The input element for a field, dispatched on its kind.
pub(crate) fn control(field: &FieldDefinition) -> String {
    match field.attributes() {
        FieldAttributes::Text(text) => text_input(text),
        FieldAttributes::Number(number) => number_input(number),
        FieldAttributes::Textarea(textarea) => textarea_input(textarea),
        FieldAttributes::Select(choice) => select(choice),
        FieldAttributes::Radio(choice) => radio_group(field.name(), choice),
        FieldAttributes::Checkbox(_) => checkbox(None),
        FieldAttributes::Switch(_) => checkbox(Some("switch")),
        FieldAttributes::Date(date) => date_input(date),
    }
}

fn placeholder(placeholder: &Option<String>) -> String {
    format!(
        "placeholder={}",
        literal::expression(placeholder.as_deref().unwrap_or(""))
    )
}

fn text_input(text: &TextAttributes) -> String {
    format!(
        r#"<input type="text" {READ_VALUE} {WRITE_TEXT} {} />"#,
        placeholder(&text.placeholder)
    )
}

fn number_input(number: &NumberAttributes) -> String {
    let mut bounds = String::new();
    if let Some(min) = number.min {
        bounds.push_str(&format!(" min={{{}}}", literal::number(min)));
    }
    if let Some(max) = number.max {
        bounds.push_str(&format!(" max={{{}}}", literal::number(max)));
    }
    format!(
        r#"<input type="number" {READ_VALUE} {WRITE_NUMBER}{bounds} step={{{}}} />"#,
        literal::number(number.step())
    )
}

fn textarea_input(textarea: &TextareaAttributes) -> String {
    format!(
        "<textarea rows={{{}}} {READ_VALUE} {WRITE_TEXT} {} />",
        textarea.rows(),
        placeholder(&textarea.placeholder)
    )
}

fn select(choice: &ChoiceAttributes) -> String {
    let mut lines = vec![format!("<select {READ_VALUE} {WRITE_TEXT}>")];
    lines.extend(choice.options.iter().map(|option| {
        format!(
            "  <option value={}>{}</option>",
            literal::expression(&option.value),
            literal::expression(&option.label)
        )
    }));
    lines.push("</select>".to_owned());
    lines.join("\n")
}

fn radio_group(name: &str, choice: &ChoiceAttributes) -> String {
    let mut lines = vec![r#"<div className="radio-group">"#.to_owned()];
    lines.extend(choice.options.iter().map(|option| {
        let value = literal::string(&option.value);
        format!(
            r#"  <label><input type="radio" name={} checked={{field.state.value === {value}}} onChange={{() => field.handleChange({value})}} /> {}</label>"#,
            literal::expression(name),
            literal::expression(&option.label)
        )
    }));
    lines.push("</div>".to_owned());
    lines.join("\n")
}

fn checkbox(role: Option<&str>) -> String {
    let role = role
        .map(|role| format!(r#" role="{role}""#))
        .unwrap_or_default();
    format!(r#"<input type="checkbox"{role} {READ_CHECKED} {WRITE_CHECKED} />"#)
}

fn date_input(date: &DateAttributes) -> String {
    let mut bounds = String::new();
    for (attribute, bound) in [("min", &date.min), ("max", &date.max)] {
        if let Some(bound) = bound.as_deref().filter(|bound| !bound.is_empty()) {
            bounds.push_str(&format!(" {attribute}={}", literal::expression(bound)));
        }
    }
    format!(r#"<input type="date" {READ_VALUE} {WRITE_TEXT}{bounds} />"#)
}

pub(crate) fn indent(text: &str, width: usize) -> String {
    let padding = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{padding}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
