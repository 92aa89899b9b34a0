use model::{FieldAttributes, FieldDefinition, FieldId, FieldKind, FieldValue};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewView {
    pub controls: Vec<ControlView>,
    pub submit_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlView {
    pub id: FieldId,
    pub kind: FieldKind,
    pub name: String,
    pub caption: String,
    pub control: ControlState,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionView {
    pub label: String,
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlState {
    TextInput {
        value: String,
        placeholder: String,
    },
    NumberInput {
        value: String,
        min: Option<f64>,
        max: Option<f64>,
        step: f64,
    },
    TextArea {
        value: String,
        rows: u32,
        placeholder: String,
    },
    Select {
        value: String,
        options: Vec<OptionView>,
    },
    RadioGroup {
        options: Vec<OptionView>,
    },
    Checkbox {
        checked: bool,
    },
    Switch {
        checked: bool,
    },
    DateInput {
        value: String,
        min: Option<String>,
        max: Option<String>,
    },
}

fn selected(value: &FieldValue, option: &str) -> bool {
    matches!(value, FieldValue::Text(current) if current == option)
}

fn options(field: &FieldDefinition, value: &FieldValue) -> Vec<OptionView> {
    field
        .attributes()
        .options()
        .unwrap_or_default()
        .iter()
        .map(|option| OptionView {
            label: option.label.clone(),
            value: option.value.clone(),
            checked: selected(value, &option.value),
        })
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|value| !value.is_empty())
}

impl ControlState {
    pub(crate) fn new(field: &FieldDefinition, value: &FieldValue) -> Self {
        match field.attributes() {
            FieldAttributes::Text(text) => ControlState::TextInput {
                value: value.display(),
                placeholder: text.placeholder.clone().unwrap_or_default(),
            },
            FieldAttributes::Number(number) => ControlState::NumberInput {
                value: value.display(),
                min: number.min,
                max: number.max,
                step: number.step(),
            },
            FieldAttributes::Textarea(textarea) => ControlState::TextArea {
                value: value.display(),
                rows: textarea.rows(),
                placeholder: textarea.placeholder.clone().unwrap_or_default(),
            },
            FieldAttributes::Select(_) => ControlState::Select {
                value: value.display(),
                options: options(field, value),
            },
            FieldAttributes::Radio(_) => ControlState::RadioGroup {
                options: options(field, value),
            },
            FieldAttributes::Checkbox(_) => ControlState::Checkbox {
                checked: !value.is_falsy(),
            },
            FieldAttributes::Switch(_) => ControlState::Switch {
                checked: !value.is_falsy(),
            },
            FieldAttributes::Date(date) => ControlState::DateInput {
                value: value.display(),
                min: non_empty(&date.min),
                max: non_empty(&date.max),
            },
        }
    }
}
