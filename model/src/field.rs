use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[display("text")]
    Text,
    #[display("number")]
    Number,
    #[display("textarea")]
    Textarea,
    #[display("select")]
    Select,
    #[display("radio")]
    Radio,
    #[display("checkbox")]
    Checkbox,
    #[display("switch")]
    Switch,
    #[display("date")]
    Date,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Textarea,
        FieldKind::Select,
        FieldKind::Radio,
        FieldKind::Checkbox,
        FieldKind::Switch,
        FieldKind::Date,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Switch => "switch",
            FieldKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown field kind '{}'", _0)]
pub struct UnknownKind(#[error(not(source))] pub String);

impl FromStr for FieldKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NumberAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

impl NumberAttributes {
    pub const DEFAULT_STEP: f64 = 1.0;

    pub fn step(&self) -> f64 {
        self.step.unwrap_or(Self::DEFAULT_STEP)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextareaAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl TextareaAttributes {
    pub const DEFAULT_ROWS: u32 = 4;

    pub fn rows(&self) -> u32 {
        self.rows.unwrap_or(Self::DEFAULT_ROWS)
    }
}

/// Attributes shared by `select` and `radio` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChoiceAttributes {
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Attributes shared by `checkbox` and `switch` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToggleAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_checked: Option<bool>,
}

/// Date bounds and default are ISO `YYYY-MM-DD` strings, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DateAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldAttributes {
    Text(TextAttributes),
    Number(NumberAttributes),
    Textarea(TextareaAttributes),
    Select(ChoiceAttributes),
    Radio(ChoiceAttributes),
    Checkbox(ToggleAttributes),
    Switch(ToggleAttributes),
    Date(DateAttributes),
}

impl FieldAttributes {
    pub const fn kind(&self) -> FieldKind {
        match self {
            FieldAttributes::Text(_) => FieldKind::Text,
            FieldAttributes::Number(_) => FieldKind::Number,
            FieldAttributes::Textarea(_) => FieldKind::Textarea,
            FieldAttributes::Select(_) => FieldKind::Select,
            FieldAttributes::Radio(_) => FieldKind::Radio,
            FieldAttributes::Checkbox(_) => FieldKind::Checkbox,
            FieldAttributes::Switch(_) => FieldKind::Switch,
            FieldAttributes::Date(_) => FieldKind::Date,
        }
    }

    pub fn options(&self) -> Option<&[FieldOption]> {
        match self {
            FieldAttributes::Select(choice) | FieldAttributes::Radio(choice) => {
                Some(&choice.options)
            }
            _ => None,
        }
    }
}

/// One form field. The kind is fixed by [`FieldAttributes`] and can only be
/// read; every other attribute changes through [`FieldDefinition::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    id: FieldId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(flatten)]
    attributes: FieldAttributes,
}

impl FieldDefinition {
    pub fn new(id: FieldId, name: impl Into<String>, attributes: FieldAttributes) -> Self {
        Self {
            id,
            name: name.into(),
            label: None,
            required: false,
            attributes,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub const fn kind(&self) -> FieldKind {
        self.attributes.kind()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub const fn required(&self) -> bool {
        self.required
    }

    pub fn attributes(&self) -> &FieldAttributes {
        &self.attributes
    }

    /// The label when set and non-empty, the name otherwise.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.name,
        }
    }

    /// Caption shown next to the control, with a `*` marker for required fields.
    pub fn caption(&self) -> String {
        if self.required {
            format!("{} *", self.display_label())
        } else {
            self.display_label().to_owned()
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub(crate) fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut FieldAttributes {
        &mut self.attributes
    }
}
