use crate::{
    error::PatchError, ChoiceAttributes, DateAttributes, FieldAttributes, FieldDefinition,
    FieldKind, FieldOption, NumberAttributes, TextAttributes, TextareaAttributes,
    ToggleAttributes,
};

/// Partial update of a field. `None` leaves an attribute untouched; for
/// clearable attributes `Some(None)` removes the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub label: Option<String>,
    pub required: Option<bool>,
    pub attributes: Option<AttributesPatch>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn attributes(mut self, attributes: AttributesPatch) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributesPatch {
    Text(TextPatch),
    Number(NumberPatch),
    Textarea(TextareaPatch),
    Select(ChoicePatch),
    Radio(ChoicePatch),
    Checkbox(TogglePatch),
    Switch(TogglePatch),
    Date(DatePatch),
}

impl AttributesPatch {
    pub const fn kind(&self) -> FieldKind {
        match self {
            AttributesPatch::Text(_) => FieldKind::Text,
            AttributesPatch::Number(_) => FieldKind::Number,
            AttributesPatch::Textarea(_) => FieldKind::Textarea,
            AttributesPatch::Select(_) => FieldKind::Select,
            AttributesPatch::Radio(_) => FieldKind::Radio,
            AttributesPatch::Checkbox(_) => FieldKind::Checkbox,
            AttributesPatch::Switch(_) => FieldKind::Switch,
            AttributesPatch::Date(_) => FieldKind::Date,
        }
    }

    /// Option list replacement for whichever choice kind `kind` is.
    pub fn options(kind: FieldKind, options: Vec<FieldOption>) -> Option<Self> {
        let patch = ChoicePatch {
            options: Some(options),
            ..Default::default()
        };
        match kind {
            FieldKind::Select => Some(AttributesPatch::Select(patch)),
            FieldKind::Radio => Some(AttributesPatch::Radio(patch)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPatch {
    pub placeholder: Option<Option<String>>,
    pub default_value: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberPatch {
    pub min: Option<Option<f64>>,
    pub max: Option<Option<f64>>,
    pub step: Option<Option<f64>>,
    pub default_value: Option<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextareaPatch {
    pub rows: Option<Option<u32>>,
    pub placeholder: Option<Option<String>>,
    pub default_value: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoicePatch {
    pub options: Option<Vec<FieldOption>>,
    pub default_value: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TogglePatch {
    pub default_checked: Option<Option<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatePatch {
    pub min: Option<Option<String>>,
    pub max: Option<Option<String>>,
    pub default_value: Option<Option<String>>,
}

fn merge<T>(target: &mut T, update: Option<T>) {
    if let Some(value) = update {
        *target = value;
    }
}

impl TextPatch {
    fn apply(self, attributes: &mut TextAttributes) {
        merge(&mut attributes.placeholder, self.placeholder);
        merge(&mut attributes.default_value, self.default_value);
    }
}

impl NumberPatch {
    fn apply(self, attributes: &mut NumberAttributes) {
        merge(&mut attributes.min, self.min);
        merge(&mut attributes.max, self.max);
        merge(&mut attributes.step, self.step);
        merge(&mut attributes.default_value, self.default_value);
    }
}

impl TextareaPatch {
    fn apply(self, attributes: &mut TextareaAttributes) {
        merge(&mut attributes.rows, self.rows);
        merge(&mut attributes.placeholder, self.placeholder);
        merge(&mut attributes.default_value, self.default_value);
    }
}

impl ChoicePatch {
    fn apply(self, attributes: &mut ChoiceAttributes) {
        merge(&mut attributes.options, self.options);
        merge(&mut attributes.default_value, self.default_value);
    }
}

impl TogglePatch {
    fn apply(self, attributes: &mut ToggleAttributes) {
        merge(&mut attributes.default_checked, self.default_checked);
    }
}

impl DatePatch {
    fn apply(self, attributes: &mut DateAttributes) {
        merge(&mut attributes.min, self.min);
        merge(&mut attributes.max, self.max);
        merge(&mut attributes.default_value, self.default_value);
    }
}

impl FieldDefinition {
    /// Merges a patch into this field. The kind never changes: a patch carrying
    /// attributes of another kind is rejected before anything is modified.
    pub fn apply(&mut self, patch: FieldPatch) -> Result<(), PatchError> {
        if let Some(attributes) = &patch.attributes {
            if attributes.kind() != self.kind() {
                return Err(PatchError::KindMismatch {
                    expected: self.kind(),
                    got: attributes.kind(),
                });
            }
        }

        if let Some(name) = patch.name.filter(|name| !name.is_empty()) {
            self.set_name(name);
        }
        if let Some(label) = patch.label {
            self.set_label(Some(label).filter(|label| !label.is_empty()));
        }
        if let Some(required) = patch.required {
            self.set_required(required);
        }
        if let Some(attributes) = patch.attributes {
            match (self.attributes_mut(), attributes) {
                (FieldAttributes::Text(target), AttributesPatch::Text(patch)) => patch.apply(target),
                (FieldAttributes::Number(target), AttributesPatch::Number(patch)) => {
                    patch.apply(target)
                }
                (FieldAttributes::Textarea(target), AttributesPatch::Textarea(patch)) => {
                    patch.apply(target)
                }
                (FieldAttributes::Select(target), AttributesPatch::Select(patch))
                | (FieldAttributes::Radio(target), AttributesPatch::Radio(patch)) => {
                    patch.apply(target)
                }
                (FieldAttributes::Checkbox(target), AttributesPatch::Checkbox(patch))
                | (FieldAttributes::Switch(target), AttributesPatch::Switch(patch)) => {
                    patch.apply(target)
                }
                (FieldAttributes::Date(target), AttributesPatch::Date(patch)) => patch.apply(target),
                (target, patch) => {
                    return Err(PatchError::KindMismatch {
                        expected: target.kind(),
                        got: patch.kind(),
                    })
                }
            }
        }
        Ok(())
    }
}
