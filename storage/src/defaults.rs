use model::{
    ChoiceAttributes, DateAttributes, FieldAttributes, FieldDefinition, FieldId, FieldKind,
    FieldOption, NumberAttributes, TextAttributes, TextareaAttributes, ToggleAttributes,
};

pub const NEW_OPTION_LABEL: &str = "New";
pub const NEW_OPTION_VALUE: &str = "new";

/// Attributes a freshly created field of `kind` starts with.
pub fn default_attributes(kind: FieldKind) -> FieldAttributes {
    match kind {
        FieldKind::Text => FieldAttributes::Text(TextAttributes {
            placeholder: Some("Enter text".into()),
            default_value: Some(String::new()),
        }),
        FieldKind::Number => FieldAttributes::Number(NumberAttributes {
            min: None,
            max: None,
            step: Some(NumberAttributes::DEFAULT_STEP),
            default_value: None,
        }),
        FieldKind::Textarea => FieldAttributes::Textarea(TextareaAttributes {
            rows: Some(TextareaAttributes::DEFAULT_ROWS),
            placeholder: Some("Enter details".into()),
            default_value: Some(String::new()),
        }),
        FieldKind::Select => FieldAttributes::Select(ChoiceAttributes {
            options: vec![
                FieldOption::new("Option A", "a"),
                FieldOption::new("Option B", "b"),
            ],
            default_value: Some("a".into()),
        }),
        FieldKind::Radio => FieldAttributes::Radio(ChoiceAttributes {
            options: vec![FieldOption::new("Yes", "yes"), FieldOption::new("No", "no")],
            default_value: Some("yes".into()),
        }),
        FieldKind::Checkbox => FieldAttributes::Checkbox(ToggleAttributes {
            default_checked: Some(false),
        }),
        FieldKind::Switch => FieldAttributes::Switch(ToggleAttributes {
            default_checked: Some(false),
        }),
        FieldKind::Date => FieldAttributes::Date(DateAttributes {
            min: None,
            max: None,
            default_value: Some(String::new()),
        }),
    }
}

/// A new field named `<kind>_<suffix>` and labelled with the upper-cased kind.
pub fn default_field(id: FieldId, kind: FieldKind, suffix_length: usize) -> FieldDefinition {
    let suffix: String = id.as_str().chars().take(suffix_length).collect();
    let name = format!("{}_{}", kind.as_str(), suffix);
    FieldDefinition::new(id, name, default_attributes(kind))
        .with_label(kind.as_str().to_uppercase())
        .with_required(false)
}

#[cfg(test)]
mod tests {
    use model::FieldValue;

    use super::*;

    #[test]
    fn every_kind_gets_matching_attributes() {
        for kind in FieldKind::ALL {
            assert_eq!(default_attributes(kind).kind(), kind);
        }
    }

    #[test]
    fn name_and_label_derive_from_kind() {
        let field = default_field(FieldId::new("Ab3_x9Zq"), FieldKind::Textarea, 4);
        assert_eq!(field.name(), "textarea_Ab3_");
        assert_eq!(field.label(), Some("TEXTAREA"));
        assert!(!field.required());
        assert_eq!(field.id().as_str(), "Ab3_x9Zq");
    }

    #[test]
    fn initial_values_of_new_fields() {
        let id = || FieldId::new("abcdefgh");
        let value = |kind| default_field(id(), kind, 4).default_value();
        assert_eq!(value(FieldKind::Text), FieldValue::text(""));
        assert_eq!(value(FieldKind::Number), FieldValue::Absent);
        assert_eq!(value(FieldKind::Select), FieldValue::text("a"));
        assert_eq!(value(FieldKind::Radio), FieldValue::text("yes"));
        assert_eq!(value(FieldKind::Checkbox), FieldValue::Bool(false));
        assert_eq!(value(FieldKind::Date), FieldValue::text(""));
    }
}
