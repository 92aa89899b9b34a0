use std::collections::HashMap;

use model::{error::FieldError, FieldDefinition, FieldValue};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    view::{ControlState, ControlView, PreviewView},
    PreviewError,
};

/// Live state of the interactive preview. Values are keyed by field name, so
/// renaming a field behaves like replacing it.
#[derive(Debug, Clone, Default)]
pub struct PreviewForm {
    values: HashMap<String, FieldValue>,
    errors: HashMap<String, FieldError>,
}

impl PreviewForm {
    pub fn new(fields: &[FieldDefinition]) -> Self {
        let values = fields
            .iter()
            .map(|field| (field.name().to_owned(), field.default_value()))
            .collect();
        Self {
            values,
            errors: HashMap::new(),
        }
    }

    /// Re-initializes after the field list changed. A name keeps its current
    /// value unless that value is absent; new names start from their default.
    pub fn sync(&mut self, fields: &[FieldDefinition]) {
        let values = fields
            .iter()
            .map(|field| {
                let value = self
                    .values
                    .get(field.name())
                    .filter(|value| !value.is_absent())
                    .cloned()
                    .unwrap_or_else(|| field.default_value());
                (field.name().to_owned(), value)
            })
            .collect();
        self.values = values;
        self.errors.clear();
        debug!(fields = fields.len(), "Synchronized preview values");
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    /// Sets the value bound to `name` and runs the change validation of every
    /// field bound to it.
    pub fn change(
        &mut self,
        fields: &[FieldDefinition],
        name: &str,
        value: FieldValue,
    ) -> Result<(), PreviewError> {
        let bound = fields
            .iter()
            .filter(|field| field.name() == name)
            .collect::<Vec<_>>();
        if bound.is_empty() {
            return Err(PreviewError::UnknownField(name.to_owned()));
        }
        match bound.iter().find_map(|field| field.validate(&value).err()) {
            Some(error) => self.errors.insert(name.to_owned(), error),
            None => self.errors.remove(name),
        };
        self.values.insert(name.to_owned(), value);
        Ok(())
    }

    /// Validates every field and returns the submitted values in field order.
    pub fn submit(&mut self, fields: &[FieldDefinition]) -> Result<Map<String, Value>, Vec<FieldError>> {
        self.errors.clear();
        let mut failures = Vec::new();
        for field in fields {
            if self.errors.contains_key(field.name()) {
                continue;
            }
            if let Err(error) = field.validate(self.current(field)) {
                self.errors.insert(field.name().to_owned(), error.clone());
                failures.push(error);
            }
        }
        if !failures.is_empty() {
            debug!(errors = failures.len(), "Preview submission rejected");
            return Err(failures);
        }

        let mut submitted = Map::new();
        for field in fields {
            if let Some(value) = self.current(field).to_json() {
                submitted.insert(field.name().to_owned(), value);
            }
        }
        Ok(submitted)
    }

    pub fn render(&self, fields: &[FieldDefinition]) -> PreviewView {
        let controls = fields
            .iter()
            .map(|field| {
                let value = self.current(field);
                ControlView {
                    id: field.id().clone(),
                    kind: field.kind(),
                    name: field.name().to_owned(),
                    caption: field.caption(),
                    control: ControlState::new(field, value),
                    errors: self
                        .error(field.name())
                        .map(|error| vec![error.message()])
                        .unwrap_or_default(),
                }
            })
            .collect();
        PreviewView {
            controls,
            submit_visible: !fields.is_empty(),
        }
    }

    fn current(&self, field: &FieldDefinition) -> &FieldValue {
        self.values.get(field.name()).unwrap_or(&FieldValue::Absent)
    }
}

#[cfg(test)]
mod tests {
    use model::{
        ChoiceAttributes, FieldAttributes, FieldId, FieldOption, FieldPatch, NumberAttributes,
        TextAttributes, ToggleAttributes,
    };
    use serde_json::json;

    use super::*;

    fn email() -> FieldDefinition {
        FieldDefinition::new(
            FieldId::new("t1"),
            "email",
            FieldAttributes::Text(TextAttributes {
                placeholder: Some("you@example.com".into()),
                default_value: None,
            }),
        )
        .with_label("Email")
    }

    fn amount(required: bool) -> FieldDefinition {
        FieldDefinition::new(
            FieldId::new("n1"),
            "amount",
            FieldAttributes::Number(NumberAttributes::default()),
        )
        .with_required(required)
    }

    #[test]
    fn initial_values_come_from_defaults() {
        let fields = vec![
            email(),
            amount(false),
            FieldDefinition::new(
                FieldId::new("s1"),
                "plan",
                FieldAttributes::Select(ChoiceAttributes {
                    options: vec![FieldOption::new("A", "a"), FieldOption::new("B", "b")],
                    default_value: None,
                }),
            ),
        ];
        let form = PreviewForm::new(&fields);
        for field in &fields {
            assert_eq!(form.value(field.name()), Some(&field.default_value()));
        }
        assert_eq!(form.value("plan"), Some(&FieldValue::text("a")));
    }

    #[test]
    fn later_duplicate_name_wins() {
        let first = email();
        let second = FieldDefinition::new(
            FieldId::new("t2"),
            "email",
            FieldAttributes::Text(TextAttributes {
                placeholder: None,
                default_value: Some("second".into()),
            }),
        );
        let form = PreviewForm::new(&[first, second]);
        assert_eq!(form.value("email"), Some(&FieldValue::text("second")));
    }

    #[test]
    fn label_patch_preserves_value_and_rename_resets_it() {
        let mut field = email();
        let mut form = PreviewForm::new(&[field.clone()]);
        form.change(&[field.clone()], "email", FieldValue::text("x@y.com"))
            .unwrap();

        field.apply(FieldPatch::new().label("Mail address")).unwrap();
        form.sync(&[field.clone()]);
        assert_eq!(form.value("email"), Some(&FieldValue::text("x@y.com")));

        field.apply(FieldPatch::new().name("mail")).unwrap();
        form.sync(&[field.clone()]);
        assert_eq!(form.value("mail"), Some(&FieldValue::text("")));
        assert_eq!(form.value("email"), None);
    }

    #[test]
    fn sync_recomputes_absent_values() {
        let mut field = amount(false);
        let mut form = PreviewForm::new(&[field.clone()]);
        assert_eq!(form.value("amount"), Some(&FieldValue::Absent));

        field
            .apply(FieldPatch::new().attributes(model::AttributesPatch::Number(
                model::NumberPatch {
                    default_value: Some(Some(5.0)),
                    ..Default::default()
                },
            )))
            .unwrap();
        form.sync(&[field]);
        assert_eq!(form.value("amount"), Some(&FieldValue::Number(5.0)));
    }

    #[test]
    fn required_number_accepts_zero() {
        let fields = [amount(true)];
        let mut form = PreviewForm::new(&fields);

        form.change(&fields, "amount", FieldValue::Number(0.0)).unwrap();
        assert_eq!(form.error("amount"), None);

        form.change(&fields, "amount", FieldValue::Absent).unwrap();
        assert_eq!(form.error("amount").map(FieldError::message).as_deref(), Some("Required"));

        form.change(&fields, "amount", FieldValue::text("")).unwrap();
        assert!(form.error("amount").is_some());
    }

    #[test]
    fn change_of_unknown_name_fails() {
        let mut form = PreviewForm::new(&[]);
        assert_eq!(
            form.change(&[], "ghost", FieldValue::Bool(true)),
            Err(PreviewError::UnknownField("ghost".into()))
        );
    }

    #[test]
    fn submit_reports_required_fields() {
        let fields = vec![email().with_required(true), amount(true)];
        let mut form = PreviewForm::new(&fields);
        let errors = form.submit(&fields).unwrap_err();
        assert_eq!(
            errors.iter().map(FieldError::field).collect::<Vec<_>>(),
            ["email", "amount"]
        );

        let view = form.render(&fields);
        assert_eq!(view.controls[0].errors, ["Required"]);
    }

    #[test]
    fn submit_serializes_in_field_order() {
        let fields = vec![
            email(),
            amount(false),
            FieldDefinition::new(
                FieldId::new("c1"),
                "terms",
                FieldAttributes::Checkbox(ToggleAttributes::default()),
            ),
        ];
        let mut form = PreviewForm::new(&fields);
        form.change(&fields, "email", FieldValue::text("x@y.com")).unwrap();
        let submitted = form.submit(&fields).unwrap();
        assert_eq!(
            Value::Object(submitted.clone()),
            json!({ "email": "x@y.com", "terms": false })
        );
        assert_eq!(submitted.keys().collect::<Vec<_>>(), ["email", "terms"]);
    }

    #[test]
    fn render_follows_field_order() {
        let fields = vec![
            amount(true),
            email(),
            FieldDefinition::new(
                FieldId::new("r1"),
                "answer",
                FieldAttributes::Radio(ChoiceAttributes {
                    options: vec![FieldOption::new("Yes", "yes"), FieldOption::new("No", "no")],
                    default_value: Some("no".into()),
                }),
            ),
        ];
        let form = PreviewForm::new(&fields);
        let view = form.render(&fields);

        assert!(view.submit_visible);
        assert_eq!(
            view.controls.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["amount", "email", "answer"]
        );
        assert_eq!(view.controls[0].caption, "amount *");
        assert_eq!(
            view.controls[0].control,
            ControlState::NumberInput {
                value: String::new(),
                min: None,
                max: None,
                step: 1.0,
            }
        );
        assert_eq!(
            view.controls[1].control,
            ControlState::TextInput {
                value: String::new(),
                placeholder: "you@example.com".into(),
            }
        );
        match &view.controls[2].control {
            ControlState::RadioGroup { options } => {
                assert_eq!(
                    options.iter().map(|o| o.checked).collect::<Vec<_>>(),
                    [false, true]
                );
            }
            other => panic!("unexpected control {other:?}"),
        }
    }

    #[test]
    fn empty_form_hides_submit() {
        let form = PreviewForm::new(&[]);
        let view = form.render(&[]);
        assert!(view.controls.is_empty());
        assert!(!view.submit_visible);
    }
}
