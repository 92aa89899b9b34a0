use crate::{
    error::{FieldError, FieldErrorKind},
    FieldDefinition, FieldValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Rejects falsy values, except the number zero.
    Required,
}

impl ValidationRule {
    pub const REQUIRED_MESSAGE: &'static str = "Required";

    pub fn message(&self) -> &'static str {
        match self {
            ValidationRule::Required => Self::REQUIRED_MESSAGE,
        }
    }

    pub fn check(&self, value: &FieldValue) -> Result<(), FieldErrorKind> {
        match self {
            ValidationRule::Required if value.is_falsy() && !value.is_zero() => {
                Err(FieldErrorKind::Required)
            }
            ValidationRule::Required => Ok(()),
        }
    }

    pub fn validate(&self, field: &FieldDefinition, value: &FieldValue) -> Result<(), FieldError> {
        self.check(value)
            .map_err(|kind| FieldError::new(field.name(), kind))
    }
}

/// The rule attached to a field, if any. Only required fields carry one.
pub fn validation_rule(field: &FieldDefinition) -> Option<ValidationRule> {
    field.required().then_some(ValidationRule::Required)
}

impl FieldDefinition {
    pub fn validation_rule(&self) -> Option<ValidationRule> {
        validation_rule(self)
    }

    /// Validates a value against this field's rule; fields without a rule accept anything.
    pub fn validate(&self, value: &FieldValue) -> Result<(), FieldError> {
        match self.validation_rule() {
            Some(rule) => rule.validate(self, value),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldAttributes, FieldId, NumberAttributes, TextAttributes};

    fn number(required: bool) -> FieldDefinition {
        FieldDefinition::new(
            FieldId::new("n1"),
            "amount",
            FieldAttributes::Number(NumberAttributes::default()),
        )
        .with_required(required)
    }

    #[test]
    fn optional_fields_have_no_rule() {
        assert_eq!(number(false).validation_rule(), None);
        assert!(number(false).validate(&FieldValue::Absent).is_ok());
    }

    #[test]
    fn required_number_accepts_zero() {
        let field = number(true);
        assert_eq!(field.validation_rule(), Some(ValidationRule::Required));
        assert!(field.validate(&FieldValue::Number(0.0)).is_ok());
        assert!(field.validate(&FieldValue::Number(-0.0)).is_ok());
        assert!(field.validate(&FieldValue::Number(7.0)).is_ok());
    }

    #[test]
    fn required_rejects_absent_and_empty() {
        let field = number(true);
        let error = field.validate(&FieldValue::Absent).unwrap_err();
        assert_eq!(error.field(), "amount");
        assert_eq!(error.message(), "Required");
        assert!(field.validate(&FieldValue::text("")).is_err());
        assert!(field.validate(&FieldValue::Bool(false)).is_err());
        assert!(field.validate(&FieldValue::Number(f64::NAN)).is_err());
    }

    #[test]
    fn required_text() {
        let field = FieldDefinition::new(
            FieldId::new("t1"),
            "email",
            FieldAttributes::Text(TextAttributes::default()),
        )
        .with_required(true);
        assert!(field.validate(&FieldValue::text("x@y.com")).is_ok());
        assert_eq!(
            field.validate(&FieldValue::text("")),
            Err(FieldError::new("email", FieldErrorKind::Required))
        );
    }
}
