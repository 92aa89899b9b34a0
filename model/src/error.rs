use derive_more::{Display, Error};
use serde::Serialize;

use crate::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, Error, Display, Serialize)]
#[display("{field}: {kind}")]
pub struct FieldError {
    #[serde(flatten)]
    kind: FieldErrorKind,
    field: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> &FieldErrorKind {
        &self.kind
    }

    /// Text shown under the control.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Display, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldErrorKind {
    #[display("Required")]
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Display)]
pub enum PatchError {
    #[display("Patch for a {got} field cannot be applied to a {expected} field")]
    KindMismatch { expected: FieldKind, got: FieldKind },
    #[display("Option index {index} is out of bounds for {len} options")]
    OptionOutOfBounds { index: usize, len: usize },
}
