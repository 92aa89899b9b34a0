use derive_more::{Display, Error, From};
use handlebars::{Handlebars, RenderError, TemplateError};
use model::FieldDefinition;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::render::{indent, FieldFragment};

pub mod literal;
mod render;

const FORM_TEMPLATE: &str = "form";
const FIELD_TEMPLATE: &str = "field";

const INITIAL_VALUE_INDENT: usize = 6;
const FIELD_INDENT: usize = 8;

#[derive(Debug, Display, Error, From)]
pub enum GenerateError {
    #[display("Template: {}", _0)]
    Render(RenderError),
}

#[derive(Serialize)]
struct FormContext {
    initial_values: String,
    fields: String,
}

/// Compiles field definitions into the source text of a form component.
pub struct Generator {
    registry: Handlebars<'static>,
}

impl Generator {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        registry.register_template_string(FORM_TEMPLATE, include_str!("../templates/form.hbs"))?;
        registry
            .register_template_string(FIELD_TEMPLATE, include_str!("../templates/field.hbs"))?;
        Ok(Self { registry })
    }

    pub fn generate(&self, fields: &[FieldDefinition]) -> Result<String, GenerateError> {
        let initial_values = fields
            .iter()
            .map(|field| {
                format!(
                    "{}: {},",
                    literal::string(field.name()),
                    literal::value(&field.default_value())
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let fragments = fields
            .iter()
            .map(|field| self.render_field(field))
            .collect::<Result<Vec<_>, _>>()?;
        let context = FormContext {
            initial_values: indent(&initial_values, INITIAL_VALUE_INDENT),
            fields: indent(&fragments.join("\n\n"), FIELD_INDENT),
        };
        let source = self.registry.render(FORM_TEMPLATE, &context)?;
        debug!(fields = fields.len(), bytes = source.len(), "Generated form component");
        Ok(source)
    }

    pub fn render_field(&self, field: &FieldDefinition) -> Result<String, GenerateError> {
        let fragment = self
            .registry
            .render(FIELD_TEMPLATE, &FieldFragment::new(field))?;
        Ok(fragment.trim_end().to_owned())
    }
}

static DEFAULT_GENERATOR: Lazy<Generator> =
    Lazy::new(|| Generator::new().expect("Built-in templates failed to compile"));

/// Source text of a standalone form component for `fields`, in order.
pub fn generate_form_code(fields: &[FieldDefinition]) -> Result<String, GenerateError> {
    DEFAULT_GENERATOR.generate(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_compile() {
        assert!(Generator::new().is_ok());
    }
}
