use std::{collections::HashSet, fs, path::Path};

use model::{FieldDefinition, FieldKind};
use preview::PreviewForm;
use storage::{FieldStore, StoreConfiguration};
use tracing::{info, warn};

use crate::{
    cli::{GenerateArgs, PreviewArgs, ScaffoldArgs},
    config::FormsmithConfiguration,
    error::ToolError,
};

/// Reads a field document and seeds a store with it.
pub fn load_store(path: &Path, config: &StoreConfiguration) -> Result<FieldStore, ToolError> {
    let document = fs::read_to_string(path)?;
    let fields: Vec<FieldDefinition> = serde_json::from_str(&document)?;
    for name in duplicate_names(&fields) {
        warn!(name, "Field name is used more than once, later values win");
    }
    info!(path = %path.display(), count = fields.len(), "Loaded fields");
    Ok(FieldStore::from_fields(config.clone(), fields)?)
}

pub fn duplicate_names(fields: &[FieldDefinition]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for field in fields {
        if !seen.insert(field.name()) && !duplicates.contains(&field.name()) {
            duplicates.push(field.name());
        }
    }
    duplicates
}

pub fn generate(args: GenerateArgs, config: &FormsmithConfiguration) -> Result<(), ToolError> {
    let store = load_store(&args.input, &config.store)?;
    let source = codegen::generate_form_code(&store.fields())?;
    match args.output {
        Some(output) => {
            fs::write(&output, source)?;
            info!(path = %output.display(), "Wrote form component");
        }
        None => println!("{source}"),
    }
    Ok(())
}

pub fn preview(args: PreviewArgs, config: &FormsmithConfiguration) -> Result<(), ToolError> {
    let store = load_store(&args.input, &config.store)?;
    println!("{}", preview_json(&store.fields())?);
    Ok(())
}

pub fn preview_json(fields: &[FieldDefinition]) -> Result<String, ToolError> {
    let view = PreviewForm::new(fields).render(fields);
    Ok(serde_json::to_string_pretty(&view)?)
}

pub fn scaffold(args: ScaffoldArgs, config: &FormsmithConfiguration) -> Result<(), ToolError> {
    let fields = scaffold_fields(&args.kinds, &config.store)?;
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}

pub fn scaffold_fields(
    kinds: &[FieldKind],
    config: &StoreConfiguration,
) -> Result<Vec<FieldDefinition>, ToolError> {
    let store = FieldStore::new(config.clone());
    for kind in kinds {
        store.add_field(*kind)?;
    }
    Ok(store.fields().to_vec())
}
