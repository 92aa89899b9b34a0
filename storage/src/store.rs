use std::{collections::HashSet, ops::Deref, sync::Arc};

use model::{AttributesPatch, FieldDefinition, FieldId, FieldKind, FieldOption, FieldPatch};
use parking_lot::{Mutex, RwLock};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::{
    config::StoreConfiguration,
    defaults::{default_field, NEW_OPTION_LABEL, NEW_OPTION_VALUE},
    id_gen, StoreError,
};

const MAX_ID_ATTEMPTS: usize = 32;

/// Immutable view of the ordered field collection.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot(Arc<Vec<FieldDefinition>>);

impl Deref for FieldSnapshot {
    type Target = [FieldDefinition];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FieldSnapshot {
    pub fn to_vec(&self) -> Vec<FieldDefinition> {
        self.0.as_ref().clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub fields: FieldSnapshot,
    pub selected: Option<FieldId>,
}

#[derive(Debug, Default)]
struct StoreState {
    fields: Arc<Vec<FieldDefinition>>,
    selected: Option<FieldId>,
}

impl StoreState {
    fn position(&self, id: &FieldId) -> Result<usize, StoreError> {
        self.fields
            .iter()
            .position(|field| field.id() == id)
            .ok_or_else(|| StoreError::UnknownField(id.clone()))
    }

    fn field(&self, id: &FieldId) -> Result<&FieldDefinition, StoreError> {
        self.position(id).map(|index| &self.fields[index])
    }
}

/// Owns the ordered field collection and the selection cursor. Every mutation
/// happens under one write lock, so snapshots never observe partial updates.
pub struct FieldStore {
    config: StoreConfiguration,
    state: RwLock<StoreState>,
    rng: Mutex<StdRng>,
}

impl FieldStore {
    pub fn new(config: StoreConfiguration) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: StoreConfiguration, rng: StdRng) -> Self {
        Self {
            config,
            state: RwLock::new(StoreState::default()),
            rng: Mutex::new(rng),
        }
    }

    /// Store seeded with existing definitions, e.g. a loaded form document.
    pub fn from_fields(
        config: StoreConfiguration,
        fields: Vec<FieldDefinition>,
    ) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        if let Some(field) = fields.iter().find(|field| !seen.insert(field.id())) {
            return Err(StoreError::DuplicateId(field.id().clone()));
        }
        let store = Self::new(config);
        store.state.write().fields = Arc::new(fields);
        Ok(store)
    }

    pub fn config(&self) -> &StoreConfiguration {
        &self.config
    }

    fn allocate_id(&self, existing: &[FieldDefinition]) -> Result<FieldId, StoreError> {
        self.config.validate()?;
        let mut rng = self.rng.lock();
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = id_gen::generate(&mut *rng, self.config.id_length);
            if !existing.iter().any(|field| field.id() == &id) {
                return Ok(id);
            }
        }
        warn!(count = existing.len(), "Field id space exhausted");
        Err(StoreError::IdsExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    fn build_field(
        &self,
        kind: FieldKind,
        existing: &[FieldDefinition],
    ) -> Result<FieldDefinition, StoreError> {
        let id = self.allocate_id(existing)?;
        Ok(default_field(id, kind, self.config.effective_suffix_length()))
    }

    /// A new field of `kind` with default attributes. The field is not part of
    /// the collection and its id is not reserved; append it with
    /// [`FieldStore::insert_field`].
    pub fn create_field(&self, kind: FieldKind) -> Result<FieldDefinition, StoreError> {
        let state = self.state.read();
        self.build_field(kind, &state.fields)
    }

    /// Creates a field of `kind` and appends it to the collection.
    pub fn add_field(&self, kind: FieldKind) -> Result<FieldDefinition, StoreError> {
        let mut state = self.state.write();
        let field = self.build_field(kind, &state.fields)?;
        Arc::make_mut(&mut state.fields).push(field.clone());
        info!(id = %field.id(), kind = %kind, name = field.name(), "Added field");
        Ok(field)
    }

    /// Appends an existing definition, provided its id is not taken yet.
    pub fn insert_field(&self, field: FieldDefinition) -> Result<(), StoreError> {
        let mut state = self.state.write();
        if state.position(field.id()).is_ok() {
            return Err(StoreError::DuplicateId(field.id().clone()));
        }
        info!(id = %field.id(), kind = %field.kind(), name = field.name(), "Inserted field");
        Arc::make_mut(&mut state.fields).push(field);
        Ok(())
    }

    pub fn remove_field(&self, id: &FieldId) -> Result<FieldDefinition, StoreError> {
        let mut state = self.state.write();
        let index = state.position(id)?;
        let removed = Arc::make_mut(&mut state.fields).remove(index);
        if state.selected.as_ref() == Some(id) {
            state.selected = None;
        }
        info!(id = %id, name = removed.name(), "Removed field");
        Ok(removed)
    }

    pub fn patch_field(&self, id: &FieldId, patch: FieldPatch) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let index = state.position(id)?;
        let mut field = state.fields[index].clone();
        field.apply(patch)?;
        debug!(id = %id, name = field.name(), "Patched field");
        Arc::make_mut(&mut state.fields)[index] = field;
        Ok(())
    }

    /// Moves the field at `from` to `to`, keeping the relative order of the rest.
    pub fn reorder_field(&self, from: usize, to: usize) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let len = state.fields.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfBounds { index, len });
            }
        }
        if from != to {
            let fields = Arc::make_mut(&mut state.fields);
            let field = fields.remove(from);
            fields.insert(to, field);
        }
        debug!(from, to, "Moved field");
        Ok(())
    }

    pub fn select_field(&self, id: Option<&FieldId>) -> Result<(), StoreError> {
        let mut state = self.state.write();
        if let Some(id) = id {
            state.position(id)?;
        }
        state.selected = id.cloned();
        Ok(())
    }

    /// Appends a placeholder option to a select or radio field.
    pub fn add_option(&self, id: &FieldId) -> Result<(), StoreError> {
        self.edit_options(id, |options| {
            options.push(FieldOption::new(NEW_OPTION_LABEL, NEW_OPTION_VALUE));
            Ok(())
        })
    }

    pub fn update_option(
        &self,
        id: &FieldId,
        index: usize,
        label: Option<String>,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        self.edit_options(id, |options| {
            let len = options.len();
            let option = options
                .get_mut(index)
                .ok_or(model::error::PatchError::OptionOutOfBounds { index, len })?;
            if let Some(label) = label {
                option.label = label;
            }
            if let Some(value) = value {
                option.value = value;
            }
            Ok(())
        })
    }

    fn edit_options(
        &self,
        id: &FieldId,
        edit: impl FnOnce(&mut Vec<FieldOption>) -> Result<(), model::error::PatchError>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let index = state.position(id)?;
        let field = &state.fields[index];
        let kind = field.kind();
        let mut options = field
            .attributes()
            .options()
            .map(<[FieldOption]>::to_vec)
            .ok_or(StoreError::NoOptions(kind))?;
        edit(&mut options)?;
        let patch = AttributesPatch::options(kind, options).ok_or(StoreError::NoOptions(kind))?;
        let mut field = field.clone();
        field.apply(FieldPatch::new().attributes(patch))?;
        debug!(id = %id, "Edited field options");
        Arc::make_mut(&mut state.fields)[index] = field;
        Ok(())
    }

    pub fn fields(&self) -> FieldSnapshot {
        FieldSnapshot(self.state.read().fields.clone())
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read();
        StoreSnapshot {
            fields: FieldSnapshot(state.fields.clone()),
            selected: state.selected.clone(),
        }
    }

    pub fn selected(&self) -> Option<FieldDefinition> {
        let state = self.state.read();
        let id = state.selected.as_ref()?;
        state.field(id).ok().cloned()
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new(StoreConfiguration::default())
    }
}
