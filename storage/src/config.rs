use serde::Deserialize;

use crate::{
    id_gen::{DEFAULT_ID_LENGTH, MAX_ID_LENGTH, MIN_ID_LENGTH},
    StoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfiguration {
    pub id_length: usize,
    pub name_suffix_length: usize,
}

impl StoreConfiguration {
    pub const DEFAULT_NAME_SUFFIX_LENGTH: usize = 4;

    /// Rejects id lengths whose id space is too small to allocate from or
    /// too large to generate.
    pub fn validate(&self) -> Result<(), StoreError> {
        if (MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&self.id_length) {
            Ok(())
        } else {
            Err(StoreError::InvalidIdLength {
                length: self.id_length,
                min: MIN_ID_LENGTH,
                max: MAX_ID_LENGTH,
            })
        }
    }

    /// Suffix length never exceeds the id it is taken from.
    pub fn effective_suffix_length(&self) -> usize {
        self.name_suffix_length.min(self.id_length)
    }
}

impl Default for StoreConfiguration {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
            name_suffix_length: Self::DEFAULT_NAME_SUFFIX_LENGTH,
        }
    }
}
