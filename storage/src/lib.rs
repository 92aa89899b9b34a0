use derive_more::{Display, Error, From};
use model::{error::PatchError, FieldId, FieldKind};

mod config;
pub mod defaults;
pub mod id_gen;
mod store;

pub use config::*;
pub use store::*;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum StoreError {
    #[display("No field with id '{}'", _0)]
    UnknownField(#[error(not(source))] FieldId),
    #[display("Field id '{}' is used more than once", _0)]
    DuplicateId(#[error(not(source))] FieldId),
    #[display("Id length {length} is outside {min}..={max}")]
    InvalidIdLength { length: usize, min: usize, max: usize },
    #[display("No free field id after {attempts} attempts")]
    IdsExhausted { attempts: usize },
    #[display("Index {index} is out of bounds for {len} fields")]
    IndexOutOfBounds { index: usize, len: usize },
    #[display("A {} field has no options", _0)]
    NoOptions(#[error(not(source))] FieldKind),
    #[display("Patch: {}", _0)]
    #[from]
    Patch(PatchError),
}
