pub mod error;
mod field;
mod id;
mod patch;
mod validation;
mod value;

pub use field::*;
pub use id::*;
pub use patch::*;
pub use validation::*;
pub use value::*;
