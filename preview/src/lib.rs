use derive_more::{Display, Error};

mod form;
pub mod view;

pub use form::*;
pub use view::{ControlState, ControlView, OptionView, PreviewView};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PreviewError {
    #[display("No field is bound to '{}'", _0)]
    UnknownField(#[error(not(source))] String),
}
