//! Text-field contracts.

mod field;

pub use field::FloatingLabelField;
