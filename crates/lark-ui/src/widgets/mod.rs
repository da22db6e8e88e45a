//! Widget implementations.

mod icon_field;
mod icon_view;

pub use icon_field::IconTextField;
pub use icon_view::{ContentMode, IconView, ImageAsset};
