//! UI widgets for Lark.

pub mod widgets;

pub use widgets::{ContentMode, IconTextField, IconView, ImageAsset};
