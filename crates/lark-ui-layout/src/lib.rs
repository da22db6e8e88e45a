//! Layout contracts & policies for Lark widgets.

mod direction;
mod field_icon;

pub use direction::LayoutDirection;
pub use field_icon::{icon_frame, inset_for_icon, FieldRegion};
