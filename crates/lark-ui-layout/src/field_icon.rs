//! Rectangle policies for text fields decorated with an edge icon.
//!
//! A decorated field reserves a strip of its bounds for the icon and hands
//! the rest to the text machinery. These functions derive both sides of that
//! split: where the icon sits, and how a region rectangle produced by the
//! underlying field must be inset so it clears the icon. They are pure;
//! callers re-run them on every layout pass.

use lark_ui_graphics::Rect;

use crate::LayoutDirection;

/// Region of a text field whose rectangle is being derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldRegion {
    /// Committed text.
    Text,
    /// Text while the field has focus and is being edited.
    Editing,
    /// Placeholder shown while the field is empty.
    Placeholder,
}

/// Returns the frame of the icon view within `bounds`.
///
/// LTR icons span the full height of the control on the leading edge. RTL
/// icons hug the trailing edge and occupy only the text band at the bottom
/// of the control, lining up with the floating label's vertical offset.
pub fn icon_frame(
    bounds: Rect,
    icon_width: f32,
    direction: LayoutDirection,
    text_height: f32,
) -> Rect {
    if direction.is_ltr() {
        Rect {
            x: 0.0,
            y: bounds.y,
            width: icon_width,
            height: bounds.height,
        }
    } else {
        Rect {
            x: bounds.width - icon_width,
            y: bounds.height - text_height,
            width: icon_width,
            height: text_height,
        }
    }
}

/// Insets a region rectangle produced by the underlying field so it does
/// not overlap the icon.
///
/// Every region gives up `icon_width` of width. In LTR layouts the origin
/// also moves past the icon. In RTL layouts only the text region moves (it
/// shifts outward, toward the leading edge); editing and placeholder keep
/// their origin and lose width from the trailing side.
///
/// Widths are not validated: an icon wider than `base` yields a
/// negative-width rectangle, which the render layer clips to empty.
pub fn inset_for_icon(
    base: Rect,
    icon_width: f32,
    direction: LayoutDirection,
    region: FieldRegion,
) -> Rect {
    let x = match (direction, region) {
        (LayoutDirection::Ltr, _) => base.x + icon_width,
        (LayoutDirection::Rtl, FieldRegion::Text) => base.x - icon_width,
        (LayoutDirection::Rtl, _) => base.x,
    };
    Rect {
        x,
        width: base.width - icon_width,
        ..base
    }
}

#[cfg(test)]
#[path = "tests/field_icon_tests.rs"]
mod tests;
