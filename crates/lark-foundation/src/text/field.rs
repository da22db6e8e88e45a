//! Capability surface of a floating-label text field.

use lark_ui_graphics::Rect;
use lark_ui_layout::LayoutDirection;

/// A text field whose placeholder floats up into a title label.
///
/// The implementor owns editing, the floating title, and error display.
/// Decorators wrap an implementor, call these hooks, and reshape the
/// returned rectangles; they never reimplement the behavior behind them.
///
/// All rectangles are expressed in the control's own coordinate space,
/// derived from the `bounds` the host allocated for the current pass.
pub trait FloatingLabelField {
    /// Rectangle the committed text renders into.
    fn text_rect(&self, bounds: Rect) -> Rect;

    /// Rectangle the text renders into while the field is being edited.
    fn editing_rect(&self, bounds: Rect) -> Rect;

    /// Rectangle the placeholder renders into while the field is empty.
    fn placeholder_rect(&self, bounds: Rect) -> Rect;

    /// Height of the text content band, excluding the floating title.
    fn text_height(&self) -> f32;

    /// Layout direction resolved from the current locale or content.
    fn layout_direction(&self) -> LayoutDirection;

    /// Invoked by the host once `bounds` are finalized for this pass.
    ///
    /// Implementors position their own subviews here; decorators forward
    /// the call before placing anything of their own.
    fn layout_children(&mut self, _bounds: Rect) {}
}
