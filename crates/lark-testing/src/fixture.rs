//! Configurable floating-label field double.

use lark_foundation::{Archive, ArchiveError, FloatingLabelField, FromArchive};
use lark_ui_graphics::Rect;
use lark_ui_layout::LayoutDirection;

/// Minimal [`FloatingLabelField`] implementation for driving decorators in
/// tests.
///
/// The fixture reserves a `title_height` strip at the top of its bounds for
/// the raised title, the way a real floating-label field does, and hands
/// the rest to every text region. Layout passes are counted so tests can
/// prove the hook was forwarded.
#[derive(Clone, Debug)]
pub struct FixtureField {
    direction: LayoutDirection,
    title_height: f32,
    text_height: f32,
    layout_count: usize,
    last_layout_bounds: Option<Rect>,
}

impl FixtureField {
    pub fn new(direction: LayoutDirection, title_height: f32, text_height: f32) -> Self {
        Self {
            direction,
            title_height,
            text_height,
            layout_count: 0,
            last_layout_bounds: None,
        }
    }

    /// LTR fixture whose regions pass the bounds through unchanged.
    pub fn ltr() -> Self {
        Self::new(LayoutDirection::Ltr, 0.0, 30.0)
    }

    /// RTL fixture whose regions pass the bounds through unchanged.
    pub fn rtl() -> Self {
        Self::new(LayoutDirection::Rtl, 0.0, 30.0)
    }

    /// Number of [`FloatingLabelField::layout_children`] calls received.
    pub fn layout_count(&self) -> usize {
        self.layout_count
    }

    /// Bounds received by the most recent layout pass.
    pub fn last_layout_bounds(&self) -> Option<Rect> {
        self.last_layout_bounds
    }

    fn content_rect(&self, bounds: Rect) -> Rect {
        Rect {
            x: bounds.x,
            y: bounds.y + self.title_height,
            width: bounds.width,
            height: bounds.height - self.title_height,
        }
    }
}

impl FloatingLabelField for FixtureField {
    fn text_rect(&self, bounds: Rect) -> Rect {
        self.content_rect(bounds)
    }

    fn editing_rect(&self, bounds: Rect) -> Rect {
        self.content_rect(bounds)
    }

    fn placeholder_rect(&self, bounds: Rect) -> Rect {
        self.content_rect(bounds)
    }

    fn text_height(&self) -> f32 {
        self.text_height
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn layout_children(&mut self, bounds: Rect) {
        self.layout_count += 1;
        self.last_layout_bounds = Some(bounds);
    }
}

impl FromArchive for FixtureField {
    /// `text_height` is required; direction and title height fall back to
    /// their defaults. The required key gives decorator tests a base-field
    /// restore failure to propagate.
    fn from_archive(archive: &Archive) -> Result<Self, ArchiveError> {
        let direction = archive.decode_or("direction", LayoutDirection::Ltr)?;
        let title_height = archive.decode_or("title_height", 0.0)?;
        let text_height = archive.decode("text_height")?;
        Ok(Self::new(direction, title_height, text_height))
    }
}
