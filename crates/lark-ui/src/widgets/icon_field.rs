//! Floating-label text field decorated with an edge icon.

use lark_foundation::{
    Archive, ArchiveError, FloatingLabelField, FromArchive, HostContext, InvalidationKind,
};
use lark_ui_graphics::Rect;
use lark_ui_layout::{icon_frame, inset_for_icon, FieldRegion, LayoutDirection};

use super::{IconView, ImageAsset};

/// A floating-label text field with an icon on the leading edge (trailing
/// edge in RTL layouts).
///
/// Wraps any [`FloatingLabelField`] and reshapes its text, editing, and
/// placeholder rectangles so they clear the icon. The wrapped field keeps
/// full ownership of editing, the floating title, and error display; this
/// type only places the icon and insets the regions around it.
///
/// The decorator is itself a [`FloatingLabelField`], so decorated fields
/// nest and the host drives them through the same hooks.
#[derive(Debug)]
pub struct IconTextField<F> {
    base: F,
    icon: IconView,
    icon_width: f32,
    bounds: Rect,
}

impl<F: FloatingLabelField> IconTextField<F> {
    /// Width reserved for the icon when none is configured explicitly.
    pub const DEFAULT_ICON_WIDTH: f32 = 20.0;

    /// Creates the field with an explicit initial frame.
    pub fn new(frame: Rect, base: F) -> Self {
        Self::with_icon_width(frame, base, Self::DEFAULT_ICON_WIDTH)
    }

    fn with_icon_width(frame: Rect, base: F, icon_width: f32) -> Self {
        let mut field = Self {
            base,
            icon: IconView::new(),
            icon_width,
            bounds: frame,
        };
        field.place_icon();
        field
    }

    pub fn base(&self) -> &F {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut F {
        &mut self.base
    }

    pub fn icon(&self) -> &IconView {
        &self.icon
    }

    pub fn image(&self) -> Option<&ImageAsset> {
        self.icon.image()
    }

    /// Replaces the displayed image.
    ///
    /// Content-only change: the host is asked for a draw pass, never a
    /// relayout.
    pub fn set_image(&mut self, image: Option<ImageAsset>, host: &mut dyn HostContext) {
        self.icon.set_image(image);
        host.invalidate(InvalidationKind::Draw);
    }

    pub fn icon_width(&self) -> f32 {
        self.icon_width
    }

    /// Changes the width reserved for the icon.
    ///
    /// Every region rectangle depends on this value, so the host is asked
    /// for a full relayout; the icon frame and insets update on the next
    /// pass even if the bounds stay the same.
    pub fn set_icon_width(&mut self, width: f32, host: &mut dyn HostContext) {
        if self.icon_width != width {
            self.icon_width = width;
            host.invalidate(InvalidationKind::Layout);
        }
    }

    /// Frame most recently assigned to the icon subview.
    pub fn icon_frame(&self) -> Rect {
        self.icon.frame()
    }

    fn place_icon(&mut self) {
        let frame = icon_frame(
            self.bounds,
            self.icon_width,
            self.base.layout_direction(),
            self.base.text_height(),
        );
        self.icon.set_frame(frame);
    }
}

impl<F: FloatingLabelField> FloatingLabelField for IconTextField<F> {
    fn text_rect(&self, bounds: Rect) -> Rect {
        inset_for_icon(
            self.base.text_rect(bounds),
            self.icon_width,
            self.base.layout_direction(),
            FieldRegion::Text,
        )
    }

    fn editing_rect(&self, bounds: Rect) -> Rect {
        inset_for_icon(
            self.base.editing_rect(bounds),
            self.icon_width,
            self.base.layout_direction(),
            FieldRegion::Editing,
        )
    }

    fn placeholder_rect(&self, bounds: Rect) -> Rect {
        inset_for_icon(
            self.base.placeholder_rect(bounds),
            self.icon_width,
            self.base.layout_direction(),
            FieldRegion::Placeholder,
        )
    }

    fn text_height(&self) -> f32 {
        self.base.text_height()
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.base.layout_direction()
    }

    fn layout_children(&mut self, bounds: Rect) {
        self.base.layout_children(bounds);
        self.bounds = bounds;
        self.place_icon();
        log::trace!(
            "icon field laid out: bounds={:?} icon={:?}",
            bounds,
            self.icon.frame()
        );
    }
}

impl<F: FloatingLabelField + FromArchive> FromArchive for IconTextField<F> {
    /// Restores the wrapped field first; any failure there fails the whole
    /// construction. Icon keys are optional and fall back to the defaults
    /// of the explicit-frame path, so both constructors end up with an
    /// identically configured icon view.
    fn from_archive(archive: &Archive) -> Result<Self, ArchiveError> {
        let base = F::from_archive(archive)?;
        let frame = archive.decode_or("frame", Rect::ZERO)?;
        let icon_width = archive.decode_or("icon_width", Self::DEFAULT_ICON_WIDTH)?;
        let image = archive
            .decode_opt::<String>("icon_image")?
            .map(ImageAsset::named);

        let mut field = Self::with_icon_width(frame, base, icon_width);
        field.icon.set_image(image);
        Ok(field)
    }
}
