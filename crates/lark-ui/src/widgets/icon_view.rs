//! Icon subview hosted inside decorated fields.

use lark_ui_graphics::{Color, Rect, Size};

/// Named image asset displayed by an [`IconView`].
///
/// The asset is a handle, not pixel data; the render layer resolves the
/// name against its asset catalog when drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageAsset {
    name: String,
    intrinsic_size: Option<Size>,
}

impl ImageAsset {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            intrinsic_size: None,
        }
    }

    pub fn with_intrinsic_size(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            intrinsic_size: Some(size),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intrinsic_size(&self) -> Option<Size> {
        self.intrinsic_size
    }
}

/// How an icon's image is fitted inside the view's frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentMode {
    /// Keep the image at its intrinsic size, centered in the frame.
    #[default]
    Center,
    /// Stretch the image to fill the frame.
    ScaleToFill,
}

/// Image-bearing subview positioned by the owning field on every layout
/// pass.
#[derive(Clone, Debug, Default)]
pub struct IconView {
    image: Option<ImageAsset>,
    frame: Rect,
    background: Color,
    content_mode: ContentMode,
}

impl IconView {
    /// Creates the view with a transparent background and centered
    /// content, the configuration every decorated field installs.
    pub fn new() -> Self {
        Self {
            image: None,
            frame: Rect::ZERO,
            background: Color::TRANSPARENT,
            content_mode: ContentMode::Center,
        }
    }

    pub fn image(&self) -> Option<&ImageAsset> {
        self.image.as_ref()
    }

    /// Replaces the displayed image. Positioning is untouched; the new
    /// image shows up wherever the current frame is.
    pub fn set_image(&mut self, image: Option<ImageAsset>) {
        self.image = image;
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    /// Rectangle the image is drawn into, honoring the content mode.
    ///
    /// Centered images without an intrinsic size fall back to the full
    /// frame.
    pub fn display_rect(&self) -> Rect {
        match self.content_mode {
            ContentMode::ScaleToFill => self.frame,
            ContentMode::Center => {
                let Some(size) = self.image.as_ref().and_then(ImageAsset::intrinsic_size) else {
                    return self.frame;
                };
                Rect {
                    x: self.frame.x + (self.frame.width - size.width) / 2.0,
                    y: self.frame.y + (self.frame.height - size.height) / 2.0,
                    width: size.width,
                    height: size.height,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_transparent_and_centered() {
        let view = IconView::new();
        assert_eq!(view.background().alpha(), 0.0);
        assert_eq!(view.content_mode(), ContentMode::Center);
        assert!(view.image().is_none());
    }

    #[test]
    fn centers_intrinsically_sized_images() {
        let mut view = IconView::new();
        view.set_frame(Rect::new(0.0, 0.0, 20.0, 44.0));
        view.set_image(Some(ImageAsset::with_intrinsic_size(
            "search",
            Size {
                width: 16.0,
                height: 16.0,
            },
        )));
        assert_eq!(view.display_rect(), Rect::new(2.0, 14.0, 16.0, 16.0));
    }

    #[test]
    fn falls_back_to_the_frame_without_intrinsic_size() {
        let mut view = IconView::new();
        view.set_frame(Rect::new(280.0, 14.0, 20.0, 30.0));
        view.set_image(Some(ImageAsset::named("search")));
        assert_eq!(view.display_rect(), view.frame());
    }
}
