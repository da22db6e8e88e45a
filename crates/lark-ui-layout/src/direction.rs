//! Reading/layout direction for widget content.

/// Horizontal layout direction, resolved from the locale or content
/// direction by whoever owns the widget tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutDirection {
    /// Left-to-right; the default for most languages.
    #[default]
    Ltr,
    /// Right-to-left, used for Arabic, Hebrew, and similar scripts.
    Rtl,
}

impl LayoutDirection {
    pub fn is_ltr(self) -> bool {
        matches!(self, LayoutDirection::Ltr)
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}
