use gpui::{Div, Pixels, Refineable as _, StyleRefinement, Styled, div, px};

/// Create a horizontal flex layout with centered items.
pub fn h_flex() -> Div {
    div().flex().flex_row().items_center()
}

/// Create a vertical flex layout.
pub fn v_flex() -> Div {
    div().flex().flex_col()
}

/// Extends [`Styled`] with helpers shared by the components.
pub trait StyledExt: Styled + Sized {
    /// Apply a prepared [`StyleRefinement`] on top of the current style.
    fn refine_style(mut self, style: &StyleRefinement) -> Self {
        self.style().refine(style);
        self
    }
}

impl<E: Styled> StyledExt for E {}

/// The size of a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub enum Size {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    /// An explicit size in pixels.
    Size(Pixels),
}

impl From<Pixels> for Size {
    fn from(size: Pixels) -> Self {
        Size::Size(size)
    }
}

impl From<f32> for Size {
    fn from(size: f32) -> Self {
        Size::Size(px(size))
    }
}

/// A trait for elements that support the [`Size`] variants.
pub trait Sizable: Sized {
    fn with_size(self, size: impl Into<Size>) -> Self;

    fn xsmall(self) -> Self {
        self.with_size(Size::XSmall)
    }

    fn small(self) -> Self {
        self.with_size(Size::Small)
    }

    fn medium(self) -> Self {
        self.with_size(Size::Medium)
    }

    fn large(self) -> Self {
        self.with_size(Size::Large)
    }
}
