use crate::{ActiveTheme, AxisExt, Sizable, Size, StyledExt};
use gpui::{
    App, Axis, Hsla, IntoElement, RenderOnce, StyleRefinement, Styled, Window, div, px,
    prelude::FluentBuilder as _,
};

/// A horizontal or vertical rule to separate content.
#[derive(IntoElement)]
pub struct Divider {
    axis: Axis,
    size: Size,
    color: Option<Hsla>,
    style: StyleRefinement,
}

impl Divider {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            size: Size::Small,
            color: None,
            style: StyleRefinement::default(),
        }
    }

    /// A divider that spans the full width of its container.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// A divider that spans the full height of its container.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Override the rule color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn thickness(&self) -> f32 {
        match self.size {
            Size::XSmall | Size::Small => 1.,
            Size::Medium => 2.,
            Size::Large => 4.,
            Size::Size(px) => f32::from(px).max(1.),
        }
    }
}

impl Sizable for Divider {
    fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }
}

impl Styled for Divider {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Divider {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let thickness = self.thickness();
        let color = self.color.unwrap_or(if self.size == Size::Large {
            cx.theme().muted_foreground
        } else {
            cx.theme().border
        });

        div()
            .map(|this| {
                if self.axis.is_vertical() {
                    this.h_full().w(px(thickness)).mx_2()
                } else {
                    this.w_full().h(px(thickness)).my_2()
                }
            })
            .rounded(px(thickness))
            .bg(color)
            .refine_style(&self.style)
    }
}
