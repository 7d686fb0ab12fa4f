use crate::{ActiveTheme, Disableable, Icon, Sizable, Size, StyledExt, h_flex};
use gpui::{
    App, ClickEvent, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, StyleRefinement, Styled, Window, div,
    prelude::FluentBuilder as _, px,
};

/// The visual variant of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    #[default]
    Secondary,
    Accent,
    Danger,
}

/// A trait for setting the variant of a button-like element.
pub trait ButtonVariants: Sized {
    fn with_variant(self, variant: ButtonVariant) -> Self;

    fn primary(self) -> Self {
        self.with_variant(ButtonVariant::Primary)
    }

    fn secondary(self) -> Self {
        self.with_variant(ButtonVariant::Secondary)
    }

    fn accent(self) -> Self {
        self.with_variant(ButtonVariant::Accent)
    }

    fn danger(self) -> Self {
        self.with_variant(ButtonVariant::Danger)
    }
}

struct ButtonColors {
    bg: Hsla,
    fg: Hsla,
    border: Hsla,
    hover_bg: Hsla,
    active_bg: Hsla,
}

impl ButtonVariant {
    fn solid(&self, cx: &App) -> ButtonColors {
        let theme = cx.theme();
        let (bg, hover_bg, active_bg, fg) = match self {
            ButtonVariant::Primary => (
                theme.primary,
                theme.primary_hover,
                theme.primary_active,
                theme.primary_foreground,
            ),
            ButtonVariant::Secondary => (
                theme.secondary,
                theme.secondary_hover,
                theme.secondary_active,
                theme.secondary_foreground,
            ),
            ButtonVariant::Accent => (
                theme.accent,
                theme.accent_hover,
                theme.accent_active,
                theme.accent_foreground,
            ),
            ButtonVariant::Danger => (
                theme.danger,
                theme.danger_hover,
                theme.danger_active,
                theme.danger_foreground,
            ),
        };

        ButtonColors {
            bg,
            fg,
            border: theme.transparent,
            hover_bg,
            active_bg,
        }
    }

    fn outlined(&self, cx: &App) -> ButtonColors {
        let theme = cx.theme();
        let (border, fg) = match self {
            ButtonVariant::Primary => (theme.primary, theme.primary),
            ButtonVariant::Secondary => (theme.border, theme.secondary_foreground),
            ButtonVariant::Accent => (theme.accent, theme.accent),
            ButtonVariant::Danger => (theme.danger, theme.danger),
        };

        ButtonColors {
            bg: theme.transparent,
            fg,
            border,
            hover_bg: theme.muted,
            active_bg: theme.secondary_active,
        }
    }

    fn disabled(&self, outlined: bool, cx: &App) -> ButtonColors {
        let theme = cx.theme();
        ButtonColors {
            bg: if outlined { theme.transparent } else { theme.muted },
            fg: theme.muted_foreground,
            border: if outlined { theme.muted } else { theme.transparent },
            hover_bg: if outlined { theme.transparent } else { theme.muted },
            active_bg: if outlined { theme.transparent } else { theme.muted },
        }
    }
}

/// A pill shaped button with a label and/or an icon.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    style: StyleRefinement,
    label: Option<SharedString>,
    icon: Option<Icon>,
    variant: ButtonVariant,
    outlined: bool,
    disabled: bool,
    size: Size,
    stop_propagation: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleRefinement::default(),
            label: None,
            icon: None,
            variant: ButtonVariant::default(),
            outlined: false,
            disabled: false,
            size: Size::Medium,
            stop_propagation: true,
            on_click: None,
        }
    }

    /// Set the label of the button.
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the icon of the button.
    ///
    /// A button with an icon and no label renders as a square.
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Use the outlined style instead of the solid fill.
    pub fn outline(mut self) -> Self {
        self.outlined = true;
        self
    }

    /// Set whether a click stops event propagation, default: true.
    pub fn stop_propagation(mut self, stop: bool) -> Self {
        self.stop_propagation = stop;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    fn height(&self) -> f32 {
        match self.size {
            Size::XSmall => 24.,
            Size::Small => 32.,
            Size::Medium => 40.,
            Size::Large => 48.,
            Size::Size(px) => f32::from(px),
        }
    }
}

impl ButtonVariants for Button {
    fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl Disableable for Button {
    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Sizable for Button {
    fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }
}

impl Styled for Button {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Button {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = if self.disabled {
            self.variant.disabled(self.outlined, cx)
        } else if self.outlined {
            self.variant.outlined(cx)
        } else {
            self.variant.solid(cx)
        };

        let height = self.height();
        let icon_only = self.icon.is_some() && self.label.is_none();
        let disabled = self.disabled;
        let stop_propagation = self.stop_propagation;
        let hover_bg = colors.hover_bg;
        let active_bg = colors.active_bg;

        h_flex()
            .id(self.id)
            .flex_none()
            .justify_center()
            .gap_2()
            .h(px(height))
            .map(|this| {
                if icon_only {
                    this.w(px(height))
                } else {
                    this.px_4()
                }
            })
            .rounded(px(height / 2.))
            .text_sm()
            .bg(colors.bg)
            .text_color(colors.fg)
            .border_color(colors.border)
            .when(self.outlined, |this| this.border_2())
            .when(!disabled, |this| {
                this.cursor_pointer()
                    .hover(move |this| this.bg(hover_bg))
                    .active(move |this| this.bg(active_bg))
            })
            .when_some(self.icon, |this, icon| {
                this.child(icon.with_size(self.size))
            })
            .when_some(self.label, |this, label| {
                this.child(div().flex_none().line_height(px(height)).child(label))
            })
            .when_some(self.on_click.filter(|_| !disabled), |this, on_click| {
                this.on_click(move |event, window, cx| {
                    if stop_propagation {
                        cx.stop_propagation();
                    }
                    on_click(event, window, cx);
                })
            })
            .refine_style(&self.style)
    }
}
