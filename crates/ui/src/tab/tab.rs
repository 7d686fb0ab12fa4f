use crate::{ActiveTheme, Disableable, Icon, Selectable, h_flex};
use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement as _, Styled, Window, div,
    prelude::FluentBuilder as _, px,
};

/// A single tab in a [`super::TabBar`].
///
/// The selected tab shows an underline indicator over the bar's baseline
/// rule.
#[derive(IntoElement)]
pub struct Tab {
    id: ElementId,
    label: SharedString,
    icon: Option<Icon>,
    selected: bool,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Tab {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            selected: false,
            disabled: false,
            on_click: None,
        }
    }

    /// Set a leading icon for the tab.
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub(crate) fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl Selectable for Tab {
    fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Disableable for Tab {
    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Tab {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let text_color = if self.disabled {
            cx.theme().muted_foreground
        } else if self.selected {
            cx.theme().tab_active_foreground
        } else {
            cx.theme().tab_foreground
        };
        let hover_color = cx.theme().tab_active_foreground;

        h_flex()
            .id(self.id)
            .relative()
            .flex_none()
            .gap_1()
            .px_1()
            .py_2()
            .text_sm()
            .text_color(text_color)
            .when(self.selected, |this| this.font_semibold())
            .when(!self.disabled, |this| {
                this.cursor_pointer()
                    .hover(move |this| this.text_color(hover_color))
            })
            .when_some(self.icon, |this, icon| this.child(icon))
            .child(self.label)
            .when(self.selected, |this| {
                this.child(
                    div()
                        .absolute()
                        .bottom_0()
                        .left_0()
                        .right_0()
                        .h(px(2.))
                        .rounded(px(1.))
                        .bg(cx.theme().tab_active),
                )
            })
            .when_some(self.on_click.filter(|_| !self.disabled), |this, on_click| {
                this.on_click(move |event, window, cx| on_click(event, window, cx))
            })
    }
}
