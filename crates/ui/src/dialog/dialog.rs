use std::rc::Rc;

use gpui::{
    Animation, AnimationExt as _, AnyElement, App, ClickEvent, FocusHandle, InteractiveElement,
    IntoElement, KeyBinding, MouseButton, ParentElement, Pixels, RenderOnce, SharedString,
    StatefulInteractiveElement as _, StyleRefinement, Styled, Window, div,
    prelude::FluentBuilder as _, px,
};
use rust_i18n::t;

use crate::{
    ActiveTheme as _, FocusTrapElement, Icon, IconName, Root, Sizable as _, StyledExt,
    WindowExt as _,
    actions::{Cancel, Confirm},
    animation::{DIALOG_ANIMATION_DURATION, ease_out_cubic},
    button::{Button, ButtonVariant, ButtonVariants as _},
    dialog::DialogFooter,
    v_flex,
};

const CONTEXT: &str = "Dialog";

pub(crate) fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("escape", Cancel, Some(CONTEXT)),
        KeyBinding::new("enter", Confirm, Some(CONTEXT)),
    ]);
}

type RenderButtonFn = Box<dyn FnOnce(&mut Window, &mut App) -> AnyElement>;
type FooterFn =
    Box<dyn Fn(RenderButtonFn, RenderButtonFn, &mut Window, &mut App) -> Vec<AnyElement>>;
type OnOkFn = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) -> bool + 'static>;
type OnCancelFn = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) -> bool + 'static>;
type OnCloseFn = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Text and variants of the default footer buttons.
#[derive(Clone)]
pub struct DialogButtonProps {
    pub(crate) ok_text: Option<SharedString>,
    pub(crate) ok_variant: ButtonVariant,
    pub(crate) cancel_text: Option<SharedString>,
    pub(crate) cancel_variant: ButtonVariant,
    pub(crate) show_cancel: bool,
}

impl Default for DialogButtonProps {
    fn default() -> Self {
        Self {
            ok_text: None,
            ok_variant: ButtonVariant::Primary,
            cancel_text: None,
            cancel_variant: ButtonVariant::Secondary,
            show_cancel: false,
        }
    }
}

impl DialogButtonProps {
    /// Sets the text of the OK button. Default is `OK`.
    pub fn ok_text(mut self, ok_text: impl Into<SharedString>) -> Self {
        self.ok_text = Some(ok_text.into());
        self
    }

    /// Sets the variant of the OK button. Default is `ButtonVariant::Primary`.
    pub fn ok_variant(mut self, ok_variant: ButtonVariant) -> Self {
        self.ok_variant = ok_variant;
        self
    }

    /// Sets the text of the Cancel button. Default is `Cancel`.
    pub fn cancel_text(mut self, cancel_text: impl Into<SharedString>) -> Self {
        self.cancel_text = Some(cancel_text.into());
        self
    }

    /// Sets the variant of the Cancel button. Default is `ButtonVariant::Secondary`.
    pub fn cancel_variant(mut self, cancel_variant: ButtonVariant) -> Self {
        self.cancel_variant = cancel_variant;
        self
    }

    /// Show the Cancel button in the default footer. Default is false.
    pub fn show_cancel(mut self, show_cancel: bool) -> Self {
        self.show_cancel = show_cancel;
        self
    }
}

#[derive(Clone)]
pub(crate) struct DialogProps {
    width: Pixels,
    max_width: Option<Pixels>,
    margin_top: Option<Pixels>,
    close_button: bool,
    on_close: OnCloseFn,
    overlay: bool,
    overlay_closable: bool,
    pub(crate) overlay_visible: bool,
    keyboard: bool,
}

impl Default for DialogProps {
    fn default() -> Self {
        Self {
            width: px(480.),
            max_width: None,
            margin_top: None,
            close_button: true,
            on_close: Rc::new(|_, _, _| {}),
            overlay: true,
            overlay_closable: true,
            overlay_visible: false,
            keyboard: true,
        }
    }
}

/// A modal to display content in a dialog box, on top of an overlay that
/// dims the rest of the window.
///
/// Opened with [`crate::WindowExt::open_dialog`]; while open, focus is
/// trapped inside the panel, Escape cancels (when `keyboard`), and a
/// click on the overlay cancels (when `overlay_closable`).
#[derive(IntoElement)]
pub struct Dialog {
    pub(crate) style: StyleRefinement,
    children: Vec<AnyElement>,
    title: Option<AnyElement>,
    pub(crate) props: DialogProps,

    footer: Option<FooterFn>,
    on_ok: Option<OnOkFn>,
    on_cancel: OnCancelFn,
    button_props: DialogButtonProps,

    /// Assigned by the Root when the dialog is rendered, the handle is
    /// owned by the dialog stack.
    pub(crate) focus_handle: FocusHandle,
    pub(crate) layer_ix: usize,
}

impl Dialog {
    /// Create a new dialog.
    pub fn new(cx: &mut App) -> Self {
        Self {
            style: StyleRefinement::default(),
            children: Vec::new(),
            title: None,
            props: DialogProps::default(),
            footer: None,
            on_ok: None,
            on_cancel: Rc::new(|_, _, _| true),
            button_props: DialogButtonProps::default(),
            focus_handle: cx.focus_handle(),
            layer_ix: 0,
        }
    }

    /// Sets the title of the dialog.
    pub fn title(mut self, title: impl IntoElement) -> Self {
        self.title = Some(title.into_any_element());
        self
    }

    /// Set the footer of the dialog.
    ///
    /// The two [`RenderButtonFn`] are the render functions of the default
    /// OK and Cancel buttons, in that order. Without a footer the dialog
    /// has no button row.
    pub fn footer<E, F>(mut self, footer: F) -> Self
    where
        E: IntoElement,
        F: Fn(RenderButtonFn, RenderButtonFn, &mut Window, &mut App) -> Vec<E> + 'static,
    {
        self.footer = Some(Box::new(move |ok, cancel, window, cx| {
            footer(ok, cancel, window, cx)
                .into_iter()
                .map(|e| e.into_any_element())
                .collect()
        }));
        self
    }

    /// Set to use a confirm dialog, with OK and Cancel buttons.
    ///
    /// See also [`Self::alert`].
    pub fn confirm(self) -> Self {
        self.footer(|ok, cancel, window, cx| vec![cancel(window, cx), ok(window, cx)])
            .overlay_closable(false)
            .close_button(false)
    }

    /// Set to use an alert dialog, with an OK button only.
    ///
    /// See also [`Self::confirm`].
    pub fn alert(self) -> Self {
        self.footer(|ok, _, window, cx| vec![ok(window, cx)])
            .overlay_closable(false)
            .close_button(false)
    }

    /// Set the button props of the dialog.
    pub fn button_props(mut self, button_props: DialogButtonProps) -> Self {
        self.button_props = button_props;
        self
    }

    /// Sets the callback for when the dialog is closed.
    ///
    /// Called after the [`Self::on_ok`] or [`Self::on_cancel`] callback.
    pub fn on_close(
        mut self,
        on_close: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.props.on_close = Rc::new(on_close);
        self
    }

    /// Sets the callback for when the dialog has been confirmed.
    ///
    /// Return `true` to close the dialog, `false` keeps it open.
    pub fn on_ok(
        mut self,
        on_ok: impl Fn(&ClickEvent, &mut Window, &mut App) -> bool + 'static,
    ) -> Self {
        self.on_ok = Some(Rc::new(on_ok));
        self
    }

    /// Sets the callback for when the dialog has been canceled.
    ///
    /// Return `true` to close the dialog, `false` keeps it open.
    pub fn on_cancel(
        mut self,
        on_cancel: impl Fn(&ClickEvent, &mut Window, &mut App) -> bool + 'static,
    ) -> Self {
        self.on_cancel = Rc::new(on_cancel);
        self
    }

    /// Sets false to hide the close icon, default: true.
    pub fn close_button(mut self, close_button: bool) -> Self {
        self.props.close_button = close_button;
        self
    }

    /// Set the top offset of the dialog, defaults to 1/10 of the viewport
    /// height.
    pub fn margin_top(mut self, margin_top: impl Into<Pixels>) -> Self {
        self.props.margin_top = Some(margin_top.into());
        self
    }

    /// Sets the width of the dialog, defaults to 480px.
    pub fn width(mut self, width: impl Into<Pixels>) -> Self {
        self.props.width = width.into();
        self
    }

    /// Set the maximum width of the dialog, defaults to `None`.
    pub fn max_w(mut self, max_width: impl Into<Pixels>) -> Self {
        self.props.max_width = Some(max_width.into());
        self
    }

    /// Set the overlay of the dialog, defaults to `true`.
    pub fn overlay(mut self, overlay: bool) -> Self {
        self.props.overlay = overlay;
        self
    }

    /// When true a click on the overlay cancels the dialog, defaults to
    /// `true`.
    pub fn overlay_closable(mut self, overlay_closable: bool) -> Self {
        self.props.overlay_closable = overlay_closable;
        self
    }

    /// Set whether Escape cancels and Enter confirms the dialog, defaults
    /// to `true`.
    pub fn keyboard(mut self, keyboard: bool) -> Self {
        self.props.keyboard = keyboard;
        self
    }

    pub(crate) fn has_overlay(&self) -> bool {
        self.props.overlay
    }
}

impl ParentElement for Dialog {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Dialog {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Dialog {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let layer_ix = self.layer_ix;
        let on_close = self.props.on_close.clone();
        let on_ok = self.on_ok.clone();
        let on_cancel = self.on_cancel.clone();
        let is_top_dialog = (layer_ix + 1) == Root::read(window, cx).active_dialogs.len();

        let render_ok: RenderButtonFn = Box::new({
            let on_ok = on_ok.clone();
            let on_close = on_close.clone();
            let ok_text = self
                .button_props
                .ok_text
                .clone()
                .unwrap_or_else(|| t!("Dialog.ok").into());
            let ok_variant = self.button_props.ok_variant;
            move |_, _| {
                Button::new("ok")
                    .label(ok_text)
                    .with_variant(ok_variant)
                    .on_click({
                        move |event, window, cx| {
                            if let Some(on_ok) = &on_ok {
                                if !on_ok(event, window, cx) {
                                    return;
                                }
                            }

                            window.close_dialog(cx);
                            on_close(event, window, cx);
                        }
                    })
                    .into_any_element()
            }
        });

        let render_cancel: RenderButtonFn = Box::new({
            let on_cancel = on_cancel.clone();
            let on_close = on_close.clone();
            let cancel_text = self
                .button_props
                .cancel_text
                .clone()
                .unwrap_or_else(|| t!("Dialog.cancel").into());
            let cancel_variant = self.button_props.cancel_variant;
            move |_, _| {
                Button::new("cancel")
                    .label(cancel_text)
                    .with_variant(cancel_variant)
                    .outline()
                    .on_click({
                        move |event, window, cx| {
                            if !on_cancel(event, window, cx) {
                                return;
                            }

                            window.close_dialog(cx);
                            on_close(event, window, cx);
                        }
                    })
                    .into_any_element()
            }
        });

        let viewport = window.viewport_size();
        let y = self.props.margin_top.unwrap_or(viewport.height / 10.) + px(layer_ix as f32 * 16.);
        let x = viewport.width / 2. - self.props.width / 2.;

        let animation =
            Animation::new(DIALOG_ANIMATION_DURATION).with_easing(ease_out_cubic);

        let panel = v_flex()
            .id(("dialog-panel", layer_ix))
            .key_context(CONTEXT)
            .track_focus(&self.focus_handle)
            .when(self.props.keyboard, |this| {
                this.on_action({
                    let on_cancel = on_cancel.clone();
                    let on_close = on_close.clone();
                    move |_: &Cancel, window, cx| {
                        window.close_dialog(cx);
                        on_cancel(&ClickEvent::default(), window, cx);
                        on_close(&ClickEvent::default(), window, cx);
                    }
                })
                .on_action({
                    let on_ok = on_ok.clone();
                    let on_close = on_close.clone();
                    let has_footer = self.footer.is_some();
                    move |_: &Confirm, window, cx| {
                        if let Some(on_ok) = &on_ok {
                            if on_ok(&ClickEvent::default(), window, cx) {
                                window.close_dialog(cx);
                                on_close(&ClickEvent::default(), window, cx);
                            }
                        } else if has_footer {
                            window.close_dialog(cx);
                            on_close(&ClickEvent::default(), window, cx);
                        }
                    }
                })
            })
            .absolute()
            .left(x)
            .top(y)
            .w(self.props.width)
            .when_some(self.props.max_width, |this, w| this.max_w(w))
            .bg(cx.theme().card)
            .text_color(cx.theme().card_foreground)
            .border_1()
            .border_color(cx.theme().border)
            .rounded(cx.theme().radius_lg)
            .when(cx.theme().shadow, |this| this.shadow_lg())
            .p_4()
            .gap_3()
            .refine_style(&self.style)
            .when_some(self.title, |this, title| {
                this.child(div().font_semibold().pr_6().child(title))
            })
            .child(v_flex().flex_1().overflow_hidden().children(self.children))
            .when_some(self.footer, |this, footer| {
                this.child(DialogFooter::new().children(footer(render_ok, render_cancel, window, cx)))
            })
            .children(self.props.close_button.then(|| {
                let on_cancel = on_cancel.clone();
                let on_close = on_close.clone();
                let hover_color = cx.theme().foreground;
                div()
                    .id("close")
                    .absolute()
                    .top_3()
                    .right_3()
                    .cursor_pointer()
                    .text_color(cx.theme().muted_foreground)
                    .hover(move |this| this.text_color(hover_color))
                    .on_click(move |event, window, cx| {
                        cx.stop_propagation();
                        window.close_dialog(cx);
                        on_cancel(event, window, cx);
                        on_close(event, window, cx);
                    })
                    .child(Icon::new(IconName::Close).small())
            }))
            .on_any_mouse_down(|_, _, cx| {
                cx.stop_propagation();
            })
            .with_animation(("dialog-panel", layer_ix), animation.clone(), {
                move |this, delta| this.top(y * delta)
            });

        div()
            .id(("dialog", layer_ix))
            .occlude()
            .absolute()
            .inset_0()
            .when(self.props.overlay_visible, |this| {
                this.bg(if self.props.overlay {
                    cx.theme().overlay
                } else {
                    cx.theme().transparent
                })
            })
            .when(self.props.overlay && is_top_dialog, |this| {
                // Only the top dialog owns the overlay click.
                let overlay_closable = self.props.overlay_closable;
                this.on_any_mouse_down({
                    let on_cancel = on_cancel.clone();
                    let on_close = on_close.clone();
                    move |event, window, cx| {
                        cx.stop_propagation();
                        if overlay_closable && event.button == MouseButton::Left {
                            on_cancel(&ClickEvent::default(), window, cx);
                            on_close(&ClickEvent::default(), window, cx);
                            window.close_dialog(cx);
                        }
                    }
                })
            })
            .child(FocusTrapElement::new(
                ("dialog-trap", layer_ix),
                self.focus_handle.clone(),
                panel,
            ))
            .with_animation(("dialog-fade", layer_ix), animation, |this, delta| {
                this.opacity(delta)
            })
    }
}
