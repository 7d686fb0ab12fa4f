use gpui::{
    AnyElement, App, ClickEvent, IntoElement, ParentElement, Pixels, RenderOnce, StyleRefinement,
    Styled, Window, prelude::FluentBuilder as _,
};

use crate::{
    Divider,
    dialog::{Dialog, DialogButtonProps, DialogDescription, DialogHeader, DialogTitle},
};

/// AlertDialog is a modal dialog that interrupts the user with important
/// content and expects a response.
///
/// It is built on top of the [`Dialog`] component with opinionated
/// defaults:
///
/// - A title line separated from the body by a divider.
/// - No close icon, the footer buttons are the only explicit exits.
/// - An OK button, and optionally a Cancel button (`show_cancel`).
///
/// Open one with [`crate::WindowExt::open_alert_dialog`]:
///
/// ```ignore
/// window.open_alert_dialog(cx, |alert, _, _| {
///     alert
///         .title("Unsaved Changes")
///         .description("You have unsaved changes. Are you sure you want to leave?")
///         .show_cancel(true)
/// });
/// ```
#[derive(IntoElement)]
pub struct AlertDialog {
    base: Dialog,
    icon: Option<AnyElement>,
    title: Option<AnyElement>,
    description: Option<AnyElement>,
    button_props: DialogButtonProps,
    children: Vec<AnyElement>,
}

impl AlertDialog {
    /// Create a new AlertDialog.
    pub fn new(cx: &mut App) -> Self {
        Self::with_base(Dialog::new(cx))
    }

    pub(crate) fn with_base(base: Dialog) -> Self {
        Self {
            base: base.width(gpui::px(420.)).close_button(false),
            icon: None,
            title: None,
            description: None,
            button_props: DialogButtonProps::default(),
            children: Vec::new(),
        }
    }

    /// Sets the icon shown before the title, default is None.
    pub fn icon(mut self, icon: impl IntoElement) -> Self {
        self.icon = Some(icon.into_any_element());
        self
    }

    /// Sets the title of the alert dialog.
    pub fn title(mut self, title: impl IntoElement) -> Self {
        self.title = Some(title.into_any_element());
        self
    }

    /// Sets the description of the alert dialog.
    pub fn description(mut self, description: impl IntoElement) -> Self {
        self.description = Some(description.into_any_element());
        self
    }

    /// Set the button props of the alert dialog.
    pub fn button_props(mut self, button_props: DialogButtonProps) -> Self {
        self.button_props = button_props;
        self
    }

    /// Sets the width of the alert dialog, defaults to 420px.
    pub fn width(mut self, width: impl Into<Pixels>) -> Self {
        self.base = self.base.width(width);
        self
    }

    /// Show the Cancel button. Default is false.
    pub fn show_cancel(mut self, show_cancel: bool) -> Self {
        self.button_props = self.button_props.show_cancel(show_cancel);
        self
    }

    /// When true a click on the overlay cancels the dialog, defaults to
    /// `true`.
    pub fn overlay_closable(mut self, overlay_closable: bool) -> Self {
        self.base = self.base.overlay_closable(overlay_closable);
        self
    }

    /// Set whether Escape cancels the dialog, defaults to `true`.
    pub fn keyboard(mut self, keyboard: bool) -> Self {
        self.base = self.base.keyboard(keyboard);
        self
    }

    /// Sets the callback for when the alert dialog is closed.
    ///
    /// Called after the [`Self::on_ok`] or [`Self::on_cancel`] callback.
    pub fn on_close(
        mut self,
        on_close: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.base = self.base.on_close(on_close);
        self
    }

    /// Sets the callback for when the OK button is clicked.
    ///
    /// Return `true` to close the dialog, `false` keeps it open.
    pub fn on_ok(
        mut self,
        on_ok: impl Fn(&ClickEvent, &mut Window, &mut App) -> bool + 'static,
    ) -> Self {
        self.base = self.base.on_ok(on_ok);
        self
    }

    /// Sets the callback for when the alert dialog has been canceled.
    ///
    /// Return `true` to close the dialog, `false` keeps it open.
    pub fn on_cancel(
        mut self,
        on_cancel: impl Fn(&ClickEvent, &mut Window, &mut App) -> bool + 'static,
    ) -> Self {
        self.base = self.base.on_cancel(on_cancel);
        self
    }

    /// Convert the AlertDialog into a configured [`Dialog`].
    pub(crate) fn into_dialog(self, _: &mut Window, _: &mut App) -> Dialog {
        let show_cancel = self.button_props.show_cancel;

        self.base
            .button_props(self.button_props)
            .child(
                DialogHeader::new()
                    .child(
                        DialogTitle::new()
                            .when_some(self.icon, |this, icon| this.child(icon))
                            .when_some(self.title, |this, title| this.child(title)),
                    )
                    .child(Divider::horizontal()),
            )
            .when_some(self.description, |this, description| {
                this.child(DialogDescription::new().child(description))
            })
            .children(self.children)
            .map(|this| {
                if show_cancel {
                    this.footer(|ok, cancel, window, cx| {
                        vec![cancel(window, cx), ok(window, cx)]
                    })
                } else {
                    this.footer(|ok, _, window, cx| vec![ok(window, cx)])
                }
            })
    }
}

impl Styled for AlertDialog {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.base.style
    }
}

impl ParentElement for AlertDialog {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for AlertDialog {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        self.into_dialog(window, cx)
    }
}
