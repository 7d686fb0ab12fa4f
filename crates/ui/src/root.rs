use crate::{
    ActiveTheme, StyledExt,
    dialog::{AlertDialog, Dialog},
    focus_trap::FocusTrapRegistry,
};
use gpui::{
    AnyView, App, Context, FocusHandle, InteractiveElement, IntoElement, KeyBinding,
    ParentElement as _, Render, StyleRefinement, Styled, Window, actions, div,
};
use std::rc::Rc;

actions!(root, [CycleFocus, CycleFocusPrev]);

const CONTEXT: &str = "Root";

pub(crate) fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("tab", CycleFocus, Some(CONTEXT)),
        KeyBinding::new("shift-tab", CycleFocusPrev, Some(CONTEXT)),
    ]);
}

/// Extension trait for [`Window`] to manage the dialog layer.
pub trait WindowExt: Sized {
    /// Opens a [`Dialog`] on top of the dialog stack.
    fn open_dialog<F>(&mut self, cx: &mut App, build: F)
    where
        F: Fn(Dialog, &mut Window, &mut App) -> Dialog + 'static;

    /// Opens an [`AlertDialog`] on top of the dialog stack.
    fn open_alert_dialog<F>(&mut self, cx: &mut App, build: F)
    where
        F: Fn(AlertDialog, &mut Window, &mut App) -> AlertDialog + 'static;

    /// Return true, if there is an active dialog.
    fn has_active_dialog(&mut self, cx: &mut App) -> bool;

    /// Closes the last active dialog.
    fn close_dialog(&mut self, cx: &mut App);

    /// Closes all active dialogs.
    fn close_all_dialogs(&mut self, cx: &mut App);
}

impl WindowExt for Window {
    fn open_dialog<F>(&mut self, cx: &mut App, build: F)
    where
        F: Fn(Dialog, &mut Window, &mut App) -> Dialog + 'static,
    {
        Root::update(self, cx, move |root, window, cx| {
            // The focus handle is only captured when the stack was empty,
            // it is the handle to restore once every dialog is closed.
            if root.active_dialogs.is_empty() {
                root.previous_focus_handle = window.focused(cx);
            }

            let focus_handle = cx.focus_handle();
            window.focus(&focus_handle);

            tracing::debug!(layer = root.active_dialogs.len(), "open dialog");
            root.active_dialogs.push(ActiveDialog {
                focus_handle,
                builder: Rc::new(build),
            });
            cx.notify();
        })
    }

    fn open_alert_dialog<F>(&mut self, cx: &mut App, build: F)
    where
        F: Fn(AlertDialog, &mut Window, &mut App) -> AlertDialog + 'static,
    {
        let build = Rc::new(build);
        self.open_dialog(cx, move |dialog, window, cx| {
            let alert = build(AlertDialog::with_base(dialog), window, cx);
            alert.into_dialog(window, cx)
        })
    }

    fn has_active_dialog(&mut self, cx: &mut App) -> bool {
        !Root::read(self, cx).active_dialogs.is_empty()
    }

    fn close_dialog(&mut self, cx: &mut App) {
        Root::update(self, cx, move |root, window, cx| {
            root.active_dialogs.pop();
            tracing::debug!(layers = root.active_dialogs.len(), "close dialog");

            if let Some(top_dialog) = root.active_dialogs.last() {
                // Hand focus to the next dialog on the stack.
                window.focus(&top_dialog.focus_handle);
            } else {
                root.focus_back(window, cx);
            }
            cx.notify();
        })
    }

    fn close_all_dialogs(&mut self, cx: &mut App) {
        Root::update(self, cx, |root, window, cx| {
            root.active_dialogs.clear();
            root.focus_back(window, cx);
            cx.notify();
        })
    }
}

/// Root is the top level view of a window, it must be the first view in
/// the window.
///
/// It renders the application view and manages the dialog layer: the
/// dialog stack, and the focus handle to restore when the last dialog
/// closes. Focus restoration runs on every dialog exit path, the close
/// button, the overlay click, the Escape key and programmatic closing all
/// funnel through [`WindowExt::close_dialog`].
pub struct Root {
    style: StyleRefinement,
    /// Focus holder before the first dialog opened.
    previous_focus_handle: Option<FocusHandle>,
    pub(crate) active_dialogs: Vec<ActiveDialog>,
    view: AnyView,
}

#[derive(Clone)]
pub(crate) struct ActiveDialog {
    pub(crate) focus_handle: FocusHandle,
    builder: Rc<dyn Fn(Dialog, &mut Window, &mut App) -> Dialog + 'static>,
}

impl Root {
    pub fn new(view: impl Into<AnyView>, _: &mut Window, _: &mut Context<Self>) -> Self {
        Self {
            style: StyleRefinement::default(),
            previous_focus_handle: None,
            active_dialogs: Vec::new(),
            view: view.into(),
        }
    }

    pub fn update<F, R>(window: &mut Window, cx: &mut App, f: F) -> R
    where
        F: FnOnce(&mut Self, &mut Window, &mut Context<Self>) -> R,
    {
        let root = window
            .root::<Root>()
            .flatten()
            .expect("the window root view should be a gpui_atoms::Root");

        root.update(cx, |root, cx| f(root, window, cx))
    }

    pub fn read<'a>(window: &'a Window, cx: &'a App) -> &'a Self {
        window
            .root::<Root>()
            .flatten()
            .expect("the window root view should be a gpui_atoms::Root")
            .read(cx)
    }

    /// Return the application view of the Root.
    pub fn view(&self) -> &AnyView {
        &self.view
    }

    fn focus_back(&mut self, window: &mut Window, _: &mut App) {
        if let Some(handle) = self.previous_focus_handle.take() {
            window.focus(&handle);
        }
    }

    fn render_dialog_layer(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Option<impl IntoElement + use<>> {
        if self.active_dialogs.is_empty() {
            return None;
        }

        let active_dialogs = self.active_dialogs.clone();
        let mut show_overlay_ix = None;

        let mut dialogs = active_dialogs
            .iter()
            .enumerate()
            .map(|(ix, active_dialog)| {
                let mut dialog = Dialog::new(cx);
                dialog = (active_dialog.builder)(dialog, window, cx);

                // The dialog built above is a temporary value, its focus
                // handle lives in the `ActiveDialog` owned by the Root.
                dialog.focus_handle = active_dialog.focus_handle.clone();
                dialog.layer_ix = ix;

                if dialog.has_overlay() {
                    show_overlay_ix = Some(ix);
                }
                dialog
            })
            .collect::<Vec<_>>();

        if let Some(ix) = show_overlay_ix {
            if let Some(dialog) = dialogs.get_mut(ix) {
                dialog.props.overlay_visible = true;
            }
        }

        Some(div().children(dialogs))
    }

    fn on_cycle_focus(&mut self, _: &CycleFocus, window: &mut Window, cx: &mut Context<Self>) {
        let trap = FocusTrapRegistry::find_active_trap(window, cx);
        window.focus_next();
        Self::keep_focus_in_trap(trap, window, cx);
    }

    fn on_cycle_focus_prev(
        &mut self,
        _: &CycleFocusPrev,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let trap = FocusTrapRegistry::find_active_trap(window, cx);
        window.focus_prev();
        Self::keep_focus_in_trap(trap, window, cx);
    }

    /// If focus cycling escaped the active trap container, pull it back
    /// to the container so the next cycle starts at its first child.
    fn keep_focus_in_trap(trap: Option<FocusHandle>, window: &mut Window, cx: &mut App) {
        if let Some(trap) = trap {
            if !trap.contains_focused(window, cx) {
                window.focus(&trap);
            }
        }
    }
}

impl Render for Root {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        window.set_rem_size(cx.theme().font_size);

        div()
            .id("root")
            .key_context(CONTEXT)
            .on_action(cx.listener(Self::on_cycle_focus))
            .on_action(cx.listener(Self::on_cycle_focus_prev))
            .font_family(cx.theme().font_family.clone())
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .refine_style(&self.style)
            .relative()
            .size_full()
            .child(self.view.clone())
            .children(self.render_dialog_layer(window, cx))
    }
}
