use gpui::{
    App, AppContext as _, AnyView, Context, IntoElement, ParentElement as _, Render,
    SharedString, Styled as _, Window, div, px,
};
use gpui_atoms::{
    ActiveTheme as _, Icon, IconName, WindowExt as _,
    button::{Button, ButtonVariant, ButtonVariants as _},
    dialog::DialogButtonProps,
    h_flex, v_flex,
};

use crate::section;

pub struct AlertDialogStory {
    last_action: Option<SharedString>,
}

impl super::Story for AlertDialogStory {
    fn title() -> &'static str {
        "AlertDialog"
    }

    fn description() -> &'static str {
        "A modal dialog that interrupts the user with important content."
    }

    fn new_view(_: &mut Window, cx: &mut App) -> AnyView {
        cx.new(|_| Self { last_action: None }).into()
    }
}

impl AlertDialogStory {
    fn record(&mut self, action: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.last_action = Some(action.into());
        cx.notify();
    }
}

impl Render for AlertDialogStory {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(
                section("Alert", cx).child(
                    h_flex().gap_3().child(
                        Button::new("info").outline().label("Show Info Alert").on_click(
                            cx.listener(|_, _, window, cx| {
                                window.open_alert_dialog(cx, |alert, _, _| {
                                    alert.title("Account Created").description(
                                        "Your account has been created successfully!",
                                    )
                                });
                            }),
                        ),
                    ),
                ),
            )
            .child(
                section("Confirmation", cx).child(
                    h_flex().gap_3().child(
                        Button::new("confirm")
                            .danger()
                            .outline()
                            .label("Delete File")
                            .on_click(cx.listener(|_, _, window, cx| {
                                let entity = cx.entity();
                                window.open_alert_dialog(cx, move |alert, _, _| {
                                    let on_ok = entity.clone();
                                    let on_cancel = entity.clone();
                                    alert
                                        .title("Delete File")
                                        .description(
                                            "Are you sure you want to delete this file? \
                                            This action cannot be undone.",
                                        )
                                        .show_cancel(true)
                                        .overlay_closable(false)
                                        .button_props(
                                            DialogButtonProps::default()
                                                .ok_text("Delete")
                                                .ok_variant(ButtonVariant::Danger),
                                        )
                                        .on_ok(move |_, _, cx| {
                                            on_ok.update(cx, |this, cx| {
                                                this.record("deleted", cx)
                                            });
                                            true
                                        })
                                        .on_cancel(move |_, _, cx| {
                                            on_cancel.update(cx, |this, cx| {
                                                this.record("kept", cx)
                                            });
                                            true
                                        })
                                });
                            })),
                    ),
                ),
            )
            .child(
                section("With icon", cx).child(
                    h_flex().gap_3().child(
                        Button::new("icon").outline().label("Show Warning").on_click(
                            cx.listener(|_, _, window, cx| {
                                window.open_alert_dialog(cx, |alert, _, cx| {
                                    alert
                                        .icon(
                                            Icon::new(IconName::TriangleAlert)
                                                .text_color(cx.theme().danger),
                                        )
                                        .title("Error Occurred")
                                        .description(
                                            "An unexpected error has occurred. \
                                            Please try again later.",
                                        )
                                });
                            }),
                        ),
                    ),
                ),
            )
            .child(
                section("Custom dialog", cx).child(
                    h_flex().gap_3().child(
                        Button::new("custom").outline().label("Narrow Dialog (360px)").on_click(
                            cx.listener(|_, _, window, cx| {
                                window.open_dialog(cx, |dialog, _, _| {
                                    dialog
                                        .title("Keyboard Shortcuts")
                                        .width(px(360.))
                                        .child(div().text_sm().child(
                                            "Escape closes this dialog and Tab cycles \
                                            the focus inside it.",
                                        ))
                                        .confirm()
                                });
                            }),
                        ),
                    ),
                ),
            )
            .child(
                section("Result", cx).child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(match &self.last_action {
                            Some(action) => format!("Last action: {}", action),
                            None => "No action yet.".to_string(),
                        }),
                ),
            )
    }
}
