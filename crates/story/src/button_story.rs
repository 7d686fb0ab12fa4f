use gpui::{
    App, AppContext as _, AnyView, Context, IntoElement, ParentElement as _, Render, Styled as _,
    Window,
};
use gpui_atoms::{
    Disableable as _, IconName, Sizable as _, h_flex, v_flex,
    button::{Button, ButtonVariants as _},
};

use crate::section;

pub struct ButtonStory {
    clicks: usize,
}

impl super::Story for ButtonStory {
    fn title() -> &'static str {
        "Button"
    }

    fn description() -> &'static str {
        "A pill button with visual variants, solid or outlined."
    }

    fn new_view(_: &mut Window, cx: &mut App) -> AnyView {
        cx.new(|_| Self { clicks: 0 }).into()
    }
}

impl Render for ButtonStory {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(
                section("Solid", cx).child(
                    h_flex()
                        .gap_3()
                        .child(Button::new("primary").primary().label("Primary"))
                        .child(Button::new("secondary").label("Secondary"))
                        .child(Button::new("accent").accent().label("Accent"))
                        .child(Button::new("danger").danger().label("Danger")),
                ),
            )
            .child(
                section("Outlined", cx).child(
                    h_flex()
                        .gap_3()
                        .child(Button::new("primary-o").primary().outline().label("Primary"))
                        .child(Button::new("secondary-o").outline().label("Secondary"))
                        .child(Button::new("accent-o").accent().outline().label("Accent"))
                        .child(Button::new("danger-o").danger().outline().label("Danger")),
                ),
            )
            .child(
                section("Disabled", cx).child(
                    h_flex()
                        .gap_3()
                        .child(Button::new("disabled").accent().label("Solid").disabled(true))
                        .child(
                            Button::new("disabled-o")
                                .accent()
                                .outline()
                                .label("Outlined")
                                .disabled(true),
                        ),
                ),
            )
            .child(
                section("Icon and sizes", cx).child(
                    h_flex()
                        .gap_3()
                        .child(Button::new("icon").accent().icon(IconName::Plus))
                        .child(Button::new("icon-sm").icon(IconName::Settings).small())
                        .child(
                            Button::new("with-icon")
                                .accent()
                                .icon(IconName::Check)
                                .label("Confirm"),
                        )
                        .child(Button::new("large").primary().label("Large").large())
                        .child(Button::new("small").primary().outline().label("Small").small()),
                ),
            )
            .child(
                section("Click handling", cx).child(
                    h_flex().gap_3().child(
                        Button::new("counter")
                            .accent()
                            .label(format!("Clicked {} times", self.clicks))
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.clicks += 1;
                                cx.notify();
                            })),
                    ),
                ),
            )
    }
}
