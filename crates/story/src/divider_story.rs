use gpui::{
    App, AppContext as _, AnyView, Context, IntoElement, ParentElement as _, Render, Styled as _,
    Window, div, px,
};
use gpui_atoms::{Divider, Sizable as _, h_flex, v_flex};

use crate::section;

pub struct DividerStory;

impl super::Story for DividerStory {
    fn title() -> &'static str {
        "Divider"
    }

    fn description() -> &'static str {
        "A horizontal or vertical rule in three thicknesses."
    }

    fn new_view(_: &mut Window, cx: &mut App) -> AnyView {
        cx.new(|_| Self).into()
    }
}

impl Render for DividerStory {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(
                section("Horizontal", cx).child(
                    v_flex()
                        .child(div().text_sm().child("Small"))
                        .child(Divider::horizontal())
                        .child(div().text_sm().child("Medium"))
                        .child(Divider::horizontal().medium())
                        .child(div().text_sm().child("Large"))
                        .child(Divider::horizontal().large()),
                ),
            )
            .child(
                section("Vertical", cx).child(
                    h_flex()
                        .h(px(40.))
                        .child(div().text_sm().child("Left"))
                        .child(Divider::vertical())
                        .child(div().text_sm().child("Middle"))
                        .child(Divider::vertical().medium())
                        .child(div().text_sm().child("Right")),
                ),
            )
    }
}
