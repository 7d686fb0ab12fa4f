use gpui::{
    App, AppContext as _, AnyView, Context, Entity, IntoElement, ParentElement as _, Render,
    Styled as _, Window, div, px,
};
use gpui_atoms::{
    ActiveTheme as _, Sizable as _,
    button::{Button, ButtonVariants as _},
    color_wheel::{ColorWheelEvent, ColorWheelState},
    h_flex, v_flex,
};

use crate::section;

pub struct ColorWheelStory {
    wheel: Entity<ColorWheelState>,
    controlled: Entity<ColorWheelState>,
    controlled_hue: f32,
    disabled_wheel: Entity<ColorWheelState>,
    compact: Entity<ColorWheelState>,
    last_change: Option<f32>,
}

impl super::Story for ColorWheelStory {
    fn title() -> &'static str {
        "ColorWheel"
    }

    fn description() -> &'static str {
        "A circular hue picker, drag the ring or use the arrow keys."
    }

    fn new_view(_: &mut Window, cx: &mut App) -> AnyView {
        cx.new(|cx| Self::new(cx)).into()
    }
}

impl ColorWheelStory {
    fn new(cx: &mut Context<Self>) -> Self {
        let wheel = cx.new(|cx| ColorWheelState::new("hue-wheel", cx).default_value(200.));
        cx.subscribe(&wheel, |this, _, event: &ColorWheelEvent, cx| {
            if let ColorWheelEvent::Change(hue) = event {
                this.last_change = Some(*hue);
                cx.notify();
            }
        })
        .detach();

        // The story owns the controlled value: every candidate the wheel
        // reports is pushed back in through `set_value`.
        let controlled =
            cx.new(|cx| ColorWheelState::new("controlled-wheel", cx).value(120.).small());
        cx.subscribe(
            &controlled,
            |this, state, event: &ColorWheelEvent, cx| {
                if let ColorWheelEvent::Change(hue) = event {
                    let hue = *hue;
                    this.controlled_hue = hue;
                    state.update(cx, |state, cx| state.set_value(hue, cx));
                    cx.notify();
                }
            },
        )
        .detach();

        let disabled_wheel = cx.new(|cx| {
            ColorWheelState::new("disabled-wheel", cx)
                .default_value(300.)
                .small()
                .disabled(true)
        });

        let compact = cx.new(|cx| {
            ColorWheelState::new("compact-wheel", cx)
                .default_value(40.)
                .step(5.)
                .xsmall()
        });

        Self {
            wheel,
            controlled,
            controlled_hue: 120.,
            disabled_wheel,
            compact,
            last_change: None,
        }
    }

    fn set_controlled(&mut self, hue: f32, cx: &mut Context<Self>) {
        self.controlled_hue = hue;
        self.controlled
            .update(cx, |state, cx| state.set_value(hue, cx));
        cx.notify();
    }

    fn readout(&self, state: &Entity<ColorWheelState>, cx: &App) -> impl IntoElement + use<> {
        let state = state.read(cx);
        let meta = state.control_meta();

        h_flex()
            .gap_2()
            .child(
                div()
                    .size(px(16.))
                    .rounded_full()
                    .bg(state.display_color()),
            )
            .child(div().text_sm().child(meta.text))
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(if state.is_dragging() {
                        "dragging"
                    } else if meta.disabled {
                        "disabled"
                    } else {
                        "idle"
                    }),
            )
    }
}

impl Render for ColorWheelStory {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(
                section("Uncontrolled", cx)
                    .child(self.wheel.clone())
                    .child(self.readout(&self.wheel, cx))
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(match self.last_change {
                                Some(hue) => format!("Last change: {:.0}°", hue),
                                None => "No change yet.".to_string(),
                            }),
                    ),
            )
            .child(
                section("Controlled", cx)
                    .child(self.controlled.clone())
                    .child(self.readout(&self.controlled, cx))
                    .child(
                        h_flex()
                            .gap_3()
                            .child(Button::new("set-10").outline().small().label("Set 10°").on_click(
                                cx.listener(|this, _, _, cx| this.set_controlled(10., cx)),
                            ))
                            .child(Button::new("set-77").outline().small().label("Set 77°").on_click(
                                cx.listener(|this, _, _, cx| this.set_controlled(77., cx)),
                            )),
                    ),
            )
            .child(
                section("Disabled", cx)
                    .child(self.disabled_wheel.clone())
                    .child(self.readout(&self.disabled_wheel, cx)),
            )
            .child(
                section("Compact, step 5°", cx)
                    .child(self.compact.clone())
                    .child(self.readout(&self.compact, cx)),
            )
    }
}
