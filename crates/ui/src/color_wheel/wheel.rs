use gpui::{
    App, Bounds, Entity, InteractiveElement, IntoElement, MouseButton, MouseDownEvent,
    MouseMoveEvent, MouseUpEvent, ParentElement as _, PathBuilder, Pixels, RenderOnce,
    StatefulInteractiveElement as _, Styled, Window, canvas, div, point, prelude::FluentBuilder as _,
    px, size,
};

use super::{
    ColorWheelState, THUMB_SIZE, WHEEL_THICKNESS, hue_color, point_from_hue, start_drag,
    thumb_top_left, wheel_geometry,
};
use crate::{ActiveTheme as _, Colorize as _, PixelsExt as _, Size, StyledExt as _};

/// Diameter of the wheel for a [`Size`].
fn side_px(size: Size) -> f32 {
    match size {
        Size::XSmall => 140.0,
        Size::Small => 180.0,
        Size::Medium => 220.0,
        Size::Large => 280.0,
        Size::Size(px) => px.as_f32(),
    }
}

/// Paint the hue ring as one wedge per degree.
///
/// Adjacent wedges overlap slightly so the ring tiles without seams.
fn paint_hue_ring(bounds: Bounds<Pixels>, window: &mut Window) {
    let Some(geometry) = wheel_geometry(bounds, WHEEL_THICKNESS) else {
        return;
    };

    const SEGMENTS: usize = 360;
    let step = 360.0 / SEGMENTS as f32;
    let overlap = step * 0.35;
    let center = geometry.center();

    for i in 0..SEGMENTS {
        let start = i as f32 * step - overlap;
        let end = (i + 1) as f32 * step + overlap;
        let color = hue_color((i as f32 + 0.5) * step);

        let (x0, y0) = point_from_hue(start, center, geometry.outer_radius);
        let (x1, y1) = point_from_hue(end, center, geometry.outer_radius);
        let (x2, y2) = point_from_hue(end, center, geometry.inner_radius);
        let (x3, y3) = point_from_hue(start, center, geometry.inner_radius);

        let mut builder = PathBuilder::fill();
        builder.move_to(point(px(x0), px(y0)));
        builder.line_to(point(px(x1), px(y1)));
        builder.line_to(point(px(x2), px(y2)));
        builder.line_to(point(px(x3), px(y3)));
        builder.close();

        if let Ok(path) = builder.build() {
            window.paint_path(path, color);
        }
    }
}

/// The circular hue picker element.
///
/// The element is a thin wrapper around an [`Entity<ColorWheelState>`],
/// which owns the angle and the interaction state:
///
/// ```ignore
/// let state = cx.new(|cx| ColorWheelState::new("hue", cx).default_value(120.));
/// // ... in render:
/// ColorWheel::new(&state)
/// ```
#[derive(IntoElement)]
pub struct ColorWheel {
    state: Entity<ColorWheelState>,
}

#[derive(Clone, Copy)]
struct WheelLayout {
    side: f32,
    thumb_size: f32,
    thumb_left: f32,
    thumb_top: f32,
    /// False until the widget has a measured, non-degenerate size; only
    /// the placeholder shell is rendered then.
    ready: bool,
}

impl ColorWheel {
    pub fn new(state: &Entity<ColorWheelState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    fn compute_layout(state: &ColorWheelState, active: bool) -> WheelLayout {
        let side = side_px(state.size);
        // Grow the thumb a little while it is engaged.
        let thumb_size = if active { THUMB_SIZE * 1.25 } else { THUMB_SIZE };

        let current_size = if state.bounds.size.width > px(0.) {
            state.bounds.size
        } else {
            size(px(side), px(side))
        };
        let local_bounds = Bounds {
            origin: point(px(0.), px(0.)),
            size: current_size,
        };

        match wheel_geometry(local_bounds, WHEEL_THICKNESS) {
            Some(geometry) => {
                let (thumb_left, thumb_top) = thumb_top_left(geometry, state.hue(), thumb_size);
                WheelLayout {
                    side,
                    thumb_size,
                    thumb_left,
                    thumb_top,
                    ready: true,
                }
            }
            None => WheelLayout {
                side,
                thumb_size,
                thumb_left: 0.,
                thumb_top: 0.,
                ready: false,
            },
        }
    }

    fn key_handler(
        state: Entity<ColorWheelState>,
    ) -> impl Fn(&gpui::KeyDownEvent, &mut Window, &mut App) + 'static {
        move |event, _, cx| {
            state.update(cx, |state, cx| {
                if state.handle_key(
                    event.keystroke.key.as_str(),
                    event.keystroke.modifiers,
                    cx,
                ) {
                    cx.stop_propagation();
                }
            });
        }
    }

    /// The bounds capture and the window level drag listeners.
    ///
    /// The listeners are registered during paint and live for one frame,
    /// so dropping the state entity (unmount) leaves nothing behind, and
    /// a drag keeps tracking the pointer after it leaves the widget
    /// bounds.
    fn interaction_surface(state: Entity<ColorWheelState>) -> impl IntoElement {
        canvas(
            {
                let state = state.clone();
                move |bounds, _, cx| {
                    state.update(cx, |state, _| state.bounds = bounds);
                }
            },
            move |_, _, window, cx| {
                if !state.read(cx).dragging {
                    return;
                }

                window.on_mouse_event({
                    let state = state.clone();
                    move |event: &MouseMoveEvent, phase, _, cx| {
                        if !phase.bubble() {
                            return;
                        }
                        state.update(cx, |state, cx| state.drag_move(event.position, cx));
                    }
                });

                // End the drag wherever the pointer is released, even
                // outside the widget.
                window.on_mouse_event({
                    let state = state.clone();
                    move |event: &MouseUpEvent, phase, _, cx| {
                        if !phase.bubble() {
                            return;
                        }
                        if event.button != MouseButton::Left {
                            return;
                        }
                        state.update(cx, |state, cx| state.drag_release(cx));
                    }
                });
            },
        )
        .absolute()
        .inset_0()
    }
}

impl RenderOnce for ColorWheel {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state_entity = self.state.clone();
        let state = state_entity.read(cx);

        let id = state.id.clone();
        let style = state.style.clone();
        let disabled = state.is_disabled();
        let dragging = state.is_dragging();
        let focused = state.focus_handle.is_focused(window);
        let layout = Self::compute_layout(state, focused || dragging);
        let thumb_color = state.display_color();

        div()
            .id(id)
            .size(px(layout.side))
            .relative()
            .rounded_full()
            .refine_style(&style)
            .track_focus(&state_entity.read(cx).focus_handle)
            .on_key_down(Self::key_handler(state_entity.clone()))
            .when(layout.ready, |this| {
                this.child(
                    div()
                        .absolute()
                        .inset_0()
                        .rounded_full()
                        .overflow_hidden()
                        .child(
                            canvas(|bounds, _, _| bounds, |bounds, _, window, _| {
                                paint_hue_ring(bounds, window)
                            })
                            .absolute()
                            .inset_0(),
                        ),
                )
            })
            // The hole that turns the disc into a ring.
            .child(
                div()
                    .absolute()
                    .inset(px(WHEEL_THICKNESS))
                    .rounded_full()
                    .bg(cx.theme().background),
            )
            .when(focused && !disabled, |this| {
                this.child(
                    div()
                        .absolute()
                        .inset(px(-3.))
                        .rounded_full()
                        .border_2()
                        .border_color(cx.theme().ring),
                )
            })
            .when(layout.ready && !disabled, |this| {
                this.child(
                    div()
                        .absolute()
                        .left(px(layout.thumb_left))
                        .top(px(layout.thumb_top))
                        .size(px(layout.thumb_size))
                        .rounded_full()
                        .bg(thumb_color)
                        .border_2()
                        .border_color(gpui::white())
                        .when(cx.theme().shadow, |this| this.shadow_md()),
                )
            })
            .when(disabled, |this| {
                this.child(
                    div()
                        .absolute()
                        .inset_0()
                        .rounded_full()
                        .bg(cx.theme().background.opacity(0.5))
                        .child(
                            div()
                                .absolute()
                                .inset(px(WHEEL_THICKNESS))
                                .rounded_full()
                                .bg(cx.theme().background),
                        ),
                )
            })
            .when(!disabled, |this| {
                this.cursor_pointer()
                    .child(Self::interaction_surface(state_entity.clone()))
                    .on_mouse_down(
                        MouseButton::Left,
                        window.listener_for(
                            &state_entity,
                            |state: &mut ColorWheelState,
                             event: &MouseDownEvent,
                             window: &mut Window,
                             cx: &mut gpui::Context<ColorWheelState>| {
                                let accepts = state.accepts_pointer(event.position);
                                if !start_drag(&mut state.dragging, accepts) {
                                    return;
                                }
                                window.focus(&state.focus_handle);
                                cx.stop_propagation();
                                state.update_from_pointer(event.position, cx);
                            },
                        ),
                    )
            })
    }
}
