use gpui::{
    Bounds, Context, EventEmitter, FocusHandle, Hsla, IntoElement, Modifiers, Pixels, Point,
    Render, SharedString, StyleRefinement, Styled, Window, hsla,
};

use super::{
    ColorWheel, hue_from_point, normalize_degrees, pointer_on_wheel, wheel_geometry,
};
use crate::{Sizable, Size};

/// Ring thickness in pixels.
pub(crate) const WHEEL_THICKNESS: f32 = 24.0;

/// Thumb diameter in pixels.
pub(crate) const THUMB_SIZE: f32 = WHEEL_THICKNESS - 6.0;

#[derive(Clone, Debug, PartialEq)]
pub enum ColorWheelEvent {
    /// The hue changed, or a candidate was reported in controlled mode.
    Change(f32),
    /// A drag or keyboard gesture completed.
    Release(f32),
}

/// The current angle together with its ownership mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hue {
    /// The widget owns the angle.
    Uncontrolled(f32),
    /// An external owner supplies the angle; internal writes never touch
    /// it, they only produce change notifications.
    Controlled(f32),
}

impl Hue {
    /// The current angle, normalized into `[0, 360)`.
    pub fn get(&self) -> f32 {
        match self {
            Hue::Uncontrolled(hue) | Hue::Controlled(hue) => normalize_degrees(*hue),
        }
    }

    /// Accept a candidate angle.
    ///
    /// The candidate is normalized and stored when uncontrolled; the
    /// normalized value is returned for notification in both modes.
    pub fn accept(&mut self, candidate: f32) -> f32 {
        let hue = normalize_degrees(candidate);
        if let Hue::Uncontrolled(value) = self {
            *value = hue;
        }
        hue
    }

    /// Overwrite with an externally supplied value, switching to
    /// controlled mode.
    pub fn sync(&mut self, value: f32) {
        *self = Hue::Controlled(value);
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Hue::Controlled(_))
    }
}

/// The CSS-style `hsl(<hue>, 100%, 50%)` display color of an angle.
pub fn hue_color(hue: f32) -> Hsla {
    hsla(normalize_degrees(hue) / 360.0, 1.0, 0.5, 1.0)
}

/// The range-input-like surface of a wheel, enough for a readout or an
/// assistive binding without redoing any geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlMeta {
    pub min: f32,
    pub max: f32,
    /// Current angle, rounded to whole degrees.
    pub value: f32,
    /// Human readable value, e.g. `210°`.
    pub text: SharedString,
    pub disabled: bool,
}

/// Resolve a key press into a candidate angle.
///
/// Arrows step by `step` (×10 with Shift), PageUp/PageDown always step by
/// `step`×10, Home goes to 0. End goes to 359 rather than 360: a full
/// turn would normalize to 0 and be indistinguishable from Home.
pub(crate) fn hue_for_key(
    key: &str,
    modifiers: Modifiers,
    step: f32,
    current: f32,
) -> Option<f32> {
    let step = step.abs();
    let multiplier = if modifiers.shift { 10.0 } else { 1.0 };

    Some(match key {
        "right" | "up" => current + step * multiplier,
        "left" | "down" => current - step * multiplier,
        "home" => 0.0,
        "end" => 359.0,
        "pageup" => current + step * 10.0,
        "pagedown" => current - step * 10.0,
        _ => return None,
    })
}

/// Start a drag when the press landed on the wheel. Returns whether the
/// drag started.
pub(crate) fn start_drag(dragging: &mut bool, accepts_pointer: bool) -> bool {
    *dragging = accepts_pointer;
    accepts_pointer
}

/// End a drag. Returns false when no drag was active, so duplicate
/// releases are no-ops.
pub(crate) fn end_drag(dragging: &mut bool) -> bool {
    if !*dragging {
        return false;
    }
    *dragging = false;
    true
}

/// The state entity behind a [`ColorWheel`].
///
/// Each wheel instance owns its own state, there is no shared or global
/// value.
pub struct ColorWheelState {
    pub(crate) id: SharedString,
    hue: Hue,
    step: f32,
    disabled: bool,
    pub(crate) size: Size,
    pub(crate) dragging: bool,
    pub(crate) bounds: Bounds<Pixels>,
    pub(crate) style: StyleRefinement,
    pub(crate) focus_handle: FocusHandle,
}

impl ColorWheelState {
    pub fn new(id: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            hue: Hue::Uncontrolled(0.0),
            step: 1.0,
            disabled: false,
            size: Size::Medium,
            dragging: false,
            bounds: Bounds::default(),
            style: StyleRefinement::default(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Set the initial angle of an uncontrolled wheel, default: 0.
    pub fn default_value(mut self, hue: f32) -> Self {
        self.hue = Hue::Uncontrolled(normalize_degrees(hue));
        self
    }

    /// Supply the angle externally, switching the wheel to controlled
    /// mode. Use [`Self::set_value`] for the following updates.
    pub fn value(mut self, hue: f32) -> Self {
        self.hue = Hue::Controlled(hue);
        self
    }

    /// Set the keyboard step in degrees, default: 1.
    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The current angle, normalized into `[0, 360)`.
    pub fn hue(&self) -> f32 {
        self.hue.get()
    }

    pub fn is_controlled(&self) -> bool {
        self.hue.is_controlled()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The display color of the current angle.
    pub fn display_color(&self) -> Hsla {
        hue_color(self.hue())
    }

    /// The accessible surface of the control.
    pub fn control_meta(&self) -> ControlMeta {
        let value = self.hue().round();
        ControlMeta {
            min: 0.0,
            max: 360.0,
            value,
            text: format!("{}°", value as i32).into(),
            disabled: self.disabled,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) {
        if self.disabled != disabled {
            self.disabled = disabled;
            if disabled {
                self.dragging = false;
            }
            cx.notify();
        }
    }

    /// Push a new externally controlled value.
    pub fn set_value(&mut self, hue: f32, cx: &mut Context<Self>) {
        self.hue.sync(hue);
        cx.notify();
    }

    /// Accept a candidate angle from any input source.
    ///
    /// The candidate is normalized, stored when uncontrolled, and always
    /// reported as [`ColorWheelEvent::Change`], whatever the mode.
    pub fn set_hue(&mut self, candidate: f32, cx: &mut Context<Self>) {
        let hue = self.hue.accept(candidate);
        cx.emit(ColorWheelEvent::Change(hue));
        cx.notify();
    }

    pub(crate) fn accepts_pointer(&self, pointer: Point<Pixels>) -> bool {
        let Some(geometry) = wheel_geometry(self.bounds, WHEEL_THICKNESS) else {
            return false;
        };
        pointer_on_wheel(pointer, geometry, self.hue(), THUMB_SIZE)
    }

    pub(crate) fn update_from_pointer(&mut self, pointer: Point<Pixels>, cx: &mut Context<Self>) {
        let Some(geometry) = wheel_geometry(self.bounds, WHEEL_THICKNESS) else {
            return;
        };
        self.set_hue(hue_from_point(pointer, geometry.center()), cx);
    }

    pub(crate) fn drag_move(&mut self, pointer: Point<Pixels>, cx: &mut Context<Self>) {
        if !self.dragging {
            return;
        }
        self.update_from_pointer(pointer, cx);
    }

    pub(crate) fn drag_release(&mut self, cx: &mut Context<Self>) {
        if !end_drag(&mut self.dragging) {
            return;
        }
        cx.emit(ColorWheelEvent::Release(self.hue()));
        cx.notify();
    }

    pub(crate) fn handle_key(
        &mut self,
        key: &str,
        modifiers: Modifiers,
        cx: &mut Context<Self>,
    ) -> bool {
        if self.disabled {
            return false;
        }

        let Some(candidate) = hue_for_key(key, modifiers, self.step, self.hue()) else {
            return false;
        };

        self.set_hue(candidate, cx);
        cx.emit(ColorWheelEvent::Release(self.hue()));
        true
    }
}

impl Styled for ColorWheelState {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl Sizable for ColorWheelState {
    fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }
}

impl EventEmitter<ColorWheelEvent> for ColorWheelState {}

impl Render for ColorWheelState {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        ColorWheel::new(&cx.entity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_modifiers() -> Modifiers {
        Modifiers::default()
    }

    fn shift() -> Modifiers {
        Modifiers {
            shift: true,
            ..Default::default()
        }
    }

    #[test]
    fn uncontrolled_accept_stores_and_reports_the_normalized_angle() {
        let mut hue = Hue::Uncontrolled(0.0);

        assert_eq!(hue.accept(200.0), 200.0);
        assert_eq!(hue.get(), 200.0);

        assert_eq!(hue.accept(-10.0), 350.0);
        assert_eq!(hue.get(), 350.0);

        assert_eq!(hue.accept(720.0), 0.0);
        assert_eq!(hue.get(), 0.0);
    }

    #[test]
    fn controlled_accept_reports_but_never_stores() {
        let mut hue = Hue::Controlled(10.0);

        // The notification carries the normalized candidate, while the
        // externally visible value stays untouched.
        assert_eq!(hue.accept(200.0), 200.0);
        assert_eq!(hue.get(), 10.0);

        hue.sync(77.0);
        assert_eq!(hue.get(), 77.0);
        assert!(hue.is_controlled());
    }

    #[test]
    fn controlled_get_normalizes_external_values() {
        let hue = Hue::Controlled(-30.0);
        assert_eq!(hue.get(), 330.0);
    }

    #[test]
    fn arrow_keys_step_by_one_and_wrap_through_normalization() {
        assert_eq!(hue_for_key("right", no_modifiers(), 1.0, 0.0), Some(1.0));
        assert_eq!(hue_for_key("up", no_modifiers(), 1.0, 0.0), Some(1.0));
        assert_eq!(hue_for_key("left", no_modifiers(), 1.0, 0.0), Some(-1.0));
        assert_eq!(hue_for_key("down", no_modifiers(), 1.0, 0.0), Some(-1.0));

        // The candidate is normalized by the value model.
        let mut hue = Hue::Uncontrolled(0.0);
        hue.accept(hue_for_key("left", no_modifiers(), 1.0, 0.0).unwrap());
        assert_eq!(hue.get(), 359.0);
    }

    #[test]
    fn shift_multiplies_arrows_but_not_paging() {
        assert_eq!(hue_for_key("right", shift(), 1.0, 0.0), Some(10.0));
        assert_eq!(hue_for_key("down", shift(), 1.0, 100.0), Some(90.0));
        assert_eq!(hue_for_key("pageup", no_modifiers(), 1.0, 0.0), Some(10.0));
        assert_eq!(hue_for_key("pageup", shift(), 1.0, 0.0), Some(10.0));
        assert_eq!(hue_for_key("pagedown", no_modifiers(), 1.0, 0.0), Some(-10.0));
    }

    #[test]
    fn home_and_end_stay_distinguishable() {
        assert_eq!(hue_for_key("home", no_modifiers(), 1.0, 123.0), Some(0.0));
        // End lands one degree short of the full turn on purpose.
        assert_eq!(hue_for_key("end", no_modifiers(), 1.0, 123.0), Some(359.0));
    }

    #[test]
    fn unhandled_keys_produce_no_candidate() {
        assert_eq!(hue_for_key("space", no_modifiers(), 1.0, 0.0), None);
        assert_eq!(hue_for_key("escape", no_modifiers(), 1.0, 0.0), None);
    }

    #[test]
    fn drag_gate_starts_only_on_the_wheel_and_releases_once() {
        let mut dragging = false;

        assert!(!start_drag(&mut dragging, false));
        assert!(!dragging);

        assert!(start_drag(&mut dragging, true));
        assert!(dragging);

        assert!(end_drag(&mut dragging));
        assert!(!dragging);
        assert!(!end_drag(&mut dragging));
    }

    #[test]
    fn hue_color_is_full_saturation_half_lightness() {
        let color = hue_color(180.0);
        assert_eq!(color.h, 0.5);
        assert_eq!(color.s, 1.0);
        assert_eq!(color.l, 0.5);

        // Wraps like every other angle input.
        assert_eq!(hue_color(360.0).h, 0.0);
    }
}
