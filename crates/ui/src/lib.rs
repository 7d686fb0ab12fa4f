//! Atomic UI components for GPUI.
//!
//! This crate provides a small set of presentational components:
//!
//! - [`dialog::Dialog`] and [`dialog::AlertDialog`]: modal dialogs with
//!   overlay dismissal, Escape handling, focus trapping and focus return.
//! - [`button::Button`]: a pill button with visual variants.
//! - [`Divider`]: a horizontal or vertical rule.
//! - [`tab::TabBar`]: a tabbed navigation strip with keyboard navigation.
//! - [`color_wheel::ColorWheel`]: a circular hue picker.
//!
//! Call [`init`] once before using any component, and make [`Root`] the
//! first view of every window.

mod actions;
mod animation;
pub mod button;
pub mod color_wheel;
pub mod dialog;
mod divider;
mod focus_trap;
mod geometry;
mod icon;
mod root;
mod styled;
pub mod tab;
mod theme;

rust_i18n::i18n!("locales", fallback = "en");

pub use divider::*;
pub use focus_trap::FocusTrapElement;
pub use geometry::*;
pub use icon::*;
pub use root::{Root, WindowExt};
pub use styled::*;
pub use theme::*;

use gpui::App;

/// Initialize the components.
///
/// This must be called once on application startup, before any component
/// is rendered. It installs the global theme, the focus trap registry and
/// the component key bindings.
pub fn init(cx: &mut App) {
    theme::init(cx);
    focus_trap::init(cx);
    root::init(cx);
    dialog::init(cx);
    tab::init(cx);
}

/// A trait for elements that can be disabled.
pub trait Disableable {
    /// Set the disabled state of the element.
    fn disabled(self, disabled: bool) -> Self;
}

/// A trait for elements that can be selected, e.g.: Tab.
pub trait Selectable: Sized {
    /// Set the selected state of the element.
    fn selected(self, selected: bool) -> Self;
}
