//! A circular hue picker.
//!
//! The wheel maps an angle in degrees onto a circular track and back from
//! pointer or keyboard input. The angle is owned by a
//! [`ColorWheelState`] entity, which is either uncontrolled (the widget
//! stores the value) or controlled (an external owner supplies every
//! value and the widget only reports candidates).

mod geometry;
mod state;
mod wheel;

pub use geometry::*;
pub use state::*;
pub use wheel::*;
