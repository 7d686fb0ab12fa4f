use gpui::{Axis, Pixels};

/// A trait to extend the [`Axis`] enum with utility methods.
pub trait AxisExt {
    fn is_horizontal(self) -> bool;
    fn is_vertical(self) -> bool;
}

impl AxisExt for Axis {
    #[inline]
    fn is_horizontal(self) -> bool {
        self == Axis::Horizontal
    }

    #[inline]
    fn is_vertical(self) -> bool {
        self == Axis::Vertical
    }
}

/// A trait for converting [`Pixels`] to `f32` and `f64`.
pub trait PixelsExt {
    fn as_f32(&self) -> f32;
    fn as_f64(self) -> f64;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::px;

    #[test]
    fn axis_ext() {
        assert!(Axis::Horizontal.is_horizontal());
        assert!(!Axis::Horizontal.is_vertical());
        assert!(Axis::Vertical.is_vertical());
    }

    #[test]
    fn pixels_ext() {
        assert_eq!(px(12.5).as_f32(), 12.5);
        assert_eq!(px(12.5).as_f64(), 12.5);
    }
}
