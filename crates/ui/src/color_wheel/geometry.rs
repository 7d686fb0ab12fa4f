use crate::PixelsExt as _;
use gpui::{Bounds, Pixels, Point, px};

/// Normalize an angle in degrees into `[0, 360)`.
///
/// Negative and overflowing inputs wrap, `normalize_degrees(360.) == 0.`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// The measured circle of a wheel: derived from the widget bounds on
/// every layout, never cached across size changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// The centerline of the ring, where the thumb rides.
    pub track_radius: f32,
}

impl WheelGeometry {
    pub fn center(&self) -> (f32, f32) {
        (self.center_x, self.center_y)
    }
}

/// Derive the wheel geometry from measured bounds.
///
/// Returns `None` until the widget has a real on-screen size.
pub fn wheel_geometry(bounds: Bounds<Pixels>, ring_thickness: f32) -> Option<WheelGeometry> {
    if bounds.size.width <= px(0.) || bounds.size.height <= px(0.) {
        return None;
    }

    let width = bounds.size.width.as_f32();
    let height = bounds.size.height.as_f32();
    let center_x = bounds.origin.x.as_f32() + width / 2.0;
    let center_y = bounds.origin.y.as_f32() + height / 2.0;
    let outer_radius = width.min(height) / 2.0;
    let inner_radius = (outer_radius - ring_thickness).max(0.0);
    let track_radius = (outer_radius - ring_thickness / 2.0).max(0.0);

    Some(WheelGeometry {
        center_x,
        center_y,
        outer_radius,
        inner_radius,
        track_radius,
    })
}

/// The hue angle under a pointer position.
///
/// Zero is at 12 o'clock and the angle grows clockwise, so the argument
/// order is swapped and negated relative to the usual `atan2(dy, dx)`.
pub fn hue_from_point(pointer: Point<Pixels>, center: (f32, f32)) -> f32 {
    let dx = pointer.x.as_f32() - center.0;
    let dy = pointer.y.as_f32() - center.1;
    normalize_degrees(dx.atan2(-dy).to_degrees())
}

/// The point on the circle of `radius` around `center` at the hue angle,
/// using the same clockwise-from-up convention as [`hue_from_point`].
pub fn point_from_hue(hue: f32, center: (f32, f32), radius: f32) -> (f32, f32) {
    let theta = hue.to_radians();
    (
        center.0 + radius * theta.sin(),
        center.1 - radius * theta.cos(),
    )
}

/// Top-left corner of a square thumb of `thumb_size` centered on the
/// track at the hue angle.
pub fn thumb_top_left(geometry: WheelGeometry, hue: f32, thumb_size: f32) -> (f32, f32) {
    let (x, y) = point_from_hue(hue, geometry.center(), geometry.track_radius);
    let half = thumb_size / 2.0;
    (x - half, y - half)
}

fn pointer_in_thumb_box(
    pointer: Point<Pixels>,
    geometry: WheelGeometry,
    hue: f32,
    thumb_size: f32,
) -> bool {
    let (thumb_x, thumb_y) = point_from_hue(hue, geometry.center(), geometry.track_radius);
    let half = thumb_size / 2.0;
    let x = pointer.x.as_f32();
    let y = pointer.y.as_f32();
    x >= thumb_x - half && x <= thumb_x + half && y >= thumb_y - half && y <= thumb_y + half
}

/// Whether a pointer press should start an interaction: on the ring
/// annulus, or on the thumb box which may stick out of it.
pub fn pointer_on_wheel(
    pointer: Point<Pixels>,
    geometry: WheelGeometry,
    hue: f32,
    thumb_size: f32,
) -> bool {
    let dx = pointer.x.as_f32() - geometry.center_x;
    let dy = pointer.y.as_f32() - geometry.center_y;
    let radius = (dx * dx + dy * dy).sqrt();
    let on_ring = radius >= geometry.inner_radius && radius <= geometry.outer_radius;
    on_ring || pointer_in_thumb_box(pointer, geometry, hue, thumb_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, size};

    fn approx_eq(a: f32, b: f32) {
        assert!(
            (a - b).abs() < 1e-3,
            "expected {a} ~= {b}, delta={}",
            (a - b).abs()
        );
    }

    fn bounds_100() -> Bounds<Pixels> {
        Bounds {
            origin: point(px(0.), px(0.)),
            size: size(px(100.), px(100.)),
        }
    }

    #[test]
    fn normalize_degrees_wraps_into_the_half_open_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(365.0), 5.0);
    }

    #[test]
    fn normalize_degrees_is_idempotent() {
        for x in [-1234.5, -360.0, -0.25, 0.0, 17.3, 359.9, 360.0, 1080.1] {
            let once = normalize_degrees(x);
            assert!((0.0..360.0).contains(&once));
            assert_eq!(normalize_degrees(once), once);
        }
    }

    #[test]
    fn wheel_geometry_requires_a_measured_size() {
        assert!(wheel_geometry(Bounds::default(), 24.0).is_none());

        let geometry = wheel_geometry(bounds_100(), 24.0).unwrap();
        approx_eq(geometry.center_x, 50.0);
        approx_eq(geometry.center_y, 50.0);
        approx_eq(geometry.outer_radius, 50.0);
        approx_eq(geometry.inner_radius, 26.0);
        approx_eq(geometry.track_radius, 38.0);
        assert!(geometry.outer_radius >= geometry.inner_radius);
    }

    #[test]
    fn wheel_geometry_clamps_an_oversized_ring() {
        let geometry = wheel_geometry(bounds_100(), 80.0).unwrap();
        assert_eq!(geometry.inner_radius, 0.0);
        approx_eq(geometry.track_radius, 10.0);
    }

    #[test]
    fn hue_from_point_maps_cardinal_directions_clockwise_from_up() {
        let center = (50.0, 50.0);
        approx_eq(hue_from_point(point(px(50.), px(0.)), center), 0.0);
        approx_eq(hue_from_point(point(px(100.), px(50.)), center), 90.0);
        approx_eq(hue_from_point(point(px(50.), px(100.)), center), 180.0);
        approx_eq(hue_from_point(point(px(0.), px(50.)), center), 270.0);
    }

    #[test]
    fn point_from_hue_inverts_hue_from_point() {
        let center = (120.0, 80.0);
        for hue in [0.0, 1.0, 45.0, 90.0, 179.5, 180.0, 270.0, 359.0] {
            let (x, y) = point_from_hue(hue, center, 42.0);
            approx_eq(hue_from_point(point(px(x), px(y)), center), hue);
        }
    }

    #[test]
    fn thumb_rides_the_track_centerline() {
        let geometry = wheel_geometry(bounds_100(), 24.0).unwrap();

        let (x, y) = thumb_top_left(geometry, 90.0, 18.0);
        approx_eq(x, 50.0 + geometry.track_radius - 9.0);
        approx_eq(y, 50.0 - 9.0);
    }

    #[test]
    fn pointer_on_wheel_accepts_ring_and_thumb_rejects_center() {
        let geometry = wheel_geometry(bounds_100(), 24.0).unwrap();

        // On the annulus, far from the thumb.
        assert!(pointer_on_wheel(point(px(50.), px(95.)), geometry, 0.0, 18.0));
        // Dead center is not interactive.
        assert!(!pointer_on_wheel(point(px(50.), px(50.)), geometry, 0.0, 18.0));

        // A thin ring with a big thumb: the thumb box sticks into the
        // hole and stays interactive there.
        let thin = WheelGeometry {
            center_x: 30.0,
            center_y: 30.0,
            outer_radius: 30.0,
            inner_radius: 22.0,
            track_radius: 26.0,
        };
        assert!(pointer_on_wheel(point(px(30.), px(12.)), thin, 0.0, 18.0));
        assert!(!pointer_on_wheel(point(px(30.), px(30.)), thin, 0.0, 18.0));
    }
}
