use gpui::{Hsla, hsla};

/// Create a [`Hsla`] color from CSS-style values.
///
/// - `h` - hue in degrees, 0..360
/// - `s` - saturation in percent, 0..100
/// - `l` - lightness in percent, 0..100
pub fn hsl(h: f32, s: f32, l: f32) -> Hsla {
    hsla(h / 360., s / 100., l / 100., 1.0)
}

/// Helpers for deriving related colors from a base color.
pub trait Colorize: Sized {
    /// Multiply the alpha channel, `factor` in 0..1.
    fn opacity(&self, factor: f32) -> Self;
    /// Increase lightness by `amount` in 0..1.
    fn lighten(&self, amount: f32) -> Self;
    /// Decrease lightness by `amount` in 0..1.
    fn darken(&self, amount: f32) -> Self;
}

impl Colorize for Hsla {
    fn opacity(&self, factor: f32) -> Self {
        Self {
            a: self.a * factor.clamp(0., 1.),
            ..*self
        }
    }

    fn lighten(&self, amount: f32) -> Self {
        Self {
            l: (self.l + amount.clamp(0., 1.)).min(1.),
            ..*self
        }
    }

    fn darken(&self, amount: f32) -> Self {
        Self {
            l: (self.l - amount.clamp(0., 1.)).max(0.),
            ..*self
        }
    }
}

/// The color tokens consumed by the components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColor {
    /// Window background.
    pub background: Hsla,
    /// Default text color.
    pub foreground: Hsla,
    /// Card and dialog panel background.
    pub card: Hsla,
    pub card_foreground: Hsla,
    pub primary: Hsla,
    pub primary_hover: Hsla,
    pub primary_active: Hsla,
    pub primary_foreground: Hsla,
    pub secondary: Hsla,
    pub secondary_hover: Hsla,
    pub secondary_active: Hsla,
    pub secondary_foreground: Hsla,
    pub accent: Hsla,
    pub accent_hover: Hsla,
    pub accent_active: Hsla,
    pub accent_foreground: Hsla,
    pub danger: Hsla,
    pub danger_hover: Hsla,
    pub danger_active: Hsla,
    pub danger_foreground: Hsla,
    pub muted: Hsla,
    pub muted_foreground: Hsla,
    /// Default border color.
    pub border: Hsla,
    /// Focus ring color.
    pub ring: Hsla,
    /// Dialog overlay color.
    pub overlay: Hsla,
    pub tab_bar: Hsla,
    pub tab_foreground: Hsla,
    pub tab_active: Hsla,
    pub tab_active_foreground: Hsla,
}

impl ThemeColor {
    pub fn light() -> Self {
        Self {
            background: hsl(0., 0., 100.),
            foreground: hsl(240., 10., 3.9),
            card: hsl(0., 0., 100.),
            card_foreground: hsl(240., 10., 3.9),
            primary: hsl(223., 5.9, 10.),
            primary_hover: hsl(223., 5.9, 15.),
            primary_active: hsl(223., 1.9, 25.),
            primary_foreground: hsl(223., 0., 98.),
            secondary: hsl(240., 4.8, 95.9),
            secondary_hover: hsl(240., 5.9, 93.),
            secondary_active: hsl(240., 5.9, 90.),
            secondary_foreground: hsl(240., 5.9, 10.),
            accent: hsl(217., 91., 50.),
            accent_hover: hsl(217., 91., 44.),
            accent_active: hsl(217., 91., 38.),
            accent_foreground: hsl(0., 0., 98.),
            danger: hsl(0., 72., 51.),
            danger_hover: hsl(0., 72., 45.),
            danger_active: hsl(0., 72., 39.),
            danger_foreground: hsl(0., 0., 98.),
            muted: hsl(240., 4.8, 95.9),
            muted_foreground: hsl(240., 3.8, 46.1),
            border: hsl(240., 5.9, 90.),
            ring: hsl(217., 91., 60.),
            overlay: hsla(0., 0., 0., 0.4),
            tab_bar: hsl(0., 0., 100.),
            tab_foreground: hsl(240., 3.8, 46.1),
            tab_active: hsl(240., 5.9, 10.),
            tab_active_foreground: hsl(240., 5.9, 10.),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: hsl(0., 0., 8.),
            foreground: hsl(0., 0., 98.),
            card: hsl(0., 0., 10.),
            card_foreground: hsl(0., 0., 98.),
            primary: hsl(223., 0., 98.),
            primary_hover: hsl(223., 0., 90.),
            primary_active: hsl(223., 0., 82.),
            primary_foreground: hsl(223., 5.9, 10.),
            secondary: hsl(240., 3.7, 15.9),
            secondary_hover: hsl(240., 3.7, 20.),
            secondary_active: hsl(240., 3.7, 24.),
            secondary_foreground: hsl(0., 0., 98.),
            accent: hsl(217., 91., 60.),
            accent_hover: hsl(217., 91., 65.),
            accent_active: hsl(217., 91., 70.),
            accent_foreground: hsl(0., 0., 98.),
            danger: hsl(0., 62.8, 40.6),
            danger_hover: hsl(0., 62.8, 45.),
            danger_active: hsl(0., 62.8, 50.),
            danger_foreground: hsl(0., 0., 98.),
            muted: hsl(240., 3.7, 15.9),
            muted_foreground: hsl(240., 5., 64.9),
            border: hsl(240., 3.7, 16.9),
            ring: hsl(217., 91., 60.),
            overlay: hsla(0., 0., 0., 0.5),
            tab_bar: hsl(0., 0., 8.),
            tab_foreground: hsl(240., 5., 64.9),
            tab_active: hsl(0., 0., 98.),
            tab_active_foreground: hsl(0., 0., 98.),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_maps_css_values_into_unit_ranges() {
        let color = hsl(180., 50., 50.);
        assert_eq!(color.h, 0.5);
        assert_eq!(color.s, 0.5);
        assert_eq!(color.l, 0.5);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn opacity_scales_alpha_and_clamps_factor() {
        let color = hsla(0., 0., 0., 0.8);
        assert_eq!(color.opacity(0.5).a, 0.4);
        assert_eq!(color.opacity(2.0).a, 0.8);
    }

    #[test]
    fn lighten_darken_saturate_at_bounds() {
        let color = hsl(0., 0., 90.);
        assert_eq!(color.lighten(0.5).l, 1.0);
        assert_eq!(color.darken(0.95).l, 0.0);
    }
}
