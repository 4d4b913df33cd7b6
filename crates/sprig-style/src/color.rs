//! Color normalization and palette lookup.

use crate::palette::palette_name;
use sprig_core::Color;

/// A color quantized to 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Whether the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// The alpha-free channels, used as the palette key.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The alpha-free `rgb()` form.
    pub fn rgb_key(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A palette hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteMatch {
    pub name: &'static str,
    /// Opacity percentage, reported only for translucent colors.
    pub opacity: Option<u8>,
}

impl PaletteMatch {
    /// Class for the given utility prefix, e.g. `bg-blue-500/50`.
    pub fn class(&self, prefix: &str) -> String {
        match self.opacity {
            Some(opacity) => format!("{}-{}/{}", prefix, self.name, opacity),
            None => format!("{}-{}", prefix, self.name),
        }
    }
}

/// Map a `[0, 1]` color to 8-bit channels. Absent alpha means opaque.
pub fn color_to_rgb(color: &Color) -> Rgba {
    Rgba {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
        a: clamp_unit(color.alpha()),
    }
}

/// `rgb(r, g, b)` for opaque colors, `rgba(r, g, b, a)` otherwise.
pub fn rgb_to_string(rgba: &Rgba) -> String {
    if rgba.is_opaque() {
        rgba.rgb_key()
    } else {
        format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// CSS color string without palette lookup.
pub fn color_to_css(color: &Color) -> String {
    rgb_to_string(&color_to_rgb(color))
}

/// Exact palette lookup on the alpha-free channels.
pub fn palette_lookup(rgba: &Rgba) -> Option<PaletteMatch> {
    palette_name(rgba.channels()).map(|name| PaletteMatch {
        name,
        opacity: if rgba.is_opaque() {
            None
        } else {
            Some((rgba.a * 100.0).round() as u8)
        },
    })
}

fn channel(value: f64) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb() {
        let rgba = color_to_rgb(&Color::rgb(1.0, 0.5, 0.0));
        assert_eq!((rgba.r, rgba.g, rgba.b), (255, 128, 0));
        assert_eq!(rgba.a, 1.0);

        let clamped = color_to_rgb(&Color::rgba(1.5, -0.2, 0.0, 2.0));
        assert_eq!((clamped.r, clamped.g, clamped.b), (255, 0, 0));
        assert_eq!(clamped.a, 1.0);
    }

    #[test]
    fn test_rgb_to_string() {
        assert_eq!(color_to_css(&Color::rgb(1.0, 1.0, 1.0)), "rgb(255, 255, 255)");
        assert_eq!(
            color_to_css(&Color::rgba(0.0, 0.0, 0.0, 0.5)),
            "rgba(0, 0, 0, 0.5)"
        );
    }

    #[test]
    fn test_palette_lookup() {
        let white = color_to_rgb(&Color::WHITE);
        assert_eq!(
            palette_lookup(&white),
            Some(PaletteMatch { name: "white", opacity: None })
        );

        let blue = color_to_rgb(&Color::from_rgb8(59, 130, 246).with_alpha(0.5));
        let hit = palette_lookup(&blue).unwrap();
        assert_eq!(hit.name, "blue-500");
        assert_eq!(hit.opacity, Some(50));
        assert_eq!(hit.class("bg"), "bg-blue-500/50");

        let off_palette = color_to_rgb(&Color::from_rgb8(1, 2, 3));
        assert!(palette_lookup(&off_palette).is_none());
    }
}
