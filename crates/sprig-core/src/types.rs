//! Value types carried by design nodes.

use serde::{Deserialize, Serialize};

/// A color with channels in `[0, 1]`.
///
/// The alpha channel is optional in the document schema; an absent alpha
/// means fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Replace the alpha channel.
    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }

    /// Alpha channel, defaulting to opaque.
    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

/// Axis-aligned bounding box in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// A 2D offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Paint kinds understood by the document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
    Video,
    #[serde(other)]
    Unknown,
}

/// A single fill or stroke entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gradient_stops: Vec<ColorStop>,
}

impl Paint {
    /// A solid paint of one color.
    pub fn solid(color: Color) -> Self {
        Self {
            kind: PaintKind::Solid,
            visible: true,
            opacity: None,
            color: Some(color),
            gradient_stops: Vec::new(),
        }
    }

    /// A linear gradient with the given stops, kept in the given order.
    pub fn linear_gradient(stops: Vec<ColorStop>) -> Self {
        Self {
            kind: PaintKind::GradientLinear,
            visible: true,
            opacity: None,
            color: None,
            gradient_stops: stops,
        }
    }

    /// The color of a solid paint.
    pub fn solid_color(&self) -> Option<Color> {
        match self.kind {
            PaintKind::Solid => self.color,
            _ => None,
        }
    }
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Color,
    /// Position along the gradient in `[0, 1]`.
    pub position: f64,
}

impl ColorStop {
    pub fn new(color: Color, position: f64) -> Self {
        Self { color, position }
    }
}

/// Effect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unknown,
}

/// A shadow or blur effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    /// Absent means hidden.
    #[serde(default)]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Effect {
    /// A visible drop shadow.
    pub fn drop_shadow(x: f64, y: f64, radius: f64, color: Option<Color>) -> Self {
        Self {
            kind: EffectKind::DropShadow,
            visible: true,
            offset: Some(Vector { x, y }),
            radius: Some(radius),
            color,
        }
    }

    pub fn is_visible_drop_shadow(&self) -> bool {
        self.kind == EffectKind::DropShadow && self.visible
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb8() {
        let c = Color::from_rgb8(59, 130, 246);
        assert!((c.r - 59.0 / 255.0).abs() < 1e-9);
        assert!((c.g - 130.0 / 255.0).abs() < 1e-9);
        assert!((c.b - 246.0 / 255.0).abs() < 1e-9);
        assert_eq!(c.alpha(), 1.0);
        assert_eq!(c.with_alpha(0.5).alpha(), 0.5);
    }

    #[test]
    fn test_paint_deserialize() {
        let json = r#"{
            "type": "GRADIENT_LINEAR",
            "gradientStops": [
                { "color": { "r": 1, "g": 0, "b": 0, "a": 1 }, "position": 0 },
                { "color": { "r": 0, "g": 0, "b": 1 }, "position": 1 }
            ]
        }"#;
        let paint: Paint = serde_json::from_str(json).unwrap();
        assert_eq!(paint.kind, PaintKind::GradientLinear);
        assert_eq!(paint.gradient_stops.len(), 2);
        assert_eq!(paint.gradient_stops[1].color.a, None);
        assert!(paint.solid_color().is_none());
    }

    #[test]
    fn test_unknown_paint_kind_tolerated() {
        let paint: Paint = serde_json::from_str(r#"{ "type": "PATTERN" }"#).unwrap();
        assert_eq!(paint.kind, PaintKind::Unknown);
    }

    #[test]
    fn test_effect_visibility_defaults_to_hidden() {
        let effect: Effect = serde_json::from_str(r#"{ "type": "DROP_SHADOW" }"#).unwrap();
        assert!(!effect.is_visible_drop_shadow());
    }
}
