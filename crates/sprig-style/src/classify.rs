//! Per-node style classification.
//!
//! A node's style is split into two outputs that may coexist:
//! - symbolic classes, for values that quantize onto the vocabulary
//! - an inline-style remainder, for values that don't (off-palette colors,
//!   gradients, exact shadow geometry, sizes outside tolerance)
//!
//! Inline entries are overrides of the classes. Only the first paint of
//! `fills` and `strokes` is examined.

use crate::color::{color_to_rgb, palette_lookup, rgb_to_string};
use crate::scale::{
    align_items_class, justify_class, text_align_class, BORDER_RADIUS_SCALE, BORDER_WIDTH_SCALE,
    FONT_SIZE_SCALE, FONT_WEIGHT_SCALE, OPACITY_SCALE, SPACING_SCALE,
};
use crate::value::{StyleMap, StyleValue};
use serde::{Deserialize, Serialize};
use sprig_core::{Color, DesignNode, LayoutMode, PaintKind};

/// Size classes are emitted only when the nearest spacing step is closer than this.
pub const DEFAULT_SIZE_TOLERANCE: f64 = 2.0;

const DEFAULT_SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.1)";

/// Classes and inline overrides for one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub classes: Vec<String>,
    pub inline: StyleMap,
}

impl Classification {
    /// Classes joined into one space-separated attribute value.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Derives utility classes and inline styles from design nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleClassifier {
    size_tolerance: f64,
}

impl Default for StyleClassifier {
    fn default() -> Self {
        Self {
            size_tolerance: DEFAULT_SIZE_TOLERANCE,
        }
    }
}

impl StyleClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the size tolerance.
    pub fn with_size_tolerance(mut self, tolerance: f64) -> Self {
        self.size_tolerance = tolerance;
        self
    }

    /// Classify a node. Pure: the same node always yields the same result.
    pub fn classify(&self, node: &DesignNode) -> Classification {
        let mut classes = Vec::new();
        classes.extend(self.layout_classes(node));
        classes.extend(self.size_classes(node));
        classes.extend(self.color_classes(node));
        classes.extend(self.spacing_classes(node));
        classes.extend(self.effect_classes(node));
        classes.extend(self.text_classes(node));

        Classification {
            classes,
            inline: self.inline_styles(node),
        }
    }

    /// Flex direction, alignment and gap.
    pub fn layout_classes(&self, node: &DesignNode) -> Vec<String> {
        let mut classes = Vec::new();
        let mode = node.layout();
        if !mode.is_flex() {
            return classes;
        }

        classes.push("flex".to_string());
        if mode == LayoutMode::Vertical {
            classes.push("flex-col".to_string());
        }

        if let Some(class) = node.primary_axis_align_items.and_then(justify_class) {
            classes.push(class.to_string());
        }
        if let Some(class) = node.counter_axis_align_items.and_then(align_items_class) {
            classes.push(class.to_string());
        }

        if let Some(spacing) = node.item_spacing.filter(|s| *s != 0.0) {
            if let Some(token) = SPACING_SCALE.token(spacing) {
                classes.push(format!("gap-{}", token));
            }
        }

        classes
    }

    /// Width and height, only when within tolerance of a spacing step.
    pub fn size_classes(&self, node: &DesignNode) -> Vec<String> {
        let mut classes = Vec::new();
        if let Some(bounds) = node.absolute_bounding_box {
            if let Some(token) = SPACING_SCALE.token_within(bounds.width, self.size_tolerance) {
                classes.push(format!("w-{}", token));
            }
            if let Some(token) = SPACING_SCALE.token_within(bounds.height, self.size_tolerance) {
                classes.push(format!("h-{}", token));
            }
        }
        classes
    }

    /// Background, border color and border width.
    ///
    /// A TEXT node's fill colors its glyphs, so it is handled by
    /// [`Self::text_classes`] instead.
    pub fn color_classes(&self, node: &DesignNode) -> Vec<String> {
        let mut classes = Vec::new();

        if !node.node_type.is_text() {
            if let Some(hit) = first_solid(node.first_fill().and_then(|p| p.solid_color())) {
                classes.push(hit.class("bg"));
            }
        }

        if let Some(stroke) = node.first_stroke() {
            if let Some(color) = stroke.solid_color() {
                if let Some(hit) = palette_lookup(&color_to_rgb(&color)) {
                    classes.push(format!("border-{}", hit.name));
                }
            }
            if let Some(weight) = node.stroke_weight.filter(|w| *w != 0.0) {
                if let Some(token) = BORDER_WIDTH_SCALE.token(weight) {
                    classes.push(token.to_string());
                }
            }
        }

        classes
    }

    /// Padding: one symmetric token, or independent per-axis tokens.
    pub fn spacing_classes(&self, node: &DesignNode) -> Vec<String> {
        let mut classes = Vec::new();
        let padding = node.padding();
        if padding.is_zero() {
            return classes;
        }

        if padding.is_uniform() {
            if let Some(token) = SPACING_SCALE.token(padding.left) {
                classes.push(format!("p-{}", token));
            }
            return classes;
        }

        if padding.left == padding.right {
            if let Some(token) = SPACING_SCALE.token(padding.left) {
                classes.push(format!("px-{}", token));
            }
        }
        if padding.top == padding.bottom {
            if let Some(token) = SPACING_SCALE.token(padding.top) {
                classes.push(format!("py-{}", token));
            }
        }
        classes
    }

    /// Corner radius, opacity and shadow presence.
    pub fn effect_classes(&self, node: &DesignNode) -> Vec<String> {
        let mut classes = Vec::new();

        if let Some(radius) = node.corner_radius.filter(|r| *r != 0.0) {
            if let Some(token) = BORDER_RADIUS_SCALE.token(radius) {
                classes.push(token.to_string());
            }
        }

        if let Some(opacity) = node.opacity.filter(|o| *o < 1.0) {
            if let Some(token) = OPACITY_SCALE.token((opacity * 100.0).round()) {
                classes.push(token.to_string());
            }
        }

        if node.effects.iter().any(|e| e.is_visible_drop_shadow()) {
            classes.push("shadow-md".to_string());
        }

        classes
    }

    /// Font size, weight, alignment and text color. TEXT nodes only.
    pub fn text_classes(&self, node: &DesignNode) -> Vec<String> {
        let mut classes = Vec::new();
        if !node.node_type.is_text() {
            return classes;
        }

        if let Some(style) = node.text_style() {
            if let Some(token) = style.font_size.and_then(|size| FONT_SIZE_SCALE.token(size)) {
                classes.push(token.to_string());
            }
            if let Some(token) = style.font_weight.and_then(|weight| FONT_WEIGHT_SCALE.exact(weight)) {
                classes.push(token.to_string());
            }
            if let Some(class) = style.text_align_horizontal.and_then(text_align_class) {
                classes.push(class.to_string());
            }
        }

        if let Some(hit) = first_solid(node.first_fill().and_then(|p| p.solid_color())) {
            classes.push(hit.class("text"));
        }

        classes
    }

    /// Values that failed symbolic quantization.
    pub fn inline_styles(&self, node: &DesignNode) -> StyleMap {
        let mut styles = StyleMap::new();

        if let Some(bounds) = node.absolute_bounding_box {
            if SPACING_SCALE
                .token_within(bounds.width, self.size_tolerance)
                .is_none()
            {
                styles.insert("width".into(), format!("{}px", bounds.width).into());
            }
            if SPACING_SCALE
                .token_within(bounds.height, self.size_tolerance)
                .is_none()
            {
                styles.insert("height".into(), format!("{}px", bounds.height).into());
            }
        }

        if let Some(fill) = node.first_fill() {
            match fill.kind {
                PaintKind::Solid => {
                    if let Some(color) = fill.color {
                        let rgba = color_to_rgb(&color);
                        if palette_lookup(&rgba).is_none() {
                            let key = if node.node_type.is_text() {
                                "color"
                            } else {
                                "backgroundColor"
                            };
                            styles.insert(key.into(), rgb_to_string(&rgba).into());
                        }
                    }
                }
                PaintKind::GradientLinear => {
                    // Stops are emitted in document order, not sorted by position.
                    let stops: Vec<String> = fill
                        .gradient_stops
                        .iter()
                        .map(|stop| {
                            format!(
                                "{} {}%",
                                rgb_to_string(&color_to_rgb(&stop.color)),
                                stop.position * 100.0
                            )
                        })
                        .collect();
                    styles.insert(
                        "background".into(),
                        format!("linear-gradient({})", stops.join(", ")).into(),
                    );
                }
                _ => {}
            }
        }

        let shadows: Vec<String> = node
            .effects
            .iter()
            .filter(|e| e.is_visible_drop_shadow())
            .map(|shadow| {
                let color = shadow
                    .color
                    .map(|c| rgb_to_string(&color_to_rgb(&c)))
                    .unwrap_or_else(|| DEFAULT_SHADOW_COLOR.to_string());
                let offset = shadow.offset.unwrap_or_default();
                format!(
                    "{}px {}px {}px {}",
                    offset.x,
                    offset.y,
                    shadow.radius.unwrap_or(0.0),
                    color
                )
            })
            .collect();
        if !shadows.is_empty() {
            styles.insert("boxShadow".into(), StyleValue::String(shadows.join(", ")));
        }

        styles
    }
}

fn first_solid(color: Option<Color>) -> Option<crate::color::PaletteMatch> {
    color.and_then(|c| palette_lookup(&color_to_rgb(&c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::{
        AxisAlign, ColorStop, Effect, NodeType, Paint, Rect, TextAlign, TypeStyle,
    };

    fn frame() -> DesignNode {
        DesignNode::new("1:1", "Frame", NodeType::Frame)
    }

    #[test]
    fn test_layout_classes() {
        let node = frame()
            .with_layout(LayoutMode::Vertical, Some(16.0))
            .with_alignment(Some(AxisAlign::SpaceBetween), Some(AxisAlign::Center));
        let classes = StyleClassifier::default().layout_classes(&node);
        assert_eq!(
            classes,
            vec!["flex", "flex-col", "justify-between", "items-center", "gap-4"]
        );
    }

    #[test]
    fn test_layout_none_emits_nothing() {
        let node = frame().with_layout(LayoutMode::None, Some(16.0));
        assert!(StyleClassifier::default().layout_classes(&node).is_empty());
    }

    #[test]
    fn test_size_within_and_outside_tolerance() {
        let classifier = StyleClassifier::default();
        let node = frame().with_bounds(Rect::sized(65.0, 100.0));
        assert_eq!(classifier.size_classes(&node), vec!["w-16"]);

        let inline = classifier.inline_styles(&node);
        assert!(!inline.contains_key("width"));
        assert_eq!(inline.get("height"), Some(&StyleValue::from("100px")));
    }

    #[test]
    fn test_size_tolerance_is_configurable() {
        let node = frame().with_bounds(Rect::sized(100.0, 100.0));
        let loose = StyleClassifier::new().with_size_tolerance(5.0);
        assert_eq!(loose.size_classes(&node), vec!["w-24", "h-24"]);
        assert!(loose.inline_styles(&node).is_empty());
    }

    #[test]
    fn test_palette_fill_and_stroke() {
        let node = frame()
            .with_fill_color(Color::WHITE)
            .with_stroke(Paint::solid(Color::from_rgb8(239, 68, 68)), Some(1.0));
        let classes = StyleClassifier::default().color_classes(&node);
        assert_eq!(classes, vec!["bg-white", "border-red-500", "border"]);
    }

    #[test]
    fn test_translucent_palette_fill() {
        let node = frame().with_fill_color(Color::from_rgb8(59, 130, 246).with_alpha(0.25));
        let result = StyleClassifier::default().classify(&node);
        assert!(result.has_class("bg-blue-500/25"));
        assert!(!result.inline.contains_key("backgroundColor"));
    }

    #[test]
    fn test_off_palette_fill_goes_inline() {
        let node = frame().with_fill_color(Color::from_rgb8(1, 2, 3));
        let result = StyleClassifier::default().classify(&node);
        assert!(!result.classes.iter().any(|c| c.starts_with("bg-")));
        assert_eq!(
            result.inline.get("backgroundColor"),
            Some(&StyleValue::from("rgb(1, 2, 3)"))
        );
    }

    #[test]
    fn test_only_first_fill_is_examined() {
        let node = frame()
            .with_fill_color(Color::from_rgb8(1, 2, 3))
            .with_fill_color(Color::WHITE);
        let result = StyleClassifier::default().classify(&node);
        assert!(!result.has_class("bg-white"));
        assert!(result.inline.contains_key("backgroundColor"));
    }

    #[test]
    fn test_padding_uniform() {
        let node = frame().with_padding(16.0, 16.0, 16.0, 16.0);
        assert_eq!(StyleClassifier::default().spacing_classes(&node), vec!["p-4"]);
    }

    #[test]
    fn test_padding_per_axis() {
        let node = frame().with_padding(16.0, 16.0, 8.0, 8.0);
        assert_eq!(
            StyleClassifier::default().spacing_classes(&node),
            vec!["px-4", "py-2"]
        );

        let lopsided = frame().with_padding(16.0, 4.0, 8.0, 8.0);
        assert_eq!(StyleClassifier::default().spacing_classes(&lopsided), vec!["py-2"]);
    }

    #[test]
    fn test_padding_unset_sides_count_as_zero() {
        let mut node = frame();
        node.padding_left = Some(8.0);
        node.padding_right = Some(8.0);
        assert_eq!(StyleClassifier::default().spacing_classes(&node), vec!["px-2", "py-0"]);
    }

    #[test]
    fn test_effect_classes() {
        let node = frame()
            .with_corner_radius(8.0)
            .with_opacity(0.5)
            .with_effect(Effect::drop_shadow(0.0, 4.0, 8.0, None));
        assert_eq!(
            StyleClassifier::default().effect_classes(&node),
            vec!["rounded-lg", "opacity-50", "shadow-md"]
        );
    }

    #[test]
    fn test_shadow_inline_geometry() {
        let node = frame()
            .with_effect(Effect::drop_shadow(0.0, 4.0, 8.0, None))
            .with_effect(Effect::drop_shadow(1.0, 2.0, 3.0, Some(Color::rgba(0.0, 0.0, 0.0, 0.25))));
        let inline = StyleClassifier::default().inline_styles(&node);
        assert_eq!(
            inline.get("boxShadow"),
            Some(&StyleValue::from(
                "0px 4px 8px rgba(0, 0, 0, 0.1), 1px 2px 3px rgba(0, 0, 0, 0.25)"
            ))
        );
    }

    #[test]
    fn test_hidden_shadow_ignored() {
        let mut shadow = Effect::drop_shadow(0.0, 4.0, 8.0, None);
        shadow.visible = false;
        let node = frame().with_effect(shadow);
        let result = StyleClassifier::default().classify(&node);
        assert!(!result.has_class("shadow-md"));
        assert!(result.inline.is_empty());
    }

    #[test]
    fn test_text_classes() {
        let node = DesignNode::text("2:1", "Hi")
            .with_style(TypeStyle {
                font_size: Some(14.0),
                font_weight: Some(700.0),
                text_align_horizontal: Some(TextAlign::Center),
                ..Default::default()
            })
            .with_fill_color(Color::BLACK);
        let result = StyleClassifier::default().classify(&node);
        assert_eq!(
            result.classes,
            vec!["text-sm", "font-bold", "text-center", "text-black"]
        );
        assert!(!result.has_class("bg-black"));
    }

    #[test]
    fn test_text_off_palette_color_inline() {
        let node = DesignNode::text("2:1", "Hi").with_fill_color(Color::from_rgb8(1, 2, 3));
        let inline = StyleClassifier::default().inline_styles(&node);
        assert_eq!(inline.get("color"), Some(&StyleValue::from("rgb(1, 2, 3)")));
        assert!(!inline.contains_key("backgroundColor"));
    }

    #[test]
    fn test_text_style_ignored_on_non_text() {
        let node = frame().with_style(TypeStyle {
            font_size: Some(14.0),
            ..Default::default()
        });
        assert!(StyleClassifier::default().text_classes(&node).is_empty());
    }

    #[test]
    fn test_gradient_stops_keep_document_order() {
        let node = frame().with_fill(Paint::linear_gradient(vec![
            ColorStop::new(Color::rgb(0.0, 0.0, 1.0), 1.0),
            ColorStop::new(Color::rgb(1.0, 0.0, 0.0), 0.0),
            ColorStop::new(Color::rgba(0.0, 1.0, 0.0, 0.5), 0.5),
        ]));
        let inline = StyleClassifier::default().inline_styles(&node);
        assert_eq!(
            inline.get("background"),
            Some(&StyleValue::from(
                "linear-gradient(rgb(0, 0, 255) 100%, rgb(255, 0, 0) 0%, rgba(0, 255, 0, 0.5) 50%)"
            ))
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let node = frame()
            .with_layout(LayoutMode::Horizontal, Some(12.0))
            .with_bounds(Rect::sized(123.0, 48.0))
            .with_fill_color(Color::from_rgb8(10, 20, 30))
            .with_effect(Effect::drop_shadow(0.0, 1.0, 2.0, None));
        let classifier = StyleClassifier::default();
        assert_eq!(classifier.classify(&node), classifier.classify(&node));
    }

    #[test]
    fn test_classification_serializes() {
        let node = frame().with_bounds(Rect::sized(101.0, 16.0));
        let json = serde_json::to_value(StyleClassifier::default().classify(&node)).unwrap();
        assert_eq!(json["classes"], serde_json::json!(["h-4"]));
        assert_eq!(json["inline"]["width"], "101px");
    }
}
