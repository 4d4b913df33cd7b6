//! The design-node tree.
//!
//! Field names follow the design tool's public document schema (camelCase
//! JSON). Every attribute that the schema only defines for some node types is
//! an `Option`: absence means "unset", never zero.

use crate::types::{Color, Effect, Paint, Rect};
use serde::{Deserialize, Serialize};

/// Node type tag.
///
/// Types the engine has no dedicated handling for deserialize to
/// [`NodeType::Unknown`], which every backend lowers as a generic container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Vector,
    BooleanOperation,
    Text,
    Line,
    RegularPolygon,
    Star,
    #[serde(other)]
    Unknown,
}

impl NodeType {
    /// Whether this is a text node.
    pub fn is_text(self) -> bool {
        matches!(self, NodeType::Text)
    }
}

/// Auto-layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
    #[default]
    #[serde(other)]
    None,
}

impl LayoutMode {
    /// Whether this node lays its children out along an axis.
    pub fn is_flex(self) -> bool {
        matches!(self, LayoutMode::Horizontal | LayoutMode::Vertical)
    }
}

/// Alignment along the primary or counter axis of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Baseline,
    Stretch,
    #[serde(other)]
    Unknown,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
    #[serde(other)]
    Unknown,
}

/// Typography of a TEXT node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<TextAlign>,
}

/// Padding on the four sides of an auto-layout frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.right == 0.0 && self.top == 0.0 && self.bottom == 0.0
    }

    pub fn is_uniform(&self) -> bool {
        self.left == self.right && self.top == self.bottom && self.left == self.top
    }
}

/// A node in the design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<Rect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<AxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<AxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TypeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignNode>,
}

fn default_visible() -> bool {
    true
}

impl DesignNode {
    /// Create a visible node with no optional attributes set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            visible: true,
            absolute_bounding_box: None,
            opacity: None,
            corner_radius: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: None,
            layout_mode: None,
            primary_axis_align_items: None,
            counter_axis_align_items: None,
            item_spacing: None,
            padding_left: None,
            padding_right: None,
            padding_top: None,
            padding_bottom: None,
            style: None,
            characters: None,
            effects: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a TEXT node with the given content.
    pub fn text(id: impl Into<String>, characters: impl Into<String>) -> Self {
        let characters = characters.into();
        let mut node = Self::new(id, characters.clone(), NodeType::Text);
        node.characters = Some(characters);
        node
    }

    /// Add a child node.
    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the bounding box.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.absolute_bounding_box = Some(bounds);
        self
    }

    /// Add a fill paint.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    /// Add a solid fill.
    pub fn with_fill_color(self, color: Color) -> Self {
        self.with_fill(Paint::solid(color))
    }

    /// Add a stroke paint.
    pub fn with_stroke(mut self, paint: Paint, weight: Option<f64>) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = weight;
        self
    }

    /// Enable auto-layout.
    pub fn with_layout(mut self, mode: LayoutMode, item_spacing: Option<f64>) -> Self {
        self.layout_mode = Some(mode);
        self.item_spacing = item_spacing;
        self
    }

    /// Set auto-layout alignment.
    pub fn with_alignment(mut self, primary: Option<AxisAlign>, counter: Option<AxisAlign>) -> Self {
        self.primary_axis_align_items = primary;
        self.counter_axis_align_items = counter;
        self
    }

    /// Set padding (left, right, top, bottom).
    pub fn with_padding(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.padding_left = Some(left);
        self.padding_right = Some(right);
        self.padding_top = Some(top);
        self.padding_bottom = Some(bottom);
        self
    }

    /// Set typography.
    pub fn with_style(mut self, style: TypeStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Set the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Mark the node hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// The layout mode, treating an absent value as `NONE`.
    pub fn layout(&self) -> LayoutMode {
        self.layout_mode.unwrap_or_default()
    }

    /// Padding with unset sides counted as zero.
    pub fn padding(&self) -> Padding {
        Padding {
            left: self.padding_left.unwrap_or(0.0),
            right: self.padding_right.unwrap_or(0.0),
            top: self.padding_top.unwrap_or(0.0),
            bottom: self.padding_bottom.unwrap_or(0.0),
        }
    }

    /// The first fill, the only one the engine reads.
    pub fn first_fill(&self) -> Option<&Paint> {
        self.fills.first()
    }

    /// The first stroke, the only one the engine reads.
    pub fn first_stroke(&self) -> Option<&Paint> {
        self.strokes.first()
    }

    /// Typography, only for TEXT nodes.
    pub fn text_style(&self) -> Option<&TypeStyle> {
        if self.node_type.is_text() {
            self.style.as_ref()
        } else {
            None
        }
    }

    /// Non-empty text content of a TEXT node.
    pub fn text_content(&self) -> Option<&str> {
        if !self.node_type.is_text() {
            return None;
        }
        self.characters.as_deref().filter(|s| !s.is_empty())
    }
}
