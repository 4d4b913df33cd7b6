//! React Native generator.
//!
//! Native has no class vocabulary, so every node gets a literal style
//! object. Colors are resolved to `rgb()`/`rgba()` strings directly, with no
//! palette lookup.

use super::templates::TemplateEngine;
use super::{CodeGenerator, Content};
use crate::artifact::{GeneratedArtifact, Platform};
use crate::ast::builder::{child, element, expression_attribute, style_object, text_child};
use crate::ast::{print_jsx, JsxElement};
use crate::error::Result;
use crate::format::{CanonicalFormatter, CodeFormatter, Dialect};
use indexmap::IndexSet;
use serde::Serialize;
use sprig_core::{DesignNode, LayoutMode, NodeType};
use sprig_style::{
    color_to_css, flex_align_keyword, flex_justify_keyword, text_align_keyword, StyleMap,
};

const MODULE_TEMPLATE: &str = "\
import React from 'react';
import { {{join components \", \"}} } from 'react-native';

const {{name}} = () => {
  return (
{{indent jsx 4}}
  );
};

export default {{name}};
";

/// Platform component a node lowers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeComponent {
    View,
    Text,
}

impl NativeComponent {
    pub fn for_node(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Text => NativeComponent::Text,
            NodeType::Document
            | NodeType::Canvas
            | NodeType::Frame
            | NodeType::Group
            | NodeType::Section
            | NodeType::Component
            | NodeType::ComponentSet
            | NodeType::Instance
            | NodeType::Rectangle
            | NodeType::Ellipse
            | NodeType::Vector
            | NodeType::BooleanOperation
            | NodeType::Line
            | NodeType::RegularPolygon
            | NodeType::Star
            | NodeType::Unknown => NativeComponent::View,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NativeComponent::View => "View",
            NativeComponent::Text => "Text",
        }
    }
}

/// A lowered node.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeElement {
    pub component: NativeComponent,
    pub style: StyleMap,
    pub content: Content<NativeElement>,
}

impl NativeElement {
    /// Convert to JSX for printing.
    pub fn to_jsx(&self) -> JsxElement {
        let mut attributes = Vec::new();
        if !self.style.is_empty() {
            attributes.push(expression_attribute("style", style_object(&self.style)));
        }
        let children = match &self.content {
            Content::Text(text) => vec![text_child(text)],
            Content::Children(children) => children.iter().map(|c| child(c.to_jsx())).collect(),
            Content::Empty => Vec::new(),
        };
        element(self.component.as_str(), attributes, children)
    }
}

/// Per-call lowering state.
#[derive(Debug, Default)]
pub struct NativeContext {
    components: IndexSet<NativeComponent>,
}

impl NativeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct components used so far, in first-use order.
    pub fn components(&self) -> impl Iterator<Item = NativeComponent> + '_ {
        self.components.iter().copied()
    }
}

/// Literal style object for one node.
pub fn native_style(node: &DesignNode) -> StyleMap {
    let mut style = StyleMap::new();
    let is_text = node.node_type.is_text();

    let mode = node.layout();
    if mode.is_flex() {
        let direction = if mode == LayoutMode::Horizontal { "row" } else { "column" };
        style.insert("flexDirection".into(), direction.into());
        if let Some(align) = node.primary_axis_align_items {
            style.insert("justifyContent".into(), flex_justify_keyword(align).into());
        }
        if let Some(align) = node.counter_axis_align_items {
            style.insert("alignItems".into(), flex_align_keyword(align).into());
        }
        if let Some(gap) = node.item_spacing.filter(|g| *g != 0.0) {
            style.insert("gap".into(), gap.into());
        }
    }

    if let Some(bounds) = node.absolute_bounding_box {
        style.insert("width".into(), bounds.width.into());
        style.insert("height".into(), bounds.height.into());
    }

    let padding = [
        ("paddingLeft", node.padding_left),
        ("paddingRight", node.padding_right),
        ("paddingTop", node.padding_top),
        ("paddingBottom", node.padding_bottom),
    ];
    for (key, value) in padding {
        if let Some(value) = value.filter(|v| *v != 0.0) {
            style.insert(key.into(), value.into());
        }
    }

    let fill = node.first_fill().and_then(|p| p.solid_color());
    if !is_text {
        if let Some(color) = fill {
            style.insert("backgroundColor".into(), color_to_css(&color).into());
        }
    }

    if let Some(stroke) = node.first_stroke() {
        if let Some(color) = stroke.solid_color() {
            style.insert("borderColor".into(), color_to_css(&color).into());
        }
        if let Some(weight) = node.stroke_weight.filter(|w| *w != 0.0) {
            style.insert("borderWidth".into(), weight.into());
        }
    }

    if let Some(radius) = node.corner_radius.filter(|r| *r != 0.0) {
        style.insert("borderRadius".into(), radius.into());
    }

    if let Some(text) = node.text_style() {
        if let Some(size) = text.font_size {
            style.insert("fontSize".into(), size.into());
        }
        if let Some(weight) = text.font_weight {
            style.insert("fontWeight".into(), weight.to_string().into());
        }
        if let Some(spacing) = text.letter_spacing.filter(|s| *s != 0.0) {
            style.insert("letterSpacing".into(), spacing.into());
        }
        if let Some(line_height) = text.line_height_px {
            style.insert("lineHeight".into(), line_height.into());
        }
        if let Some(align) = text.text_align_horizontal {
            style.insert("textAlign".into(), text_align_keyword(align).into());
        }
    }
    if is_text {
        if let Some(color) = fill {
            style.insert("color".into(), color_to_css(&color).into());
        }
    }

    if let Some(opacity) = node.opacity.filter(|o| *o < 1.0) {
        style.insert("opacity".into(), opacity.into());
    }

    if !node.visible {
        style.insert("display".into(), "none".into());
    }

    style
}

#[derive(Serialize)]
struct ModuleData<'a> {
    name: &'a str,
    components: Vec<&'static str>,
    jsx: String,
}

/// React Native generator.
pub struct NativeGenerator<'a> {
    engine: TemplateEngine<'a>,
    formatter: Box<dyn CodeFormatter>,
}

impl<'a> NativeGenerator<'a> {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
            formatter: Box::new(CanonicalFormatter),
        }
    }

    pub fn with_formatter(mut self, formatter: Box<dyn CodeFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Lower a node tree, recording the components it uses in `ctx`.
    pub fn lower(&self, node: &DesignNode, ctx: &mut NativeContext) -> NativeElement {
        let component = NativeComponent::for_node(node.node_type);
        ctx.components.insert(component);

        NativeElement {
            component,
            style: native_style(node),
            content: Content::of(node, |c| self.lower(c, ctx)),
        }
    }

    /// Render the module source, unformatted.
    pub fn render(&self, root: &NativeElement, ctx: &NativeContext, name: &str) -> Result<String> {
        let data = ModuleData {
            name,
            components: ctx.components().map(NativeComponent::as_str).collect(),
            jsx: print_jsx(&root.to_jsx()),
        };
        self.engine.render_string(MODULE_TEMPLATE, &data)
    }
}

impl<'a> Default for NativeGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CodeGenerator for NativeGenerator<'a> {
    fn platform(&self) -> Platform {
        Platform::Native
    }

    fn generate(&self, node: &DesignNode, component_name: &str) -> Result<GeneratedArtifact> {
        let mut ctx = NativeContext::new();
        let root = self.lower(node, &mut ctx);
        let source = self.render(&root, &ctx, component_name)?;
        let source = self.formatter.format(&source, Dialect::Tsx);
        tracing::debug!(component = component_name, bytes = source.len(), "generated native component");
        Ok(GeneratedArtifact::module(Platform::Native, component_name, source))
    }
}
