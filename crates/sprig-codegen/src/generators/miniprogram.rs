//! WeChat mini-program generator.
//!
//! One pre-order walk produces the markup tree and the stylesheet together,
//! so that each element's class and its rule's selector share one index.
//! Lengths are emitted in `rpx`.

use super::{CodeGenerator, Content};
use crate::artifact::{GeneratedArtifact, MiniProgramBundle, Platform};
use crate::error::Result;
use crate::format::{CanonicalFormatter, CodeFormatter, Dialect};
use indexmap::IndexMap;
use serde::Serialize;
use sprig_core::{DesignNode, LayoutMode, NodeType};
use sprig_style::{color_to_css, flex_align_keyword, flex_justify_keyword, text_align_keyword};

const SCRIPT_STUB: &str = "\
Component({
  properties: {},
  data: {},
  methods: {}
});
";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentManifest {
    component: bool,
    using_components: IndexMap<String, String>,
}

/// A markup element.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupElement {
    pub tag: &'static str,
    pub class: String,
    pub hidden: bool,
    pub content: Content<MarkupElement>,
}

impl MarkupElement {
    /// Tag for a node type.
    pub fn tag_for(node_type: NodeType) -> &'static str {
        match node_type {
            NodeType::Text => "text",
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
            | NodeType::Unknown => "view",
        }
    }

    /// Class names of this element and its descendants, in pre-order.
    pub fn classes(&self) -> Vec<&str> {
        let mut classes = vec![self.class.as_str()];
        for child in self.content.children() {
            classes.extend(child.classes());
        }
        classes
    }

    /// Render as indented markup.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, 0);
        out
    }

    fn write(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let hidden = if self.hidden { " hidden=\"{{true}}\"" } else { "" };
        let open = format!("{}<{} class=\"{}\"{}", indent, self.tag, self.class, hidden);

        match &self.content {
            Content::Text(text) => {
                out.push_str(&format!("{}>{}</{}>\n", open, escape_markup(text), self.tag));
            }
            Content::Children(children) => {
                out.push_str(&open);
                out.push_str(">\n");
                for child in children {
                    child.write(out, depth + 1);
                }
                out.push_str(&format!("{}</{}>\n", indent, self.tag));
            }
            Content::Empty => {
                out.push_str(&open);
                out.push_str(" />\n");
            }
        }
    }
}

/// One stylesheet rule.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// Index shared with the element's class.
    pub index: usize,
    /// Class selector without the leading `.`.
    pub class: String,
    pub declarations: Vec<String>,
}

impl StyleRule {
    pub fn render(&self) -> String {
        let body: Vec<String> = self
            .declarations
            .iter()
            .map(|d| format!("  {};", d))
            .collect();
        format!(".{} {{\n{}\n}}\n", self.class, body.join("\n"))
    }
}

/// Per-call lowering state: the class counter and accumulated rules.
#[derive(Debug)]
pub struct MiniProgramContext {
    prefix: String,
    next_index: usize,
    rules: Vec<StyleRule>,
}

impl MiniProgramContext {
    pub fn new(component_name: &str) -> Self {
        Self {
            prefix: component_name.to_lowercase(),
            next_index: 0,
            rules: Vec::new(),
        }
    }

    fn next_class(&mut self) -> (usize, String) {
        let index = self.next_index;
        self.next_index += 1;
        (index, format!("{}-{}", self.prefix, index))
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Number of classes assigned so far.
    pub fn assigned(&self) -> usize {
        self.next_index
    }

    pub fn stylesheet(&self) -> String {
        self.rules
            .iter()
            .map(StyleRule::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Stylesheet declarations for one node.
pub fn miniprogram_declarations(node: &DesignNode) -> Vec<String> {
    let mut decls = Vec::new();
    let is_text = node.node_type.is_text();

    let mode = node.layout();
    if mode.is_flex() {
        let direction = if mode == LayoutMode::Horizontal { "row" } else { "column" };
        decls.push("display: flex".to_string());
        decls.push(format!("flex-direction: {}", direction));
        if let Some(align) = node.primary_axis_align_items {
            decls.push(format!("justify-content: {}", flex_justify_keyword(align)));
        }
        if let Some(align) = node.counter_axis_align_items {
            decls.push(format!("align-items: {}", flex_align_keyword(align)));
        }
        if let Some(gap) = node.item_spacing.filter(|g| *g != 0.0) {
            decls.push(format!("gap: {}rpx", gap));
        }
    }

    if let Some(bounds) = node.absolute_bounding_box {
        decls.push(format!("width: {}rpx", bounds.width));
        decls.push(format!("height: {}rpx", bounds.height));
    }

    let padding = node.padding();
    if !padding.is_zero() {
        decls.push(format!(
            "padding: {}rpx {}rpx {}rpx {}rpx",
            padding.top, padding.right, padding.bottom, padding.left
        ));
    }

    let fill = node.first_fill().and_then(|p| p.solid_color());
    if !is_text {
        if let Some(color) = fill {
            decls.push(format!("background-color: {}", color_to_css(&color)));
        }
    }

    if let (Some(stroke), Some(weight)) = (
        node.first_stroke().and_then(|p| p.solid_color()),
        node.stroke_weight.filter(|w| *w != 0.0),
    ) {
        decls.push(format!("border: {}rpx solid {}", weight, color_to_css(&stroke)));
    }

    if let Some(radius) = node.corner_radius.filter(|r| *r != 0.0) {
        decls.push(format!("border-radius: {}rpx", radius));
    }

    if let Some(text) = node.text_style() {
        if let Some(size) = text.font_size {
            decls.push(format!("font-size: {}rpx", size));
        }
        if let Some(weight) = text.font_weight {
            decls.push(format!("font-weight: {}", weight));
        }
        if let Some(spacing) = text.letter_spacing.filter(|s| *s != 0.0) {
            decls.push(format!("letter-spacing: {}rpx", spacing));
        }
        if let Some(line_height) = text.line_height_px {
            decls.push(format!("line-height: {}rpx", line_height));
        }
        if let Some(align) = text.text_align_horizontal {
            decls.push(format!("text-align: {}", text_align_keyword(align)));
        }
    }
    if is_text {
        if let Some(color) = fill {
            decls.push(format!("color: {}", color_to_css(&color)));
        }
    }

    if let Some(opacity) = node.opacity.filter(|o| *o < 1.0) {
        decls.push(format!("opacity: {}", opacity));
    }

    decls
}

/// WeChat mini-program generator.
pub struct MiniProgramGenerator {
    formatter: Box<dyn CodeFormatter>,
}

impl MiniProgramGenerator {
    pub fn new() -> Self {
        Self {
            formatter: Box::new(CanonicalFormatter),
        }
    }

    pub fn with_formatter(mut self, formatter: Box<dyn CodeFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Lower a node tree. The node's index is taken before its children's.
    pub fn lower(&self, node: &DesignNode, ctx: &mut MiniProgramContext) -> MarkupElement {
        let (index, class) = ctx.next_class();

        let declarations = miniprogram_declarations(node);
        if !declarations.is_empty() {
            ctx.rules.push(StyleRule {
                index,
                class: class.clone(),
                declarations,
            });
        }

        MarkupElement {
            tag: MarkupElement::tag_for(node.node_type),
            class,
            hidden: !node.visible,
            content: Content::of(node, |c| self.lower(c, ctx)),
        }
    }

    /// Produce the four payloads from one traversal.
    pub fn generate_bundle(&self, node: &DesignNode, component_name: &str) -> Result<MiniProgramBundle> {
        let mut ctx = MiniProgramContext::new(component_name);
        let root = self.lower(node, &mut ctx);

        let manifest = ComponentManifest {
            component: true,
            using_components: IndexMap::new(),
        };

        Ok(MiniProgramBundle {
            wxml: self.formatter.format(&root.render(), Dialect::Markup),
            wxss: self.formatter.format(&ctx.stylesheet(), Dialect::Css),
            js: self.formatter.format(SCRIPT_STUB, Dialect::Js),
            json: self
                .formatter
                .format(&serde_json::to_string_pretty(&manifest)?, Dialect::Json),
        })
    }
}

impl Default for MiniProgramGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for MiniProgramGenerator {
    fn platform(&self) -> Platform {
        Platform::MiniProgram
    }

    fn generate(&self, node: &DesignNode, component_name: &str) -> Result<GeneratedArtifact> {
        let bundle = self.generate_bundle(node, component_name)?;
        tracing::debug!(component = component_name, "generated mini-program bundle");
        Ok(GeneratedArtifact::bundle(component_name, bundle))
    }
}

/// Escape literal text for a markup element. `{{` opens a data binding, so
/// it is emitted as a binding to the string literal `'{{'`.
fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("{{", "{{'{{'}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::{Color, Paint, Rect, TypeStyle};

    #[test]
    fn test_declarations() {
        let node = DesignNode::new("1:1", "Box", NodeType::Frame)
            .with_layout(LayoutMode::Vertical, Some(8.0))
            .with_bounds(Rect::sized(750.0, 120.0))
            .with_padding(16.0, 16.0, 8.0, 8.0)
            .with_fill_color(Color::WHITE)
            .with_stroke(Paint::solid(Color::BLACK), Some(2.0))
            .with_corner_radius(12.0);
        assert_eq!(
            miniprogram_declarations(&node),
            vec![
                "display: flex",
                "flex-direction: column",
                "gap: 8rpx",
                "width: 750rpx",
                "height: 120rpx",
                "padding: 8rpx 16rpx 8rpx 16rpx",
                "background-color: rgb(255, 255, 255)",
                "border: 2rpx solid rgb(0, 0, 0)",
                "border-radius: 12rpx",
            ]
        );
    }

    #[test]
    fn test_text_declarations() {
        let node = DesignNode::text("1:2", "Hi")
            .with_style(TypeStyle {
                font_size: Some(28.0),
                font_weight: Some(700.0),
                ..TypeStyle::default()
            })
            .with_fill_color(Color::BLACK);
        assert_eq!(
            miniprogram_declarations(&node),
            vec!["font-size: 28rpx", "font-weight: 700", "color: rgb(0, 0, 0)"]
        );
    }

    #[test]
    fn test_markup_and_rules_share_indices() {
        let node = DesignNode::new("1:1", "Card", NodeType::Frame)
            .with_fill_color(Color::WHITE)
            .with_child(DesignNode::new("1:2", "Spacer", NodeType::Frame))
            .with_child(DesignNode::text("1:3", "a < b").with_fill_color(Color::BLACK));

        let mut ctx = MiniProgramContext::new("Card");
        let root = MiniProgramGenerator::new().lower(&node, &mut ctx);

        assert_eq!(root.classes(), vec!["card-0", "card-1", "card-2"]);
        let rule_classes: Vec<_> = ctx.rules().iter().map(|r| r.class.as_str()).collect();
        assert_eq!(rule_classes, vec!["card-0", "card-2"]);
        assert_eq!(ctx.assigned(), 3);

        assert_eq!(
            root.render(),
            "<view class=\"card-0\">\n  <view class=\"card-1\" />\n  <text class=\"card-2\">a &lt; b</text>\n</view>\n"
        );
    }

    #[test]
    fn test_hidden_attribute() {
        let node = DesignNode::new("1:1", "Ghost", NodeType::Vector).hidden();
        let mut ctx = MiniProgramContext::new("Ghost");
        let root = MiniProgramGenerator::new().lower(&node, &mut ctx);
        assert!(root.hidden);
        assert_eq!(root.render(), "<view class=\"ghost-0\" hidden=\"{{true}}\" />\n");
    }

    #[test]
    fn test_binding_syntax_in_text_stays_literal() {
        let node = DesignNode::text("1:1", "{{price}} & more");
        let mut ctx = MiniProgramContext::new("Label");
        let root = MiniProgramGenerator::new().lower(&node, &mut ctx);
        assert_eq!(
            root.render(),
            "<text class=\"label-0\">{{'{{'}}price}} &amp; more</text>\n"
        );
    }

    #[test]
    fn test_multiline_text_kept_verbatim() {
        let node = DesignNode::text("1:1", "line one  \n\n\nline two");
        let bundle = MiniProgramGenerator::new()
            .generate_bundle(&node, "Label")
            .unwrap();
        assert_eq!(
            bundle.wxml,
            "<text class=\"label-0\">line one  \n\n\nline two</text>\n"
        );
    }

    #[test]
    fn test_bundle_payloads() {
        let node = DesignNode::new("1:1", "Card", NodeType::Frame).with_corner_radius(8.0);
        let bundle = MiniProgramGenerator::new()
            .generate_bundle(&node, "Card")
            .unwrap();

        assert_eq!(bundle.wxml, "<view class=\"card-0\" />\n");
        assert_eq!(bundle.wxss, ".card-0 {\n  border-radius: 8rpx;\n}\n");
        assert_eq!(
            bundle.js,
            "Component({\n  properties: {},\n  data: {},\n  methods: {}\n});\n"
        );
        assert_eq!(
            bundle.json,
            "{\n  \"component\": true,\n  \"usingComponents\": {}\n}\n"
        );
    }
}
