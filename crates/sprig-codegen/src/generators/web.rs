//! React generator with utility-class styling.

use super::{CodeGenerator, Content};
use crate::artifact::{GeneratedArtifact, Platform};
use crate::ast::builder::{
    boolean_attribute, child, component_declaration, default_export, element,
    expression_attribute, import_default, module, string_attribute, style_object, text_child,
};
use crate::ast::{print_module, JsxAttr, JsxChild, JsxElement, Module};
use crate::error::Result;
use crate::format::{CanonicalFormatter, CodeFormatter, Dialect};
use sprig_core::{DesignNode, NodeType};
use sprig_style::StyleClassifier;

/// React generator.
pub struct WebGenerator {
    classifier: StyleClassifier,
    formatter: Box<dyn CodeFormatter>,
}

impl WebGenerator {
    pub fn new() -> Self {
        Self {
            classifier: StyleClassifier::default(),
            formatter: Box::new(CanonicalFormatter),
        }
    }

    pub fn with_classifier(mut self, classifier: StyleClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_formatter(mut self, formatter: Box<dyn CodeFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Element tag for a node type.
    pub fn tag_for(node_type: NodeType) -> &'static str {
        match node_type {
            NodeType::Text => "span",
            NodeType::Vector => "svg",
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
            | NodeType::BooleanOperation
            | NodeType::Line
            | NodeType::RegularPolygon
            | NodeType::Star
            | NodeType::Unknown => "div",
        }
    }

    /// Lower a node tree to a JSX element tree.
    pub fn lower(&self, node: &DesignNode) -> JsxElement {
        let classification = self.classifier.classify(node);

        let mut attributes: Vec<JsxAttr> = Vec::new();
        if !classification.classes.is_empty() {
            attributes.push(string_attribute("className", classification.class_name()));
        }
        if !classification.inline.is_empty() {
            attributes.push(expression_attribute(
                "style",
                style_object(&classification.inline),
            ));
        }
        if !node.visible {
            attributes.push(boolean_attribute("hidden"));
        }

        let children: Vec<JsxChild> = match Content::of(node, |c| self.lower(c)) {
            Content::Text(text) => vec![text_child(&text)],
            Content::Children(children) => children.into_iter().map(child).collect(),
            Content::Empty => Vec::new(),
        };

        element(Self::tag_for(node.node_type), attributes, children)
    }

    /// Build the interchange module for a component.
    pub fn build_module(&self, node: &DesignNode, component_name: &str) -> Module {
        module(vec![
            import_default("React", "react"),
            component_declaration(component_name, self.lower(node)),
            default_export(component_name),
        ])
    }
}

impl Default for WebGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for WebGenerator {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn generate(&self, node: &DesignNode, component_name: &str) -> Result<GeneratedArtifact> {
        let module = self.build_module(node, component_name);
        let source = self.formatter.format(&print_module(&module), Dialect::Tsx);
        tracing::debug!(component = component_name, bytes = source.len(), "generated web component");
        Ok(GeneratedArtifact::module(Platform::Web, component_name, source))
    }
}
