//! Code generators for the supported platforms.

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "native")]
mod native;
#[cfg(feature = "miniprogram")]
mod miniprogram;

mod templates;

#[cfg(feature = "web")]
pub use web::WebGenerator;
#[cfg(feature = "native")]
pub use native::{native_style, NativeComponent, NativeContext, NativeElement, NativeGenerator};
#[cfg(feature = "miniprogram")]
pub use miniprogram::{
    miniprogram_declarations, MarkupElement, MiniProgramContext, MiniProgramGenerator, StyleRule,
};

pub use templates::TemplateEngine;

use crate::artifact::{GeneratedArtifact, Platform};
use crate::error::Result;
use sprig_core::DesignNode;

/// Common trait for platform backends.
pub trait CodeGenerator {
    /// Target platform.
    fn platform(&self) -> Platform;

    /// Lower the tree rooted at `node` into a complete artifact.
    fn generate(&self, node: &DesignNode, component_name: &str) -> Result<GeneratedArtifact>;
}

/// What a lowered element contains.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<E> {
    /// Leaf holding the characters of a TEXT node.
    Text(String),
    /// Lowered children, in document order.
    Children(Vec<E>),
    Empty,
}

impl<E> Content<E> {
    /// Content of `node`, lowering each child with `lower_child`.
    ///
    /// A TEXT node with characters becomes a text leaf and its children are
    /// not visited.
    pub fn of(node: &DesignNode, lower_child: impl FnMut(&DesignNode) -> E) -> Self {
        if let Some(text) = node.text_content() {
            return Content::Text(text.to_string());
        }
        if node.children.is_empty() {
            Content::Empty
        } else {
            Content::Children(node.children.iter().map(lower_child).collect())
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn children(&self) -> &[E] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
