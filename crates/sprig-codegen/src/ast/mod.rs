//! Interchange syntax tree for generated JavaScript modules.
//!
//! The node shapes follow the ESTree/SWC vocabulary so that a serialized
//! tree can be handed to external JavaScript tooling. Every node carries a
//! [`Span`]; generated trees have no source text, so spans are always
//! [`Span::DUMMY`].

pub mod builder;
pub mod printer;

pub use printer::{js_number, js_string, print_jsx, print_module, Printer};

use serde::{Deserialize, Serialize};

/// Source position placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub ctxt: u32,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        ctxt: 0,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub span: Span,
    pub body: Vec<ModuleItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModuleItem {
    ImportDeclaration(ImportDecl),
    VariableDeclaration(VarDecl),
    ExportDefaultExpression(ExportDefaultExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub span: Span,
    pub specifiers: Vec<ImportSpecifier>,
    pub source: Str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportSpecifier {
    ImportDefaultSpecifier(ImportDefaultSpecifier),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDefaultSpecifier {
    pub span: Span,
    pub local: Ident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarKind {
    Const,
    Let,
}

impl VarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Const => "const",
            VarKind::Let => "let",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub span: Span,
    pub kind: VarKind,
    pub declarations: Vec<VarDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclarator {
    pub span: Span,
    pub id: Ident,
    pub init: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaultExpr {
    pub span: Span,
    pub expression: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    Identifier(Ident),
    StringLiteral(Str),
    NumericLiteral(Number),
    BooleanLiteral(Bool),
    ObjectExpression(ObjectLit),
    ArrowFunctionExpression(ArrowExpr),
    #[serde(rename = "JSXElement")]
    JsxElement(Box<JsxElement>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    pub span: Span,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Str {
    pub span: Span,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Number {
    pub span: Span,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bool {
    pub span: Span,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLit {
    pub span: Span,
    pub properties: Vec<KeyValueProp>,
}

/// `key: value`. Keys that are not valid identifiers are quoted by the printer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueProp {
    pub span: Span,
    pub key: String,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowExpr {
    pub span: Span,
    pub params: Vec<Ident>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub span: Span,
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Stmt {
    ReturnStatement(ReturnStmt),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub span: Span,
    pub argument: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxElement {
    pub span: Span,
    pub opening: JsxOpeningElement,
    pub children: Vec<JsxChild>,
    pub closing: Option<JsxClosingElement>,
}

impl JsxElement {
    pub fn name(&self) -> &str {
        &self.opening.name.value
    }

    /// Whether no child is itself an element.
    pub fn is_leaf(&self) -> bool {
        !self
            .children
            .iter()
            .any(|child| matches!(child, JsxChild::JsxElement(_)))
    }

    pub fn attribute(&self, name: &str) -> Option<&JsxAttr> {
        self.opening.attributes.iter().find(|a| a.name.value == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxOpeningElement {
    pub span: Span,
    pub name: Ident,
    pub attributes: Vec<JsxAttr>,
    pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsxClosingElement {
    pub span: Span,
    pub name: Ident,
}

/// An attribute; a missing value is a boolean `true` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxAttr {
    pub span: Span,
    pub name: Ident,
    pub value: Option<JsxAttrValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxAttrValue {
    StringLiteral(Str),
    #[serde(rename = "JSXExpressionContainer")]
    JsxExprContainer(JsxExprContainer),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxExprContainer {
    pub span: Span,
    pub expression: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxChild {
    #[serde(rename = "JSXText")]
    JsxText(JsxText),
    #[serde(rename = "JSXExpressionContainer")]
    JsxExprContainer(JsxExprContainer),
    #[serde(rename = "JSXElement")]
    JsxElement(Box<JsxElement>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsxText {
    pub span: Span,
    pub value: String,
}
