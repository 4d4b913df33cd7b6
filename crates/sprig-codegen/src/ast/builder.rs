//! Constructors for interchange tree nodes.

use super::*;
use sprig_style::{StyleMap, StyleValue};

pub fn ident(value: impl Into<String>) -> Ident {
    Ident {
        span: Span::DUMMY,
        value: value.into(),
    }
}

pub fn str_lit(value: impl Into<String>) -> Str {
    Str {
        span: Span::DUMMY,
        value: value.into(),
    }
}

pub fn number(value: f64) -> Expr {
    Expr::NumericLiteral(Number {
        span: Span::DUMMY,
        value,
    })
}

pub fn string(value: impl Into<String>) -> Expr {
    Expr::StringLiteral(str_lit(value))
}

/// `import <local> from '<source>';`
pub fn import_default(local: &str, source: &str) -> ModuleItem {
    ModuleItem::ImportDeclaration(ImportDecl {
        span: Span::DUMMY,
        specifiers: vec![ImportSpecifier::ImportDefaultSpecifier(
            ImportDefaultSpecifier {
                span: Span::DUMMY,
                local: ident(local),
            },
        )],
        source: str_lit(source),
    })
}

/// `const <name> = () => { return <root>; };`
pub fn component_declaration(name: &str, root: JsxElement) -> ModuleItem {
    let body = BlockStmt {
        span: Span::DUMMY,
        stmts: vec![Stmt::ReturnStatement(ReturnStmt {
            span: Span::DUMMY,
            argument: Some(Box::new(Expr::JsxElement(Box::new(root)))),
        })],
    };

    ModuleItem::VariableDeclaration(VarDecl {
        span: Span::DUMMY,
        kind: VarKind::Const,
        declarations: vec![VarDeclarator {
            span: Span::DUMMY,
            id: ident(name),
            init: Some(Box::new(Expr::ArrowFunctionExpression(ArrowExpr {
                span: Span::DUMMY,
                params: Vec::new(),
                body,
            }))),
        }],
    })
}

/// `export default <name>;`
pub fn default_export(name: &str) -> ModuleItem {
    ModuleItem::ExportDefaultExpression(ExportDefaultExpr {
        span: Span::DUMMY,
        expression: Box::new(Expr::Identifier(ident(name))),
    })
}

pub fn module(body: Vec<ModuleItem>) -> Module {
    Module {
        span: Span::DUMMY,
        body,
    }
}

/// An element; self-closing when it has no children.
pub fn element(tag: &str, attributes: Vec<JsxAttr>, children: Vec<JsxChild>) -> JsxElement {
    let self_closing = children.is_empty();
    JsxElement {
        span: Span::DUMMY,
        opening: JsxOpeningElement {
            span: Span::DUMMY,
            name: ident(tag),
            attributes,
            self_closing,
        },
        children,
        closing: (!self_closing).then(|| JsxClosingElement {
            span: Span::DUMMY,
            name: ident(tag),
        }),
    }
}

/// An element whose only child is `text`.
pub fn text_element(tag: &str, attributes: Vec<JsxAttr>, text: &str) -> JsxElement {
    element(tag, attributes, vec![text_child(text)])
}

/// A text child. Text JSX would reinterpret or trim is wrapped in a string
/// expression so it survives verbatim.
pub fn text_child(text: &str) -> JsxChild {
    let needs_expression = text.is_empty()
        || text.trim() != text
        || text.contains(|c| matches!(c, '{' | '}' | '<' | '>' | '&' | '\n' | '\r'));

    if needs_expression {
        JsxChild::JsxExprContainer(JsxExprContainer {
            span: Span::DUMMY,
            expression: Box::new(string(text)),
        })
    } else {
        JsxChild::JsxText(JsxText {
            span: Span::DUMMY,
            value: text.to_string(),
        })
    }
}

pub fn child(element: JsxElement) -> JsxChild {
    JsxChild::JsxElement(Box::new(element))
}

/// `name="value"`
pub fn string_attribute(name: &str, value: impl Into<String>) -> JsxAttr {
    JsxAttr {
        span: Span::DUMMY,
        name: ident(name),
        value: Some(JsxAttrValue::StringLiteral(str_lit(value))),
    }
}

/// `name={expression}`
pub fn expression_attribute(name: &str, expression: Expr) -> JsxAttr {
    JsxAttr {
        span: Span::DUMMY,
        name: ident(name),
        value: Some(JsxAttrValue::JsxExprContainer(JsxExprContainer {
            span: Span::DUMMY,
            expression: Box::new(expression),
        })),
    }
}

/// A valueless attribute, e.g. `hidden`.
pub fn boolean_attribute(name: &str) -> JsxAttr {
    JsxAttr {
        span: Span::DUMMY,
        name: ident(name),
        value: None,
    }
}

/// Object literal with one property per style entry, in map order.
pub fn style_object(styles: &StyleMap) -> Expr {
    let properties = styles
        .iter()
        .map(|(key, value)| KeyValueProp {
            span: Span::DUMMY,
            key: key.clone(),
            value: Box::new(match value {
                StyleValue::Number(n) => number(*n),
                StyleValue::String(s) => string(s.as_str()),
            }),
        })
        .collect();

    Expr::ObjectExpression(ObjectLit {
        span: Span::DUMMY,
        properties,
    })
}
