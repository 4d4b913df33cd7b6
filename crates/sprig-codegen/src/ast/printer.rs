//! Source text emission for the interchange tree.
//!
//! Output uses two-space indentation, single-quoted strings and a blank line
//! between top-level items. It is already close to canonical, so the
//! formatter pass usually has little to do.

use super::*;

/// Print a whole module.
pub fn print_module(module: &Module) -> String {
    let mut printer = Printer::new();
    printer.module(module);
    printer.finish()
}

/// Print one element tree starting at column 0.
pub fn print_jsx(element: &JsxElement) -> String {
    let mut printer = Printer::new();
    printer.element(element);
    printer.finish()
}

/// Indenting source writer.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
    }

    fn newline(&mut self) {
        self.out.push('\n');
    }

    pub fn module(&mut self, module: &Module) {
        for (i, item) in module.body.iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            self.module_item(item);
            self.newline();
        }
    }

    fn module_item(&mut self, item: &ModuleItem) {
        self.write_indent();
        match item {
            ModuleItem::ImportDeclaration(import) => {
                let names: Vec<&str> = import
                    .specifiers
                    .iter()
                    .map(|spec| match spec {
                        ImportSpecifier::ImportDefaultSpecifier(s) => s.local.value.as_str(),
                    })
                    .collect();
                self.out.push_str(&format!(
                    "import {} from {};",
                    names.join(", "),
                    js_string(&import.source.value)
                ));
            }
            ModuleItem::VariableDeclaration(decl) => {
                for (i, declarator) in decl.declarations.iter().enumerate() {
                    if i > 0 {
                        self.newline();
                        self.write_indent();
                    }
                    self.out.push_str(decl.kind.as_str());
                    self.out.push(' ');
                    self.out.push_str(&declarator.id.value);
                    if let Some(init) = &declarator.init {
                        self.out.push_str(" = ");
                        self.expr(init);
                    }
                    self.out.push(';');
                }
            }
            ModuleItem::ExportDefaultExpression(export) => {
                self.out.push_str("export default ");
                self.expr(&export.expression);
                self.out.push(';');
            }
        }
    }

    /// Print an expression at the current position.
    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::ArrowFunctionExpression(arrow) => {
                let params: Vec<&str> = arrow.params.iter().map(|p| p.value.as_str()).collect();
                self.out.push_str(&format!("({}) => ", params.join(", ")));
                self.block(&arrow.body);
            }
            Expr::JsxElement(element) => self.element(element),
            other => self.out.push_str(&inline_expr(other)),
        }
    }

    fn block(&mut self, block: &BlockStmt) {
        if block.stmts.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        self.newline();
        self.indent += 1;
        for stmt in &block.stmts {
            self.write_indent();
            self.stmt(stmt);
            self.newline();
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::ReturnStatement(ret) => match ret.argument.as_deref() {
                None => self.out.push_str("return;"),
                Some(Expr::JsxElement(element)) if !element.is_leaf() => {
                    self.out.push_str("return (");
                    self.newline();
                    self.indent += 1;
                    self.write_indent();
                    self.element(element);
                    self.newline();
                    self.indent -= 1;
                    self.write_indent();
                    self.out.push_str(");");
                }
                Some(argument) => {
                    self.out.push_str("return ");
                    self.expr(argument);
                    self.out.push(';');
                }
            },
        }
    }

    /// Print an element. The cursor is assumed to be already indented.
    pub fn element(&mut self, element: &JsxElement) {
        self.out.push_str(&opening_tag(&element.opening));
        if element.opening.self_closing {
            return;
        }

        if element.is_leaf() {
            for child in &element.children {
                self.out.push_str(&inline_child(child));
            }
        } else {
            self.newline();
            self.indent += 1;
            for child in &element.children {
                self.write_indent();
                match child {
                    JsxChild::JsxElement(nested) => self.element(nested),
                    other => self.out.push_str(&inline_child(other)),
                }
                self.newline();
            }
            self.indent -= 1;
            self.write_indent();
        }

        self.out.push_str(&format!("</{}>", element.name()));
    }
}

fn opening_tag(opening: &JsxOpeningElement) -> String {
    let mut tag = format!("<{}", opening.name.value);
    for attr in &opening.attributes {
        tag.push(' ');
        tag.push_str(&attr.name.value);
        match &attr.value {
            None => {}
            Some(JsxAttrValue::StringLiteral(s)) => {
                tag.push_str(&format!("=\"{}\"", s.value.replace('"', "&quot;")));
            }
            Some(JsxAttrValue::JsxExprContainer(container)) => {
                tag.push_str(&format!("={{{}}}", inline_expr(&container.expression)));
            }
        }
    }
    tag.push_str(if opening.self_closing { " />" } else { ">" });
    tag
}

fn inline_child(child: &JsxChild) -> String {
    match child {
        JsxChild::JsxText(text) => text.value.clone(),
        JsxChild::JsxExprContainer(container) => format!("{{{}}}", inline_expr(&container.expression)),
        JsxChild::JsxElement(element) => print_jsx(element),
    }
}

/// Single-line rendering of an expression.
fn inline_expr(expr: &Expr) -> String {
    match expr {
        Expr::Identifier(ident) => ident.value.clone(),
        Expr::StringLiteral(s) => js_string(&s.value),
        Expr::NumericLiteral(n) => js_number(n.value),
        Expr::BooleanLiteral(b) => b.value.to_string(),
        Expr::ObjectExpression(object) => {
            if object.properties.is_empty() {
                return "{}".to_string();
            }
            let props: Vec<String> = object
                .properties
                .iter()
                .map(|prop| format!("{}: {}", property_key(&prop.key), inline_expr(&prop.value)))
                .collect();
            format!("{{ {} }}", props.join(", "))
        }
        Expr::ArrowFunctionExpression(_) | Expr::JsxElement(_) => {
            let mut printer = Printer::new();
            printer.expr(expr);
            printer.finish()
        }
    }
}

fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single-quoted JavaScript string literal.
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// JavaScript numeric literal; integral values print without a fraction.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let literal = if value > 0.0 { "Infinity" } else { "-Infinity" };
        literal.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::*;
    use super::*;
    use sprig_style::StyleMap;

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("plain"), "'plain'");
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("a\nb"), "'a\\nb'");
    }

    #[test]
    fn test_js_number() {
        assert_eq!(js_number(16.0), "16");
        assert_eq!(js_number(0.5), "0.5");
        assert_eq!(js_number(-2.0), "-2");
        assert_eq!(js_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_print_module() {
        let root = element(
            "div",
            vec![string_attribute("className", "flex gap-4")],
            vec![child(text_element(
                "span",
                vec![string_attribute("className", "text-sm")],
                "Hi",
            ))],
        );
        let module = module(vec![
            import_default("React", "react"),
            component_declaration("Card", root),
            default_export("Card"),
        ]);

        let expected = "\
import React from 'react';

const Card = () => {
  return (
    <div className=\"flex gap-4\">
      <span className=\"text-sm\">Hi</span>
    </div>
  );
};

export default Card;
";
        assert_eq!(print_module(&module), expected);
    }

    #[test]
    fn test_leaf_returns_on_one_line() {
        let module = module(vec![component_declaration(
            "Dot",
            element("div", vec![boolean_attribute("hidden")], vec![]),
        )]);
        assert_eq!(
            print_module(&module),
            "const Dot = () => {\n  return <div hidden />;\n};\n"
        );
    }

    #[test]
    fn test_style_attribute() {
        let mut styles = StyleMap::new();
        styles.insert("backgroundColor".into(), "rgb(1, 2, 3)".into());
        styles.insert("gap".into(), 16.0.into());
        styles.insert("-webkit-box".into(), "x".into());

        let el = element("div", vec![expression_attribute("style", style_object(&styles))], vec![]);
        insta::assert_snapshot!(
            print_jsx(&el),
            @"<div style={{ backgroundColor: 'rgb(1, 2, 3)', gap: 16, '-webkit-box': 'x' }} />"
        );
    }

    #[test]
    fn test_escaped_text_child() {
        let el = text_element("span", vec![], "a < b");
        assert_eq!(print_jsx(&el), "<span>{'a < b'}</span>");
    }

    #[test]
    fn test_nested_indentation() {
        let el = element(
            "div",
            vec![],
            vec![
                child(element("div", vec![], vec![child(element("br", vec![], vec![]))])),
                child(text_element("span", vec![], "x")),
            ],
        );
        assert_eq!(
            print_jsx(&el),
            "<div>\n  <div>\n    <br />\n  </div>\n  <span>x</span>\n</div>"
        );
    }
}
