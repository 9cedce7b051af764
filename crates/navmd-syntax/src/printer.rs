//! Canonical source printer.
//!
//! One fixed style: two-space indentation, single-quoted strings in code,
//! double-quoted markup attribute strings, self-closing childless elements.
//! Raw statements and expressions print verbatim, so untouched sample code
//! keeps its original shape.

use std::fmt::Write;

use crate::ast::{
    Comment, CommentKind, Expr, JsxAttrValue, JsxElement, ObjectLit, Program, Stmt,
};

const INDENT: &str = "  ";

/// Serialize a program back to source text.
pub fn print_program(program: &Program) -> String {
    let mut out = String::with_capacity(1024);
    for (idx, stmt) in program.stmts.iter().enumerate() {
        if idx > 0 && stmt.blank_before() {
            out.push('\n');
        }
        write_stmt(&mut out, stmt);
    }
    out
}

/// Serialize a single statement.
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut out = String::new();
    write_stmt(&mut out, stmt);
    out
}

fn write_stmt(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Import(import) => {
            out.push_str("import ");
            if let Some(default_name) = &import.default_name {
                out.push_str(default_name);
                if !import.names.is_empty() {
                    out.push_str(", ");
                }
            }
            if !import.names.is_empty() {
                out.push_str("{ ");
                out.push_str(&import.names.join(", "));
                out.push_str(" }");
            }
            let _ = writeln!(out, " from '{}';", import.module);
        }
        Stmt::Var(var) => {
            print_comments(out, &var.leading, "");
            if var.exported {
                out.push_str("export ");
            }
            let _ = write!(out, "{} {} = {};", var.kind, var.name, print_expr(&var.init));
            for comment in &var.trailing {
                out.push(' ');
                out.push_str(&format_comment(comment));
            }
            out.push('\n');
        }
        Stmt::Raw(raw) => {
            print_comments(out, &raw.leading, "");
            if !raw.text.is_empty() {
                out.push_str(&raw.text);
                out.push('\n');
            }
        }
        Stmt::Function(function) => {
            print_comments(out, &function.leading, "");
            let _ = writeln!(out, "function {}() {{", function.name);
            out.push_str("  return (\n");
            print_jsx(out, &function.body, 2);
            out.push_str("  );\n}\n");
        }
        Stmt::Jsx(jsx) => print_jsx(out, &jsx.element, 0),
    }
}

fn print_comments(out: &mut String, comments: &[Comment], indent: &str) {
    for comment in comments {
        out.push_str(indent);
        out.push_str(&format_comment(comment));
        out.push('\n');
    }
}

/// Format a comment in code position.
pub fn format_comment(comment: &Comment) -> String {
    match comment.kind {
        CommentKind::Line => format!("// {}", comment.text),
        CommentKind::Block => format!("/* {} */", comment.text),
    }
}

/// Print an expression on a single line.
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Str(string) => quote(&string.value),
        Expr::Object(object) => print_object(object),
        Expr::Call(call) => {
            let args: Vec<String> = call.args.iter().map(print_expr).collect();
            format!("{}({})", call.callee, args.join(", "))
        }
        Expr::Raw(raw) => raw.clone(),
    }
}

fn print_object(object: &ObjectLit) -> String {
    if object.props.is_empty() {
        return "{}".to_owned();
    }
    if object_has_comments(object) {
        return print_object_multiline(object, 1);
    }
    let entries: Vec<String> = object
        .props
        .iter()
        .map(|prop| format!("{}: {}", print_key(&prop.key), print_expr(&prop.value)))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

fn object_has_comments(object: &ObjectLit) -> bool {
    object.props.iter().any(|prop| {
        !prop.leading.is_empty()
            || !prop.trailing.is_empty()
            || matches!(&prop.value, Expr::Object(inner) if object_has_comments(inner))
    })
}

/// Multiline form, used when properties carry comments the inline form
/// has no place for.
fn print_object_multiline(object: &ObjectLit, depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    let mut out = String::from("{\n");
    for prop in &object.props {
        for comment in &prop.leading {
            let _ = writeln!(out, "{indent}{}", format_comment(comment));
        }
        let value = match &prop.value {
            Expr::Object(inner) if object_has_comments(inner) => {
                print_object_multiline(inner, depth + 1)
            }
            other => print_expr(other),
        };
        let _ = write!(out, "{indent}{}: {value},", print_key(&prop.key));
        for comment in &prop.trailing {
            out.push(' ');
            out.push_str(&format_comment(comment));
        }
        out.push('\n');
    }
    out.push_str(&INDENT.repeat(depth - 1));
    out.push('}');
    out
}

fn print_key(key: &str) -> String {
    if is_ident_key(key) {
        key.to_owned()
    } else {
        quote(key)
    }
}

fn is_ident_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Quote a string value, preferring single quotes.
fn quote(value: &str) -> String {
    if has_unescaped(value, '\'') {
        format!("\"{value}\"")
    } else {
        format!("'{value}'")
    }
}

fn has_unescaped(value: &str, quote_char: char) -> bool {
    let mut escaped = false;
    for c in value.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote_char {
            return true;
        }
    }
    false
}

fn print_jsx(out: &mut String, element: &JsxElement, depth: usize) {
    let indent = INDENT.repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.name);

    for attr in &element.attrs {
        out.push(' ');
        out.push_str(&attr.name);
        match &attr.value {
            JsxAttrValue::Str(value) if !has_unescaped(value, '"') => {
                let _ = write!(out, "=\"{value}\"");
            }
            JsxAttrValue::Str(value) => {
                // falls back to an expression container when the value
                // cannot sit inside double quotes
                let _ = write!(out, "={{{}}}", quote(value));
            }
            JsxAttrValue::Expr(expr) => {
                let _ = write!(out, "={{{}}}", print_expr(expr));
            }
        }
    }

    if element.children.is_empty() {
        out.push_str(" />\n");
    } else {
        out.push_str(">\n");
        for child in &element.children {
            print_jsx(out, child, depth + 1);
        }
        let _ = writeln!(out, "{indent}</{}>", element.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        FunctionComponent, ImportDecl, JsxAttr, Property, RawStmt, StrLit, VarDecl,
    };
    use pretty_assertions::assert_eq;

    fn prop(key: &str, value: Expr) -> Property {
        Property {
            key: key.to_owned(),
            value,
            leading: Vec::new(),
            trailing: Vec::new(),
        }
    }

    #[test]
    fn test_print_import() {
        let program = Program {
            stmts: vec![Stmt::Import(ImportDecl {
                default_name: None,
                names: vec!["createStackNavigator".to_owned()],
                module: "@react-navigation/stack".to_owned(),
                blank_before: false,
            })],
        };
        assert_eq!(
            print_program(&program),
            "import { createStackNavigator } from '@react-navigation/stack';\n"
        );
    }

    #[test]
    fn test_print_import_with_default() {
        let program = Program {
            stmts: vec![Stmt::Import(ImportDecl {
                default_name: Some("React".to_owned()),
                names: vec!["useState".to_owned()],
                module: "react".to_owned(),
                blank_before: false,
            })],
        };
        assert_eq!(
            print_program(&program),
            "import React, { useState } from 'react';\n"
        );
    }

    #[test]
    fn test_print_var_with_call() {
        let program = Program {
            stmts: vec![Stmt::Var(VarDecl {
                exported: false,
                kind: "const".to_owned(),
                name: "Stack".to_owned(),
                init: Expr::Call(crate::ast::CallExpr {
                    callee: "createNativeStackNavigator".to_owned(),
                    args: Vec::new(),
                }),
                leading: Vec::new(),
                trailing: Vec::new(),
                blank_before: false,
            })],
        };
        assert_eq!(
            print_program(&program),
            "const Stack = createNativeStackNavigator();\n"
        );
    }

    #[test]
    fn test_print_inline_object() {
        let object = Expr::Object(ObjectLit {
            props: vec![
                prop("headerShown", Expr::Raw("false".to_owned())),
                prop("title", Expr::str("Overview")),
            ],
        });
        assert_eq!(
            print_expr(&object),
            "{ headerShown: false, title: 'Overview' }"
        );
    }

    #[test]
    fn test_print_quoted_key() {
        let object = Expr::Object(ObjectLit {
            props: vec![prop("initial route", Expr::str("Home"))],
        });
        assert_eq!(print_expr(&object), "{ 'initial route': 'Home' }");
    }

    #[test]
    fn test_property_comments_print_multiline() {
        let source =
            "const linkingOptions = configureLinking({\n  // highlight-next-line\n  enabled: true,\n});";
        let program = crate::parser::parse(source).unwrap();
        assert_eq!(
            print_program(&program),
            "const linkingOptions = configureLinking({\n  // highlight-next-line\n  enabled: true,\n});\n"
        );
    }

    #[test]
    fn test_trailing_property_comment_prints_after_comma() {
        let mut annotated = prop("enabled", Expr::Raw("true".to_owned()));
        annotated.trailing.push(Comment::line("keep this"));
        let object = Expr::Object(ObjectLit {
            props: vec![annotated, prop("prefix", Expr::str("app://"))],
        });
        assert_eq!(
            print_expr(&object),
            "{\n  enabled: true, // keep this\n  prefix: 'app://',\n}"
        );
    }

    #[test]
    fn test_quote_prefers_single() {
        assert_eq!(print_expr(&Expr::str("Home")), "'Home'");
        assert_eq!(print_expr(&Expr::str("it's here")), "\"it's here\"");
    }

    #[test]
    fn test_print_self_closing_element() {
        let mut element = JsxElement::new("Stack.Screen");
        element.attrs.push(JsxAttr::string("name", "Home"));
        element
            .attrs
            .push(JsxAttr::expr("component", Expr::ident("HomeScreen")));
        let mut out = String::new();
        print_jsx(&mut out, &element, 0);
        assert_eq!(
            out,
            "<Stack.Screen name=\"Home\" component={HomeScreen} />\n"
        );
    }

    #[test]
    fn test_print_nested_elements() {
        let mut navigator = JsxElement::new("Stack.Navigator");
        navigator.children.push(JsxElement::new("Stack.Screen"));
        let mut out = String::new();
        print_jsx(&mut out, &navigator, 0);
        assert_eq!(
            out,
            "<Stack.Navigator>\n  <Stack.Screen />\n</Stack.Navigator>\n"
        );
    }

    #[test]
    fn test_print_function_component() {
        let mut body = JsxElement::new("Stack.Navigator");
        body.children.push(JsxElement::new("Stack.Screen"));
        let program = Program {
            stmts: vec![Stmt::Function(FunctionComponent {
                name: "RootStack".to_owned(),
                body,
                leading: Vec::new(),
                blank_before: false,
            })],
        };
        assert_eq!(
            print_program(&program),
            "function RootStack() {\n  return (\n    <Stack.Navigator>\n      <Stack.Screen />\n    </Stack.Navigator>\n  );\n}\n"
        );
    }

    #[test]
    fn test_object_attribute_double_braces() {
        let mut element = JsxElement::new("Stack.Navigator");
        element.attrs.push(JsxAttr::expr(
            "screenOptions",
            Expr::Object(ObjectLit {
                props: vec![prop("presentation", Expr::str("modal"))],
            }),
        ));
        let mut out = String::new();
        print_jsx(&mut out, &element, 0);
        assert_eq!(
            out,
            "<Stack.Navigator screenOptions={{ presentation: 'modal' }} />\n"
        );
    }

    #[test]
    fn test_blank_line_between_statements() {
        let program = Program {
            stmts: vec![
                Stmt::Raw(RawStmt {
                    text: "const a = 1;".to_owned(),
                    leading: Vec::new(),
                    blank_before: false,
                }),
                Stmt::Raw(RawStmt {
                    text: "const b = 2;".to_owned(),
                    leading: Vec::new(),
                    blank_before: true,
                }),
            ],
        };
        assert_eq!(print_program(&program), "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn test_leading_and_trailing_comments() {
        let program = Program {
            stmts: vec![Stmt::Var(VarDecl {
                exported: false,
                kind: "const".to_owned(),
                name: "x".to_owned(),
                init: Expr::Str(StrLit {
                    value: "y".to_owned(),
                }),
                leading: vec![Comment::line("setup")],
                trailing: vec![Comment::line("done")],
                blank_before: false,
            })],
        };
        assert_eq!(print_program(&program), "// setup\nconst x = 'y'; // done\n");
    }

    #[test]
    fn test_print_parse_round_trip() {
        let source = "import { createStackNavigator } from '@react-navigation/stack';\n\nconst Stack = createStackNavigator();\n";
        let program = crate::parser::parse(source).unwrap();
        assert_eq!(print_program(&program), source);
    }
}
