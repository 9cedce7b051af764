//! Syntax tree for navigation code samples.
//!
//! The tree models exactly what the transformer needs to see: imports,
//! variable declarations with object-literal / call initializers, and the
//! markup elements the synthesizer emits. Everything else is carried as a
//! verbatim source slice so unrecognized input survives a round trip.

/// Kind of a source comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

/// A comment with its delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub kind: CommentKind,
}

impl Comment {
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CommentKind::Line,
        }
    }
}

/// A string literal (inner text, escapes preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrLit {
    pub value: String,
}

/// A call expression with a (possibly dotted) callee path.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Expr>,
}

/// One `key: value` entry of an object literal, with attached comments.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Expr,
    /// Comments on the lines directly above this property.
    pub leading: Vec<Comment>,
    /// Comment on the same line, after the value.
    pub trailing: Vec<Comment>,
}

/// An object literal with properties in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectLit {
    pub props: Vec<Property>,
}

impl ObjectLit {
    /// Look up a property value by key.
    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.props.iter().find(|p| p.key == key).map(|p| &p.value)
    }
}

/// An expression.
///
/// `Raw` is the fallback for any shape the parser does not model (arrow
/// functions, member chains, operators, numbers); it holds the exact source
/// slice and prints verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    Str(StrLit),
    Object(ObjectLit),
    Call(CallExpr),
    Raw(String),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(StrLit {
            value: value.into(),
        })
    }
}

/// An `import` declaration with named and default bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub default_name: Option<String>,
    pub names: Vec<String>,
    pub module: String,
    pub blank_before: bool,
}

/// A top-level variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub exported: bool,
    /// `const`, `let` or `var`.
    pub kind: String,
    pub name: String,
    pub init: Expr,
    pub leading: Vec<Comment>,
    pub trailing: Vec<Comment>,
    pub blank_before: bool,
}

/// A statement kept as verbatim source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStmt {
    pub text: String,
    pub leading: Vec<Comment>,
    pub blank_before: bool,
}

/// A synthesized function component returning a markup tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionComponent {
    pub name: String,
    pub body: JsxElement,
    pub leading: Vec<Comment>,
    pub blank_before: bool,
}

/// A synthesized top-level markup element statement.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxBlock {
    pub element: JsxElement,
    pub blank_before: bool,
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Import(ImportDecl),
    Var(VarDecl),
    Raw(RawStmt),
    Function(FunctionComponent),
    Jsx(JsxBlock),
}

impl Stmt {
    /// Whether a blank line should precede this statement.
    pub fn blank_before(&self) -> bool {
        match self {
            Self::Import(i) => i.blank_before,
            Self::Var(v) => v.blank_before,
            Self::Raw(r) => r.blank_before,
            Self::Function(f) => f.blank_before,
            Self::Jsx(j) => j.blank_before,
        }
    }
}

/// A markup attribute value: a plain string or an expression container.
#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttrValue {
    Str(String),
    Expr(Expr),
}

/// A markup attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxAttr {
    pub name: String,
    pub value: JsxAttrValue,
}

impl JsxAttr {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: JsxAttrValue::Str(value.into()),
        }
    }

    pub fn expr(name: impl Into<String>, expr: Expr) -> Self {
        Self {
            name: name.into(),
            value: JsxAttrValue::Expr(expr),
        }
    }
}

/// A markup element; childless elements print self-closing.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    pub name: String,
    pub attrs: Vec<JsxAttr>,
    pub children: Vec<JsxElement>,
}

impl JsxElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A parsed program: an ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_get() {
        let obj = ObjectLit {
            props: vec![Property {
                key: "screen".to_owned(),
                value: Expr::ident("Home"),
                leading: Vec::new(),
                trailing: Vec::new(),
            }],
        };
        assert_eq!(obj.get("screen"), Some(&Expr::ident("Home")));
        assert_eq!(obj.get("missing"), None);
    }

    #[test]
    fn test_blank_before() {
        let stmt = Stmt::Raw(RawStmt {
            text: "x;".to_owned(),
            leading: Vec::new(),
            blank_before: true,
        });
        assert!(stmt.blank_before());
    }
}
