//! Parsing and printing for navigation code samples.
//!
//! This crate turns a JavaScript code sample into a small statement-level
//! syntax tree and back. It is deliberately not a general JavaScript
//! parser: the statement and expression shapes that matter to the
//! static-to-dynamic transform are modeled precisely, and everything else
//! is carried as verbatim source slices that survive reprinting untouched.
//!
//! Comments are preserved as tokens and attached to the statement or
//! property they precede (leading) or share a line with (trailing), which
//! is what lets the transformer track annotation comments across a full
//! rebuild of the tree.
//!
//! # Example
//!
//! ```
//! use navmd_syntax::{parse, print_program};
//!
//! let source = "const Stack = createStackNavigator();\n";
//! let program = parse(source).unwrap();
//! assert_eq!(print_program(&program), source);
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
mod printer;

pub use ast::{
    CallExpr, Comment, CommentKind, Expr, FunctionComponent, ImportDecl, JsxAttr, JsxAttrValue,
    JsxBlock, JsxElement, ObjectLit, Program, Property, RawStmt, StrLit, Stmt, VarDecl,
};
pub use error::ParseError;
pub use lexer::{Token, TokenKind, lex};
pub use parser::parse;
pub use printer::{format_comment, print_expr, print_program, print_stmt};
