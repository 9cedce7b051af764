//! Recursive-descent parser for top-level statements.
//!
//! Only the shapes the transformer cares about are modeled: imports and
//! variable declarations whose initializers are identifiers, strings,
//! object literals or calls. Any other statement or expression is captured
//! as a verbatim source slice via balanced-delimiter scanning, so arbitrary
//! sample code passes through unchanged.
//!
//! Comment attachment: comments on the lines above a statement or property
//! are leading; a comment on the same line after it is trailing.

use crate::ast::{
    CallExpr, Comment, CommentKind, Expr, ImportDecl, ObjectLit, Program, Property, RawStmt,
    StrLit, Stmt, VarDecl,
};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind, lex};

/// Parse a source string into a [`Program`].
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
    };
    Ok(parser.parse_program())
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn parse_program(&mut self) -> Program {
        let mut stmts = Vec::new();
        let mut prev_end_line: Option<usize> = None;

        while self.pos < self.tokens.len() {
            let first_line = self.tokens[self.pos].line;
            let blank_before = prev_end_line.is_some_and(|prev| first_line > prev + 1);
            let leading = self.take_leading_comments();

            if self.pos >= self.tokens.len() {
                // Comments at end of input with nothing to attach to.
                if !leading.is_empty() {
                    stmts.push(Stmt::Raw(RawStmt {
                        text: String::new(),
                        leading,
                        blank_before,
                    }));
                }
                break;
            }

            let stmt = self.parse_statement(leading, blank_before);
            prev_end_line = Some(self.tokens[self.pos - 1].line);
            stmts.push(stmt);
        }

        Program { stmts }
    }

    fn parse_statement(&mut self, leading: Vec<Comment>, blank_before: bool) -> Stmt {
        let start = self.pos;
        let token = &self.tokens[self.pos];

        if token.kind == TokenKind::Ident {
            match token.text.as_str() {
                "import" => {
                    if let Some(import) = self.try_parse_import(blank_before) {
                        // Imports keep any stray leading comments as a raw line
                        // above them; samples rarely comment imports.
                        if leading.is_empty() {
                            return Stmt::Import(import);
                        }
                        self.pos = start;
                    }
                }
                "export" => {
                    let next_is_decl = self.tokens.get(self.pos + 1).is_some_and(|t| {
                        t.kind == TokenKind::Ident
                            && matches!(t.text.as_str(), "const" | "let" | "var")
                    });
                    if next_is_decl {
                        if let Some((kind, name, init, trailing)) = self.try_parse_var(true) {
                            return Stmt::Var(VarDecl {
                                exported: true,
                                kind,
                                name,
                                init,
                                leading,
                                trailing,
                                blank_before,
                            });
                        }
                    }
                }
                "const" | "let" | "var" => {
                    if let Some((kind, name, init, trailing)) = self.try_parse_var(false) {
                        return Stmt::Var(VarDecl {
                            exported: false,
                            kind,
                            name,
                            init,
                            leading,
                            trailing,
                            blank_before,
                        });
                    }
                }
                _ => {}
            }
        }

        self.pos = start;
        self.parse_raw_stmt(leading, blank_before)
    }

    /// Parse `import Default, { a, b as c } from 'module';`.
    ///
    /// Returns `None` (with position restored) for any other import shape;
    /// the statement is then kept verbatim.
    fn try_parse_import(&mut self, blank_before: bool) -> Option<ImportDecl> {
        let start = self.pos;
        self.pos += 1; // `import`

        let mut default_name = None;
        if let Some(t) = self.peek() {
            if t.kind == TokenKind::Ident {
                default_name = Some(t.text.clone());
                self.pos += 1;
                self.eat_punct(',');
            }
        }

        let mut names = Vec::new();
        if self.peek().is_some_and(|t| t.is_punct('{')) {
            self.pos += 1;
            loop {
                match self.peek() {
                    Some(t) if t.is_punct('}') => {
                        self.pos += 1;
                        break;
                    }
                    Some(t) if t.is_punct(',') => self.pos += 1,
                    Some(t) if t.kind == TokenKind::Ident => {
                        let name = t.text.clone();
                        self.pos += 1;
                        // `orig as alias` binds the alias
                        if self
                            .peek()
                            .is_some_and(|n| n.kind == TokenKind::Ident && n.text == "as")
                        {
                            self.pos += 1;
                            match self.peek() {
                                Some(a) if a.kind == TokenKind::Ident => {
                                    names.push(a.text.clone());
                                    self.pos += 1;
                                }
                                _ => {
                                    self.pos = start;
                                    return None;
                                }
                            }
                        } else {
                            names.push(name);
                        }
                    }
                    _ => {
                        self.pos = start;
                        return None;
                    }
                }
            }
        }

        if default_name.is_none() && names.is_empty() {
            self.pos = start;
            return None;
        }

        if !self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Ident && t.text == "from")
        {
            self.pos = start;
            return None;
        }
        self.pos += 1;

        let module = match self.peek() {
            Some(t) if t.kind == TokenKind::Str => {
                let module = t.string_value().to_owned();
                self.pos += 1;
                module
            }
            _ => {
                self.pos = start;
                return None;
            }
        };
        self.eat_punct(';');

        Some(ImportDecl {
            default_name,
            names,
            module,
            blank_before,
        })
    }

    /// Parse `[export] const name = <expr>;`.
    fn try_parse_var(&mut self, exported: bool) -> Option<(String, String, Expr, Vec<Comment>)> {
        let start = self.pos;
        if exported {
            self.pos += 1;
        }

        let kind = self.tokens[self.pos].text.clone();
        self.pos += 1;

        let name = match self.peek() {
            Some(t) if t.kind == TokenKind::Ident => {
                let name = t.text.clone();
                self.pos += 1;
                name
            }
            _ => {
                self.pos = start;
                return None;
            }
        };

        if !self.eat_punct('=') {
            self.pos = start;
            return None;
        }

        let Some(init) = self.parse_expr() else {
            self.pos = start;
            return None;
        };

        // Statement must end here: `;`, end of input, a trailing comment, or
        // a line break. Anything else means the initializer was larger than
        // what we parsed (multi-declarator, operators), so fall back to raw.
        let last_line = self.tokens[self.pos - 1].line;
        match self.tokens.get(self.pos) {
            None => {}
            Some(t) if t.is_punct(';') => self.pos += 1,
            Some(t) if t.is_comment() => {}
            Some(t) if t.line > last_line && !is_expr_continuation(t) => {}
            _ => {
                self.pos = start;
                return None;
            }
        }

        let trailing = self.take_same_line_comments();
        Some((kind, name, init, trailing))
    }

    /// Parse one expression, falling back to a verbatim slice.
    ///
    /// Returns `None` only at end of input.
    fn parse_expr(&mut self) -> Option<Expr> {
        self.skip_comments();
        let start = self.pos;
        let token = self.peek()?.clone();

        let expr = match token.kind {
            TokenKind::Str => {
                self.pos += 1;
                Expr::Str(StrLit {
                    value: token.string_value().to_owned(),
                })
            }
            TokenKind::Ident => {
                let mut path = token.text.clone();
                self.pos += 1;
                // dotted member path
                while self.peek().is_some_and(|t| t.is_punct('.'))
                    && self
                        .tokens
                        .get(self.pos + 1)
                        .is_some_and(|t| t.kind == TokenKind::Ident)
                {
                    path.push('.');
                    path.push_str(&self.tokens[self.pos + 1].text);
                    self.pos += 2;
                }
                if self.peek().is_some_and(|t| t.is_punct('(')) {
                    self.pos += 1;
                    let mut args = Vec::new();
                    loop {
                        self.skip_comments();
                        match self.peek() {
                            None => break,
                            Some(t) if t.is_punct(')') => {
                                self.pos += 1;
                                break;
                            }
                            Some(t) if t.is_punct(',') => self.pos += 1,
                            Some(_) => match self.parse_expr() {
                                Some(arg) => args.push(arg),
                                None => break,
                            },
                        }
                    }
                    Expr::Call(CallExpr { callee: path, args })
                } else {
                    Expr::Ident(path)
                }
            }
            TokenKind::Punct('{') => match self.parse_object() {
                Some(object) => Expr::Object(object),
                None => {
                    self.pos = start;
                    return Some(self.raw_expr());
                }
            },
            _ => return Some(self.raw_expr()),
        };

        // Something follows that makes this part of a larger expression
        // (`a ? b : c`, `x.y(z).w`, tagged templates); rescan verbatim.
        // A `,` ends the expression here: it separates properties and
        // call arguments, which the callers consume themselves.
        if self
            .peek()
            .is_some_and(|t| is_expr_continuation(t) && !t.is_punct(','))
        {
            self.pos = start;
            return Some(self.raw_expr());
        }

        Some(expr)
    }

    /// Parse an object literal.
    ///
    /// Returns `None` (with position restored) when an entry has a shape we
    /// do not model (spread, computed key, method); the caller then keeps
    /// the whole object verbatim.
    fn parse_object(&mut self) -> Option<ObjectLit> {
        let start = self.pos;
        if !self.eat_punct('{') {
            return None;
        }

        let mut props: Vec<Property> = Vec::new();
        loop {
            let pending = self.take_leading_comments();

            let Some(token) = self.peek().cloned() else {
                self.pos = start;
                return None;
            };

            if token.is_punct('}') {
                // Comments on their own line before `}` hang off the last
                // property; typically `*-end` annotation markers. An empty
                // object has nowhere to hang them, so keep it verbatim.
                if props.is_empty() && !pending.is_empty() {
                    self.pos = start;
                    return None;
                }
                self.pos += 1;
                if let Some(last) = props.last_mut() {
                    last.trailing.extend(pending);
                }
                break;
            }

            let key = match token.kind {
                TokenKind::Ident => token.text.clone(),
                TokenKind::Str => token.string_value().to_owned(),
                _ => {
                    self.pos = start;
                    return None;
                }
            };
            self.pos += 1;

            let value = if self.eat_punct(':') {
                let Some(value) = self.parse_expr() else {
                    self.pos = start;
                    return None;
                };
                value
            } else {
                // shorthand `{ Home }` binds the identifier of the same name
                match self.peek_non_comment() {
                    Some(t) if t.is_punct(',') || t.is_punct('}') => Expr::Ident(key.clone()),
                    _ => {
                        self.pos = start;
                        return None;
                    }
                }
            };

            let mut trailing = self.take_same_line_comments();
            self.eat_punct(',');
            trailing.extend(self.take_same_line_comments());

            props.push(Property {
                key,
                value,
                leading: pending,
                trailing,
            });
        }

        Some(ObjectLit { props })
    }

    /// Capture a verbatim expression slice with balanced delimiters.
    ///
    /// Stops before `,`, `;` or an unmatched closing delimiter at depth
    /// zero, and at a line break once the expression could end.
    fn raw_expr(&mut self) -> Expr {
        let start = self.pos;
        let mut depth = 0usize;
        let mut last_sig: Option<usize> = None;

        while let Some(token) = self.tokens.get(self.pos).cloned() {
            if token.is_comment() {
                if depth == 0 {
                    if let Some(idx) = last_sig {
                        if token.line > self.tokens[idx].line && can_end_expr(&self.tokens[idx]) {
                            break;
                        }
                    }
                }
                self.pos += 1;
                continue;
            }

            match token.kind {
                TokenKind::Punct('(' | '[' | '{') => depth += 1,
                TokenKind::Punct(')' | ']' | '}') => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                TokenKind::Punct(',' | ';') if depth == 0 => break,
                _ => {}
            }

            last_sig = Some(self.pos);
            self.pos += 1;

            if depth == 0 {
                if let Some(next) = self.peek_non_comment() {
                    if next.line > token.line
                        && can_end_expr(&token)
                        && !is_expr_continuation(next)
                    {
                        break;
                    }
                }
            }
        }

        match last_sig {
            Some(idx) => {
                let first = &self.tokens[start];
                let last = &self.tokens[idx];
                Expr::Raw(self.source[first.start..last.end].to_owned())
            }
            None => Expr::Raw(String::new()),
        }
    }

    /// Capture a verbatim statement slice with balanced delimiters.
    ///
    /// Handles semicolon-terminated statements, brace-terminated bodies
    /// (function declarations) and light automatic-semicolon-insertion at
    /// line breaks.
    fn parse_raw_stmt(&mut self, leading: Vec<Comment>, blank_before: bool) -> Stmt {
        let start = self.pos;
        let mut depth = 0usize;
        let mut opened_brace = false;
        let mut last_sig = start;

        while let Some(token) = self.tokens.get(self.pos).cloned() {
            if token.is_comment() {
                if depth == 0 && token.line > self.tokens[last_sig].line {
                    break;
                }
                self.pos += 1;
                continue;
            }

            let mut closed_body = false;
            match token.kind {
                TokenKind::Punct('(' | '[') => depth += 1,
                TokenKind::Punct('{') => {
                    depth += 1;
                    opened_brace = true;
                }
                TokenKind::Punct(')' | ']') => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                TokenKind::Punct('}') => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    closed_body = depth == 0 && opened_brace;
                }
                _ => {}
            }

            last_sig = self.pos;
            self.pos += 1;

            if depth == 0 {
                if token.is_punct(';') || closed_body {
                    break;
                }
                match self.peek_non_comment() {
                    Some(next)
                        if next.line > token.line
                            && can_end_expr(&token)
                            && !is_expr_continuation(next) =>
                    {
                        break;
                    }
                    None => break,
                    Some(_) => {}
                }
            }
        }

        // Never stall on a stray token.
        if self.pos == start {
            self.pos += 1;
        }

        // A comment on the same closing line rides along verbatim.
        while let Some(token) = self.tokens.get(self.pos) {
            if token.is_comment() && token.line == self.tokens[last_sig].line {
                last_sig = self.pos;
                self.pos += 1;
            } else {
                break;
            }
        }

        let first = &self.tokens[start];
        let last = &self.tokens[last_sig];
        Stmt::Raw(RawStmt {
            text: self.source[first.start..last.end].to_owned(),
            leading,
            blank_before,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_non_comment(&self) -> Option<&Token> {
        self.tokens[self.pos..].iter().find(|t| !t.is_comment())
    }

    fn eat_punct(&mut self, c: char) -> bool {
        if self.peek().is_some_and(|t| t.is_punct(c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_comments(&mut self) {
        while self.peek().is_some_and(Token::is_comment) {
            self.pos += 1;
        }
    }

    fn take_leading_comments(&mut self) -> Vec<Comment> {
        let mut comments = Vec::new();
        while let Some(token) = self.peek() {
            if token.is_comment() {
                comments.push(to_comment(token));
                self.pos += 1;
            } else {
                break;
            }
        }
        comments
    }

    /// Comments on the same line as the most recently consumed token.
    fn take_same_line_comments(&mut self) -> Vec<Comment> {
        let mut comments = Vec::new();
        if self.pos == 0 {
            return comments;
        }
        let line = self.tokens[self.pos - 1].line;
        while let Some(token) = self.peek() {
            if token.is_comment() && token.line == line {
                comments.push(to_comment(token));
                self.pos += 1;
            } else {
                break;
            }
        }
        comments
    }
}

fn to_comment(token: &Token) -> Comment {
    Comment {
        text: token.comment_text().to_owned(),
        kind: match token.kind {
            TokenKind::BlockComment => CommentKind::Block,
            _ => CommentKind::Line,
        },
    }
}

/// Tokens that cannot start a fresh statement, so a line break before them
/// does not end the current expression.
fn is_expr_continuation(token: &Token) -> bool {
    match token.kind {
        TokenKind::Arrow | TokenKind::Template => true,
        TokenKind::Punct(c) => matches!(c, '+' | '-' | '*' | '/' | '%' | '?' | ':' | '&' | '|' | '=' | '.' | ','),
        _ => false,
    }
}

/// Tokens that can be the last token of a complete expression.
fn can_end_expr(token: &Token) -> bool {
    match token.kind {
        TokenKind::Ident | TokenKind::Str | TokenKind::Number | TokenKind::Template => true,
        TokenKind::Punct(c) => matches!(c, ')' | ']' | '}'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_one(source: &str) -> Stmt {
        let program = parse(source).unwrap();
        assert_eq!(program.stmts.len(), 1, "expected one statement");
        program.stmts.into_iter().next().unwrap()
    }

    #[test]
    fn test_const_with_call_initializer() {
        let stmt = parse_one("const Stack = createStackNavigator({});");
        let Stmt::Var(var) = stmt else {
            panic!("expected var decl")
        };
        assert_eq!(var.name, "Stack");
        assert_eq!(var.kind, "const");
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        assert_eq!(call.callee, "createStackNavigator");
        assert_eq!(call.args, vec![Expr::Object(ObjectLit::default())]);
    }

    #[test]
    fn test_object_properties_in_order() {
        let stmt = parse_one("const c = f({ b: B, a: A });");
        let Stmt::Var(var) = stmt else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        let Expr::Object(obj) = &call.args[0] else {
            panic!("expected object")
        };
        let keys: Vec<&str> = obj.props.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_shorthand_property() {
        let stmt = parse_one("const c = f({ Home });");
        let Stmt::Var(var) = stmt else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        let Expr::Object(obj) = &call.args[0] else {
            panic!("expected object")
        };
        assert_eq!(obj.props[0].key, "Home");
        assert_eq!(obj.props[0].value, Expr::ident("Home"));
    }

    #[test]
    fn test_string_keys_and_values() {
        let stmt = parse_one("const c = f({ 'initial route': 'Home' });");
        let Stmt::Var(var) = stmt else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        let Expr::Object(obj) = &call.args[0] else {
            panic!("expected object")
        };
        assert_eq!(obj.props[0].key, "initial route");
        assert_eq!(obj.props[0].value, Expr::str("Home"));
    }

    #[test]
    fn test_leading_comment_attaches_to_property() {
        let source = "const c = f({\n  // above Home\n  Home: HomeScreen,\n});";
        let Stmt::Var(var) = parse_one(source) else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        let Expr::Object(obj) = &call.args[0] else {
            panic!("expected object")
        };
        assert_eq!(obj.props[0].leading, vec![Comment::line("above Home")]);
    }

    #[test]
    fn test_trailing_comment_same_line() {
        let source = "const c = f({\n  Home: HomeScreen, // highlight-next-line\n});";
        let Stmt::Var(var) = parse_one(source) else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        let Expr::Object(obj) = &call.args[0] else {
            panic!("expected object")
        };
        assert_eq!(
            obj.props[0].trailing,
            vec![Comment::line("highlight-next-line")]
        );
    }

    #[test]
    fn test_dangling_comment_attaches_to_last_property() {
        let source = "const c = f({\n  Home: HomeScreen,\n  // highlight-end\n});";
        let Stmt::Var(var) = parse_one(source) else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        let Expr::Object(obj) = &call.args[0] else {
            panic!("expected object")
        };
        assert_eq!(obj.props[0].trailing, vec![Comment::line("highlight-end")]);
    }

    #[test]
    fn test_values_before_commas_stay_modeled() {
        let source = "const title = 'App';\nconst c = f({\n  screens: {\n    Home: HomeScreen,\n    Profile: ProfileScreen,\n  },\n  initialRouteName: 'Home',\n});";
        let program = parse(source).unwrap();
        let Stmt::Var(var) = &program.stmts[1] else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = &var.init else {
            panic!("expected call")
        };
        let Expr::Object(obj) = &call.args[0] else {
            panic!("expected object")
        };
        let Expr::Object(screens) = &obj.props[0].value else {
            panic!("expected screens to parse as an object")
        };
        assert_eq!(screens.props[0].value, Expr::ident("HomeScreen"));
        assert_eq!(screens.props[1].value, Expr::ident("ProfileScreen"));
        assert_eq!(obj.props[1].value, Expr::str("Home"));
    }

    #[test]
    fn test_commas_between_call_arguments() {
        let stmt = parse_one("const c = f(HomeScreen, 'Home');");
        let Stmt::Var(var) = stmt else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        assert_eq!(call.args, vec![Expr::ident("HomeScreen"), Expr::str("Home")]);
    }

    #[test]
    fn test_empty_object_with_comment_kept_verbatim() {
        let Stmt::Var(var) = parse_one("const c = f({\n  // placeholder\n});") else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        assert_eq!(call.args[0], Expr::Raw("{\n  // placeholder\n}".to_owned()));
    }

    #[test]
    fn test_import_named() {
        let stmt = parse_one("import { createStackNavigator } from '@react-navigation/stack';");
        let Stmt::Import(import) = stmt else {
            panic!("expected import")
        };
        assert_eq!(import.names, vec!["createStackNavigator"]);
        assert_eq!(import.module, "@react-navigation/stack");
        assert_eq!(import.default_name, None);
    }

    #[test]
    fn test_import_default_and_named() {
        let stmt = parse_one("import React, { useState as useLocal } from 'react';");
        let Stmt::Import(import) = stmt else {
            panic!("expected import")
        };
        assert_eq!(import.default_name.as_deref(), Some("React"));
        assert_eq!(import.names, vec!["useLocal"]);
    }

    #[test]
    fn test_side_effect_import_kept_raw() {
        let stmt = parse_one("import 'react-native-gesture-handler';");
        let Stmt::Raw(raw) = stmt else {
            panic!("expected raw statement")
        };
        assert_eq!(raw.text, "import 'react-native-gesture-handler';");
    }

    #[test]
    fn test_function_declaration_kept_raw() {
        let source = "function HomeScreen() {\n  return null;\n}";
        let Stmt::Raw(raw) = parse_one(source) else {
            panic!("expected raw statement")
        };
        assert_eq!(raw.text, source);
    }

    #[test]
    fn test_arrow_initializer_kept_raw() {
        let source = "const HomeScreen = () => {\n  return null;\n};";
        let Stmt::Var(var) = parse_one(source) else {
            panic!("expected var decl")
        };
        assert_eq!(var.init, Expr::Raw("() => {\n  return null;\n}".to_owned()));
    }

    #[test]
    fn test_ternary_initializer_kept_raw() {
        let Stmt::Var(var) = parse_one("const x = isWide ? Drawer : Stack;") else {
            panic!("expected var decl")
        };
        assert_eq!(var.init, Expr::Raw("isWide ? Drawer : Stack".to_owned()));
    }

    #[test]
    fn test_two_statements_blank_line() {
        let program = parse("const a = 1;\n\nconst b = 2;").unwrap();
        assert_eq!(program.stmts.len(), 2);
        assert!(!program.stmts[0].blank_before());
        assert!(program.stmts[1].blank_before());
    }

    #[test]
    fn test_statement_without_semicolon() {
        let program = parse("const a = f()\nconst b = g()").unwrap();
        assert_eq!(program.stmts.len(), 2);
        assert!(matches!(&program.stmts[0], Stmt::Var(v) if v.name == "a"));
        assert!(matches!(&program.stmts[1], Stmt::Var(v) if v.name == "b"));
    }

    #[test]
    fn test_leading_comment_on_statement() {
        let program = parse("// setup\nconst a = f();").unwrap();
        let Stmt::Var(var) = &program.stmts[0] else {
            panic!("expected var decl")
        };
        assert_eq!(var.leading, vec![Comment::line("setup")]);
    }

    #[test]
    fn test_exported_declaration() {
        let Stmt::Var(var) = parse_one("export const linking = { enabled: true };") else {
            panic!("expected var decl")
        };
        assert!(var.exported);
        assert_eq!(var.name, "linking");
    }

    #[test]
    fn test_nested_objects() {
        let source = "const c = f({ screens: { Home: { screen: HomeScreen } } });";
        let Stmt::Var(var) = parse_one(source) else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        let Expr::Object(obj) = &call.args[0] else {
            panic!("expected object")
        };
        let Expr::Object(screens) = &obj.props[0].value else {
            panic!("expected nested object")
        };
        let Expr::Object(home) = &screens.props[0].value else {
            panic!("expected screen object")
        };
        assert_eq!(home.get("screen"), Some(&Expr::ident("HomeScreen")));
    }

    #[test]
    fn test_spread_makes_object_raw() {
        let Stmt::Var(var) = parse_one("const c = f({ ...base, a: 1 });") else {
            panic!("expected var decl")
        };
        let Expr::Call(call) = var.init else {
            panic!("expected call")
        };
        assert_eq!(call.args[0], Expr::Raw("{ ...base, a: 1 }".to_owned()));
    }

    #[test]
    fn test_parse_reparse_stable() {
        let source = "const RootStack = createStackNavigator({\n  screens: {\n    Home: HomeScreen,\n  },\n});";
        let first = parse(source).unwrap();
        let second = parse(source).unwrap();
        assert_eq!(first, second);
    }
}
