//! Tokenizer for the JavaScript subset used by navigation code samples.
//!
//! Comments are produced as ordinary tokens so the parser can attach them
//! to the statement or property they belong to. Every token carries its
//! byte span in the source, which lets the parser fall back to verbatim
//! source slices for expressions it does not model.

use crate::error::ParseError;

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword.
    Ident,
    /// Single- or double-quoted string literal.
    Str,
    /// Backtick template literal (may span lines).
    Template,
    /// Numeric literal.
    Number,
    /// Single punctuation character.
    Punct(char),
    /// The two-character arrow `=>`.
    Arrow,
    /// `// ...` comment (text runs to end of line).
    LineComment,
    /// `/* ... */` comment.
    BlockComment,
}

/// One token with its byte span and 1-indexed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text, including quotes and comment markers.
    pub text: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Line the token starts on.
    pub line: usize,
}

impl Token {
    /// Whether this token is a comment of either kind.
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Whether this token is the given punctuation character.
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    /// Inner value of a string literal (quotes stripped, escapes kept).
    pub fn string_value(&self) -> &str {
        let inner = &self.text;
        if inner.len() >= 2 {
            &inner[1..inner.len() - 1]
        } else {
            inner
        }
    }

    /// Comment text without `//` or `/* */` markers, trimmed.
    pub fn comment_text(&self) -> &str {
        match self.kind {
            TokenKind::LineComment => self.text.strip_prefix("//").unwrap_or(&self.text).trim(),
            TokenKind::BlockComment => {
                let inner = self
                    .text
                    .strip_prefix("/*")
                    .and_then(|t| t.strip_suffix("*/"))
                    .unwrap_or(&self.text);
                inner.trim()
            }
            _ => &self.text,
        }
    }
}

/// Tokenize a source string.
///
/// Whitespace is discarded; comments are kept as tokens.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<(usize, char)> = source.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut line = 1;

    let offset_at = |idx: usize| -> usize {
        chars.get(idx).map_or(source.len(), |&(o, _)| o)
    };

    while i < chars.len() {
        let (start, c) = chars[i];
        match c {
            '\n' => {
                line += 1;
                i += 1;
            }
            ch if ch.is_whitespace() => i += 1,
            '/' if matches!(chars.get(i + 1), Some((_, '/'))) => {
                let mut j = i + 2;
                while j < chars.len() && chars[j].1 != '\n' {
                    j += 1;
                }
                let end = offset_at(j);
                tokens.push(Token {
                    kind: TokenKind::LineComment,
                    text: source[start..end].to_owned(),
                    start,
                    end,
                    line,
                });
                i = j;
            }
            '/' if matches!(chars.get(i + 1), Some((_, '*'))) => {
                let start_line = line;
                let mut j = i + 2;
                loop {
                    match chars.get(j) {
                        Some((_, '*')) if matches!(chars.get(j + 1), Some((_, '/'))) => {
                            j += 2;
                            break;
                        }
                        Some((_, '\n')) => {
                            line += 1;
                            j += 1;
                        }
                        Some(_) => j += 1,
                        None => {
                            return Err(ParseError::UnterminatedComment { line: start_line });
                        }
                    }
                }
                let end = offset_at(j);
                tokens.push(Token {
                    kind: TokenKind::BlockComment,
                    text: source[start..end].to_owned(),
                    start,
                    end,
                    line: start_line,
                });
                i = j;
            }
            '\'' | '"' => {
                let quote = c;
                let mut j = i + 1;
                loop {
                    match chars.get(j) {
                        Some((_, '\\')) => j += 2,
                        Some(&(_, ch)) if ch == quote => {
                            j += 1;
                            break;
                        }
                        Some((_, '\n')) | None => {
                            return Err(ParseError::UnterminatedString { line });
                        }
                        Some(_) => j += 1,
                    }
                }
                let end = offset_at(j);
                tokens.push(Token {
                    kind: TokenKind::Str,
                    text: source[start..end].to_owned(),
                    start,
                    end,
                    line,
                });
                i = j;
            }
            '`' => {
                let start_line = line;
                let mut j = i + 1;
                loop {
                    match chars.get(j) {
                        Some((_, '\\')) => j += 2,
                        Some((_, '`')) => {
                            j += 1;
                            break;
                        }
                        Some((_, '\n')) => {
                            line += 1;
                            j += 1;
                        }
                        Some(_) => j += 1,
                        None => {
                            return Err(ParseError::UnterminatedTemplate { line: start_line });
                        }
                    }
                }
                let end = offset_at(j);
                tokens.push(Token {
                    kind: TokenKind::Template,
                    text: source[start..end].to_owned(),
                    start,
                    end,
                    line: start_line,
                });
                i = j;
            }
            '=' if matches!(chars.get(i + 1), Some((_, '>'))) => {
                let end = offset_at(i + 2);
                tokens.push(Token {
                    kind: TokenKind::Arrow,
                    text: "=>".to_owned(),
                    start,
                    end,
                    line,
                });
                i += 2;
            }
            ch if ch.is_ascii_digit() => {
                let mut j = i + 1;
                while j < chars.len() {
                    let next = chars[j].1;
                    if next.is_ascii_alphanumeric() || next == '.' || next == '_' {
                        j += 1;
                    } else {
                        break;
                    }
                }
                let end = offset_at(j);
                tokens.push(Token {
                    kind: TokenKind::Number,
                    text: source[start..end].to_owned(),
                    start,
                    end,
                    line,
                });
                i = j;
            }
            ch if is_ident_start(ch) => {
                let mut j = i + 1;
                while j < chars.len() && is_ident_continue(chars[j].1) {
                    j += 1;
                }
                let end = offset_at(j);
                tokens.push(Token {
                    kind: TokenKind::Ident,
                    text: source[start..end].to_owned(),
                    start,
                    end,
                    line,
                });
                i = j;
            }
            ch => {
                let end = offset_at(i + 1);
                tokens.push(Token {
                    kind: TokenKind::Punct(ch),
                    text: ch.to_string(),
                    start,
                    end,
                    line,
                });
                i += 1;
            }
        }
    }

    Ok(tokens)
}

/// Characters that can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Characters that can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
