//! Token scanner for manifest source text.
//!
//! Single pass over the input, tracking 1-based line/column positions so
//! diagnostics can point at the offending token. Whitespace and `//` comments
//! are skipped; directives such as `//toolmod:build tools` are lexically
//! comments and never reach the parser.

use std::iter::Peekable;
use std::str::Chars;

use crate::errors::SyntaxError;

/// Kinds of tokens the manifest grammar is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword (`module`, `import`, `const`, `_`, names).
    Ident(String),
    /// Double-quoted string literal, quotes stripped.
    Str(String),
    LParen,
    RParen,
    Eq,
    Eof,
}

impl TokenKind {
    /// Describe the token the way diagnostics quote it, e.g. `'EOF'`.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("'{}'", name),
            TokenKind::Str(value) => format!("string \"{}\"", value),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Eq => "'='".to_string(),
            TokenKind::Eof => "'EOF'".to_string(),
        }
    }
}

/// A token plus the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

/// Streaming tokenizer over manifest source.
pub struct Scanner<'a> {
    file: &'a str,
    chars: Peekable<Chars<'a>>,
    line: u32,
    column: u32,
}

impl<'a> Scanner<'a> {
    /// Create a scanner; `file` is used in diagnostics only.
    pub fn new(file: &'a str, src: &'a str) -> Self {
        Scanner {
            file,
            chars: src.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Produce the next token, or a positional error for stray input.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_trivia()?;

        let line = self.line;
        let column = self.column;

        let Some(c) = self.bump() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                line,
                column,
            });
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '=' => TokenKind::Eq,
            '"' => self.scan_string(line, column)?,
            c if is_ident_start(c) => self.scan_ident(c),
            c => {
                return Err(self.error_at(line, column, format!("unexpected character '{}'", c)));
            }
        };

        Ok(Token { kind, line, column })
    }

    /// Skip whitespace and line comments, keeping positions current.
    fn skip_trivia(&mut self) -> Result<(), SyntaxError> {
        loop {
            match self.chars.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.bump();
                }
                Some('/') => {
                    let line = self.line;
                    let column = self.column;
                    self.bump();
                    if self.chars.peek() == Some(&'/') {
                        while let Some(&c) = self.chars.peek() {
                            if c == '\n' {
                                break;
                            }
                            self.bump();
                        }
                    } else {
                        return Err(self.error_at(
                            line,
                            column,
                            "unexpected character '/'".to_string(),
                        ));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Scan the remainder of a string literal; `line:column` is the opening
    /// quote, which is where an unterminated literal is reported.
    fn scan_string(&mut self, line: u32, column: u32) -> Result<TokenKind, SyntaxError> {
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(TokenKind::Str(value)),
                Some('\n') | None => {
                    return Err(self.error_at(
                        line,
                        column,
                        "string literal not terminated".to_string(),
                    ));
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn scan_ident(&mut self, first: char) -> TokenKind {
        let mut name = String::new();
        name.push(first);
        while let Some(&c) = self.chars.peek() {
            if is_ident_continue(c) {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        TokenKind::Ident(name)
    }

    /// Consume one character, updating the line/column counters.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error_at(&self, line: u32, column: u32, message: String) -> SyntaxError {
        SyntaxError::new(self.file, line, column, message)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
