//! CON tokenizer.
//!
//! Turns raw text into an ordered list of [`Token`]s, each tagged with the
//! 1-based line it started on. The scanner runs in one of four modes:
//!
//! - **Normal**: whitespace ends the current unquoted run; `{ } [ ] : ,` are
//!   structural; `"` opens a quote, `<` an include path, `#` a comment.
//! - **InQuote**: everything up to the closing `"` is literal text.
//! - **InComment**: everything up to the end of the line is dropped.
//! - **InIncludePath**: everything up to the closing `>` is the path.
//!
//! In every mode except comments a backslash takes the next character
//! literally. Newlines always advance the line counter; inside quotes and
//! include paths they are kept as ordinary characters.
//!
//! ```rust
//! use con_notation::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("{ name : \"Alice\" } # trailing comment").unwrap();
//! let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::OpenObject,
//!         TokenKind::Text("name".to_string()),
//!         TokenKind::Colon,
//!         TokenKind::QuotedText("Alice".to_string()),
//!         TokenKind::CloseObject,
//!     ]
//! );
//! ```

use crate::{Error, Result};
use std::fmt;

/// The lexical category of a token, carrying its text where it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// An unquoted run of characters.
    Text(String),
    /// The contents of a `"…"` string, escapes resolved.
    QuotedText(String),
    Colon,
    Comma,
    OpenObject,
    CloseObject,
    OpenArray,
    CloseArray,
    /// The path between `<` and `>`.
    IncludePath(String),
}

impl TokenKind {
    /// `true` for tokens that can start a value.
    #[must_use]
    pub fn starts_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Text(_)
                | TokenKind::QuotedText(_)
                | TokenKind::IncludePath(_)
                | TokenKind::OpenObject
                | TokenKind::OpenArray
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text(text) => write!(f, "'{}'", text),
            TokenKind::QuotedText(text) => write!(f, "\"{}\"", text),
            TokenKind::Colon => f.write_str("':'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::OpenObject => f.write_str("'{'"),
            TokenKind::CloseObject => f.write_str("'}'"),
            TokenKind::OpenArray => f.write_str("'['"),
            TokenKind::CloseArray => f.write_str("']'"),
            TokenKind::IncludePath(path) => write!(f, "<{}>", path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line the token starts on.
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    InQuote,
    InComment,
    InIncludePath,
}

/// Tokenizes a whole document.
///
/// # Errors
///
/// Returns [`Error::Lexical`] for an unterminated quote or include path, or a
/// trailing backslash with nothing left to escape. No partial token list is
/// ever returned.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let tokens = Lexer::new(input).run()?;
    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

struct Lexer<'a> {
    chars: std::str::Chars<'a>,
    line: usize,
    mode: Mode,
    escape: bool,
    buffer: String,
    // Line on which the pending run, quote or include path started.
    start_line: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars(),
            line: 1,
            mode: Mode::Normal,
            escape: false,
            buffer: String::new(),
            start_line: 1,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while let Some(ch) = self.chars.next() {
            if ch == '\n' {
                self.line += 1;
            }

            if self.escape {
                self.escape = false;
                self.push_char(ch);
                continue;
            }

            match self.mode {
                Mode::Normal => self.normal(ch),
                Mode::InQuote => match ch {
                    '\\' => self.escape = true,
                    '"' => {
                        let text = std::mem::take(&mut self.buffer);
                        self.emit_at(self.start_line, TokenKind::QuotedText(text));
                        self.mode = Mode::Normal;
                    }
                    other => self.buffer.push(other),
                },
                Mode::InIncludePath => match ch {
                    '\\' => self.escape = true,
                    '>' => {
                        let path = std::mem::take(&mut self.buffer);
                        self.emit_at(self.start_line, TokenKind::IncludePath(path));
                        self.mode = Mode::Normal;
                    }
                    other => self.buffer.push(other),
                },
                Mode::InComment => {
                    if ch == '\n' {
                        self.mode = Mode::Normal;
                    }
                }
            }
        }

        if self.escape {
            return Err(Error::lexical(
                self.line,
                "dangling escape character at end of input",
            ));
        }

        match self.mode {
            Mode::InQuote => Err(Error::lexical(
                self.start_line,
                "unterminated quoted string",
            )),
            Mode::InIncludePath => Err(Error::lexical(
                self.start_line,
                "unterminated include path",
            )),
            Mode::Normal | Mode::InComment => {
                self.flush_text();
                Ok(self.tokens)
            }
        }
    }

    fn normal(&mut self, ch: char) {
        match ch {
            '\\' => {
                if self.buffer.is_empty() {
                    self.start_line = self.line;
                }
                self.escape = true;
            }
            '{' => self.structural(TokenKind::OpenObject),
            '}' => self.structural(TokenKind::CloseObject),
            '[' => self.structural(TokenKind::OpenArray),
            ']' => self.structural(TokenKind::CloseArray),
            ':' => self.structural(TokenKind::Colon),
            ',' => self.structural(TokenKind::Comma),
            '"' => {
                self.flush_text();
                self.start_line = self.line;
                self.mode = Mode::InQuote;
            }
            '<' => {
                self.flush_text();
                self.start_line = self.line;
                self.mode = Mode::InIncludePath;
            }
            '#' => {
                self.flush_text();
                self.mode = Mode::InComment;
            }
            c if c.is_whitespace() => self.flush_text(),
            c => self.push_char(c),
        }
    }

    /// Appends to the pending text, remembering where an unquoted run began.
    fn push_char(&mut self, ch: char) {
        if self.mode == Mode::Normal && self.buffer.is_empty() && ch != '\n' {
            self.start_line = self.line;
        }
        self.buffer.push(ch);
    }

    fn structural(&mut self, kind: TokenKind) {
        self.flush_text();
        self.emit_at(self.line, kind);
    }

    fn flush_text(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.emit_at(self.start_line, TokenKind::Text(text));
        }
    }

    fn emit_at(&mut self, line: usize, kind: TokenKind) {
        self.tokens.push(Token { kind, line });
    }
}
