//! Recursive-descent parser for CON token streams.
//!
//! The grammar, starting at the first `{` in the stream:
//!
//! ```text
//! Document := OpenObject Members
//! Members  := CloseObject | Member (Comma Member)* CloseObject
//! Member   := Identifier Colon Value
//! Value    := Text | QuotedText | IncludePath | OpenObject Members | OpenArray Elements
//! Elements := CloseArray | Value (Comma Value)* CloseArray
//! ```
//!
//! ## Error recovery
//!
//! Authoring mistakes are recorded as [`Diagnostic`]s and parsing continues, so
//! one run reports every independent problem. After a recorded error the
//! parser skips ahead, keeping nested brackets balanced, to the next `,` or to
//! the closing bracket of the container it is in. Separators are never
//! swallowed by this skip. A missing separator before something that can start
//! the next entry is reported and the entry is then parsed normally.
//!
//! Running out of tokens, a non-value token where an object member's value
//! belongs, and failed includes end the parse immediately. Inside arrays a
//! missing value is recorded instead, and the array carries on.

use crate::error::{Diagnostic, ParseErrors};
use crate::lexer::{Token, TokenKind};
use crate::loader::Loader;
use crate::{ConMap, Error, Result, Value};
use std::collections::VecDeque;

/// Builds a [`Value`] tree from tokens.
pub struct Parser<'a> {
    tokens: VecDeque<Token>,
    loader: &'a dyn Loader,
    errors: ParseErrors,
    // Line of the most recently consumed token, used for end-of-input errors.
    last_line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, loader: &'a dyn Loader) -> Self {
        Parser {
            tokens: tokens.into(),
            loader,
            errors: ParseErrors::new(),
            last_line: 1,
        }
    }

    /// Parses the root object.
    ///
    /// Tokens before the first `{` and after its matching `}` are ignored.
    ///
    /// # Errors
    ///
    /// A fatal error as soon as one occurs; otherwise [`Error::Parse`] with all
    /// recorded diagnostics if there were any.
    pub fn parse_document(mut self) -> Result<Value> {
        let open_line = loop {
            match self.advance() {
                Some(Token {
                    kind: TokenKind::OpenObject,
                    line,
                }) => break line,
                Some(_) => {}
                None => return Err(Error::NoRootObject),
            }
        };

        let root = self.parse_object(open_line)?;

        if self.errors.is_empty() {
            Ok(Value::Object(root))
        } else {
            tracing::debug!(count = self.errors.len(), "parse finished with errors");
            Err(Error::Parse(self.errors))
        }
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        self.last_line = token.line;
        Some(token)
    }

    fn unread(&mut self, token: Token) {
        self.tokens.push_front(token);
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.tokens.front().map(|t| &t.kind) == Some(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn record(&mut self, line: usize, message: String) {
        self.errors.push(Diagnostic::new(line, message));
    }

    fn unexpected_end(&self, expected: &str) -> Error {
        Error::syntax(
            self.last_line,
            &format!("unexpected end of input, {}", expected),
        )
    }

    /// Skips to the next `,` or closing bracket at the current nesting level,
    /// leaving it unconsumed. `depth` counts brackets already opened by the
    /// token that triggered recovery.
    fn synchronize(&mut self, mut depth: usize) {
        while let Some(token) = self.tokens.front() {
            match token.kind {
                TokenKind::OpenObject | TokenKind::OpenArray => depth += 1,
                TokenKind::CloseObject | TokenKind::CloseArray => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                TokenKind::Comma if depth == 0 => return,
                _ => {}
            }
            self.advance();
        }
    }

    /// Recovers after a bad token was found where an entry should start.
    /// Separators are put back; anything else is skipped past.
    fn recover(&mut self, token: Token, close: &TokenKind) {
        if token.kind == TokenKind::Comma || &token.kind == close {
            self.unread(token);
        } else {
            let depth = nesting(&token.kind);
            self.synchronize(depth);
        }
    }

    fn parse_object(&mut self, open_line: usize) -> Result<ConMap> {
        let mut children = ConMap::new();
        if self.eat(&TokenKind::CloseObject) {
            return Ok(children);
        }

        loop {
            self.parse_member(&mut children)?;
            if self.separator(&TokenKind::CloseObject, open_line)? {
                return Ok(children);
            }
        }
    }

    fn parse_member(&mut self, children: &mut ConMap) -> Result<()> {
        let token = self
            .advance()
            .ok_or_else(|| self.unexpected_end("identifier expected"))?;

        let key = match token.kind {
            TokenKind::Text(key) => key,
            other => {
                self.record(
                    token.line,
                    format!("malformed identifier: expected an identifier, found {}", other),
                );
                let token = Token {
                    kind: other,
                    line: token.line,
                };
                self.recover(token, &TokenKind::CloseObject);
                return Ok(());
            }
        };

        match self.advance() {
            None => {
                return Err(self.unexpected_end(&format!(
                    "colon expected after identifier \"{}\"",
                    key
                )))
            }
            Some(Token {
                kind: TokenKind::Colon,
                ..
            }) => {}
            Some(token) => {
                self.record(
                    token.line,
                    format!(
                        "missing colon after identifier \"{}\", found {}",
                        key, token.kind
                    ),
                );
                self.recover(token, &TokenKind::CloseObject);
                return Ok(());
            }
        }

        let token = self
            .advance()
            .ok_or_else(|| self.unexpected_end("value expected"))?;
        if !token.kind.starts_value() {
            return Err(Error::syntax(
                token.line,
                &format!(
                    "value expected after \"{} :\", found {}",
                    key, token.kind
                ),
            ));
        }

        if let Some(value) = self.parse_value(token)? {
            children.insert(key, value);
        }
        Ok(())
    }

    fn parse_array(&mut self, open_line: usize) -> Result<Vec<Value>> {
        let mut elements = Vec::new();
        if self.eat(&TokenKind::CloseArray) {
            return Ok(elements);
        }

        loop {
            let token = self
                .advance()
                .ok_or_else(|| self.unexpected_end("value expected"))?;

            if token.kind.starts_value() {
                if let Some(value) = self.parse_value(token)? {
                    elements.push(value);
                }
            } else {
                self.record(token.line, format!("value expected, found {}", token.kind));
                self.recover(token, &TokenKind::CloseArray);
            }

            if self.separator(&TokenKind::CloseArray, open_line)? {
                return Ok(elements);
            }
        }
    }

    /// Consumes the separator after an entry. Returns `true` once the
    /// container's closing bracket has been consumed.
    fn separator(&mut self, close: &TokenKind, open_line: usize) -> Result<bool> {
        let in_array = *close == TokenKind::CloseArray;
        loop {
            let Some(token) = self.advance() else {
                let container = if in_array { "array" } else { "object" };
                return Err(self.unexpected_end(&format!(
                    "{} expected to close the {} opened at line {}",
                    close, container, open_line
                )));
            };

            if token.kind == TokenKind::Comma {
                return Ok(false);
            }
            if &token.kind == close {
                return Ok(true);
            }

            self.record(
                token.line,
                format!("missing ',' or {} after value, found {}", close, token.kind),
            );

            // Something that can begin the next entry is most likely a forgotten comma.
            let resumes = if in_array {
                token.kind.starts_value()
            } else {
                matches!(token.kind, TokenKind::Text(_))
            };
            if resumes {
                self.unread(token);
                return Ok(false);
            }
            self.synchronize(nesting(&token.kind));
        }
    }

    /// Parses a value starting at `token`. Returns `None` for a bare literal
    /// that was recorded as invalid.
    fn parse_value(&mut self, token: Token) -> Result<Option<Value>> {
        let line = token.line;
        match token.kind {
            TokenKind::Text(text) => match Value::from_literal(&text) {
                Some(value) => Ok(Some(value)),
                None => {
                    self.record(
                        line,
                        format!(
                            "invalid expression \"{}\" (quote literal strings)",
                            text
                        ),
                    );
                    Ok(None)
                }
            },
            TokenKind::QuotedText(text) => Ok(Some(Value::String(text))),
            TokenKind::IncludePath(path) => {
                tracing::debug!(%path, line, "resolving include");
                let value = self
                    .loader
                    .load(&path)
                    .map_err(|e| Error::include(&path, line, e))?;
                Ok(Some(value))
            }
            TokenKind::OpenObject => Ok(Some(Value::Object(self.parse_object(line)?))),
            TokenKind::OpenArray => Ok(Some(Value::Array(self.parse_array(line)?))),
            other => Err(Error::syntax(
                line,
                &format!("value expected, found {}", other),
            )),
        }
    }
}

fn nesting(kind: &TokenKind) -> usize {
    match kind {
        TokenKind::OpenObject | TokenKind::OpenArray => 1,
        _ => 0,
    }
}
