//! Error types for CON tokenizing, parsing, tree access and writing.
//!
//! Failures come in two tiers:
//!
//! - **Fatal errors** abort the current operation immediately: unreadable files,
//!   unterminated quotes or include paths, running out of tokens while a colon or
//!   value is still expected, a missing root object, a failed include, and every
//!   misuse of the tree API (wrong kind, unknown key, index out of bounds).
//! - **Accumulated errors** are document-authoring mistakes (bad identifier,
//!   missing colon, invalid bare literal, missing separator). The parser keeps
//!   going after each one and reports them together as a single
//!   [`Error::Parse`] once the whole document has been read.
//!
//! Every error can be flattened into an ordered list of messages with
//! [`Error::messages`], while its `Display` output is a one-line summary such as
//! `Found 2 parse errors in file "app.con"`.
//!
//! ## Examples
//!
//! ```rust
//! use con_notation::from_str;
//!
//! let err = from_str("{ a 1, b : oops }").unwrap_err();
//! assert_eq!(err.to_string(), "Found 2 parse errors");
//! assert_eq!(err.diagnostics()[0].line, 1);
//! ```

use crate::value::Kind;
use std::fmt;
use thiserror::Error;

/// A single accumulated parse problem tagged with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number of the offending token.
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Every accumulated problem found during one parse attempt, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseErrors {
    diagnostics: Vec<Diagnostic>,
}

impl ParseErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {} parse errors", self.diagnostics.len())
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A named file could not be opened or read.
    #[error("Failed to open file \"{path}\": {msg}")]
    FileOpen { path: String, msg: String },

    /// Reading from or writing to a stream failed.
    #[error("IO error: {0}")]
    Io(String),

    /// The tokenizer hit malformed input (unterminated quote or include path).
    #[error("Lexical error at line {line}: {msg}")]
    Lexical { line: usize, msg: String },

    /// A structural problem that stops parsing immediately.
    #[error("Syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    /// The token stream contained no `{`.
    #[error("No root object found")]
    NoRootObject,

    /// One or more accumulated parse problems.
    #[error("{0}")]
    Parse(ParseErrors),

    /// An included document failed to load or parse.
    #[error("Failed to include <{path}> at line {line}: {source}")]
    Include {
        path: String,
        line: usize,
        source: Box<Error>,
    },

    /// Wraps another error with the file it originated from.
    #[error("{source} in file \"{file}\"")]
    InFile { file: String, source: Box<Error> },

    #[error("Invalid numeric literal \"{0}\"")]
    InvalidNumeric(String),

    #[error("Invalid boolean literal \"{0}\"")]
    InvalidBoolean(String),

    /// A node was accessed as a kind it does not have.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    #[error("Could not find identifier \"{0}\" in children")]
    KeyNotFound(String),

    #[error("Index {index} is out of bounds for an array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A scalar of the right kind whose text does not fit the requested type.
    #[error("Cannot convert \"{text}\" to {target}")]
    Conversion { text: String, target: &'static str },

    /// An identifier that cannot be written as CON text.
    #[error("Invalid identifier \"{0}\"")]
    InvalidIdentifier(String),
}

impl Error {
    /// Creates a lexical error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use con_notation::Error;
    ///
    /// let err = Error::lexical(3, "unterminated quoted string");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn lexical(line: usize, msg: &str) -> Self {
        Error::Lexical {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates a fatal syntax error.
    pub fn syntax(line: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates a file-open error for `path`.
    pub fn file_open(path: &str, msg: &str) -> Self {
        Error::FileOpen {
            path: path.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn type_mismatch(expected: Kind, found: Kind) -> Self {
        Error::TypeMismatch { expected, found }
    }

    pub fn conversion(text: &str, target: &'static str) -> Self {
        Error::Conversion {
            text: text.to_string(),
            target,
        }
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Wraps the failure of an included document.
    pub fn include(path: &str, line: usize, source: Error) -> Self {
        Error::Include {
            path: path.to_string(),
            line,
            source: Box::new(source),
        }
    }

    /// Attaches the originating file label.
    ///
    /// Only the summary changes; the message list stays exactly as it was. An
    /// error that already carries a label has it replaced rather than nested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use con_notation::from_str;
    ///
    /// let err = from_str("{ a : oops }").unwrap_err().with_file("app.con");
    /// assert_eq!(err.to_string(), "Found 1 parse errors in file \"app.con\"");
    /// assert_eq!(err.message_count(), 1);
    /// assert_eq!(err.file(), Some("app.con"));
    /// ```
    #[must_use]
    pub fn with_file(self, file: &str) -> Self {
        match self {
            Error::InFile { source, .. } => Error::InFile {
                file: file.to_string(),
                source,
            },
            other => Error::InFile {
                file: file.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// The originating file label, if one was attached.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Error::InFile { file, .. } => Some(file),
            _ => None,
        }
    }

    /// A one-line diagnosis, identical to the `Display` output.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// The ordered list of human-readable messages carried by this error.
    ///
    /// Aggregate parse failures yield one entry per diagnostic; every other
    /// error yields a single entry. File labels and include wrappers are
    /// looked through, so their messages are never duplicated.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Parse(errors) => errors.iter().map(ToString::to_string).collect(),
            Error::InFile { source, .. } | Error::Include { source, .. } => source.messages(),
            other => vec![other.to_string()],
        }
    }

    /// Number of entries [`Error::messages`] returns.
    #[must_use]
    pub fn message_count(&self) -> usize {
        match self {
            Error::Parse(errors) => errors.len(),
            Error::InFile { source, .. } | Error::Include { source, .. } => source.message_count(),
            _ => 1,
        }
    }

    /// The line-addressable accumulated diagnostics, empty for fatal errors.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Parse(errors) => errors.as_slice(),
            Error::InFile { source, .. } | Error::Include { source, .. } => source.diagnostics(),
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn two_errors() -> Error {
        let mut errors = ParseErrors::new();
        errors.push(Diagnostic::new(2, "missing ':' after identifier \"a\""));
        errors.push(Diagnostic::new(5, "invalid expression \"oops\""));
        Error::Parse(errors)
    }

    #[test]
    fn test_parse_summary_counts_diagnostics() {
        let err = two_errors();
        assert_eq!(err.to_string(), "Found 2 parse errors");
        assert_eq!(err.message_count(), 2);
        assert_eq!(
            err.messages(),
            vec![
                "Line 2: missing ':' after identifier \"a\"".to_string(),
                "Line 5: invalid expression \"oops\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_with_file_keeps_messages() {
        let before = two_errors().messages();
        let err = two_errors().with_file("settings.con");
        assert_eq!(err.messages(), before);
        assert_eq!(err.file(), Some("settings.con"));
        assert!(err.summary().ends_with("in file \"settings.con\""));
    }

    #[test]
    fn test_with_file_replaces_label() {
        let err = two_errors().with_file("a.con").with_file("b.con");
        assert_eq!(err.file(), Some("b.con"));
        assert_eq!(err.to_string(), "Found 2 parse errors in file \"b.con\"");
    }

    #[test]
    fn test_include_delegates_messages() {
        let inner = two_errors().with_file("child.con");
        let err = Error::include("child.con", 7, inner).with_file("parent.con");
        assert_eq!(err.message_count(), 2);
        assert_eq!(err.diagnostics()[1].line, 5);
        assert_eq!(err.file(), Some("parent.con"));
        assert!(err.to_string().contains("Failed to include <child.con> at line 7"));
    }

    #[test]
    fn test_fatal_errors_are_singletons() {
        let err = Error::syntax(4, "value expected");
        assert_eq!(err.messages(), vec!["Syntax error at line 4: value expected"]);
        assert!(err.diagnostics().is_empty());

        let err = Error::type_mismatch(Kind::Boolean, Kind::Numeric);
        assert_eq!(
            err.to_string(),
            "Type mismatch: expected boolean, found numeric"
        );
    }
}
