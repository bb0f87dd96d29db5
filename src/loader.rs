//! Include loading.
//!
//! A `<path>` token in value position asks the parser's [`Loader`] for a fully
//! parsed tree, which is spliced in as the member's value. The loader is a
//! plain capability handed to the parser, so callers decide where included
//! documents come from:
//!
//! - [`FileLoader`] reads from the filesystem. Relative paths resolve against
//!   the process working directory, not the directory of the including file.
//! - [`MemoryLoader`] serves named in-memory sources.
//! - Any `Fn(&str) -> Result<Value>` closure.
//!
//! Include graphs are not checked for cycles: a document that includes itself,
//! directly or through others, recurses until the stack is exhausted. Wrap a
//! loader with your own bookkeeping if untrusted documents are loaded.
//!
//! ```rust
//! use con_notation::{from_str_with_loader, MemoryLoader};
//!
//! let mut loader = MemoryLoader::new();
//! loader.add("db.con", "{ host : \"localhost\", port : 5432 }");
//!
//! let doc = from_str_with_loader("{ database : <db.con> }", &loader)?;
//! assert_eq!(doc.lookup("database/port")?.as_int()?, 5432);
//! # Ok::<(), con_notation::Error>(())
//! ```

use crate::parser::Parser;
use crate::{lexer, Error, Result, Value};
use std::collections::HashMap;

/// Resolves an include path to a parsed tree.
pub trait Loader {
    /// # Errors
    ///
    /// Any failure to locate, read or parse the named document.
    fn load(&self, path: &str) -> Result<Value>;
}

impl<F> Loader for F
where
    F: Fn(&str) -> Result<Value>,
{
    fn load(&self, path: &str) -> Result<Value> {
        self(path)
    }
}

/// Parses `input` with `loader` answering every include it contains.
pub(crate) fn parse_with(input: &str, loader: &dyn Loader) -> Result<Value> {
    let tokens = lexer::tokenize(input)?;
    Parser::new(tokens, loader).parse_document()
}

/// Loads includes from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl FileLoader {
    /// Reads and parses `path`, resolving its own includes through `self`.
    ///
    /// # Errors
    ///
    /// [`Error::FileOpen`] when the file cannot be read; any parse failure is
    /// labelled with `path`.
    pub fn load_file(&self, path: &str) -> Result<Value> {
        tracing::debug!(%path, "loading document");
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::file_open(path, &e.to_string()))?;
        parse_with(&content, self).map_err(|e| e.with_file(path))
    }
}

impl Loader for FileLoader {
    fn load(&self, path: &str) -> Result<Value> {
        self.load_file(path)
    }
}

/// Serves includes from named in-memory sources.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    sources: HashMap<String, String>,
}

impl MemoryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source` under `name`, replacing any previous entry.
    pub fn add(&mut self, name: impl Into<String>, source: impl Into<String>) -> &mut Self {
        self.sources.insert(name.into(), source.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.add(name, source);
        self
    }
}

impl Loader for MemoryLoader {
    fn load(&self, path: &str) -> Result<Value> {
        tracing::debug!(%path, "loading in-memory document");
        let source = self
            .sources
            .get(path)
            .ok_or_else(|| Error::file_open(path, "no such document"))?;
        parse_with(source, self).map_err(|e| e.with_file(path))
    }
}
