//! # con_notation
//!
//! Reader and writer for CON, a hierarchical, human-writable configuration
//! notation with objects, arrays, typed scalars, comments and file includes.
//!
//! ## Pipeline
//!
//! Text goes through the [`lexer`] into tokens, the [`parser`] builds a
//! [`Value`] tree from them, and the [`writer`] turns a tree back into
//! canonical text. Writing a parsed tree and parsing it again yields an equal
//! tree, and a second write produces identical text.
//!
//! ## Quick Start
//!
//! ```rust
//! use con_notation::{from_str, to_string};
//!
//! let doc = from_str(r#"
//!     # connection settings
//!     {
//!       host : "db.internal",
//!       port : 5432,
//!       replicas : [ "r1", "r2" ],
//!       pool : { min : 1, max : 16, eager : false }
//!     }
//! "#)?;
//!
//! assert_eq!(doc.get("host")?.as_str()?, "db.internal");
//! assert_eq!(doc.get("port")?.as_int()?, 5432);
//! assert_eq!(doc.lookup("pool/max")?.as_int()?, 16);
//!
//! let text = to_string(&doc)?;
//! assert_eq!(from_str(&text)?, doc);
//! # Ok::<(), con_notation::Error>(())
//! ```
//!
//! ## Error Reporting
//!
//! Authoring mistakes are collected and reported together, each with its
//! line number:
//!
//! ```rust
//! use con_notation::from_str;
//!
//! let err = from_str("{\n  a 1,\n  b : nope\n}").unwrap_err();
//! assert_eq!(err.to_string(), "Found 2 parse errors");
//! for message in err.messages() {
//!     eprintln!("{}", message);
//! }
//! ```
//!
//! See [`grammar`] for the notation itself.

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod loader;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod value;
pub mod writer;

pub use error::{Diagnostic, Error, ParseErrors, Result};
pub use loader::{FileLoader, Loader, MemoryLoader};
pub use map::ConMap;
pub use options::ConOptions;
pub use value::{Kind, Number, Value};
pub use writer::Writer;

use std::io;

/// Parses a document held in memory.
///
/// Includes are read from the filesystem relative to the working directory.
///
/// # Errors
///
/// Any lexical, structural or include failure; see [`Error`].
pub fn from_str(s: &str) -> Result<Value> {
    from_str_with_loader(s, &FileLoader)
}

/// Parses a document, resolving includes through `loader`.
///
/// # Errors
///
/// Any lexical, structural or include failure; see [`Error`].
pub fn from_str_with_loader(s: &str, loader: &dyn Loader) -> Result<Value> {
    loader::parse_with(s, loader)
}

/// Parses a document read from an input stream.
///
/// # Examples
///
/// ```rust
/// use con_notation::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"{ answer : 42 }"))?;
/// assert_eq!(doc.get("answer")?.as_int()?, 42);
/// # Ok::<(), con_notation::Error>(())
/// ```
///
/// # Errors
///
/// [`Error::Io`] if reading fails, otherwise as [`from_str`].
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Parses the named file.
///
/// Failures inside the document are labelled with `path`.
///
/// # Errors
///
/// [`Error::FileOpen`] if the file cannot be read, otherwise as [`from_str`].
pub fn from_file<P>(path: P) -> Result<Value>
where
    P: AsRef<std::path::Path>,
{
    FileLoader.load_file(&path.as_ref().to_string_lossy())
}

/// Renders `value` as canonical CON text.
///
/// # Errors
///
/// [`Error::InvalidIdentifier`] if an object holds an empty key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_options(value, &ConOptions::default())
}

/// Renders `value` with custom layout options.
///
/// # Errors
///
/// [`Error::InvalidIdentifier`] if an object holds an empty key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(value: &Value, options: &ConOptions) -> Result<String> {
    let mut writer = Writer::new(options.clone());
    writer.write_document(value)?;
    Ok(writer.into_inner())
}

/// Writes `value` as canonical CON text to an output stream.
///
/// # Errors
///
/// As [`to_string`], plus [`Error::Io`] if writing fails.
pub fn to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, &ConOptions::default())
}

/// Writes `value` to an output stream with custom layout options.
///
/// # Errors
///
/// As [`to_string_with_options`], plus [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W>(mut writer: W, value: &Value, options: &ConOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
