//! Configuration options for writing CON text.
//!
//! The default options produce the canonical layout: one entry per line and
//! two spaces of indentation per nesting level. [`ConOptions::compact`] keeps
//! everything on one line instead. Both layouts parse back to the same tree.
//!
//! ## Examples
//!
//! ```rust
//! use con_notation::{from_str, to_string_with_options, ConOptions};
//!
//! let doc = from_str("{ a : 1, b : [true, null] }")?;
//!
//! let compact = to_string_with_options(&doc, &ConOptions::compact())?;
//! assert_eq!(compact, "{a : 1, b : [true, null]}\n");
//!
//! let wide = to_string_with_options(&doc, &ConOptions::new().with_indent(4))?;
//! assert!(wide.contains("\n    a : 1,\n"));
//! # Ok::<(), con_notation::Error>(())
//! ```

/// Layout options for the writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConOptions {
    /// Spaces per nesting level in pretty output.
    pub indent: usize,
    /// Multi-line output when `true`, single-line when `false`.
    pub pretty: bool,
}

impl Default for ConOptions {
    fn default() -> Self {
        ConOptions {
            indent: 2,
            pretty: true,
        }
    }
}

impl ConOptions {
    /// Creates the canonical options (pretty, 2-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use con_notation::ConOptions;
    ///
    /// let options = ConOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for single-line output.
    #[must_use]
    pub fn compact() -> Self {
        ConOptions {
            pretty: false,
            ..Default::default()
        }
    }

    /// Sets the indentation size. Only affects pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
