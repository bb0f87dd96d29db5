//! CON text output.
//!
//! The [`Writer`] walks a [`Value`] tree and produces text that the tokenizer
//! and parser read back into an equal tree:
//!
//! - objects as `{`, one `key : value` entry per line, `}`
//! - arrays as `[`, one element per line, `]`
//! - strings double-quoted with `"` and `\` escaped
//! - numerics and booleans verbatim, `null` for null
//! - identifiers unquoted, with a backslash before whitespace and any
//!   character the tokenizer treats specially
//!
//! ```rust
//! use con_notation::{to_string, Kind, Value};
//!
//! let mut root = Value::new(Kind::Object);
//! root.insert("name", "Alice");
//! root.insert("tags", vec![Value::from(1), Value::from(true)]);
//!
//! assert_eq!(
//!     to_string(&root)?,
//!     "{\n  name : \"Alice\",\n  tags : [\n    1,\n    true\n  ]\n}\n"
//! );
//! # Ok::<(), con_notation::Error>(())
//! ```

use crate::{ConMap, ConOptions, Error, Result, Value};

/// Renders value trees as CON text.
pub struct Writer {
    output: String,
    options: ConOptions,
    depth: usize,
}

impl Writer {
    pub fn new(options: ConOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            options,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes `value` as a complete document followed by a newline.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIdentifier`] for an empty object key, which has no
    /// textual form. Nothing useful is left in the buffer in that case.
    pub fn write_document(&mut self, value: &Value) -> Result<()> {
        self.write_value(value)?;
        self.output.push('\n');
        Ok(())
    }

    fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Boolean(true) => self.output.push_str("true"),
            Value::Boolean(false) => self.output.push_str("false"),
            Value::Numeric(n) => self.output.push_str(n.as_str()),
            Value::String(s) => self.write_string(s),
            Value::Array(elements) => self.write_array(elements)?,
            Value::Object(children) => self.write_object(children)?,
        }
        Ok(())
    }

    fn write_object(&mut self, children: &ConMap) -> Result<()> {
        if children.is_empty() {
            self.output.push_str("{}");
            return Ok(());
        }

        self.output.push('{');
        self.depth += 1;
        for (i, (key, value)) in children.iter().enumerate() {
            self.write_entry_break(i);
            self.write_identifier(key)?;
            self.output.push_str(" : ");
            self.write_value(value)?;
        }
        self.depth -= 1;
        self.write_close_break();
        self.output.push('}');
        Ok(())
    }

    fn write_array(&mut self, elements: &[Value]) -> Result<()> {
        if elements.is_empty() {
            self.output.push_str("[]");
            return Ok(());
        }

        self.output.push('[');
        self.depth += 1;
        for (i, element) in elements.iter().enumerate() {
            self.write_entry_break(i);
            self.write_value(element)?;
        }
        self.depth -= 1;
        self.write_close_break();
        self.output.push(']');
        Ok(())
    }

    fn write_entry_break(&mut self, index: usize) {
        if index > 0 {
            self.output.push(',');
        }
        if self.options.pretty {
            self.write_newline();
        } else if index > 0 {
            self.output.push(' ');
        }
    }

    fn write_close_break(&mut self) {
        if self.options.pretty {
            self.write_newline();
        }
    }

    fn write_newline(&mut self) {
        self.output.push('\n');
        let width = self.depth * self.options.indent;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    #[inline]
    fn needs_escape(ch: char) -> bool {
        ch.is_whitespace()
            || matches!(
                ch,
                '{' | '}' | '[' | ']' | ':' | ',' | '"' | '<' | '#' | '\\'
            )
    }

    fn write_identifier(&mut self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidIdentifier(key.to_string()));
        }
        for ch in key.chars() {
            if Self::needs_escape(ch) {
                self.output.push('\\');
            }
            self.output.push(ch);
        }
        Ok(())
    }

    #[inline]
    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    fn render(value: &Value, options: ConOptions) -> String {
        let mut writer = Writer::new(options);
        writer.write_document(value).unwrap();
        writer.into_inner()
    }

    #[test]
    fn test_nested_layout() {
        let mut inner = Value::new(Kind::Object);
        inner.insert("d", true);
        let mut root = Value::new(Kind::Object);
        root.insert("a", 1);
        root.insert("c", inner);
        root.insert("e", Value::new(Kind::Array));
        root.insert("f", Value::Null);

        assert_eq!(
            render(&root, ConOptions::default()),
            "{\n  a : 1,\n  c : {\n    d : true\n  },\n  e : [],\n  f : null\n}\n"
        );
        assert_eq!(
            render(&root, ConOptions::compact()),
            "{a : 1, c : {d : true}, e : [], f : null}\n"
        );
    }

    #[test]
    fn test_string_escaping() {
        let mut root = Value::new(Kind::Object);
        root.insert("s", "say \"hi\" \\ bye\nnext # not a comment");
        assert_eq!(
            render(&root, ConOptions::compact()),
            "{s : \"say \\\"hi\\\" \\\\ bye\nnext # not a comment\"}\n"
        );
    }

    #[test]
    fn test_identifier_escaping() {
        let mut root = Value::new(Kind::Object);
        root.insert("two words", 1);
        root.insert("a:b,c#d", 2);
        root.insert("ok_name.1", 3);
        assert_eq!(
            render(&root, ConOptions::compact()),
            "{two\\ words : 1, a\\:b\\,c\\#d : 2, ok_name.1 : 3}\n"
        );
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let mut root = Value::new(Kind::Object);
        root.insert("", 1);
        let mut writer = Writer::new(ConOptions::default());
        assert!(matches!(
            writer.write_document(&root),
            Err(Error::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_scalars_render_verbatim() {
        let mut root = Value::new(Kind::Array);
        root.push(Value::from_literal("+3.50").unwrap());
        root.push(false);
        root.push("");
        assert_eq!(
            render(&root, ConOptions::compact()),
            "[+3.50, false, \"\"]\n"
        );
    }
}
