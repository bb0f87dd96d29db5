//! The CON value tree.
//!
//! A parsed document is a tree of [`Value`] nodes. Each node is exactly one
//! [`Kind`]: a scalar (`Null`, `String`, `Numeric`, `Boolean`), an ordered
//! `Array` of child values, or an `Object` mapping identifiers to child values.
//!
//! Children are owned exclusively by their parent. Cloning a value deep-copies
//! its whole subtree and [`Value::take`] moves a subtree out, leaving `Null`
//! behind.
//!
//! ## Building Trees
//!
//! ```rust
//! use con_notation::{Kind, Value};
//!
//! let mut root = Value::new(Kind::Object);
//! root.insert("hello", "This is a string");
//!
//! let mut list = Value::new(Kind::Array);
//! list.push(1);
//! list.push(2);
//! root.insert("list", list);
//!
//! assert_eq!(root.get("hello")?.as_str()?, "This is a string");
//! assert_eq!(root.lookup("list/1")?.as_int()?, 2);
//! # Ok::<(), con_notation::Error>(())
//! ```
//!
//! ## Typed Access
//!
//! Coercions never convert between kinds: asking a numeric node for a bool is
//! an error, not a guess.
//!
//! ```rust
//! use con_notation::Value;
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_int().unwrap(), 42);
//! assert!(value.as_bool().is_err());
//! assert!(value.as_str().is_err());
//! ```

use crate::{ConMap, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The tag distinguishing the six node kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    String,
    Numeric,
    Boolean,
    Array,
    Object,
}

impl Kind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::String => "string",
            Kind::Numeric => "numeric",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Returns `true` for the kinds that carry scalar text.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Kind::Array | Kind::Object)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated numeric text.
///
/// The literal is kept exactly as written. It must be an optional single
/// leading sign followed by digits with at most one decimal point, and the
/// point must be preceded by at least one digit.
///
/// # Examples
///
/// ```rust
/// use con_notation::Number;
///
/// assert!(Number::parse("-12.5").is_ok());
/// assert!(Number::parse("+7").is_ok());
/// assert!(Number::parse("1.2.3").is_err());
/// assert!(Number::parse(".5").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Validates `text` against the numeric grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumeric`] when `text` is not a numeric literal.
    pub fn parse(text: &str) -> Result<Self> {
        if is_numeric_literal(text) {
            Ok(Number(text.to_string()))
        } else {
            Err(Error::InvalidNumeric(text.to_string()))
        }
    }

    /// The literal text, exactly as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        !self.0.contains('.')
    }

    /// Interprets the literal as an `i64`.
    ///
    /// # Errors
    ///
    /// Fails for fractional literals and values outside the `i64` range.
    pub fn as_i64(&self) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|_| Error::conversion(&self.0, "int"))
    }

    #[must_use]
    pub fn as_f64(&self) -> f64 {
        // Every validated literal is accepted by the float parser.
        self.0.parse::<f64>().unwrap_or(f64::NAN)
    }
}

fn is_numeric_literal(text: &str) -> bool {
    let body = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(text);

    let mut seen_digit = false;
    let mut seen_point = false;
    for ch in body.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if seen_digit && !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Number::parse(s)
    }
}

macro_rules! number_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number(value.to_string())
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Numeric(Number::from(value))
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl TryFrom<f64> for Number {
    type Error = Error;

    /// Fails for NaN and infinities, which have no CON spelling.
    fn try_from(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Number(value.to_string()))
        } else {
            Err(Error::InvalidNumeric(value.to_string()))
        }
    }
}

impl TryFrom<f32> for Number {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        if value.is_finite() {
            Ok(Number(value.to_string()))
        } else {
            Err(Error::InvalidNumeric(value.to_string()))
        }
    }
}

/// A single node of a CON tree.
///
/// # Examples
///
/// ```rust
/// use con_notation::{Kind, Value};
///
/// let null = Value::Null;
/// let text = Value::from("hello");
/// let flag = Value::from(true);
///
/// assert_eq!(null.kind(), Kind::Null);
/// assert!(text.is_string());
/// assert_eq!(flag.scalar(), Some("true"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    String(String),
    Numeric(Number),
    Boolean(bool),
    Array(Vec<Value>),
    Object(ConMap),
}

impl Value {
    /// Creates an empty node of the given kind.
    ///
    /// Strings start empty, numerics at `0`, booleans `false`, containers with
    /// no children.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Null => Value::Null,
            Kind::String => Value::String(String::new()),
            Kind::Numeric => Value::Numeric(Number::from(0)),
            Kind::Boolean => Value::Boolean(false),
            Kind::Array => Value::Array(Vec::new()),
            Kind::Object => Value::Object(ConMap::new()),
        }
    }

    /// Classifies an unquoted literal: `true`/`false`, `null`, or a number.
    ///
    /// Returns `None` for anything else; plain text has to be quoted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use con_notation::{Kind, Value};
    ///
    /// assert_eq!(Value::from_literal("null"), Some(Value::Null));
    /// assert_eq!(Value::from_literal("-3.5").map(|v| v.kind()), Some(Kind::Numeric));
    /// assert_eq!(Value::from_literal("hello"), None);
    /// ```
    #[must_use]
    pub fn from_literal(text: &str) -> Option<Value> {
        match text {
            "true" => Some(Value::Boolean(true)),
            "false" => Some(Value::Boolean(false)),
            "null" => Some(Value::Null),
            _ => Number::parse(text).ok().map(Value::Numeric),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::String(_) => Kind::String,
            Value::Numeric(_) => Kind::Numeric,
            Value::Boolean(_) => Kind::Boolean,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Value::Numeric(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The literal text of a scalar node: empty for `Null`, `None` for containers.
    #[must_use]
    pub fn scalar(&self) -> Option<&str> {
        match self {
            Value::Null => Some(""),
            Value::String(s) => Some(s),
            Value::Numeric(n) => Some(n.as_str()),
            Value::Boolean(true) => Some("true"),
            Value::Boolean(false) => Some("false"),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Number of children or elements; zero for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Array(elements) => elements.len(),
            Value::Object(children) => children.len(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Errors
    ///
    /// Fails unless the node is a `String`.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch(Kind::String, other.kind())),
        }
    }

    /// Interprets a `Numeric` node as an integer.
    ///
    /// # Errors
    ///
    /// Fails for any other kind, or when the literal is fractional or does not
    /// fit an `i64`.
    pub fn as_int(&self) -> Result<i64> {
        self.as_number()?.as_i64()
    }

    /// # Errors
    ///
    /// Fails unless the node is `Numeric`, or when the literal overflows an
    /// `f32`.
    pub fn as_float(&self) -> Result<f32> {
        let number = self.as_number()?;
        number
            .as_str()
            .parse::<f32>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| Error::conversion(number.as_str(), "float"))
    }

    /// # Errors
    ///
    /// Fails unless the node is `Numeric`, or when the literal overflows an
    /// `f64`.
    pub fn as_double(&self) -> Result<f64> {
        let number = self.as_number()?;
        number
            .as_str()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| Error::conversion(number.as_str(), "double"))
    }

    /// # Errors
    ///
    /// Fails unless the node is `Boolean`.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(Error::type_mismatch(Kind::Boolean, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Fails unless the node is `Numeric`.
    pub fn as_number(&self) -> Result<&Number> {
        match self {
            Value::Numeric(n) => Ok(n),
            other => Err(Error::type_mismatch(Kind::Numeric, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Fails unless the node is an `Array`.
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(elements) => Ok(elements),
            other => Err(Error::type_mismatch(Kind::Array, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Fails unless the node is an `Array`.
    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(elements) => Ok(elements),
            other => Err(Error::type_mismatch(Kind::Array, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Fails unless the node is an `Object`.
    pub fn as_object(&self) -> Result<&ConMap> {
        match self {
            Value::Object(children) => Ok(children),
            other => Err(Error::type_mismatch(Kind::Object, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Fails unless the node is an `Object`.
    pub fn as_object_mut(&mut self) -> Result<&mut ConMap> {
        match self {
            Value::Object(children) => Ok(children),
            other => Err(Error::type_mismatch(Kind::Object, other.kind())),
        }
    }

    /// Looks up a named child of an `Object` node.
    ///
    /// # Errors
    ///
    /// Fails when the node is not an object or has no child called `key`.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// # Errors
    ///
    /// Same conditions as [`Value::get`].
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.as_object_mut()?
            .get_mut(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Indexes an `Array` node by position.
    ///
    /// # Errors
    ///
    /// Fails when the node is not an array or `index` is out of bounds.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let elements = self.as_array()?;
        elements.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: elements.len(),
        })
    }

    /// # Errors
    ///
    /// Same conditions as [`Value::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let elements = self.as_array_mut()?;
        let len = elements.len();
        elements
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Follows a slash-separated path from this node.
    ///
    /// A leading `/` is optional and empty segments are skipped. On arrays a
    /// segment is read as an element index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use con_notation::from_str;
    ///
    /// let doc = from_str("{ server : { ports : [80, 443] } }")?;
    /// assert_eq!(doc.lookup("/server/ports/1")?.as_int()?, 443);
    /// assert!(doc.lookup("server/missing").is_err());
    /// # Ok::<(), con_notation::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the first failing [`Value::get`] or [`Value::at`].
    pub fn lookup(&self, path: &str) -> Result<&Value> {
        let mut current = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Array(_) => {
                    let index = segment
                        .bytes()
                        .all(|b| b.is_ascii_digit())
                        .then(|| segment.parse::<usize>().ok())
                        .flatten()
                        .ok_or_else(|| Error::KeyNotFound(segment.to_string()))?;
                    current.at(index)?
                }
                _ => current.get(segment)?,
            };
        }
        Ok(current)
    }

    /// Changes the node's kind.
    ///
    /// Switching to a different kind discards the previous payload entirely:
    /// an object turned into an array loses all of its children. Setting the
    /// kind the node already has leaves it untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use con_notation::{Kind, Value};
    ///
    /// let mut value = Value::new(Kind::Object);
    /// value.insert("child", 1);
    /// value.set_kind(Kind::Array);
    /// assert!(value.is_array());
    /// assert!(value.is_empty());
    /// ```
    pub fn set_kind(&mut self, kind: Kind) {
        if self.kind() != kind {
            *self = Value::new(kind);
        }
    }

    /// Makes this node a `String` holding `text`.
    pub fn set_string(&mut self, text: impl Into<String>) {
        *self = Value::String(text.into());
    }

    /// Makes this node `Numeric`, validating `text` first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumeric`] and leaves the node unchanged when
    /// `text` is not a numeric literal.
    pub fn set_numeric(&mut self, text: &str) -> Result<()> {
        *self = Value::Numeric(Number::parse(text)?);
        Ok(())
    }

    /// Makes this node `Boolean` from the exact text `true` or `false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoolean`] and leaves the node unchanged for any
    /// other text.
    pub fn set_boolean(&mut self, text: &str) -> Result<()> {
        let flag = match text {
            "true" => true,
            "false" => false,
            other => return Err(Error::InvalidBoolean(other.to_string())),
        };
        *self = Value::Boolean(flag);
        Ok(())
    }

    pub fn set_bool(&mut self, flag: bool) {
        *self = Value::Boolean(flag);
    }

    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Adds a named child, promoting the node to an `Object` first if needed.
    ///
    /// Promotion drops any previous payload. An existing child with the same
    /// identifier is replaced and returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.set_kind(Kind::Object);
        match self {
            Value::Object(children) => children.insert(key.into(), value.into()),
            _ => None,
        }
    }

    /// Appends an element, promoting the node to an `Array` first if needed.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.set_kind(Kind::Array);
        if let Value::Array(elements) = self {
            elements.push(value.into());
        }
    }

    /// Removes a named child from an `Object` node.
    ///
    /// # Errors
    ///
    /// Fails when the node is not an object or has no child called `key`.
    pub fn remove(&mut self, key: &str) -> Result<Value> {
        self.as_object_mut()?
            .remove(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Moves the subtree out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Numeric(n) => {
                if let Ok(i) = n.as_str().parse::<i64>() {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = n.as_str().parse::<u64>() {
                    serializer.serialize_u64(u)
                } else {
                    serializer.serialize_f64(n.as_f64())
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(elements) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(children) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (k, v) in children {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid CON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E>
            where
                E: de::Error,
            {
                Number::try_from(value)
                    .map(Value::Numeric)
                    .map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut elements = Vec::new();
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(Value::Array(elements))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut children = ConMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    children.insert(key, value);
                }
                Ok(Value::Object(children))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_int()
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_double()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_bool()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch(Kind::String, other.kind())),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

/// Non-finite floats have no CON spelling and become `Null`.
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Number::try_from(value)
            .map(Value::Numeric)
            .unwrap_or(Value::Null)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Number::try_from(value)
            .map(Value::Numeric)
            .unwrap_or(Value::Null)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Numeric(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ConMap> for Value {
    fn from(value: ConMap) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_grammar() {
        for ok in ["0", "42", "-1", "+1", "3.25", "-0.5", "1.", "007"] {
            assert!(Number::parse(ok).is_ok(), "{ok} should be numeric");
        }
        for bad in ["", "-", "+", ".5", "1.2.3", "--1", "1-2", "1e5", "0x10", " 1"] {
            assert!(
                matches!(Number::parse(bad), Err(Error::InvalidNumeric(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_set_numeric_rejects_and_keeps_node() {
        let mut value = Value::from("keep");
        assert!(value.set_numeric("1-2").is_err());
        assert_eq!(value, Value::from("keep"));

        value.set_numeric("-2.5").unwrap();
        assert_eq!(value.scalar(), Some("-2.5"));
        assert_eq!(value.kind(), Kind::Numeric);
    }

    #[test]
    fn test_set_boolean_is_exact() {
        let mut value = Value::Null;
        assert!(matches!(
            value.set_boolean("True"),
            Err(Error::InvalidBoolean(_))
        ));
        value.set_boolean("false").unwrap();
        assert_eq!(value, Value::Boolean(false));
    }

    #[test]
    fn test_set_kind_discards_payload() {
        let mut value = Value::new(Kind::Object);
        value.insert("a", 1);
        value.insert("b", 2);

        value.set_kind(Kind::Object);
        assert_eq!(value.len(), 2);

        value.set_kind(Kind::String);
        assert_eq!(value, Value::String(String::new()));
    }

    #[test]
    fn test_insert_promotes_and_replaces() {
        let mut value = Value::from(5);
        assert!(value.insert("a", "first").is_none());
        assert!(value.is_object());

        let old = value.insert("a", Value::new(Kind::Array));
        assert_eq!(old, Some(Value::from("first")));
        assert!(value.get("a").unwrap().is_array());
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_push_promotes() {
        let mut value = Value::Null;
        value.push(1);
        value.push("two");
        value.push(Value::new(Kind::Object));
        assert_eq!(value.len(), 3);
        assert_eq!(value.at(1).unwrap(), &Value::from("two"));
    }

    #[test]
    fn test_access_errors() {
        let mut object = Value::new(Kind::Object);
        object.insert("a", 1);
        assert!(matches!(object.get("b"), Err(Error::KeyNotFound(k)) if k == "b"));
        assert!(matches!(
            object.at(0),
            Err(Error::TypeMismatch {
                expected: Kind::Array,
                found: Kind::Object
            })
        ));

        let array = Value::from(vec![Value::from(1)]);
        assert!(matches!(
            array.at(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 1 })
        ));
        assert!(array.get("a").is_err());
    }

    #[test]
    fn test_coercions_are_kind_strict() {
        let numeric = Value::from_literal("2.5").unwrap();
        assert_eq!(numeric.as_double().unwrap(), 2.5);
        assert_eq!(numeric.as_float().unwrap(), 2.5f32);
        assert!(matches!(numeric.as_int(), Err(Error::Conversion { .. })));
        assert!(numeric.as_bool().is_err());

        let flag = Value::Boolean(true);
        assert!(flag.as_bool().unwrap());
        assert!(flag.as_int().is_err());

        assert_eq!(Value::from("+12").as_int().ok(), None);
        assert_eq!(Value::from_literal("+12").unwrap().as_int().unwrap(), 12);
    }

    #[test]
    fn test_take_leaves_null() {
        let mut value = Value::from(vec![Value::from(1), Value::from(2)]);
        let moved = value.take();
        assert!(value.is_null());
        assert_eq!(moved.len(), 2);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Value::new(Kind::Object);
        original.insert("inner", Value::from(vec![Value::from(1)]));
        let mut copy = original.clone();
        copy.get_mut("inner").unwrap().push(2);

        assert_eq!(original.get("inner").unwrap().len(), 1);
        assert_eq!(copy.get("inner").unwrap().len(), 2);
    }

    #[test]
    fn test_lookup_paths() {
        let mut root = Value::new(Kind::Object);
        let mut sub = Value::new(Kind::Object);
        sub.insert("list", Value::from(vec![Value::from("x"), Value::from("y")]));
        root.insert("sub", sub);

        assert_eq!(root.lookup("/sub/list/1").unwrap(), &Value::from("y"));
        assert_eq!(root.lookup("sub//list/0").unwrap(), &Value::from("x"));
        assert_eq!(root.lookup("").unwrap(), &root);
        assert!(root.lookup("sub/list/name").is_err());
        assert!(root.lookup("sub/list/9").is_err());
    }

    #[test]
    fn test_lookup_rejects_non_index_segments() {
        let mut root = Value::new(Kind::Object);
        root.insert("a", Value::from(vec![Value::from(10), Value::from(20)]));

        assert_eq!(root.lookup("a/1").unwrap().as_int().unwrap(), 20);
        for segment in ["+1", "-1", "name", "1.0", " 1"] {
            match root.lookup(&format!("a/{}", segment)) {
                Err(Error::KeyNotFound(key)) => assert_eq!(key, segment),
                other => panic!("{segment} should not index the array, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_float_overflow_is_a_conversion_error() {
        let wide = Value::from_literal(&"9".repeat(60)).unwrap();
        assert!(matches!(
            wide.as_float(),
            Err(Error::Conversion { target: "float", .. })
        ));
        assert!(wide.as_double().unwrap() > 1e59);

        let huge = Value::from_literal(&"9".repeat(400)).unwrap();
        assert!(matches!(
            huge.as_double(),
            Err(Error::Conversion { target: "double", .. })
        ));
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert!(Number::try_from(f64::INFINITY).is_err());
        assert_eq!(Value::from(1.5f64).scalar(), Some("1.5"));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(Value::Null.scalar(), Some(""));
        assert_eq!(Value::Boolean(false).scalar(), Some("false"));
        assert_eq!(Value::new(Kind::Array).scalar(), None);
    }
}
