//! Value kinds and their ordering/rendering rules.
//!
//! Every container holds values of exactly one [`ValueType`]. The four kinds
//! share one closed enum so that compare, render and size dispatch are
//! exhaustive matches rather than function-pointer tables.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The kind of value a container holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// 32-bit signed integer.
    Integer,
    /// 32-bit IEEE float.
    Float,
    /// Single byte character.
    Character,
    /// Owned, possibly NULL, text.
    Text,
}

impl ValueType {
    /// All value kinds, in declaration order.
    pub const ALL: [ValueType; 4] = [
        ValueType::Integer,
        ValueType::Float,
        ValueType::Character,
        ValueType::Text,
    ];

    /// Returns the storage size of one element of this kind.
    ///
    /// Text stores an owning handle, so its size is the size of a pointer.
    #[must_use]
    pub const fn element_size(self) -> usize {
        match self {
            Self::Integer => std::mem::size_of::<i32>(),
            Self::Float => std::mem::size_of::<f32>(),
            Self::Character => std::mem::size_of::<u8>(),
            Self::Text => std::mem::size_of::<usize>(),
        }
    }

    /// Returns the zero value of this kind (NULL for text).
    #[must_use]
    pub const fn default_value(self) -> Value {
        match self {
            Self::Integer => Value::Integer(0),
            Self::Float => Value::Float(0.0),
            Self::Character => Value::Character(0),
            Self::Text => Value::Text(None),
        }
    }

    /// Returns a human-readable name for the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Character => "character",
            Self::Text => "text",
        }
    }

    /// Compares two values of this kind.
    #[must_use]
    pub fn compare(self, a: &Value, b: &Value) -> Ordering {
        a.compare(b)
    }

    /// Renders a value as plain text.
    #[must_use]
    pub fn render(self, value: &Value) -> String {
        value.render()
    }

    /// Parses one whitespace-free literal into a value of this kind.
    ///
    /// Parsing is lenient: malformed integers and floats become zero, an empty
    /// character token becomes NUL, text is taken verbatim. Input validation is
    /// the caller's concern; this never fails.
    #[must_use]
    pub fn parse_token(self, token: &str) -> Value {
        match self {
            Self::Integer => Value::Integer(parse_int_prefix(token)),
            Self::Float => Value::Float(parse_float_prefix(token)),
            Self::Character => Value::Character(token.as_bytes().first().copied().unwrap_or(0)),
            Self::Text => Value::Text(Some(token.to_string())),
        }
    }

    /// Parses a whitespace-separated list of literals.
    #[must_use]
    pub fn parse_tokens(self, input: &str) -> Vec<Value> {
        input
            .split_whitespace()
            .map(|token| self.parse_token(token))
            .collect()
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Integer => 0,
            Self::Float => 1,
            Self::Character => 2,
            Self::Text => 3,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Integer value.
    Integer(i32),
    /// Float value.
    Float(f32),
    /// Character value (one byte).
    Character(u8),
    /// Text value; `None` is the NULL text.
    Text(Option<String>),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Float(_) => ValueType::Float,
            Self::Character(_) => ValueType::Character,
            Self::Text(_) => ValueType::Text,
        }
    }

    /// Creates a text value.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(Some(s.into()))
    }

    /// Total ordering used by every sort and by BST insertion.
    ///
    /// - Floats use `<`/`>`; NaN is neither less nor greater, so it compares equal.
    /// - NULL text is strictly less than any non-NULL text; texts compare bytewise.
    /// - Values of different kinds order by kind (integer < float < character < text).
    #[must_use]
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => {
                if a < b {
                    Ordering::Less
                } else if a > b {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
            (Self::Character(a), Self::Character(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => match (a, b) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.as_bytes().cmp(b.as_bytes()),
            },
            _ => self.value_type().rank().cmp(&other.value_type().rank()),
        }
    }

    /// Renders the value as plain text (`%d`, `%.2f`, the character, the text or `NULL`).
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Renders the value as a literal: characters in single quotes, text in double quotes.
    #[must_use]
    pub fn render_literal(&self) -> String {
        match self {
            Self::Character(c) => format!("'{}'", char::from(*c)),
            Self::Text(Some(s)) => format!("\"{s}\""),
            Self::Text(None) => "\"NULL\"".to_string(),
            other => other.render(),
        }
    }

    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float payload, if any.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(Some(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.2}"),
            Self::Character(c) => write!(f, "{}", char::from(*c)),
            Self::Text(Some(s)) => f.write_str(s),
            Self::Text(None) => f.write_str("NULL"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        // Only the low byte is stored, matching the single-byte character kind.
        Self::Character(c as u8)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(Some(s))
    }
}

/// Parses a leading decimal integer, `atoi` style. Returns 0 when there is none.
fn parse_int_prefix(token: &str) -> i32 {
    let t = token.trim_start();
    let bytes = t.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }
    match t[..end].parse::<i64>() {
        Ok(v) => v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        Err(_) if t.starts_with('-') => i32::MIN,
        Err(_) => i32::MAX,
    }
}

/// Parses the longest leading decimal float, `atof` style. Returns 0.0 when there is none.
fn parse_float_prefix(token: &str) -> f32 {
    let t = token.trim_start();
    let candidate_len = t
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();
    (1..=candidate_len)
        .rev()
        .find_map(|len| t[..len].parse::<f32>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_sizes() {
        assert_eq!(ValueType::Integer.element_size(), 4);
        assert_eq!(ValueType::Float.element_size(), 4);
        assert_eq!(ValueType::Character.element_size(), 1);
        assert_eq!(
            ValueType::Text.element_size(),
            std::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_compare_integers() {
        assert_eq!(Value::Integer(3).compare(&Value::Integer(5)), Ordering::Less);
        assert_eq!(Value::Integer(5).compare(&Value::Integer(5)), Ordering::Equal);
        // No subtraction overflow at the extremes
        assert_eq!(
            Value::Integer(i32::MIN).compare(&Value::Integer(i32::MAX)),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_floats_nan_is_equal() {
        let nan = Value::Float(f32::NAN);
        assert_eq!(nan.compare(&Value::Float(1.0)), Ordering::Equal);
        assert_eq!(Value::Float(1.0).compare(&nan), Ordering::Equal);
        assert_eq!(Value::Float(1.0).compare(&Value::Float(2.5)), Ordering::Less);
    }

    #[test]
    fn test_compare_null_text_is_smallest() {
        let null = Value::Text(None);
        assert_eq!(null.compare(&Value::text("")), Ordering::Less);
        assert_eq!(Value::text("a").compare(&null), Ordering::Greater);
        assert_eq!(null.compare(&Value::Text(None)), Ordering::Equal);
        assert_eq!(Value::text("abc").compare(&Value::text("abd")), Ordering::Less);
        assert_eq!(Value::text("B").compare(&Value::text("a")), Ordering::Less);
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Integer(-4).render(), "-4");
        assert_eq!(Value::Float(3.14159).render(), "3.14");
        assert_eq!(Value::Character(b'x').render(), "x");
        assert_eq!(Value::text("hello").render(), "hello");
        assert_eq!(Value::Text(None).render(), "NULL");
    }

    #[test]
    fn test_render_literal() {
        assert_eq!(Value::Character(b'x').render_literal(), "'x'");
        assert_eq!(Value::text("hi").render_literal(), "\"hi\"");
        assert_eq!(Value::Integer(9).render_literal(), "9");
    }

    #[test]
    fn test_parse_integer_lenient() {
        assert_eq!(ValueType::Integer.parse_token("42"), Value::Integer(42));
        assert_eq!(ValueType::Integer.parse_token("-17abc"), Value::Integer(-17));
        assert_eq!(ValueType::Integer.parse_token("abc"), Value::Integer(0));
        assert_eq!(ValueType::Integer.parse_token(""), Value::Integer(0));
        assert_eq!(
            ValueType::Integer.parse_token("99999999999"),
            Value::Integer(i32::MAX)
        );
    }

    #[test]
    fn test_parse_float_lenient() {
        assert_eq!(ValueType::Float.parse_token("2.5"), Value::Float(2.5));
        assert_eq!(ValueType::Float.parse_token("1.5x"), Value::Float(1.5));
        assert_eq!(ValueType::Float.parse_token("1e"), Value::Float(1.0));
        assert_eq!(ValueType::Float.parse_token("nope"), Value::Float(0.0));
    }

    #[test]
    fn test_parse_character_and_text() {
        assert_eq!(ValueType::Character.parse_token("zeta"), Value::Character(b'z'));
        assert_eq!(ValueType::Character.parse_token(""), Value::Character(0));
        assert_eq!(ValueType::Text.parse_token("word"), Value::text("word"));
    }

    #[test]
    fn test_parse_tokens() {
        let values = ValueType::Integer.parse_tokens("  10 20\t30\n");
        assert_eq!(
            values,
            vec![Value::Integer(10), Value::Integer(20), Value::Integer(30)]
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_text_compare_is_antisymmetric(a in ".{0,8}", b in ".{0,8}") {
            let (va, vb) = (Value::text(a), Value::text(b));
            proptest::prop_assert_eq!(va.compare(&vb), vb.compare(&va).reverse());
        }

        #[test]
        fn prop_integer_compare_matches_ord(a in proptest::num::i32::ANY, b in proptest::num::i32::ANY) {
            proptest::prop_assert_eq!(Value::Integer(a).compare(&Value::Integer(b)), a.cmp(&b));
        }
    }

    #[test]
    fn test_default_values() {
        assert_eq!(ValueType::Text.default_value(), Value::Text(None));
        assert_eq!(ValueType::Integer.default_value(), Value::Integer(0));
        for ty in ValueType::ALL {
            assert_eq!(ty.default_value().value_type(), ty);
        }
    }
}
