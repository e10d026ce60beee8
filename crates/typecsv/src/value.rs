use std::borrow::Cow;

use crate::number::format_f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I32(i32),
    I64(i64),
    F64(f64),
}

impl Number {
    /// Narrowest integer variant holding `n`.
    pub fn from_i64(n: i64) -> Self {
        i32::try_from(n).map_or(Number::I64(n), Number::I32)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::I32(i) => Some(i64::from(i)),
            Number::I64(i) => Some(i),
            Number::F64(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I32(i) => f64::from(i),
            Number::I64(i) => i as f64,
            Number::F64(f) => f,
        }
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::I32(i) => write!(f, "{}", i),
            Number::I64(i) => write!(f, "{}", i),
            Number::F64(num) => f.write_str(&format_f64(*num)),
        }
    }
}

/// One field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Undelimited `null` on input. Written back as the text `null`.
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text the writer puts between the delimiters, before escaping.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed("null"),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::String(s) => Cow::Borrowed(s),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_small_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Number(Number::I32(i32::from(n)))
            }
        }
    )*};
}

from_small_int!(i8, i16, i32, u8, u16);

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from_i64(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(Number::from_i64(i64::from(n)))
    }
}

// Out-of-range unsigned values keep their exact digits as text.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => Value::Number(Number::from_i64(i)),
            Err(_) => Value::String(n.to_string()),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::F64(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::String(s.into_owned())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I32(i) => serializer.serialize_i32(i),
            Number::I64(i) => serializer.serialize_i64(i),
            Number::F64(f) => serializer.serialize_f64(f),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
        }
    }
}

// NaN and infinities have no JSON number form and map to null.
#[cfg(feature = "json")]
impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(Number::I32(i)) => serde_json::Value::from(i),
            Value::Number(Number::I64(i)) => serde_json::Value::from(i),
            Value::Number(Number::F64(f)) => serde_json::Number::from_f64(f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s),
        }
    }
}

/// Build a `Vec<Value>` from heterogeneous field expressions.
///
/// ```
/// use typecsv::{record, Value};
///
/// let r = record!["a", 1, -1.5, true, Value::Null];
/// assert_eq!(r.len(), 5);
/// assert_eq!(r[1], Value::from(1));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($field:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($field)),+]
    };
}
