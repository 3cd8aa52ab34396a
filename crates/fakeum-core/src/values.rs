//! Value representations produced by generators.

use chrono::NaiveDateTime;
use std::fmt;

/// Raw generated value before text normalization.
///
/// Most operations return [`FakeValue::Text`]; the other variants carry the
/// native type of the datum so the caller decides how to render it.
#[derive(Debug, Clone, PartialEq)]
pub enum FakeValue {
    /// String value
    Text(String),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Date and time without timezone
    DateTime(NaiveDateTime),

    /// Binary data
    Bytes(Vec<u8>),
}

impl FakeValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::DateTime(_) => "datetime",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl fmt::Display for FakeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
        }
    }
}

impl From<String> for FakeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FakeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for FakeValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<NaiveDateTime> for FakeValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

/// Positional argument passed to a generator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeArg {
    Int(i64),
    Bool(bool),
}

impl FakeArg {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(_) => None,
        }
    }
}
