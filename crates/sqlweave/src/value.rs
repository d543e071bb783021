//! Values bound to statement placeholders.

use std::fmt;

/// A value bound to a `$N` placeholder.
///
/// SQL `NULL` is deliberately absent: it is always rendered as the keyword
/// and never occupies a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
}

impl Value {
    /// Renders the value as an inline SQL literal.
    ///
    /// Only used for debug output; statements sent to a database always bind
    /// values through placeholders.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Float(f) if f.is_nan() => "'NaN'::float8".to_string(),
            Self::Float(f) if f.is_infinite() => {
                let sign = if f.is_sign_negative() { "-" } else { "" };
                format!("'{sign}Infinity'::float8")
            }
            Self::Float(f) => format!("{f:?}"),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
