//! Recorded variable values.
//!
//! Recorders store scalars, flat numeric vectors and arbitrary
//! n-dimensional arrays. Values decode from plain JSON (`3.5`, `[1.0, 2.0]`,
//! `true`, `"tag"`, `null`) without a type tag, since the decoding
//! collaborator hands them over untyped. Anything else, such as a matrix
//! `[[1.0, 2.0], [3.0, 4.0]]`, is kept as `Structured`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single recorded variable value.
///
/// # Examples
///
/// ```
/// use mdao_cases::Value;
///
/// let x = Value::Float(3.5);
/// let v = Value::Array(vec![1.0, 2.0]);
///
/// assert_eq!(x.as_float(), Some(3.5));
/// assert_eq!(v.as_slice(), Some(&[1.0, 2.0][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<f64>),
    Null,
    // Must stay last: it accepts any JSON.
    Structured(serde_json::Value),
}

impl Value {
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as a numeric slice.
    ///
    /// A scalar float is viewed as a one element slice, matching how
    /// recorders treat scalars as size-1 arrays.
    pub fn as_slice(&self) -> Option<&[f64]> {
        match self {
            Self::Array(v) => Some(v),
            Self::Float(v) => Some(std::slice::from_ref(v)),
            _ => None,
        }
    }

    pub const fn as_structured(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Structured(v) => Some(v),
            _ => None,
        }
    }

    /// Number of scalar entries held (0 for null and non-numeric values).
    ///
    /// Nested arrays count their numeric leaves.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Array(v) => v.len(),
            Self::Float(_) | Self::Int(_) | Self::Bool(_) => 1,
            Self::String(_) | Self::Null => 0,
            Self::Structured(v) => numeric_leaves(v),
        }
    }

    /// Returns a human-readable type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Null => "null",
            Self::Structured(_) => "structured",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Array(v) => write!(f, "array[{}]", v.len()),
            Self::Null => write!(f, "null"),
            Self::Structured(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Array(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Structured(v)
    }
}

fn numeric_leaves(v: &serde_json::Value) -> usize {
    match v {
        serde_json::Value::Number(_) | serde_json::Value::Bool(_) => 1,
        serde_json::Value::Array(items) => items.iter().map(numeric_leaves).sum(),
        serde_json::Value::Object(map) => map.values().map(numeric_leaves).sum(),
        serde_json::Value::Null | serde_json::Value::String(_) => 0,
    }
}
