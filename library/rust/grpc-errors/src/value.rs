//! Storable scalar values.
//!
//! `Valuer` is the capability of turning a value into one of the primitive
//! scalars a persistence layer accepts. It is deliberately narrow: types
//! that implement it (such as [`ConstError`](crate::ConstError)) can be
//! written to a column without the storage layer knowing about them.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A primitive value accepted by a persistence layer.
///
/// The variants are the column-level primitives a SQL driver binds: every
/// integer width widens to `Int`, every float to `Float`, and nullable
/// columns map `None` to `Null`. `ConstError` only ever yields `Text`; the
/// other variants exist for downstream `Valuer` implementors such as status
/// enums, counters or audit timestamps stored next to an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// SQL `NULL`. Serializes as JSON `null`.
    Null,
    Bool(bool),
    /// Any signed or unsigned integer that fits in 64 bits.
    Int(i64),
    Float(f64),
    /// UTF-8 text; the representation of every `ConstError`.
    Text(String),
    /// Raw bytes (`BYTEA`). Serializes as an array of numbers.
    Bytes(Vec<u8>),
    /// A UTC instant. Serializes as an RFC 3339 string.
    Timestamp(DateTime<Utc>),
}

impl ScalarValue {
    /// Return the text payload, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float(v)
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::Text(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for ScalarValue {
    fn from(v: Vec<u8>) -> Self {
        ScalarValue::Bytes(v)
    }
}

impl From<DateTime<Utc>> for ScalarValue {
    fn from(v: DateTime<Utc>) -> Self {
        ScalarValue::Timestamp(v)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScalarValue::Null, Into::into)
    }
}

/// Conversion into a storable scalar.
pub trait Valuer {
    /// Error returned when the value cannot be represented as a scalar.
    /// Use `std::convert::Infallible` for types that always convert.
    type Error: std::error::Error;

    fn value(&self) -> Result<ScalarValue, Self::Error>;
}
