//! Resolved document values.
//!
//! [`DocValue`] is the host-side element type carried inside List/Map
//! containers and used as the bind-variable type on statements. It is the
//! fully resolved counterpart of [`crate::driver::DriverValue`]: nested
//! collections have already been promoted to their semantic container.

use bytes::Bytes;

use crate::list::List;
use crate::map::Map;
use crate::set::Set;

/// A resolved document value: a scalar or a semantic container.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    Null,
    Bool(bool),
    /// Numbers are carried as f64, the way the driver delivers them.
    Number(f64),
    String(String),
    Bytes(Bytes),
    List(List),
    Map(Map),
    StringSet(Set<String>),
    IntSet(Set<i64>),
    FloatSet(Set<f64>),
    BinarySet(Set<Bytes>),
}

impl DocValue {
    pub fn string(s: impl Into<String>) -> Self {
        DocValue::String(s.into())
    }

    pub fn number(n: f64) -> Self {
        DocValue::Number(n)
    }

    pub fn binary(b: impl Into<Bytes>) -> Self {
        DocValue::Bytes(b.into())
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            DocValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            DocValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            DocValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            DocValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for DocValue {
    fn from(b: bool) -> Self {
        DocValue::Bool(b)
    }
}

impl From<f64> for DocValue {
    fn from(n: f64) -> Self {
        DocValue::Number(n)
    }
}

impl From<i64> for DocValue {
    fn from(n: i64) -> Self {
        DocValue::Number(n as f64)
    }
}

impl From<&str> for DocValue {
    fn from(s: &str) -> Self {
        DocValue::String(s.to_string())
    }
}

impl From<String> for DocValue {
    fn from(s: String) -> Self {
        DocValue::String(s)
    }
}

impl From<Bytes> for DocValue {
    fn from(b: Bytes) -> Self {
        DocValue::Bytes(b)
    }
}

impl From<List> for DocValue {
    fn from(l: List) -> Self {
        DocValue::List(l)
    }
}

impl From<Map> for DocValue {
    fn from(m: Map) -> Self {
        DocValue::Map(m)
    }
}

impl From<Set<String>> for DocValue {
    fn from(s: Set<String>) -> Self {
        DocValue::StringSet(s)
    }
}

impl From<Set<i64>> for DocValue {
    fn from(s: Set<i64>) -> Self {
        DocValue::IntSet(s)
    }
}

impl From<Set<f64>> for DocValue {
    fn from(s: Set<f64>) -> Self {
        DocValue::FloatSet(s)
    }
}

impl From<Set<Bytes>> for DocValue {
    fn from(s: Set<Bytes>) -> Self {
        DocValue::BinarySet(s)
    }
}
