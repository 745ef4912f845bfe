//! Raw values as the SQL driver delivers them on result scan.
//!
//! The driver hands back untyped data: numbers always arrive as f64,
//! set-kind attributes arrive as homogeneous slices (`Vec<f64>` for NS,
//! `Vec<String>` for SS, `Vec<Bytes>` for BS) and lists arrive as generic
//! slices. The nested-resolution walker infers the right semantic container
//! from these shapes.

use bytes::Bytes;
use std::collections::HashMap;

use crate::attr::AttributeValue;
use crate::error::{Error, Result};

/// A generic driver-returned value, before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Bytes(Bytes),
    /// Homogeneous numeric slice, delivered for NS attributes.
    NumberList(Vec<f64>),
    /// Homogeneous string slice, delivered for SS attributes.
    StringList(Vec<String>),
    /// Homogeneous binary slice, delivered for BS attributes.
    BytesList(Vec<Bytes>),
    /// Generic slice, delivered for L attributes.
    List(Vec<DriverValue>),
    /// Generic keyed map, delivered for M attributes.
    Map(HashMap<String, DriverValue>),
}

impl DriverValue {
    /// Model the driver's delivery of a wire attribute value.
    ///
    /// This is the shape conversion the underlying driver performs before
    /// the scan path ever sees a value.
    pub fn from_attribute(attr: &AttributeValue) -> Result<DriverValue> {
        match attr {
            AttributeValue::S(s) => Ok(DriverValue::String(s.clone())),
            AttributeValue::N(n) => {
                let parsed: f64 = n.parse().map_err(|_| Error::FailedToCast)?;
                Ok(DriverValue::Number(parsed))
            }
            AttributeValue::B(b) => Ok(DriverValue::Bytes(b.clone())),
            AttributeValue::Bool(b) => Ok(DriverValue::Bool(*b)),
            AttributeValue::Null => Ok(DriverValue::Null),
            AttributeValue::Ss(members) => Ok(DriverValue::StringList(members.clone())),
            AttributeValue::Ns(members) => {
                let numbers = members
                    .iter()
                    .map(|m| m.parse::<f64>().map_err(|_| Error::FailedToCast))
                    .collect::<Result<Vec<f64>>>()?;
                Ok(DriverValue::NumberList(numbers))
            }
            AttributeValue::Bs(members) => Ok(DriverValue::BytesList(members.clone())),
            AttributeValue::L(members) => {
                let items = members
                    .iter()
                    .map(DriverValue::from_attribute)
                    .collect::<Result<Vec<_>>>()?;
                Ok(DriverValue::List(items))
            }
            AttributeValue::M(members) => {
                let mut map = HashMap::with_capacity(members.len());
                for (key, v) in members {
                    map.insert(key.clone(), DriverValue::from_attribute(v)?);
                }
                Ok(DriverValue::Map(map))
            }
        }
    }
}

impl From<&str> for DriverValue {
    fn from(s: &str) -> Self {
        DriverValue::String(s.to_string())
    }
}

impl From<f64> for DriverValue {
    fn from(n: f64) -> Self {
        DriverValue::Number(n)
    }
}

impl From<bool> for DriverValue {
    fn from(b: bool) -> Self {
        DriverValue::Bool(b)
    }
}
