//! Attribute-value codec.
//!
//! Converts between host-side document values ([`DocValue`]) and the tagged
//! attribute representation the database understands on the wire (S, N, B,
//! BOOL, NULL, SS, NS, BS, L, M). Numeric members are rendered in their
//! minimal decimal form: integers without a decimal point, floats in the
//! shortest form that round-trips on parse.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::list::List;
use crate::map::Map;
use crate::set::Set;
use crate::value::DocValue;

/// DynamoDB-style tagged attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String
    S(String),
    /// Number (stored as string for precision)
    N(String),
    /// Binary
    B(Bytes),
    /// Boolean
    Bool(bool),
    /// Null
    Null,
    /// String set
    Ss(Vec<String>),
    /// Number set (members are decimal strings)
    Ns(Vec<String>),
    /// Binary set
    Bs(Vec<Bytes>),
    /// List
    L(Vec<AttributeValue>),
    /// Map
    M(HashMap<String, AttributeValue>),
}

/// Member-kind tag of an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    S,
    N,
    B,
    Bool,
    Null,
    Ss,
    Ns,
    Bs,
    L,
    M,
}

impl AttributeValue {
    pub fn string(s: impl Into<String>) -> Self {
        AttributeValue::S(s.into())
    }

    pub fn number(n: impl ToString) -> Self {
        AttributeValue::N(n.to_string())
    }

    pub fn binary(b: impl Into<Bytes>) -> Self {
        AttributeValue::B(b.into())
    }

    pub fn kind(&self) -> AttrKind {
        match self {
            AttributeValue::S(_) => AttrKind::S,
            AttributeValue::N(_) => AttrKind::N,
            AttributeValue::B(_) => AttrKind::B,
            AttributeValue::Bool(_) => AttrKind::Bool,
            AttributeValue::Null => AttrKind::Null,
            AttributeValue::Ss(_) => AttrKind::Ss,
            AttributeValue::Ns(_) => AttrKind::Ns,
            AttributeValue::Bs(_) => AttrKind::Bs,
            AttributeValue::L(_) => AttrKind::L,
            AttributeValue::M(_) => AttrKind::M,
        }
    }
}

/// Render a number in its minimal decimal textual form.
///
/// Integral values print without a decimal point; everything else uses the
/// shortest representation that parses back to the same f64.
pub fn format_number(n: f64) -> String {
    n.to_string()
}

/// Encode a document value into its attribute representation.
pub fn encode(value: &DocValue) -> Result<AttributeValue> {
    match value {
        DocValue::Null => Ok(AttributeValue::Null),
        DocValue::Bool(b) => Ok(AttributeValue::Bool(*b)),
        DocValue::Number(n) => Ok(AttributeValue::N(format_number(*n))),
        DocValue::String(s) => Ok(AttributeValue::S(s.clone())),
        DocValue::Bytes(b) => Ok(AttributeValue::B(b.clone())),
        DocValue::List(list) => {
            let members = list.iter().map(encode).collect::<Result<Vec<_>>>()?;
            Ok(AttributeValue::L(members))
        }
        DocValue::Map(map) => {
            let mut members = HashMap::with_capacity(map.len());
            for (key, v) in map.iter() {
                members.insert(key.clone(), encode(v)?);
            }
            Ok(AttributeValue::M(members))
        }
        DocValue::StringSet(set) => Ok(AttributeValue::Ss(set.iter().cloned().collect())),
        DocValue::IntSet(set) => Ok(AttributeValue::Ns(
            set.iter().map(|n| n.to_string()).collect(),
        )),
        DocValue::FloatSet(set) => Ok(AttributeValue::Ns(
            set.iter().map(|n| format_number(*n)).collect(),
        )),
        DocValue::BinarySet(set) => Ok(AttributeValue::Bs(set.iter().cloned().collect())),
    }
}

/// Typed projection: encode and assert the result is exactly `kind`.
///
/// Collection containers use this to render precisely the wire member their
/// bound parameter must carry.
pub fn encode_as(value: &DocValue, kind: AttrKind) -> Result<AttributeValue> {
    let attr = encode(value)?;
    if attr.kind() == kind {
        Ok(attr)
    } else {
        Err(Error::ValueIncompatible)
    }
}

/// Decode an attribute value back into a document value.
///
/// The inverse of [`encode`], with the same structural inference the scan
/// path applies: an NS whose members are all integral becomes an int set,
/// any other NS becomes a float set.
pub fn decode(attr: &AttributeValue) -> Result<DocValue> {
    match attr {
        AttributeValue::S(s) => Ok(DocValue::String(s.clone())),
        AttributeValue::N(n) => {
            let parsed: f64 = n.parse().map_err(|_| Error::FailedToCast)?;
            Ok(DocValue::Number(parsed))
        }
        AttributeValue::B(b) => Ok(DocValue::Bytes(b.clone())),
        AttributeValue::Bool(b) => Ok(DocValue::Bool(*b)),
        AttributeValue::Null => Ok(DocValue::Null),
        AttributeValue::Ss(members) => Ok(DocValue::StringSet(Set::from_members(members.clone()))),
        AttributeValue::Ns(members) => {
            let numbers = members
                .iter()
                .map(|m| m.parse::<f64>().map_err(|_| Error::FailedToCast))
                .collect::<Result<Vec<f64>>>()?;
            if numbers.iter().all(|n| n.floor() == *n) {
                Ok(DocValue::IntSet(Set::from_members(
                    numbers.into_iter().map(|n| n as i64).collect(),
                )))
            } else {
                Ok(DocValue::FloatSet(Set::from_members(numbers)))
            }
        }
        AttributeValue::Bs(members) => Ok(DocValue::BinarySet(Set::from_members(members.clone()))),
        AttributeValue::L(members) => {
            let items = members.iter().map(decode).collect::<Result<Vec<_>>>()?;
            Ok(DocValue::List(List::from_items(items)))
        }
        AttributeValue::M(members) => {
            let mut map = Map::new();
            for (key, v) in members {
                map.insert(key.clone(), decode(v)?);
            }
            Ok(DocValue::Map(map))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integral_without_point() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_float_round_trips() {
        let n = 3.141592653589793;
        let rendered = format_number(n);
        assert_eq!(rendered.parse::<f64>().unwrap(), n);
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(
            encode(&DocValue::String("hello".into())).unwrap(),
            AttributeValue::S("hello".into())
        );
        assert_eq!(
            encode(&DocValue::Number(30.0)).unwrap(),
            AttributeValue::N("30".into())
        );
        assert_eq!(
            encode(&DocValue::Bool(true)).unwrap(),
            AttributeValue::Bool(true)
        );
        assert_eq!(encode(&DocValue::Null).unwrap(), AttributeValue::Null);
        assert_eq!(
            encode(&DocValue::Bytes(Bytes::from_static(b"\x01\x02"))).unwrap(),
            AttributeValue::B(Bytes::from_static(b"\x01\x02"))
        );
    }

    #[test]
    fn test_encode_int_set_as_ns() {
        let set = Set::from_members(vec![1i64, 2, 3]);
        let attr = encode(&DocValue::IntSet(set)).unwrap();
        assert_eq!(
            attr,
            AttributeValue::Ns(vec!["1".into(), "2".into(), "3".into()])
        );
    }

    #[test]
    fn test_encode_map_of_numbers() {
        let mut map = Map::new();
        map.insert("a", DocValue::Number(1.0));
        map.insert("b", DocValue::Number(2.0));
        map.insert("c", DocValue::Number(3.0));

        let attr = encode(&DocValue::Map(map)).unwrap();
        let AttributeValue::M(members) = attr else {
            panic!("expected M");
        };
        assert_eq!(members["a"], AttributeValue::N("1".into()));
        assert_eq!(members["b"], AttributeValue::N("2".into()));
        assert_eq!(members["c"], AttributeValue::N("3".into()));
    }

    #[test]
    fn test_encode_nested_list() {
        let inner = List::from_items(vec![DocValue::Number(1.0), DocValue::String("x".into())]);
        let outer = List::from_items(vec![DocValue::List(inner), DocValue::Bool(false)]);

        let attr = encode(&DocValue::List(outer)).unwrap();
        assert_eq!(
            attr,
            AttributeValue::L(vec![
                AttributeValue::L(vec![
                    AttributeValue::N("1".into()),
                    AttributeValue::S("x".into()),
                ]),
                AttributeValue::Bool(false),
            ])
        );
    }

    #[test]
    fn test_encode_as_rejects_wrong_kind() {
        let err = encode_as(&DocValue::String("not a map".into()), AttrKind::M).unwrap_err();
        assert_eq!(err, Error::ValueIncompatible);

        let ok = encode_as(&DocValue::String("s".into()), AttrKind::S).unwrap();
        assert_eq!(ok, AttributeValue::S("s".into()));
    }

    #[test]
    fn test_decode_ns_infers_int_set() {
        let attr = AttributeValue::Ns(vec!["1".into(), "2".into()]);
        let value = decode(&attr).unwrap();
        assert_eq!(value, DocValue::IntSet(Set::from_members(vec![1i64, 2])));

        let attr = AttributeValue::Ns(vec!["1.5".into(), "2".into()]);
        let value = decode(&attr).unwrap();
        assert_eq!(value, DocValue::FloatSet(Set::from_members(vec![1.5f64, 2.0])));
    }

    #[test]
    fn test_decode_bad_number_fails() {
        let attr = AttributeValue::N("not-a-number".into());
        assert_eq!(decode(&attr).unwrap_err(), Error::FailedToCast);
    }

    #[test]
    fn test_round_trip_scalar_list() {
        let value = DocValue::List(List::from_items(vec![
            DocValue::String("a".into()),
            DocValue::Number(2.5),
            DocValue::Bool(true),
            DocValue::Null,
        ]));
        let decoded = decode(&encode(&value).unwrap()).unwrap();
        assert_eq!(decoded, value);
    }
}
