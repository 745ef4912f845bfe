//! Homogeneous set containers (SS, NS, BS).
//!
//! One generic container over a sealed element trait rather than four
//! separate types; integers and floats share the NS wire tag, the element
//! type is a host-side refinement. Sets are leaves: they never nest.

use bytes::Bytes;

use crate::attr::{encode_as, AttrKind};
use crate::collection::{BoundExpr, Collection};
use crate::driver::DriverValue;
use crate::error::{Error, Result, SetKind};
use crate::value::DocValue;

mod sealed {
    pub trait Sealed {}
    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bytes::Bytes {}
}

/// Permitted set element types: String, i64, f64 and Bytes.
pub trait SetElement: sealed::Sealed + Clone + PartialEq {
    /// Element kind, as named in scan-mismatch errors.
    const KIND: SetKind;
    /// Wire member kind the set renders to.
    const ATTR_KIND: AttrKind;

    /// Structural compatibility with a driver-returned value. Pure; looks
    /// only at the slice shape (and, for i64, member integrality).
    fn is_compatible(raw: &DriverValue) -> bool;

    /// Convert a compatible driver value into members.
    fn from_raw(raw: DriverValue) -> Result<Vec<Self>>
    where
        Self: Sized;

    /// Wrap a set of this element type in its document-value variant.
    fn wrap(set: Set<Self>) -> DocValue
    where
        Self: Sized;
}

impl SetElement for String {
    const KIND: SetKind = SetKind::String;
    const ATTR_KIND: AttrKind = AttrKind::Ss;

    fn is_compatible(raw: &DriverValue) -> bool {
        matches!(raw, DriverValue::StringList(_))
    }

    fn from_raw(raw: DriverValue) -> Result<Vec<Self>> {
        match raw {
            DriverValue::StringList(members) => Ok(members),
            _ => Err(Error::IncompatibleSlice(Self::KIND)),
        }
    }

    fn wrap(set: Set<Self>) -> DocValue {
        DocValue::StringSet(set)
    }
}

impl SetElement for i64 {
    const KIND: SetKind = SetKind::Int;
    const ATTR_KIND: AttrKind = AttrKind::Ns;

    fn is_compatible(raw: &DriverValue) -> bool {
        match raw {
            // The driver delivers numbers as f64; an int set additionally
            // requires every member to be integral.
            DriverValue::NumberList(members) => members.iter().all(|n| n.floor() == *n),
            _ => false,
        }
    }

    fn from_raw(raw: DriverValue) -> Result<Vec<Self>> {
        match raw {
            DriverValue::NumberList(members) => members
                .into_iter()
                .map(|n| {
                    if n.floor() == n {
                        Ok(n as i64)
                    } else {
                        Err(Error::IncompatibleSlice(Self::KIND))
                    }
                })
                .collect(),
            _ => Err(Error::IncompatibleSlice(Self::KIND)),
        }
    }

    fn wrap(set: Set<Self>) -> DocValue {
        DocValue::IntSet(set)
    }
}

impl SetElement for f64 {
    const KIND: SetKind = SetKind::Float;
    const ATTR_KIND: AttrKind = AttrKind::Ns;

    fn is_compatible(raw: &DriverValue) -> bool {
        matches!(raw, DriverValue::NumberList(_))
    }

    fn from_raw(raw: DriverValue) -> Result<Vec<Self>> {
        match raw {
            DriverValue::NumberList(members) => Ok(members),
            _ => Err(Error::IncompatibleSlice(Self::KIND)),
        }
    }

    fn wrap(set: Set<Self>) -> DocValue {
        DocValue::FloatSet(set)
    }
}

impl SetElement for Bytes {
    const KIND: SetKind = SetKind::Binary;
    const ATTR_KIND: AttrKind = AttrKind::Bs;

    fn is_compatible(raw: &DriverValue) -> bool {
        matches!(raw, DriverValue::BytesList(_))
    }

    fn from_raw(raw: DriverValue) -> Result<Vec<Self>> {
        match raw {
            DriverValue::BytesList(members) => Ok(members),
            _ => Err(Error::IncompatibleSlice(Self::KIND)),
        }
    }

    fn wrap(set: Set<Self>) -> DocValue {
        DocValue::BinarySet(set)
    }
}

/// An unordered homogeneous collection of T.
#[derive(Debug, Clone, PartialEq)]
pub struct Set<T: SetElement> {
    members: Vec<T>,
}

impl<T: SetElement> Set<T> {
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    pub fn from_members(members: Vec<T>) -> Self {
        Self { members }
    }

    /// Insert a member, ignoring duplicates.
    pub fn insert(&mut self, member: T) {
        if !self.members.contains(&member) {
            self.members.push(member);
        }
    }

    pub fn contains(&self, member: &T) -> bool {
        self.members.contains(member)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Structural compatibility predicate used by the resolution walker.
    pub fn is_compatible(raw: &DriverValue) -> bool {
        T::is_compatible(raw)
    }
}

impl<T: SetElement> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SetElement> From<Vec<T>> for Set<T> {
    fn from(members: Vec<T>) -> Self {
        Self::from_members(members)
    }
}

impl<T: SetElement> Collection for Set<T> {
    fn data_type_tag(&self) -> &'static str {
        "sets"
    }

    fn scan(&mut self, raw: Option<DriverValue>) -> Result<()> {
        if !self.members.is_empty() {
            return Err(Error::CollectionAlreadyContainsItem);
        }
        let Some(raw) = raw else {
            return Ok(());
        };
        match T::from_raw(raw) {
            Ok(members) => {
                self.members = members;
                Ok(())
            }
            Err(err) => {
                self.members.clear();
                Err(err)
            }
        }
    }

    fn bind_expr(&self) -> Result<BoundExpr> {
        let var = encode_as(&T::wrap(self.clone()), T::ATTR_KIND)?;
        Ok(BoundExpr::new(var))
    }
}
