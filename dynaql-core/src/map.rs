//! Unordered keyed map container.

use std::collections::HashMap;

use crate::attr::{encode_as, AttrKind};
use crate::collection::{BoundExpr, Collection};
use crate::driver::DriverValue;
use crate::error::{Error, Result};
use crate::resolve::resolve;
use crate::value::DocValue;

/// A mapping from string keys to heterogeneous document values.
///
/// Key order is not significant. Value-side collections are recursively
/// resolved when scanning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    entries: HashMap<String, DocValue>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DocValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DocValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, DocValue>> for Map {
    fn from(entries: HashMap<String, DocValue>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, DocValue)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, DocValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Collection for Map {
    fn data_type_tag(&self) -> &'static str {
        "map"
    }

    fn scan(&mut self, raw: Option<DriverValue>) -> Result<()> {
        if !self.entries.is_empty() {
            return Err(Error::CollectionAlreadyContainsItem);
        }
        let Some(raw) = raw else {
            return Ok(());
        };
        let DriverValue::Map(entries) = raw else {
            self.entries.clear();
            return Err(Error::FailedToCast);
        };
        for (key, element) in entries {
            match resolve(element) {
                Ok(value) => {
                    self.entries.insert(key, value);
                }
                Err(err) => {
                    self.entries.clear();
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn bind_expr(&self) -> Result<BoundExpr> {
        let var = encode_as(&DocValue::Map(self.clone()), AttrKind::M)?;
        Ok(BoundExpr::new(var))
    }
}
