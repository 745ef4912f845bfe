//! Ordered heterogeneous list container.

use crate::attr::{encode_as, AttrKind};
use crate::collection::{BoundExpr, Collection};
use crate::driver::DriverValue;
use crate::error::{Error, Result};
use crate::resolve::resolve;
use crate::value::DocValue;

/// An ordered sequence of heterogeneous document values.
///
/// Elements may be scalars or nested List/Map/Set containers. Scanning
/// stores the driver's generic elements and promotes each through the
/// nested-resolution walker, preserving order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    items: Vec<DocValue>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<DocValue>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: impl Into<DocValue>) {
        self.items.push(item.into());
    }

    pub fn get(&self, index: usize) -> Option<&DocValue> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocValue> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<DocValue>> for List {
    fn from(items: Vec<DocValue>) -> Self {
        Self::from_items(items)
    }
}

impl Collection for List {
    fn data_type_tag(&self) -> &'static str {
        "list"
    }

    fn scan(&mut self, raw: Option<DriverValue>) -> Result<()> {
        if !self.items.is_empty() {
            return Err(Error::CollectionAlreadyContainsItem);
        }
        let Some(raw) = raw else {
            return Ok(());
        };
        let DriverValue::List(elements) = raw else {
            self.items.clear();
            return Err(Error::FailedToCast);
        };
        for element in elements {
            match resolve(element) {
                Ok(value) => self.items.push(value),
                Err(err) => {
                    self.items.clear();
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn bind_expr(&self) -> Result<BoundExpr> {
        let var = encode_as(&DocValue::List(self.clone()), AttrKind::L)?;
        Ok(BoundExpr::new(var))
    }
}
