//! Ordered list of fixed-schema records.
//!
//! Used when every element of a list attribute is a map with the same
//! shape; elements bind into a record type instead of a generic Map.

use crate::attr::AttributeValue;
use crate::collection::{BoundExpr, Collection};
use crate::driver::DriverValue;
use crate::error::{Error, Result};
use crate::record::Record;

/// An ordered sequence of records of type R.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedList<R: Record> {
    items: Vec<R>,
}

impl<R: Record> TypedList<R> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items(items: Vec<R>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: R) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R: Record> Default for TypedList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> From<Vec<R>> for TypedList<R> {
    fn from(items: Vec<R>) -> Self {
        Self::from_items(items)
    }
}

impl<R: Record> Collection for TypedList<R> {
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
            let DriverValue::Map(entries) = element else {
                self.items.clear();
                return Err(Error::FailedToCast);
            };
            let mut record = R::default();
            for (column, value) in &entries {
                if let Err(err) = record.bind_field(column, value) {
                    self.items.clear();
                    return Err(err);
                }
            }
            self.items.push(record);
        }
        Ok(())
    }

    fn bind_expr(&self) -> Result<BoundExpr> {
        let members = self
            .items
            .iter()
            .map(|record| record.encode_fields().map(AttributeValue::M))
            .collect::<Result<Vec<_>>>()?;
        Ok(BoundExpr::new(AttributeValue::L(members)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::bind;
    use crate::set::Set;
    use std::collections::HashMap;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Event {
        name: String,
        count: i64,
        tags: Set<String>,
    }

    impl Record for Event {
        fn bind_field(&mut self, column: &str, raw: &DriverValue) -> Result<()> {
            match column {
                "name" => bind::string(&mut self.name, raw),
                "count" => bind::int(&mut self.count, raw),
                "tags" => bind::scanner(&mut self.tags, raw),
                _ => Ok(()),
            }
        }

        fn encode_fields(&self) -> Result<HashMap<String, AttributeValue>> {
            let mut fields = HashMap::new();
            fields.insert("name".to_string(), AttributeValue::S(self.name.clone()));
            fields.insert(
                "count".to_string(),
                AttributeValue::N(self.count.to_string()),
            );
            fields.insert(
                "tags".to_string(),
                AttributeValue::Ss(self.tags.iter().cloned().collect()),
            );
            Ok(fields)
        }
    }

    fn raw_event(name: &str, count: f64) -> DriverValue {
        let mut entries = HashMap::new();
        entries.insert("name".to_string(), DriverValue::String(name.into()));
        entries.insert("count".to_string(), DriverValue::Number(count));
        entries.insert(
            "tags".to_string(),
            DriverValue::StringList(vec!["t1".into()]),
        );
        entries.insert("extra".to_string(), DriverValue::Bool(true));
        DriverValue::Map(entries)
    }

    #[test]
    fn test_scan_binds_records_in_order() {
        let mut list: TypedList<Event> = TypedList::new();
        list.scan(Some(DriverValue::List(vec![
            raw_event("a", 1.0),
            raw_event("b", 2.0),
        ])))
        .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().name, "a");
        assert_eq!(list.get(1).unwrap().count, 2);
        assert_eq!(
            list.get(0).unwrap().tags,
            Set::from_members(vec!["t1".to_string()])
        );
    }

    #[test]
    fn test_scan_rejects_non_map_element() {
        let mut list: TypedList<Event> = TypedList::new();
        let err = list
            .scan(Some(DriverValue::List(vec![DriverValue::Number(1.0)])))
            .unwrap_err();
        assert_eq!(err, Error::FailedToCast);
        assert!(list.is_empty());
    }

    #[test]
    fn test_scan_non_empty_receiver_fails() {
        let mut list = TypedList::from_items(vec![Event::default()]);
        let err = list.scan(Some(DriverValue::List(vec![]))).unwrap_err();
        assert_eq!(err, Error::CollectionAlreadyContainsItem);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_bind_expr_wraps_typed_maps_in_l() {
        let list = TypedList::from_items(vec![Event {
            name: "a".into(),
            count: 3,
            tags: Set::from_members(vec!["x".to_string()]),
        }]);

        let bound = list.bind_expr().unwrap();
        assert_eq!(bound.sql, "?");
        let AttributeValue::L(members) = bound.var else {
            panic!("expected L");
        };
        let AttributeValue::M(fields) = &members[0] else {
            panic!("expected M element");
        };
        assert_eq!(fields["name"], AttributeValue::S("a".into()));
        assert_eq!(fields["count"], AttributeValue::N("3".into()));
    }
}
