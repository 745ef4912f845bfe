//! Shared helpers for the dynaql integration suites.

use std::collections::HashMap;
use std::sync::Arc;

use dynaql_core::{bind, AttributeValue, DriverValue, Record, Result, Set};
use dynaql_dialect::{DynamoDialect, FieldKind, Schema, Statement};

/// A statement bound to the DynamoDB dialect.
pub fn statement() -> Statement {
    Statement::new(Arc::new(DynamoDialect::new()))
}

/// A statement carrying a schema with `pk` as its only primary-key column.
pub fn statement_with_pk(table: &str) -> Statement {
    let schema = Schema::new(table)
        .field("PK", FieldKind::String, true)
        .field("Col1", FieldKind::String, false)
        .field("Col2", FieldKind::String, false);
    statement().with_schema(schema)
}

/// Build a generic driver map from (key, value) pairs.
pub fn driver_map(entries: Vec<(&str, DriverValue)>) -> DriverValue {
    let map: HashMap<String, DriverValue> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    DriverValue::Map(map)
}

/// Sample record used by the TypedList suites.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub stars: i64,
    pub archived: bool,
    pub topics: Set<String>,
}

impl Record for Project {
    fn bind_field(&mut self, column: &str, raw: &DriverValue) -> Result<()> {
        match column {
            "name" => bind::string(&mut self.name, raw),
            "stars" => bind::int(&mut self.stars, raw),
            "archived" => bind::boolean(&mut self.archived, raw),
            "topics" => bind::scanner(&mut self.topics, raw),
            _ => Ok(()),
        }
    }

    fn encode_fields(&self) -> Result<HashMap<String, AttributeValue>> {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), AttributeValue::S(self.name.clone()));
        fields.insert(
            "stars".to_string(),
            AttributeValue::N(self.stars.to_string()),
        );
        fields.insert("archived".to_string(), AttributeValue::Bool(self.archived));
        fields.insert(
            "topics".to_string(),
            AttributeValue::Ss(self.topics.iter().cloned().collect()),
        );
        Ok(fields)
    }
}
