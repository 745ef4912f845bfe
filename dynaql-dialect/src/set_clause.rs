//! SET clause builder and PartiQL update functions.
//!
//! The database restricts UPDATE targets: one `SET` keyword per assignment,
//! and primary-key columns are immutable. Assignment values may instead be
//! update functions (e.g. `list_append`) that produce a call preamble plus
//! a single bound parameter.

use std::sync::OnceLock;

use dynaql_core::{DocValue, Error, List, Result};
use regex::Regex;
use tracing::debug;

use crate::clause::{AssignmentValue, Clause, UpdateFunction};
use crate::statement::Statement;

fn column_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\w.]+$").expect("static pattern is valid"))
}

/// `list_append(col, ?)` update function: appends the given items to a list
/// attribute. The bound parameter is a List of the appended items.
#[derive(Debug, Clone)]
pub struct ListAppend {
    items: Vec<DocValue>,
}

impl ListAppend {
    pub fn new(items: Vec<DocValue>) -> Self {
        Self { items }
    }
}

impl UpdateFunction for ListAppend {
    fn expression(&self, column: &str) -> Result<String> {
        if !column_pattern().is_match(column) {
            return Err(Error::InvalidColumnName(column.to_string()));
        }
        Ok(format!("list_append({}, ", column))
    }

    fn bind_value(&self) -> DocValue {
        DocValue::List(List::from_items(self.items.clone()))
    }
}

/// Rewrite the ORM's SET clause into per-assignment form.
///
/// Primary-key assignments are skipped. Assignments whose update function
/// rejects the column push the error onto the statement and emit nothing.
pub fn build_set(clause: &Clause, stmt: &mut Statement) {
    let Clause::Set(set) = clause else {
        return;
    };
    if set.assignments.is_empty() {
        return;
    }

    let primary_keys: Vec<String> = stmt
        .schema
        .as_ref()
        .map(|s| {
            s.primary_key_columns()
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let mut emitted = 0usize;
    for assignment in &set.assignments {
        let column = assignment.column.name.as_str();
        if primary_keys.iter().any(|pk| pk == column) {
            debug!(column, "skipping assignment to primary key column");
            continue;
        }

        match &assignment.value {
            AssignmentValue::Value(value) => {
                if emitted > 0 {
                    stmt.write_str(" ");
                }
                stmt.write_str("SET ");
                stmt.write_quoted(column);
                stmt.write_str("=");
                stmt.add_var(value.clone());
            }
            AssignmentValue::Func(func) => {
                let preamble = match func.expression(column) {
                    Ok(p) => p,
                    Err(err) => {
                        stmt.add_error(err);
                        continue;
                    }
                };
                if emitted > 0 {
                    stmt.write_str(" ");
                }
                stmt.write_str("SET ");
                stmt.write_quoted(column);
                stmt.write_str("=");
                stmt.write_str(&preamble);
                stmt.add_var(func.bind_value());
                stmt.write_str(")");
            }
        }
        emitted += 1;
    }
}
