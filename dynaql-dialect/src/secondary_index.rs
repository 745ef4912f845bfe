//! Secondary-index statement modifier.
//!
//! Queries target a named secondary index by writing `"Table"."Index"` as
//! the from-source; this modifier rewrites the statement's table and table
//! expression accordingly.

use crate::clause::{Expression, StatementModifier};
use crate::statement::{Statement, Table, TableExpr};

/// Rewrites the statement's target to `table.index`.
#[derive(Debug, Clone, Default)]
pub struct SecondaryIndex {
    index: String,
    table: Option<String>,
    table_clause: Option<Table>,
}

impl SecondaryIndex {
    /// Target the given index. A `"table.index"` form carries the table
    /// name on the left-hand side.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            table: None,
            table_clause: None,
        }
    }

    /// Explicit table name; takes precedence over every other source.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Table clause handle; consulted when no explicit name is set.
    pub fn with_table_clause(mut self, table: Table) -> Self {
        self.table_clause = Some(table);
        self
    }

    /// Effective (table, index) pair per the precedence order: explicit
    /// string, table clause name, `"table.index"` split, statement table.
    fn resolve_target(&self, stmt: &Statement) -> (String, String) {
        if let Some(table) = &self.table {
            return (table.clone(), self.index.clone());
        }
        if let Some(clause) = &self.table_clause {
            return (clause.name.clone(), self.index.clone());
        }
        if let Some((table, index)) = self.index.split_once('.') {
            return (table.to_string(), index.to_string());
        }
        (stmt.table.clone(), self.index.clone())
    }
}

impl StatementModifier for SecondaryIndex {
    fn modify_statement(&self, stmt: &mut Statement) {
        let (table, index) = self.resolve_target(stmt);
        let quoted = format!(
            "{}.{}",
            stmt.dialect().quote_identifier(&table),
            stmt.dialect().quote_identifier(&index)
        );
        stmt.table = format!("{}.{}", table, index);
        stmt.table_expr = Some(TableExpr { sql: quoted });
    }
}

impl Expression for SecondaryIndex {
    fn build(&self, stmt: &mut Statement) {
        self.modify_statement(stmt);
    }
}
