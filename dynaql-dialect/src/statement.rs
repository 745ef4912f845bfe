//! Host-ORM statement model, referenced at the surface.
//!
//! The dialect operates on one statement instance per invocation: SQL text,
//! bind variables in emission order, an error accumulator the transaction
//! layer inspects, and the table/schema context the builders consult.

use std::collections::HashMap;
use std::sync::Arc;

use dynaql_core::{DocValue, Error};

use crate::clause::{Clause, ClauseBuilder};
use crate::Dialect;

/// A column reference inside a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A table clause handle, as the ORM carries it on FROM clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A raw SQL fragment standing in for the statement's table expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExpr {
    pub sql: String,
}

/// Schema field kind, used only for migration metadata type mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Bytes,
    Time,
}

/// A model field as the ORM schema layer describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub column: String,
    pub kind: FieldKind,
    pub primary_key: bool,
}

/// Model schema: table name, fields, and the primary-key column set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    pub table: String,
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        primary_key: bool,
    ) -> Self {
        let name = name.into();
        let column = dynaql_core::column_name(&name);
        self.fields.push(Field {
            name,
            column,
            kind,
            primary_key,
        });
        self
    }

    /// Columns participating in the hash or range key.
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.primary_key)
            .map(|f| f.column.as_str())
            .collect()
    }

    pub fn is_primary_key(&self, column: &str) -> bool {
        self.fields.iter().any(|f| f.primary_key && f.column == column)
    }
}

/// One ORM statement under construction.
pub struct Statement {
    dialect: Arc<dyn Dialect>,
    builders: HashMap<&'static str, ClauseBuilder>,
    pub table: String,
    pub table_expr: Option<TableExpr>,
    pub schema: Option<Arc<Schema>>,
    sql: String,
    vars: Vec<DocValue>,
    errors: Vec<Error>,
}

impl Statement {
    /// Create a statement bound to a dialect instance. The dialect's clause
    /// builders are registered here, scoped to this statement; nothing
    /// process-wide is mutated.
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        let builders = dialect.clause_builders().into_iter().collect();
        Self {
            dialect,
            builders,
            table: String::new(),
            table_expr: None,
            schema: None,
            sql: String::new(),
            vars: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        if self.table.is_empty() {
            self.table = schema.table.clone();
        }
        self.schema = Some(Arc::new(schema));
        self
    }

    pub fn dialect(&self) -> &Arc<dyn Dialect> {
        &self.dialect
    }

    /// Append raw SQL text.
    pub fn write_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    /// Append a dialect-quoted identifier.
    pub fn write_quoted(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    /// Append the bind placeholder and record the variable.
    pub fn add_var(&mut self, value: DocValue) {
        self.sql.push_str(self.dialect.bind_placeholder());
        self.vars.push(value);
    }

    /// Attach an error to the statement's accumulator; the host transaction
    /// decides what to do with it.
    pub fn add_error(&mut self, err: Error) {
        self.errors.push(err);
    }

    /// Dispatch a clause through the builder registered for its name.
    pub fn build(&mut self, clause: &Clause) {
        if let Some(builder) = self.builders.get(clause.name()).copied() {
            builder(clause, self);
        } else {
            tracing::debug!(clause = clause.name(), "no builder registered for clause");
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn vars(&self) -> &[DocValue] {
        &self.vars
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}
