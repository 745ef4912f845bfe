//! DynamoDB PartiQL dialect for a generic host ORM.
//!
//! The dialect plugs into the ORM's override points: it replaces the
//! `VALUES` and `SET` clause builders with PartiQL-compatible forms, quotes
//! identifiers with double quotes, binds parameters with `?`, rewrites
//! index-targeted statements to `"Table"."Index"`, and normalizes driver
//! transaction-state errors to the ORM's canonical invalid-transaction
//! error.

pub mod clause;
pub mod config;
pub mod secondary_index;
pub mod set_clause;
pub mod statement;
pub mod translate;
pub mod values_clause;

pub use clause::{
    Assignment, AssignmentValue, Clause, ClauseBuilder, Expression, SetClause, StatementModifier,
    UpdateFunction, Values,
};
pub use config::ConnectionConfig;
pub use dynaql_core::{
    AttributeValue, Collection, DocValue, DriverError, Error, List, Map, Record, Result, Set,
    TypedList,
};
pub use secondary_index::SecondaryIndex;
pub use set_clause::ListAppend;
pub use statement::{Column, Field, FieldKind, Schema, Statement, Table, TableExpr};

/// Database name the dialect reports to the ORM.
pub const DIALECT_NAME: &str = "dynamodb";

/// The dialect surface the host ORM consumes.
pub trait Dialect: Send + Sync {
    /// Database name constant.
    fn name(&self) -> &'static str;

    /// Quote an identifier for this dialect.
    fn quote_identifier(&self, name: &str) -> String;

    /// Bind-parameter placeholder.
    fn bind_placeholder(&self) -> &'static str;

    /// Data-type name for schema metadata; used only by migration.
    fn data_type_of(&self, kind: FieldKind) -> &'static str;

    /// Normalize a driver error to the ORM's canonical taxonomy.
    fn translate_error(&self, err: Error) -> Error;

    /// Clause builders this dialect registers in place of the ORM defaults.
    fn clause_builders(&self) -> Vec<(&'static str, ClauseBuilder)>;
}

/// The DynamoDB dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamoDialect;

impl DynamoDialect {
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for DynamoDialect {
    fn name(&self) -> &'static str {
        DIALECT_NAME
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name)
    }

    fn bind_placeholder(&self) -> &'static str {
        "?"
    }

    fn data_type_of(&self, kind: FieldKind) -> &'static str {
        match kind {
            FieldKind::Bool | FieldKind::Time | FieldKind::String => "string",
            FieldKind::Int | FieldKind::Uint | FieldKind::Float => "number",
            FieldKind::Bytes => "binary",
        }
    }

    fn translate_error(&self, err: Error) -> Error {
        translate::translate(err)
    }

    fn clause_builders(&self) -> Vec<(&'static str, ClauseBuilder)> {
        vec![
            ("VALUES", values_clause::build_values),
            ("SET", set_clause::build_set),
        ]
    }
}
