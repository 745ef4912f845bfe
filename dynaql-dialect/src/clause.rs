//! Clause model the dialect's builders consume.

use std::fmt;

use dynaql_core::{DocValue, Result};

use crate::statement::{Column, Statement};

/// Builder function registered for a clause name.
pub type ClauseBuilder = fn(&Clause, &mut Statement);

/// The clause-expression contract: anything that can write itself into a
/// statement.
pub trait Expression {
    fn build(&self, stmt: &mut Statement);
}

/// The statement-modifier contract: rewrites statement context (table,
/// table expression) before SQL generation.
pub trait StatementModifier {
    fn modify_statement(&self, stmt: &mut Statement);
}

/// An update function producing a call preamble plus one bound parameter,
/// e.g. `list_append(col, ` followed by `?` and a closing paren.
pub trait UpdateFunction: fmt::Debug + Send + Sync {
    /// The preamble for the given column. Implementations may reject unsafe
    /// column names with `invalid column name`.
    fn expression(&self, column: &str) -> Result<String>;

    /// The single bound parameter fed to the function call.
    fn bind_value(&self) -> DocValue;
}

/// Value side of a SET assignment.
#[derive(Debug)]
pub enum AssignmentValue {
    Value(DocValue),
    Func(Box<dyn UpdateFunction>),
}

impl From<DocValue> for AssignmentValue {
    fn from(value: DocValue) -> Self {
        AssignmentValue::Value(value)
    }
}

/// One SET assignment, in declaration order.
#[derive(Debug)]
pub struct Assignment {
    pub column: Column,
    pub value: AssignmentValue,
}

impl Assignment {
    pub fn new(column: impl Into<Column>, value: impl Into<AssignmentValue>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn func(column: impl Into<Column>, func: impl UpdateFunction + 'static) -> Self {
        Self {
            column: column.into(),
            value: AssignmentValue::Func(Box::new(func)),
        }
    }
}

/// The ORM's VALUES clause: tabular columns plus ordered rows.
#[derive(Debug, Default)]
pub struct Values {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<DocValue>>,
}

/// The ORM's SET clause: ordered assignments.
#[derive(Debug, Default)]
pub struct SetClause {
    pub assignments: Vec<Assignment>,
}

/// A statement clause, dispatched to its registered builder by name.
#[derive(Debug)]
pub enum Clause {
    Values(Values),
    Set(SetClause),
}

impl Clause {
    pub fn name(&self) -> &'static str {
        match self {
            Clause::Values(_) => "VALUES",
            Clause::Set(_) => "SET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_names() {
        assert_eq!(Clause::Values(Values::default()).name(), "VALUES");
        assert_eq!(Clause::Set(SetClause::default()).name(), "SET");
    }

    #[test]
    fn test_assignment_from_value() {
        let a = Assignment::new("col", DocValue::string("v"));
        assert_eq!(a.column.name, "col");
        assert!(matches!(a.value, AssignmentValue::Value(_)));
    }
}
