//! VALUES clause builder.
//!
//! The database only accepts single-row inserts in the form
//! `VALUE {'col' : ?, ...}`; this builder replaces the ORM's default
//! multi-row `VALUES (...)` emission.

use dynaql_core::DocValue;
use tracing::debug;

use crate::clause::Clause;
use crate::statement::Statement;

/// Rewrite the ORM's VALUES clause into the single-row `VALUE {...}` form.
///
/// Column order is preserved. Only the first row is emitted; any additional
/// rows are ignored.
pub fn build_values(clause: &Clause, stmt: &mut Statement) {
    let Clause::Values(values) = clause else {
        return;
    };
    if values.columns.is_empty() {
        return;
    }
    let Some(row) = values.rows.first() else {
        return;
    };
    if values.rows.len() > 1 {
        debug!(
            rows = values.rows.len(),
            "multi-row insert not supported, emitting first row only"
        );
    }

    stmt.write_str("VALUE {");
    for (i, column) in values.columns.iter().enumerate() {
        if i > 0 {
            stmt.write_str(", ");
        }
        stmt.write_str("'");
        stmt.write_str(&column.name);
        stmt.write_str("' : ");
        let value = row.get(i).cloned().unwrap_or(DocValue::Null);
        stmt.add_var(value);
    }
    stmt.write_str("}");
}
