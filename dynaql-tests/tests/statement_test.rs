//! End-to-end statement building: insert, update, and index targeting.

use dynaql_core::{DocValue, List, Set};
use dynaql_dialect::{
    Assignment, Clause, Column, ListAppend, SecondaryIndex, SetClause, StatementModifier, Values,
};
use dynaql_test_utils::{statement, statement_with_pk};

#[test]
fn insert_emits_single_row_value_block() {
    let clause = Clause::Values(Values {
        columns: vec![Column::from("col1"), Column::from("col2")],
        rows: vec![vec![
            DocValue::string("v1"),
            DocValue::StringSet(Set::from_members(vec!["a".to_string(), "b".to_string()])),
        ]],
    });

    let mut stmt = statement();
    stmt.build(&clause);

    assert_eq!(stmt.sql(), "VALUE {'col1' : ?, 'col2' : ?}");
    assert_eq!(stmt.vars().len(), 2);
    assert_eq!(stmt.vars()[0], DocValue::string("v1"));
    assert_eq!(
        stmt.vars()[1],
        DocValue::StringSet(Set::from_members(vec!["a".to_string(), "b".to_string()]))
    );
}

#[test]
fn insert_ignores_rows_beyond_the_first() {
    // Exactly one {...} block no matter how many rows.
    let clause = Clause::Values(Values {
        columns: vec![Column::from("c")],
        rows: vec![
            vec![DocValue::Number(1.0)],
            vec![DocValue::Number(2.0)],
            vec![DocValue::Number(3.0)],
        ],
    });

    let mut stmt = statement();
    stmt.build(&clause);

    assert_eq!(stmt.sql().matches('{').count(), 1);
    assert_eq!(stmt.sql().matches('}').count(), 1);
    assert_eq!(stmt.vars(), &[DocValue::Number(1.0)]);
}

#[test]
fn update_skips_primary_key_assignments() {
    let clause = Clause::Set(SetClause {
        assignments: vec![
            Assignment::new("col1", DocValue::string("v1")),
            Assignment::new("pk", DocValue::string("v2")),
        ],
    });

    let mut stmt = statement_with_pk("tbl");
    stmt.build(&clause);

    assert_eq!(stmt.sql(), "SET \"col1\"=?");
    assert_eq!(stmt.vars(), &[DocValue::string("v1")]);
}

#[test]
fn update_preserves_assignment_order() {
    // Remaining assignments keep declaration order.
    let clause = Clause::Set(SetClause {
        assignments: vec![
            Assignment::new("col2", DocValue::Number(2.0)),
            Assignment::new("pk", DocValue::string("nope")),
            Assignment::new("col1", DocValue::Number(1.0)),
        ],
    });

    let mut stmt = statement_with_pk("tbl");
    stmt.build(&clause);

    assert_eq!(stmt.sql(), "SET \"col2\"=? SET \"col1\"=?");
    assert_eq!(
        stmt.vars(),
        &[DocValue::Number(2.0), DocValue::Number(1.0)]
    );
}

#[test]
fn update_with_list_append_function() {
    let clause = Clause::Set(SetClause {
        assignments: vec![Assignment::func(
            "col1",
            ListAppend::new(vec![DocValue::string("v1")]),
        )],
    });

    let mut stmt = statement_with_pk("tbl");
    stmt.build(&clause);

    assert_eq!(stmt.sql(), "SET \"col1\"=list_append(col1, ?)");
    assert_eq!(
        stmt.vars(),
        &[DocValue::List(List::from_items(vec![DocValue::string(
            "v1"
        )]))]
    );
}

#[test]
fn secondary_index_rewrites_table_expression() {
    let mut stmt = statement();
    SecondaryIndex::new("tbl.idx").modify_statement(&mut stmt);

    assert_eq!(stmt.table, "tbl.idx");
    assert_eq!(stmt.table_expr.as_ref().unwrap().sql, "\"tbl\".\"idx\"");
}

#[test]
fn secondary_index_shape_is_always_dotted_pair() {
    // Every precedence path lands on a dotted pair.
    let cases: Vec<(SecondaryIndex, &str, &str)> = vec![
        (SecondaryIndex::new("t.i"), "t.i", "\"t\".\"i\""),
        (
            SecondaryIndex::new("i").with_table("t"),
            "t.i",
            "\"t\".\"i\"",
        ),
    ];
    for (index, table, expr) in cases {
        let mut stmt = statement().with_table("fallback");
        index.modify_statement(&mut stmt);
        assert_eq!(stmt.table, table);
        assert_eq!(stmt.table_expr.as_ref().unwrap().sql, expr);
    }

    let mut stmt = statement().with_table("fallback");
    SecondaryIndex::new("i").modify_statement(&mut stmt);
    assert_eq!(stmt.table, "fallback.i");
    assert_eq!(stmt.table_expr.unwrap().sql, "\"fallback\".\"i\"");
}

#[test]
fn full_update_statement_combines_clauses() {
    // UPDATE "tbl" SET "colA"=? SET "colB"=list_append(colB, ?)
    let mut stmt = statement_with_pk("tbl");
    stmt.write_str("UPDATE ");
    let table = stmt.table.clone();
    stmt.write_quoted(&table);
    stmt.write_str(" ");
    stmt.build(&Clause::Set(SetClause {
        assignments: vec![
            Assignment::new("col1", DocValue::string("v1")),
            Assignment::func("col2", ListAppend::new(vec![DocValue::Number(9.0)])),
        ],
    }));

    assert_eq!(
        stmt.sql(),
        "UPDATE \"tbl\" SET \"col1\"=? SET \"col2\"=list_append(col2, ?)"
    );
    assert_eq!(stmt.vars().len(), 2);
    assert!(stmt.errors().is_empty());
}
