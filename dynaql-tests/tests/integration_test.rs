//! Full-cycle integration: build an insert, push its collections through
//! the wire representation, simulate driver delivery, and scan back.

use dynaql_core::{encode, Collection, DocValue, DriverValue, List, Map, Set, TypedList};
use dynaql_dialect::{Clause, Column, ConnectionConfig, Values};
use dynaql_test_utils::{driver_map, statement, Project};

#[test]
fn insert_then_scan_round_trip() {
    let tags = Set::from_members(vec!["db".to_string(), "orm".to_string()]);
    let mut profile = Map::new();
    profile.insert("level", 3i64);
    profile.insert("aliases", DocValue::List(List::from_items(vec![
        DocValue::string("al"),
    ])));

    let clause = Clause::Values(Values {
        columns: vec![
            Column::from("name"),
            Column::from("tags"),
            Column::from("profile"),
        ],
        rows: vec![vec![
            DocValue::string("alice"),
            DocValue::StringSet(tags.clone()),
            DocValue::Map(profile.clone()),
        ]],
    });

    let mut stmt = statement().with_table("users");
    stmt.write_str("INSERT INTO ");
    stmt.write_quoted("users");
    stmt.write_str(" ");
    stmt.build(&clause);

    assert_eq!(
        stmt.sql(),
        "INSERT INTO \"users\" VALUE {'name' : ?, 'tags' : ?, 'profile' : ?}"
    );

    // Each bound collection renders to its exact wire member, the driver
    // hands the wire shape back as generic values, and the scan path
    // restores the original containers.
    for (var, expected) in stmt.vars().iter().zip([
        DocValue::string("alice"),
        DocValue::StringSet(tags.clone()),
        DocValue::Map(profile.clone()),
    ]) {
        let wire = encode(var).unwrap();
        let delivered = DriverValue::from_attribute(&wire).unwrap();
        let restored = dynaql_core::resolve(delivered).unwrap();
        assert_eq!(restored, expected);
    }
}

#[test]
fn typed_list_binds_record_fields() {
    let raw = DriverValue::List(vec![
        driver_map(vec![
            ("name", DriverValue::String("dynaql".into())),
            ("stars", DriverValue::Number(42.0)),
            ("archived", DriverValue::Bool(false)),
            ("topics", DriverValue::StringList(vec!["db".into()])),
            ("unknown_column", DriverValue::Null),
        ]),
        driver_map(vec![
            ("name", DriverValue::String("other".into())),
            ("stars", DriverValue::Number(7.0)),
        ]),
    ]);

    let mut projects: TypedList<Project> = TypedList::new();
    projects.scan(Some(raw)).unwrap();

    assert_eq!(projects.len(), 2);
    let first = projects.get(0).unwrap();
    assert_eq!(first.name, "dynaql");
    assert_eq!(first.stars, 42);
    assert!(!first.archived);
    assert_eq!(first.topics, Set::from_members(vec!["db".to_string()]));

    // Render side: every element becomes a typed map inside an L member.
    let bound = projects.bind_expr().unwrap();
    let dynaql_core::AttributeValue::L(members) = bound.var else {
        panic!("expected L");
    };
    assert_eq!(members.len(), 2);
}

#[test]
fn connection_string_matches_driver_syntax() {
    let config = ConnectionConfig::new()
        .region("ap-northeast-1")
        .endpoint("http://localhost:8000")
        .timeout_ms(30000);
    assert_eq!(
        config.connection_string(),
        "region=ap-northeast-1;endpoint=http://localhost:8000;timeout=30000"
    );
}

#[test]
fn attribute_values_serialize_to_tagged_json() {
    let attr = encode(&DocValue::IntSet(Set::from_members(vec![1i64, 2]))).unwrap();
    let json = serde_json::to_value(&attr).unwrap();
    assert_eq!(json, serde_json::json!({ "Ns": ["1", "2"] }));
}
