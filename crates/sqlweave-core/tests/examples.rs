//! Reference scenarios: the documented behaviors, end to end.

mod common;
use common::*;

use sqlweave_core::builder::literal::quote_all;
use sqlweave_core::{delete, op, select, Clauses, SqlValue};

#[test]
fn delete_with_present_value() {
    let query = delete("toto")
        .where_clause(&Clauses::when("a", op::eq, "titi"))
        .build();
    assert_query(&query, "DELETE FROM toto WHERE a = ?", &[text("titi")]);
}

#[test]
fn delete_with_null_value() {
    let clauses = Clauses::when("a", op::eq, SqlValue::Null);
    assert!(clauses.is_empty());
    let query = delete("toto").where_clause(&clauses).build();
    assert_query(&query, "DELETE FROM toto", &[]);
}

#[test]
fn first_invalid_second_valid() {
    let clauses = Clauses::when("a", op::eq, SqlValue::Null).and_if("b", op::eq, "plop");
    let query = delete("toto").where_clause(&clauses).build();
    assert_query(&query, "DELETE FROM toto WHERE b = ?", &[text("plop")]);
}

#[test]
fn window_by_row_number() {
    let query = select()
        .field("t.titi")
        .from("toto t")
        .window_by_row_number("foo", "row_num", "t.titi ASC", 15, 20)
        .unwrap()
        .build();
    assert_query(
        &query,
        "SELECT * FROM (SELECT t.titi,row_number() OVER(ORDER BY t.titi ASC) AS row_num \
         FROM toto t) AS foo WHERE row_num >= ? AND row_num < ?",
        &[int(15), int(20)],
    );
}

#[test]
fn three_element_list_adds_no_values() {
    let clauses = Clauses::when("t.a", op::in_list, quote_all(["plip", "plop", "plup"]));
    assert_eq!(clauses.sql(), "t.a IN ('plip','plop','plup')");
    assert!(clauses.values().is_empty());
}

#[test]
fn same_expression_merged_into_two_statements() {
    let shared = Clauses::when("a", op::eq, 1);

    let first = select().field("*").from("t1").where_clause(&shared);
    let second = select().field("*").from("t2").where_clause(&shared);

    let first = first.where_clause(&Clauses::when("x", op::eq, 99)).build();
    let second = second.build();

    assert_query(&second, "SELECT * FROM t2 WHERE a = ?", &[int(1)]);
    assert_eq!(first.values(), &[int(1), int(99)]);
    assert_eq!(shared.sql(), "a = ?");
    assert_eq!(shared.values(), &[int(1)]);
}
