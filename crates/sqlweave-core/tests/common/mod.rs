#![allow(dead_code)]

use sqlweave_core::{Query, SqlFragment, SqlValue};

pub fn text(value: &str) -> SqlValue {
    SqlValue::Text(String::from(value))
}

pub fn int(value: i64) -> SqlValue {
    SqlValue::Int(value)
}

/// Counts `?` placeholders outside single-quoted literals.
pub fn placeholder_count(sql: &str) -> usize {
    let mut in_literal = false;
    let mut count = 0;
    for c in sql.chars() {
        match c {
            '\'' => in_literal = !in_literal,
            '?' if !in_literal => count += 1,
            _ => {}
        }
    }
    count
}

/// Asserts that a fragment binds exactly one value per placeholder.
pub fn assert_aligned(fragment: &impl SqlFragment) {
    let sql = fragment.sql();
    assert_eq!(
        placeholder_count(sql),
        fragment.values().len(),
        "Placeholder/value mismatch.\n  SQL:    {sql}\n  Values: {:?}",
        fragment.values()
    );
}

/// Asserts the text and values of a finished query.
pub fn assert_query(query: &Query, sql: &str, values: &[SqlValue]) {
    assert_eq!(query.sql(), sql);
    assert_eq!(query.values(), values);
    assert_aligned(query);
}
