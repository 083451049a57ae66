//! Literal text helpers.
//!
//! List membership is never bound through placeholders, so `IN` lists are
//! written into the statement text. These helpers produce that text.
//!
//! **Warning**: Only quoting is applied. Callers stay responsible for what
//! they write into the statement.

use std::fmt::Display;

/// Quotes a value as a SQL text literal, doubling embedded single quotes.
///
/// ```rust
/// use sqlweave_core::builder::literal::quote;
///
/// assert_eq!(quote("plip"), "'plip'");
/// assert_eq!(quote("it's"), "'it''s'");
/// ```
#[must_use]
pub fn quote(value: impl Display) -> String {
    let escaped = value.to_string().replace('\'', "''");
    format!("'{escaped}'")
}

/// Quotes every value of a collection.
#[must_use]
pub fn quote_all<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    values.into_iter().map(quote).collect()
}

/// Renders values as a parenthesized, comma-separated SQL list: `(v1,v2,v3)`.
///
/// Elements are written as-is; use [`quote_all`] first for text elements.
#[must_use]
pub fn to_sql_list<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("({})", items.join(","))
}
