//! Finished statements.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::SqlValue;

/// Read-only view over a piece of SQL text and the values its placeholders
/// bind, in placeholder order.
///
/// Implemented by [`Query`], [`SelectBuilder`](super::SelectBuilder) and
/// [`Clauses`](super::Clauses) so that any of them can be embedded as a
/// subquery or merged into another statement.
pub trait SqlFragment {
    /// The SQL text with `?` placeholders.
    fn sql(&self) -> &str;

    /// The values bound to the placeholders of [`sql`](Self::sql).
    fn values(&self) -> &[SqlValue];
}

/// An assembled statement: SQL text plus its ordered placeholder values.
///
/// Produced by the `build()` method of every statement builder. The Nth value
/// binds the Nth `?` of the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    sql: String,
    values: Vec<SqlValue>,
}

impl Query {
    /// Creates a query from already aligned text and values.
    #[must_use]
    pub fn new(sql: impl Into<String>, values: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            values,
        }
    }

    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Returns an owned copy of the value list.
    #[must_use]
    pub fn value_list(&self) -> Vec<SqlValue> {
        self.values.clone()
    }

    /// Materializes the values as a fixed-size array.
    #[must_use]
    pub fn to_array(&self) -> Box<[SqlValue]> {
        self.values.clone().into_boxed_slice()
    }

    /// Consumes the query and returns the SQL and values.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.values)
    }
}

impl SqlFragment for Query {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn values(&self) -> &[SqlValue] {
        &self.values
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
