//! UPDATE statement builder.

use tracing::debug;

use super::append_predicate;
use super::clauses::Clauses;
use super::query::Query;
use super::value::{SqlValue, ToSqlValue};

/// An UPDATE statement under construction: `UPDATE <table> SET ...`.
///
/// Assignments are never omitted: an absent value binds SQL `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBuilder {
    sql: String,
    values: Vec<SqlValue>,
    assignments: usize,
}

impl UpdateBuilder {
    /// Creates a builder holding `UPDATE <table> SET `.
    #[must_use]
    pub fn new(table: &str) -> Self {
        Self {
            sql: format!("UPDATE {table} SET "),
            values: vec![],
            assignments: 0,
        }
    }

    /// Appends the assignment `<column> = ?` and binds `value`.
    #[must_use]
    pub fn field<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        if self.assignments > 0 {
            self.sql.push_str(", ");
        }
        self.sql.push_str(column);
        self.sql.push_str(" = ?");
        self.values.push(value.to_sql_value());
        self.assignments += 1;
        self
    }

    /// Appends ` WHERE <clauses>`, or nothing when `clauses` is empty.
    ///
    /// **Warning**: without a predicate every row is updated.
    #[must_use]
    pub fn where_clause(mut self, clauses: &Clauses) -> Self {
        append_predicate(&mut self.sql, &mut self.values, "WHERE", clauses);
        self
    }

    /// Snapshots the statement.
    #[must_use]
    pub fn build(&self) -> Query {
        debug!(sql = %self.sql, values = self.values.len(), "built UPDATE statement");
        Query::new(self.sql.clone(), self.values.clone())
    }
}
