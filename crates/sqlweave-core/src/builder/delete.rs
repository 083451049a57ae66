//! DELETE statement builder.

use tracing::debug;

use super::append_predicate;
use super::clauses::Clauses;
use super::query::Query;
use super::value::SqlValue;

/// A DELETE statement under construction: `DELETE FROM <table>`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteBuilder {
    sql: String,
    values: Vec<SqlValue>,
}

impl DeleteBuilder {
    /// Creates a builder holding `DELETE FROM <table>`.
    #[must_use]
    pub fn new(table: &str) -> Self {
        Self {
            sql: format!("DELETE FROM {table}"),
            values: vec![],
        }
    }

    /// Appends ` WHERE <clauses>`, or nothing when `clauses` is empty.
    ///
    /// **Warning**: an empty predicate deletes ALL rows.
    #[must_use]
    pub fn where_clause(mut self, clauses: &Clauses) -> Self {
        append_predicate(&mut self.sql, &mut self.values, "WHERE", clauses);
        self
    }

    /// Snapshots the statement.
    #[must_use]
    pub fn build(&self) -> Query {
        debug!(sql = %self.sql, values = self.values.len(), "built DELETE statement");
        Query::new(self.sql.clone(), self.values.clone())
    }
}
