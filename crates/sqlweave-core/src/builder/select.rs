//! SELECT statement builder.
//!
//! [`SelectBuilder`] owns the statement text and its value list. Field-list
//! composition lives in `fields.rs`, FROM and JOIN composition in `from.rs`;
//! both are plain methods on this type.

use std::fmt;

use tracing::{debug, warn};

use super::clauses::Clauses;
use super::query::{Query, SqlFragment};
use super::value::SqlValue;
use super::append_predicate;
use crate::error::{QueryError, Result};

/// Row-numbering function used by the window pagination rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFunction {
    /// `row_number()`
    RowNumber,
    /// `rank()`
    Rank,
}

impl WindowFunction {
    /// Returns the SQL function call.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::RowNumber => "row_number()",
            Self::Rank => "rank()",
        }
    }
}

/// A SELECT statement under construction.
///
/// Every method appends to the statement text in call order; calls are not
/// reordered or validated (`having` before `from` produces exactly that).
/// [`build`](Self::build) snapshots the current state and leaves the builder
/// usable.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBuilder {
    pub(super) sql: String,
    pub(super) values: Vec<SqlValue>,
    /// Whether the last written element is part of a comma-separated list
    /// (select list, `GROUP BY` or `ORDER BY`).
    pub(super) list_open: bool,
}

impl Default for SelectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder {
    /// Creates a builder holding `SELECT `.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sql: String::from("SELECT "),
            values: vec![],
            list_open: false,
        }
    }

    /// Appends `DISTINCT `.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.sql.push_str("DISTINCT ");
        self
    }

    /// Appends ` WHERE <clauses>`, or nothing when `clauses` is empty.
    #[must_use]
    pub fn where_clause(mut self, clauses: &Clauses) -> Self {
        append_predicate(&mut self.sql, &mut self.values, "WHERE", clauses);
        self.list_open = false;
        self
    }

    /// Appends ` HAVING <clauses>`, or nothing when `clauses` is empty.
    #[must_use]
    pub fn having(mut self, clauses: &Clauses) -> Self {
        append_predicate(&mut self.sql, &mut self.values, "HAVING", clauses);
        self.list_open = false;
        self
    }

    /// Appends ` UNION <other>` and the values of `other`.
    #[must_use]
    pub fn union(self, other: &Self) -> Self {
        self.set_operation(" UNION ", other)
    }

    /// Appends ` UNION ALL <other>` and the values of `other`.
    #[must_use]
    pub fn union_all(self, other: &Self) -> Self {
        self.set_operation(" UNION ALL ", other)
    }

    fn set_operation(mut self, keyword: &str, other: &Self) -> Self {
        self.sql.push_str(keyword);
        self.sql.push_str(&other.sql);
        self.values.extend_from_slice(&other.values);
        self.list_open = false;
        self
    }

    /// Appends ` OFFSET <rows> ROWS`.
    #[must_use]
    pub fn offset(mut self, rows: u64) -> Self {
        self.sql.push_str(&format!(" OFFSET {rows} ROWS"));
        self.list_open = false;
        self
    }

    /// Appends ` FETCH FIRST <rows> ROWS ONLY`.
    #[must_use]
    pub fn fetch(mut self, rows: u64) -> Self {
        self.sql.push_str(&format!(" FETCH FIRST {rows} ROWS ONLY"));
        self.list_open = false;
        self
    }

    /// Appends ` LIMIT <rows>`.
    #[must_use]
    pub fn limit(mut self, rows: u64) -> Self {
        self.sql.push_str(&format!(" LIMIT {rows}"));
        self.list_open = false;
        self
    }

    /// Appends ` OFFSET <rows>`, the form that goes with [`limit`](Self::limit).
    #[must_use]
    pub fn plain_offset(mut self, rows: u64) -> Self {
        self.sql.push_str(&format!(" OFFSET {rows}"));
        self.list_open = false;
        self
    }

    /// Paginates with `row_number()`. See [`window`](Self::window).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingFrom`] when the statement has no ` FROM`.
    pub fn window_by_row_number(
        self,
        alias: &str,
        row_alias: &str,
        order_by: &str,
        min: i64,
        max: i64,
    ) -> Result<Self> {
        self.window(WindowFunction::RowNumber, alias, row_alias, order_by, min, max)
    }

    /// Paginates with `rank()`. See [`window`](Self::window).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingFrom`] when the statement has no ` FROM`.
    pub fn window_by_rank(
        self,
        alias: &str,
        row_alias: &str,
        order_by: &str,
        min: i64,
        max: i64,
    ) -> Result<Self> {
        self.window(WindowFunction::Rank, alias, row_alias, order_by, min, max)
    }

    /// Rewrites the statement for window-function pagination.
    ///
    /// `,<function> OVER(ORDER BY <order_by>) AS <row_alias>` is inserted
    /// before the first ` FROM` of the current text, then the whole statement
    /// is wrapped as `SELECT * FROM (<statement>) AS <alias>` and filtered on
    /// `<row_alias> >= min` and `<row_alias> < max`. A negative bound is
    /// absent; with both bounds absent no `WHERE` is written.
    ///
    /// The splice point is found by plain text search: a ` FROM` inside a
    /// selected expression or literal is taken as the splice point too.
    ///
    /// ```rust
    /// use sqlweave_core::SelectBuilder;
    ///
    /// let query = SelectBuilder::new()
    ///     .field("t.titi")
    ///     .from("toto t")
    ///     .window_by_row_number("foo", "row_num", "t.titi ASC", 15, -1)
    ///     .unwrap()
    ///     .build();
    /// assert_eq!(
    ///     query.sql(),
    ///     "SELECT * FROM (SELECT t.titi,row_number() OVER(ORDER BY t.titi ASC) \
    ///      AS row_num FROM toto t) AS foo WHERE row_num >= ?"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingFrom`] when the statement has no ` FROM`;
    /// the statement is not modified.
    pub fn window(
        mut self,
        function: WindowFunction,
        alias: &str,
        row_alias: &str,
        order_by: &str,
        min: i64,
        max: i64,
    ) -> Result<Self> {
        let Some(pos) = self.sql.find(" FROM") else {
            warn!(sql = %self.sql, "window rewrite without FROM");
            return Err(QueryError::MissingFrom { sql: self.sql });
        };

        let column = format!(
            ",{} OVER(ORDER BY {order_by}) AS {row_alias}",
            function.as_sql()
        );
        self.sql.insert_str(pos, &column);
        self.sql = format!("SELECT * FROM ({}) AS {alias}", self.sql);

        let mut bounds = vec![];
        if min >= 0 {
            bounds.push((format!("{row_alias} >= ?"), min));
        }
        if max >= 0 {
            bounds.push((format!("{row_alias} < ?"), max));
        }
        for (i, (condition, bound)) in bounds.into_iter().enumerate() {
            self.sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            self.sql.push_str(&condition);
            self.values.push(SqlValue::Int(bound));
        }
        self.list_open = false;
        Ok(self)
    }

    /// Snapshots the statement.
    #[must_use]
    pub fn build(&self) -> Query {
        debug!(sql = %self.sql, values = self.values.len(), "built SELECT statement");
        Query::new(self.sql.clone(), self.values.clone())
    }
}

impl SqlFragment for SelectBuilder {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn values(&self) -> &[SqlValue] {
        &self.values
    }
}

impl fmt::Display for SelectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::op;

    fn base() -> SelectBuilder {
        SelectBuilder::new().field("t.titi").from("toto t")
    }

    #[test]
    fn test_distinct() {
        let query = SelectBuilder::new().distinct().field("a").from("t").build();
        assert_eq!(query.sql(), "SELECT DISTINCT a FROM t");
    }

    #[test]
    fn test_where_and_having_gates() {
        let query = base()
            .where_clause(&Clauses::new())
            .group_by("t.titi")
            .having(&Clauses::when("count(*)", op::gt, None::<i32>))
            .build();
        assert_eq!(query.sql(), "SELECT t.titi FROM toto t GROUP BY t.titi");
        assert!(query.values().is_empty());

        let query = base()
            .where_clause(&Clauses::when("t.a", op::eq, 1))
            .group_by("t.titi")
            .having(&Clauses::when("count(*)", op::gt, 2))
            .build();
        assert_eq!(
            query.sql(),
            "SELECT t.titi FROM toto t WHERE t.a = ? GROUP BY t.titi HAVING count(*) > ?"
        );
        assert_eq!(query.values(), &[SqlValue::Int(1), SqlValue::Int(2)]);
    }

    #[test]
    fn test_union_merges_values() {
        let shared = Clauses::when("t.a", op::eq, "x");
        let other = base().where_clause(&shared);
        let query = base().where_clause(&shared).union_all(&other).build();
        assert_eq!(
            query.sql(),
            "SELECT t.titi FROM toto t WHERE t.a = ? UNION ALL SELECT t.titi FROM toto t WHERE t.a = ?"
        );
        assert_eq!(query.values().len(), 2);
    }

    #[test]
    fn test_pagination() {
        let query = base().order_by("t.titi").offset(10).fetch(5).build();
        assert_eq!(
            query.sql(),
            "SELECT t.titi FROM toto t ORDER BY t.titi OFFSET 10 ROWS FETCH FIRST 5 ROWS ONLY"
        );

        let query = base().limit(5).plain_offset(10).build();
        assert_eq!(query.sql(), "SELECT t.titi FROM toto t LIMIT 5 OFFSET 10");
    }

    #[test]
    fn test_window_both_bounds() {
        let query = base()
            .window_by_row_number("foo", "row_num", "t.titi ASC", 15, 20)
            .unwrap()
            .build();
        assert_eq!(
            query.sql(),
            "SELECT * FROM (SELECT t.titi,row_number() OVER(ORDER BY t.titi ASC) AS row_num FROM toto t) AS foo WHERE row_num >= ? AND row_num < ?"
        );
        assert_eq!(query.values(), &[SqlValue::Int(15), SqlValue::Int(20)]);
    }

    #[test]
    fn test_window_max_only_and_rank() {
        let query = base()
            .window_by_rank("foo", "rk", "t.titi DESC", -1, 20)
            .unwrap()
            .build();
        assert_eq!(
            query.sql(),
            "SELECT * FROM (SELECT t.titi,rank() OVER(ORDER BY t.titi DESC) AS rk FROM toto t) AS foo WHERE rk < ?"
        );
        assert_eq!(query.values(), &[SqlValue::Int(20)]);
    }

    #[test]
    fn test_window_without_bounds_has_no_where() {
        let query = base()
            .window_by_row_number("foo", "row_num", "t.titi", -1, -1)
            .unwrap()
            .build();
        assert!(query.sql().ends_with(") AS foo"));
        assert!(query.values().is_empty());
    }

    #[test]
    fn test_window_keeps_existing_values_first() {
        let query = base()
            .where_clause(&Clauses::when("t.a", op::eq, 7))
            .window_by_row_number("foo", "row_num", "t.titi", 0, 10)
            .unwrap()
            .build();
        assert_eq!(
            query.values(),
            &[SqlValue::Int(7), SqlValue::Int(0), SqlValue::Int(10)]
        );
    }

    #[test]
    fn test_window_without_from_fails() {
        let err = SelectBuilder::new()
            .field("1")
            .window_by_row_number("foo", "row_num", "1", 0, 10)
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::MissingFrom {
                sql: String::from("SELECT 1")
            }
        );
    }

    #[test]
    fn test_build_does_not_seal() {
        let select = base();
        let first = select.build();
        let second = select.where_clause(&Clauses::when("t.a", op::eq, 1)).build();
        assert_eq!(first.sql(), "SELECT t.titi FROM toto t");
        assert_eq!(second.sql(), "SELECT t.titi FROM toto t WHERE t.a = ?");
    }
}
