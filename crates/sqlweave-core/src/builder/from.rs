//! `FROM` and `JOIN` composition.
//!
//! Subquery sources are written inline in parentheses and their values are
//! appended at that point of the statement. Joins taking an `ON` predicate
//! are dropped entirely when the predicate is empty.

use std::fmt;

use tracing::trace;

use super::clauses::Clauses;
use super::query::SqlFragment;
use super::select::SelectBuilder;
use super::{append_predicate, append_subquery};

/// Kind of join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// `INNER JOIN`
    Inner,
    /// `LEFT OUTER JOIN`
    Left,
    /// `RIGHT OUTER JOIN`
    Right,
    /// `FULL OUTER JOIN`
    Full,
    /// `NATURAL JOIN`, never takes an `ON` predicate.
    Natural,
    /// `CROSS JOIN`, never takes an `ON` predicate.
    Cross,
}

impl JoinKind {
    /// Returns the SQL keywords.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT OUTER JOIN",
            Self::Right => "RIGHT OUTER JOIN",
            Self::Full => "FULL OUTER JOIN",
            Self::Natural => "NATURAL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }

    /// Returns whether this join kind accepts an `ON` predicate.
    #[must_use]
    pub const fn takes_predicate(self) -> bool {
        !matches!(self, Self::Natural | Self::Cross)
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl SelectBuilder {
    /// Appends ` FROM <table>`.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        self.sql.push_str(" FROM ");
        self.sql.push_str(table);
        self.list_open = false;
        self
    }

    /// Appends ` FROM (<subquery>)` and the subquery values.
    #[must_use]
    pub fn from_subquery(mut self, subquery: &impl SqlFragment) -> Self {
        self.sql.push_str(" FROM ");
        append_subquery(&mut self.sql, &mut self.values, subquery);
        self.list_open = false;
        self
    }

    /// Appends ` FROM (<subquery>) <alias>` and the subquery values.
    #[must_use]
    pub fn from_subquery_as(self, subquery: &impl SqlFragment, alias: &str) -> Self {
        let mut select = self.from_subquery(subquery);
        select.push_alias(alias);
        select
    }

    /// Appends `,<table>` to the `FROM` list.
    #[must_use]
    pub fn comma_join(mut self, table: &str) -> Self {
        self.sql.push(',');
        self.sql.push_str(table);
        self
    }

    /// Appends `,(<subquery>) <alias>` to the `FROM` list, and the subquery
    /// values.
    #[must_use]
    pub fn comma_join_subquery(mut self, subquery: &impl SqlFragment, alias: &str) -> Self {
        self.sql.push(',');
        append_subquery(&mut self.sql, &mut self.values, subquery);
        self.push_alias(alias);
        self
    }

    /// Appends ` <kind> <table>` without predicate.
    #[must_use]
    pub fn join(mut self, kind: JoinKind, table: &str) -> Self {
        self.push_join_keyword(kind);
        self.sql.push_str(table);
        self
    }

    /// Appends ` <kind> (<subquery>) <alias>` without predicate, and the
    /// subquery values.
    #[must_use]
    pub fn join_subquery(mut self, kind: JoinKind, subquery: &impl SqlFragment, alias: &str) -> Self {
        self.push_join_keyword(kind);
        append_subquery(&mut self.sql, &mut self.values, subquery);
        self.push_alias(alias);
        self
    }

    /// Appends ` <kind> <table> ON <on>`, or nothing when `on` is empty.
    #[must_use]
    pub fn join_on(self, kind: JoinKind, table: &str, on: &Clauses) -> Self {
        if on.is_empty() {
            trace!(table, "dropping join with empty predicate");
            return self;
        }
        self.join(kind, table).on(on)
    }

    /// Appends ` <kind> (<subquery>) <alias> ON <on>`, or nothing when `on` is
    /// empty. The subquery values precede the predicate values.
    #[must_use]
    pub fn join_subquery_on(
        self,
        kind: JoinKind,
        subquery: &impl SqlFragment,
        alias: &str,
        on: &Clauses,
    ) -> Self {
        if on.is_empty() {
            trace!(alias, "dropping join with empty predicate");
            return self;
        }
        self.join_subquery(kind, subquery, alias).on(on)
    }

    /// Appends ` ON <on>` after an unpredicated join, or nothing when `on` is
    /// empty.
    #[must_use]
    pub fn on(mut self, on: &Clauses) -> Self {
        append_predicate(&mut self.sql, &mut self.values, "ON", on);
        self
    }

    /// `INNER JOIN <table> ON <on>`, dropped when `on` is empty.
    #[must_use]
    pub fn inner_join(self, table: &str, on: &Clauses) -> Self {
        self.join_on(JoinKind::Inner, table, on)
    }

    /// `INNER JOIN (<subquery>) <alias> ON <on>`, dropped when `on` is empty.
    #[must_use]
    pub fn inner_join_subquery(self, subquery: &impl SqlFragment, alias: &str, on: &Clauses) -> Self {
        self.join_subquery_on(JoinKind::Inner, subquery, alias, on)
    }

    /// `LEFT OUTER JOIN <table> ON <on>`, dropped when `on` is empty.
    #[must_use]
    pub fn left_join(self, table: &str, on: &Clauses) -> Self {
        self.join_on(JoinKind::Left, table, on)
    }

    /// `LEFT OUTER JOIN (<subquery>) <alias> ON <on>`, dropped when `on` is
    /// empty.
    #[must_use]
    pub fn left_join_subquery(self, subquery: &impl SqlFragment, alias: &str, on: &Clauses) -> Self {
        self.join_subquery_on(JoinKind::Left, subquery, alias, on)
    }

    /// `RIGHT OUTER JOIN <table> ON <on>`, dropped when `on` is empty.
    #[must_use]
    pub fn right_join(self, table: &str, on: &Clauses) -> Self {
        self.join_on(JoinKind::Right, table, on)
    }

    /// `RIGHT OUTER JOIN (<subquery>) <alias> ON <on>`, dropped when `on` is
    /// empty.
    #[must_use]
    pub fn right_join_subquery(self, subquery: &impl SqlFragment, alias: &str, on: &Clauses) -> Self {
        self.join_subquery_on(JoinKind::Right, subquery, alias, on)
    }

    /// `FULL OUTER JOIN <table> ON <on>`, dropped when `on` is empty.
    #[must_use]
    pub fn full_join(self, table: &str, on: &Clauses) -> Self {
        self.join_on(JoinKind::Full, table, on)
    }

    /// `FULL OUTER JOIN (<subquery>) <alias> ON <on>`, dropped when `on` is
    /// empty.
    #[must_use]
    pub fn full_join_subquery(self, subquery: &impl SqlFragment, alias: &str, on: &Clauses) -> Self {
        self.join_subquery_on(JoinKind::Full, subquery, alias, on)
    }

    /// `NATURAL JOIN <table>`.
    #[must_use]
    pub fn natural_join(self, table: &str) -> Self {
        self.join(JoinKind::Natural, table)
    }

    /// `NATURAL JOIN (<subquery>) <alias>`.
    #[must_use]
    pub fn natural_join_subquery(self, subquery: &impl SqlFragment, alias: &str) -> Self {
        self.join_subquery(JoinKind::Natural, subquery, alias)
    }

    /// `CROSS JOIN <table>`.
    #[must_use]
    pub fn cross_join(self, table: &str) -> Self {
        self.join(JoinKind::Cross, table)
    }

    /// `CROSS JOIN (<subquery>) <alias>`.
    #[must_use]
    pub fn cross_join_subquery(self, subquery: &impl SqlFragment, alias: &str) -> Self {
        self.join_subquery(JoinKind::Cross, subquery, alias)
    }

    fn push_join_keyword(&mut self, kind: JoinKind) {
        self.sql.push(' ');
        self.sql.push_str(kind.as_sql());
        self.sql.push(' ');
        self.list_open = false;
    }

    fn push_alias(&mut self, alias: &str) {
        self.sql.push(' ');
        self.sql.push_str(alias);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{op, Query, SqlValue};

    fn on_ids() -> Clauses {
        Clauses::new().field("t.id").equals().field("u.id")
    }

    #[test]
    fn test_from_subquery_with_alias() {
        let sub = Query::new("SELECT id FROM u WHERE a = ?", vec![SqlValue::Int(1)]);
        let query = SelectBuilder::new()
            .field("s.id")
            .from_subquery_as(&sub, "s")
            .build();
        assert_eq!(query.sql(), "SELECT s.id FROM (SELECT id FROM u WHERE a = ?) s");
        assert_eq!(query.values(), &[SqlValue::Int(1)]);
    }

    #[test]
    fn test_comma_join() {
        let sub = SelectBuilder::new().field("id").from("v");
        let query = SelectBuilder::new()
            .field("*")
            .from("t")
            .comma_join("u")
            .comma_join_subquery(&sub, "w")
            .build();
        assert_eq!(query.sql(), "SELECT * FROM t,u,(SELECT id FROM v) w");
    }

    #[test]
    fn test_predicated_joins() {
        let query = SelectBuilder::new()
            .field("*")
            .from("t")
            .inner_join("u", &on_ids())
            .left_join("v", &Clauses::new())
            .full_join("w", &Clauses::when("w.k", op::eq, 3))
            .build();
        assert_eq!(
            query.sql(),
            "SELECT * FROM t INNER JOIN u ON t.id = u.id FULL OUTER JOIN w ON w.k = ?"
        );
        assert_eq!(query.values(), &[SqlValue::Int(3)]);
    }

    #[test]
    fn test_subquery_join_value_order() {
        let sub = Query::new("SELECT id FROM u WHERE a = ?", vec![SqlValue::Int(1)]);
        let query = SelectBuilder::new()
            .field("*")
            .from("t")
            .right_join_subquery(&sub, "s", &Clauses::when("s.id", op::gt, 2))
            .build();
        assert_eq!(
            query.sql(),
            "SELECT * FROM t RIGHT OUTER JOIN (SELECT id FROM u WHERE a = ?) s ON s.id > ?"
        );
        assert_eq!(query.values(), &[SqlValue::Int(1), SqlValue::Int(2)]);
    }

    #[test]
    fn test_unpredicated_joins() {
        let sub = SelectBuilder::new().field("id").from("v");
        let query = SelectBuilder::new()
            .field("*")
            .from("t")
            .natural_join("u")
            .cross_join_subquery(&sub, "w")
            .join(JoinKind::Left, "x")
            .on(&on_ids())
            .build();
        assert_eq!(
            query.sql(),
            "SELECT * FROM t NATURAL JOIN u CROSS JOIN (SELECT id FROM v) w LEFT OUTER JOIN x ON t.id = u.id"
        );
    }

    #[test]
    fn test_join_kind_predicates() {
        assert!(JoinKind::Inner.takes_predicate());
        assert!(!JoinKind::Cross.takes_predicate());
        assert_eq!(JoinKind::Right.to_string(), "RIGHT OUTER JOIN");
    }
}
