//! Predicate expressions with conditionally omitted clauses.
//!
//! [`Clauses`] accumulates a boolean SQL expression together with the values
//! its placeholders bind. Guarded clauses (`when`, `and_if`, `or_if`, ...) are
//! only written when their value passes a checker, so optional search
//! criteria need no branching:
//!
//! ```rust
//! use sqlweave_core::{op, Clauses};
//!
//! let first_name: Option<&str> = None;
//! let clauses = Clauses::when("first_name", op::like, first_name)
//!     .and_if("last_name", op::like, "%Croft%")
//!     .and_if("email", op::eq, "");
//!
//! assert_eq!(clauses.sql(), "last_name LIKE ?");
//! assert_eq!(clauses.values().len(), 1);
//! ```
//!
//! The first clause actually written never gets a leading `AND`/`OR`,
//! whichever method wrote it. A skipped clause leaves no trace at all.

use std::fmt;

use tracing::trace;

use super::candidate::{is_valid_value, ClauseValue, IntoClauseValue};
use super::query::{Query, SqlFragment};
use super::value::SqlValue;

/// Boolean aggregator written between two clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl BoolOp {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazily computed clause group.
///
/// Returning `None` (or an empty [`Clauses`]) adds nothing.
pub trait ClausesProvider {
    /// Produces the group.
    fn provide(self) -> Option<Clauses>;
}

impl<F> ClausesProvider for F
where
    F: FnOnce() -> Option<Clauses>,
{
    fn provide(self) -> Option<Clauses> {
        self()
    }
}

/// A boolean SQL expression and its ordered placeholder values.
///
/// Merging a `Clauses` into a statement or another expression copies it, so
/// one expression can be reused as a base for several statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Clauses {
    sql: String,
    values: Vec<SqlValue>,
    first_clause: bool,
}

impl Default for Clauses {
    fn default() -> Self {
        Self::new()
    }
}

impl Clauses {
    /// Creates an empty expression.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sql: String::new(),
            values: Vec::new(),
            first_clause: true,
        }
    }

    /// Creates an expression seeded with one guarded clause, using
    /// [`is_valid_value`] as checker.
    #[must_use]
    pub fn when<V, M>(column: &str, maker: M, value: V) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
    {
        Self::new().conditional(BoolOp::And, column, maker, value, is_valid_value::<V>)
    }

    /// Creates an expression seeded with one guarded clause and a custom checker.
    #[must_use]
    pub fn when_checked<V, M, C>(column: &str, maker: M, value: V, checker: C) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
        C: Fn(&V) -> bool,
    {
        Self::new().conditional(BoolOp::And, column, maker, value, checker)
    }

    /// Creates an expression seeded with one guarded two-value clause.
    #[must_use]
    pub fn when_pair<V, M>(column: &str, maker: M, first: V, second: V) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
    {
        Self::new().conditional_pair(
            BoolOp::And,
            column,
            maker,
            first,
            second,
            is_valid_value::<V>,
        )
    }

    /// Creates an expression seeded with one guarded two-value clause and a
    /// custom checker.
    #[must_use]
    pub fn when_pair_checked<V, M, C>(
        column: &str,
        maker: M,
        first: V,
        second: V,
        checker: C,
    ) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
        C: Fn(&V) -> bool,
    {
        Self::new().conditional_pair(BoolOp::And, column, maker, first, second, checker)
    }

    /// Creates an expression starting as a copy of `other`.
    #[must_use]
    pub fn copy_of(other: &Self) -> Self {
        other.clone()
    }

    /// Returns `true` while no clause has been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_clause
    }

    /// Returns the expression text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the values bound by the expression, in placeholder order.
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Snapshots the expression as a [`Query`].
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new(self.sql.clone(), self.values.clone())
    }

    // Unguarded text. Nothing here binds a value.

    /// Appends raw text, usually a column or a literal.
    #[must_use]
    pub fn field(mut self, text: &str) -> Self {
        self.push_raw(text);
        self
    }

    /// Appends `maker(column)` as raw text, without binding anything.
    ///
    /// Nothing is bound, so the maker should compare against column or
    /// literal text rather than write a `?`.
    #[must_use]
    pub fn compare<M>(mut self, maker: M, column: &str) -> Self
    where
        M: Fn(&str) -> String,
    {
        self.push_raw(&maker(column));
        self
    }

    /// Appends ` = `.
    #[must_use]
    pub fn equals(mut self) -> Self {
        self.push_raw(" = ");
        self
    }

    /// Appends ` <> `.
    #[must_use]
    pub fn not_equals(mut self) -> Self {
        self.push_raw(" <> ");
        self
    }

    /// Appends ` > `.
    #[must_use]
    pub fn greater(mut self) -> Self {
        self.push_raw(" > ");
        self
    }

    /// Appends ` >= `.
    #[must_use]
    pub fn greater_equals(mut self) -> Self {
        self.push_raw(" >= ");
        self
    }

    /// Appends ` < `.
    #[must_use]
    pub fn lesser(mut self) -> Self {
        self.push_raw(" < ");
        self
    }

    /// Appends ` <= `.
    #[must_use]
    pub fn lesser_equals(mut self) -> Self {
        self.push_raw(" <= ");
        self
    }

    /// Appends ` LIKE `.
    #[must_use]
    pub fn like(mut self) -> Self {
        self.push_raw(" LIKE ");
        self
    }

    /// Appends ` NOT LIKE `.
    #[must_use]
    pub fn not_like(mut self) -> Self {
        self.push_raw(" NOT LIKE ");
        self
    }

    /// Appends ` BETWEEN `.
    #[must_use]
    pub fn between(mut self) -> Self {
        self.push_raw(" BETWEEN ");
        self
    }

    /// Appends ` NOT BETWEEN `.
    #[must_use]
    pub fn not_between(mut self) -> Self {
        self.push_raw(" NOT BETWEEN ");
        self
    }

    /// Appends ` AND `.
    #[must_use]
    pub fn and(mut self) -> Self {
        self.push_raw(" AND ");
        self
    }

    /// Appends ` OR `.
    #[must_use]
    pub fn or(mut self) -> Self {
        self.push_raw(" OR ");
        self
    }

    /// Appends ` IS NULL`.
    #[must_use]
    pub fn is_null(mut self) -> Self {
        self.push_raw(" IS NULL");
        self
    }

    /// Appends ` IS NOT NULL`.
    #[must_use]
    pub fn is_not_null(mut self) -> Self {
        self.push_raw(" IS NOT NULL");
        self
    }

    /// Appends ` IN (a,b,c)` with the elements written inline.
    #[must_use]
    pub fn in_list<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.push_raw(" IN ");
        self.push_value(ClauseValue::list(items));
        self
    }

    /// Appends ` NOT IN (a,b,c)` with the elements written inline.
    #[must_use]
    pub fn not_in_list<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.push_raw(" NOT IN ");
        self.push_value(ClauseValue::list(items));
        self
    }

    /// Appends ` IN (<subquery>)` and the subquery values.
    #[must_use]
    pub fn in_subquery(mut self, subquery: &impl SqlFragment) -> Self {
        self.push_raw(" IN ");
        self.push_value(ClauseValue::subquery(subquery));
        self
    }

    /// Appends ` NOT IN (<subquery>)` and the subquery values.
    #[must_use]
    pub fn not_in_subquery(mut self, subquery: &impl SqlFragment) -> Self {
        self.push_raw(" NOT IN ");
        self.push_value(ClauseValue::subquery(subquery));
        self
    }

    /// Appends `EXISTS(<subquery>)` and the subquery values.
    #[must_use]
    pub fn exists(mut self, subquery: &impl SqlFragment) -> Self {
        self.push_raw("EXISTS");
        self.push_value(ClauseValue::subquery(subquery));
        self
    }

    /// Appends `NOT EXISTS(<subquery>)` and the subquery values.
    #[must_use]
    pub fn not_exists(mut self, subquery: &impl SqlFragment) -> Self {
        self.push_raw("NOT EXISTS");
        self.push_value(ClauseValue::subquery(subquery));
        self
    }

    /// Appends `NOT (<other>)` and the values of `other`.
    ///
    /// Written even when `other` is empty; do not negate empty groups.
    #[must_use]
    pub fn negate(mut self, other: &Self) -> Self {
        self.push_raw("NOT ");
        self.push_parenthesized(other);
        self
    }

    /// Appends `(<other>)` and the values of `other`, even when empty.
    #[must_use]
    pub fn compound(mut self, other: &Self) -> Self {
        self.push_parenthesized(other);
        self
    }

    // Guarded clauses.

    /// Appends `AND <clause>` when `value` is valid for [`is_valid_value`].
    #[must_use]
    pub fn and_if<V, M>(self, column: &str, maker: M, value: V) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
    {
        self.conditional(BoolOp::And, column, maker, value, is_valid_value::<V>)
    }

    /// Appends `AND <clause>` when `checker` accepts `value`.
    #[must_use]
    pub fn and_if_checked<V, M, C>(self, column: &str, maker: M, value: V, checker: C) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
        C: Fn(&V) -> bool,
    {
        self.conditional(BoolOp::And, column, maker, value, checker)
    }

    /// Appends `OR <clause>` when `value` is valid for [`is_valid_value`].
    #[must_use]
    pub fn or_if<V, M>(self, column: &str, maker: M, value: V) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
    {
        self.conditional(BoolOp::Or, column, maker, value, is_valid_value::<V>)
    }

    /// Appends `OR <clause>` when `checker` accepts `value`.
    #[must_use]
    pub fn or_if_checked<V, M, C>(self, column: &str, maker: M, value: V, checker: C) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
        C: Fn(&V) -> bool,
    {
        self.conditional(BoolOp::Or, column, maker, value, checker)
    }

    /// Appends `AND <clause>` binding two values, when both are valid.
    #[must_use]
    pub fn and_if_pair<V, M>(self, column: &str, maker: M, first: V, second: V) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
    {
        self.conditional_pair(
            BoolOp::And,
            column,
            maker,
            first,
            second,
            is_valid_value::<V>,
        )
    }

    /// Appends `AND <clause>` binding two values, when `checker` accepts both.
    #[must_use]
    pub fn and_if_pair_checked<V, M, C>(
        self,
        column: &str,
        maker: M,
        first: V,
        second: V,
        checker: C,
    ) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
        C: Fn(&V) -> bool,
    {
        self.conditional_pair(BoolOp::And, column, maker, first, second, checker)
    }

    /// Appends `OR <clause>` binding two values, when both are valid.
    #[must_use]
    pub fn or_if_pair<V, M>(self, column: &str, maker: M, first: V, second: V) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
    {
        self.conditional_pair(
            BoolOp::Or,
            column,
            maker,
            first,
            second,
            is_valid_value::<V>,
        )
    }

    /// Appends `OR <clause>` binding two values, when `checker` accepts both.
    #[must_use]
    pub fn or_if_pair_checked<V, M, C>(
        self,
        column: &str,
        maker: M,
        first: V,
        second: V,
        checker: C,
    ) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
        C: Fn(&V) -> bool,
    {
        self.conditional_pair(BoolOp::Or, column, maker, first, second, checker)
    }

    /// Appends `maker(column)` preceded by `op` (unless it is the first
    /// clause), then its value, provided `checker` accepts the value.
    ///
    /// Otherwise the expression is left untouched.
    #[must_use]
    pub fn conditional<V, M, C>(
        mut self,
        op: BoolOp,
        column: &str,
        maker: M,
        value: V,
        checker: C,
    ) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
        C: FnOnce(&V) -> bool,
    {
        if !checker(&value) {
            trace!(column, op = op.as_str(), "skipping clause: value rejected");
            return self;
        }
        self.push_connector(op);
        self.sql.push_str(&maker(column));
        self.push_value(value.into_clause_value());
        self.first_clause = false;
        self
    }

    /// Two-value form of [`conditional`](Self::conditional).
    ///
    /// Both values must pass `checker`; a half-valid pair writes nothing.
    #[must_use]
    pub fn conditional_pair<V, M, C>(
        mut self,
        op: BoolOp,
        column: &str,
        maker: M,
        first: V,
        second: V,
        checker: C,
    ) -> Self
    where
        V: IntoClauseValue,
        M: Fn(&str) -> String,
        C: Fn(&V) -> bool,
    {
        if !(checker(&first) && checker(&second)) {
            trace!(column, op = op.as_str(), "skipping clause: value pair rejected");
            return self;
        }
        self.push_connector(op);
        self.sql.push_str(&maker(column));
        self.push_value(first.into_clause_value());
        self.push_value(second.into_clause_value());
        self.first_clause = false;
        self
    }

    // Sub-groups.

    /// Appends `AND (<other>)` unless `other` is empty.
    #[must_use]
    pub fn and_group(self, other: &Self) -> Self {
        self.group(BoolOp::And, other)
    }

    /// Appends `OR (<other>)` unless `other` is empty.
    #[must_use]
    pub fn or_group(self, other: &Self) -> Self {
        self.group(BoolOp::Or, other)
    }

    /// Like [`and_group`](Self::and_group), with the group computed by
    /// `provider` at this point of the chain.
    #[must_use]
    pub fn and_with<P: ClausesProvider>(self, provider: P) -> Self {
        match provider.provide() {
            Some(other) => self.group(BoolOp::And, &other),
            None => self,
        }
    }

    /// Like [`or_group`](Self::or_group), with the group computed by
    /// `provider` at this point of the chain.
    #[must_use]
    pub fn or_with<P: ClausesProvider>(self, provider: P) -> Self {
        match provider.provide() {
            Some(other) => self.group(BoolOp::Or, &other),
            None => self,
        }
    }

    fn group(mut self, op: BoolOp, other: &Self) -> Self {
        if other.is_empty() {
            trace!(op = op.as_str(), "skipping empty clause group");
            return self;
        }
        self.push_connector(op);
        self.push_parenthesized(other);
        self
    }

    fn push_connector(&mut self, op: BoolOp) {
        if !self.first_clause {
            self.sql.push(' ');
            self.sql.push_str(op.as_str());
            self.sql.push(' ');
        }
    }

    fn push_raw(&mut self, text: &str) {
        self.sql.push_str(text);
        self.first_clause = false;
    }

    fn push_parenthesized(&mut self, other: &Self) {
        self.sql.push('(');
        self.sql.push_str(&other.sql);
        self.sql.push(')');
        self.values.extend_from_slice(&other.values);
        self.first_clause = false;
    }

    fn push_value(&mut self, value: ClauseValue) {
        match value {
            ClauseValue::Plain(value) | ClauseValue::Optional(Some(value)) => {
                self.values.push(value);
            }
            // Only reachable through a checker accepting `None`; keeps the
            // maker's placeholder bound.
            ClauseValue::Optional(None) => self.values.push(SqlValue::Null),
            ClauseValue::List(items) => {
                self.sql.push('(');
                self.sql.push_str(&items.join(","));
                self.sql.push(')');
            }
            ClauseValue::Subquery(query) => {
                let (sql, values) = query.into_parts();
                self.sql.push('(');
                self.sql.push_str(&sql);
                self.sql.push(')');
                self.values.extend(values);
            }
        }
    }
}

impl SqlFragment for Clauses {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn values(&self) -> &[SqlValue] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::literal::quote_all;
    use crate::builder::op;

    fn text(value: &str) -> SqlValue {
        SqlValue::Text(String::from(value))
    }

    #[test]
    fn test_seeded_valid_clause() {
        let clauses = Clauses::when("a", op::eq, "titi");
        assert!(!clauses.is_empty());
        assert_eq!(clauses.sql(), "a = ?");
        assert_eq!(clauses.values(), &[text("titi")]);
    }

    #[test]
    fn test_seeded_invalid_clause_stays_empty() {
        let clauses = Clauses::when("a", op::eq, SqlValue::Null);
        assert!(clauses.is_empty());
        assert_eq!(clauses.sql(), "");
        assert!(clauses.values().is_empty());
    }

    #[test]
    fn test_skipped_first_clause_does_not_consume_first_position() {
        let clauses = Clauses::when("a", op::eq, None::<&str>).and_if("b", op::eq, "plop");
        assert_eq!(clauses.sql(), "b = ?");
        assert_eq!(clauses.values(), &[text("plop")]);
    }

    #[test]
    fn test_skipped_clause_leaves_expression_untouched() {
        let before = Clauses::when("a", op::eq, 1);
        let after = before.clone().or_if("b", op::eq, "");
        assert_eq!(before, after);
    }

    #[test]
    fn test_or_aggregator() {
        let clauses = Clauses::when("a", op::eq, 1).or_if("b", op::gt, 2);
        assert_eq!(clauses.sql(), "a = ? OR b > ?");
        assert_eq!(clauses.values(), &[SqlValue::Int(1), SqlValue::Int(2)]);
    }

    #[test]
    fn test_custom_checker() {
        let clauses = Clauses::when("t.a", op::eq, "b").and_if_checked(
            "t.a",
            op::not_eq,
            2,
            |i: &i32| *i != 2,
        );
        assert_eq!(clauses.sql(), "t.a = ?");
        assert_eq!(clauses.values(), &[text("b")]);
    }

    #[test]
    fn test_optional_value_is_unwrapped() {
        let clauses = Clauses::when("id", op::eq, Some(7_i64));
        assert_eq!(clauses.values(), &[SqlValue::Int(7)]);
    }

    #[test]
    fn test_pair_requires_both_values() {
        let clauses = Clauses::when_pair("t.i", op::between, Some(1), None)
            .and_if_pair("t.j", op::not_between, 1, 10);
        assert_eq!(clauses.sql(), "t.j NOT BETWEEN ? AND ?");
        assert_eq!(clauses.values(), &[SqlValue::Int(1), SqlValue::Int(10)]);
    }

    #[test]
    fn test_pair_with_checker() {
        let clauses =
            Clauses::when_pair_checked("t.i", op::between, 0, 10, |v: &i32| *v > 0);
        assert!(clauses.is_empty());
    }

    #[test]
    fn test_list_is_inlined_without_values() {
        let clauses = Clauses::when("t.a", op::in_list, quote_all(["plip", "plop"]));
        assert_eq!(clauses.sql(), "t.a IN ('plip','plop')");
        assert!(clauses.values().is_empty());
    }

    #[test]
    fn test_empty_list_drops_clause() {
        let clauses = Clauses::when("t.a", op::not_in_list, Vec::<String>::new());
        assert!(clauses.is_empty());
    }

    #[test]
    fn test_subquery_value_is_inlined_with_its_values() {
        let sub = Query::new("SELECT u.a FROM tutu u WHERE u.b = ?", vec![SqlValue::Int(3)]);
        let clauses = Clauses::when("x", op::eq, 1).and_if("t.a", op::in_list, &sub);
        assert_eq!(
            clauses.sql(),
            "x = ? AND t.a IN (SELECT u.a FROM tutu u WHERE u.b = ?)"
        );
        assert_eq!(clauses.values(), &[SqlValue::Int(1), SqlValue::Int(3)]);
    }

    #[test]
    fn test_groups() {
        let group = Clauses::when("b", op::eq, 2).or_if("c", op::eq, 3);
        let clauses = Clauses::when("a", op::eq, 1).and_group(&group);
        assert_eq!(clauses.sql(), "a = ? AND (b = ? OR c = ?)");
        assert_eq!(
            clauses.values(),
            &[SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
        );
    }

    #[test]
    fn test_empty_group_is_skipped() {
        let clauses = Clauses::when("a", op::eq, 1).or_group(&Clauses::new());
        assert_eq!(clauses.sql(), "a = ?");
    }

    #[test]
    fn test_group_as_first_clause_has_no_aggregator() {
        let group = Clauses::when("b", op::eq, 2);
        let clauses = Clauses::new().or_group(&group);
        assert_eq!(clauses.sql(), "(b = ?)");
    }

    #[test]
    fn test_providers() {
        let clauses = Clauses::new()
            .and_with(|| None::<Clauses>)
            .and_with(|| Some(Clauses::when("a", op::eq, 1)))
            .or_with(|| Some(Clauses::when("b", op::eq, "")))
            .or_with(|| Some(Clauses::when("c", op::eq, 3)));
        assert_eq!(clauses.sql(), "(a = ?) OR (c = ?)");
        assert_eq!(clauses.values(), &[SqlValue::Int(1), SqlValue::Int(3)]);
    }

    #[test]
    fn test_negate_and_compound() {
        let inner = Clauses::new()
            .field("t.m")
            .equals()
            .field("t.n")
            .or()
            .field("t.o")
            .equals()
            .field("t.p");
        let clauses = Clauses::new()
            .field("t.a")
            .is_not_null()
            .and()
            .negate(&inner)
            .and()
            .compound(&Clauses::when("z", op::lt, 5));
        assert_eq!(
            clauses.sql(),
            "t.a IS NOT NULL AND NOT (t.m = t.n OR t.o = t.p) AND (z < ?)"
        );
        assert_eq!(clauses.values(), &[SqlValue::Int(5)]);
    }

    #[test]
    fn test_negate_alone_is_not_empty() {
        let clauses = Clauses::new().negate(&Clauses::when("a", op::eq, 1));
        assert!(!clauses.is_empty());
        assert_eq!(clauses.sql(), "NOT (a = ?)");
    }

    #[test]
    fn test_compare_appends_maker_text() {
        let clauses = Clauses::new()
            .compare(|column: &str| format!("{column} >= t.floor"), "t.a")
            .and()
            .field("t.b")
            .equals()
            .field("t.c");
        assert_eq!(clauses.sql(), "t.a >= t.floor AND t.b = t.c");
        assert!(clauses.values().is_empty());
        assert!(!clauses.is_empty());
    }

    #[test]
    fn test_raw_in_list_and_subquery() {
        let sub = Query::new("SELECT u.a FROM tutu u", vec![]);
        let clauses = Clauses::new()
            .field("t.a")
            .in_list(quote_all(["plip", "plop"]))
            .and()
            .field("t.b")
            .not_in_subquery(&sub);
        assert_eq!(
            clauses.sql(),
            "t.a IN ('plip','plop') AND t.b NOT IN (SELECT u.a FROM tutu u)"
        );
    }

    #[test]
    fn test_copy_of_is_independent() {
        let base = Clauses::when("a", op::eq, 1);
        let extended = Clauses::copy_of(&base).and_if("b", op::eq, 2);
        assert_eq!(base.sql(), "a = ?");
        assert_eq!(extended.sql(), "a = ? AND b = ?");
        assert_eq!(base.values().len(), 1);
    }

    #[test]
    fn test_permissive_checker_binds_null_for_none() {
        let clauses = Clauses::when_checked("a", op::eq, None::<i32>, |_: &Option<i32>| true);
        assert_eq!(clauses.sql(), "a = ?");
        assert_eq!(clauses.values(), &[SqlValue::Null]);
    }
}
