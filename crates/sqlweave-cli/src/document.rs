//! JSON statement documents.
//!
//! A document describes one statement as data. Filters whose value is JSON
//! `null`, an empty string or an empty array are dropped, exactly like a
//! guarded clause of the builder API.
//!
//! ```json
//! {
//!   "table": "heroes h",
//!   "fields": ["h.id", "h.name"],
//!   "where": [
//!     { "column": "h.name", "op": "like", "value": "%man%" },
//!     { "column": "h.city", "op": "in", "value": ["Gotham", "Metropolis"] },
//!     { "group": [
//!         { "column": "h.level", "op": "between", "values": [10, 50] },
//!         { "column": "h.retired", "op": "=", "value": false, "or": true }
//!     ] }
//!   ],
//!   "order_by": [{ "column": "h.level", "descending": true }],
//!   "limit": 20
//! }
//! ```

use serde::Deserialize;
use tracing::{debug, warn};

use sqlweave_core::{
    is_valid_value, op, select, BoolOp, ClauseValue, Clauses, Query, SelectBuilder, SqlValue,
    WindowFunction,
};

use crate::error::{DocumentError, Result};

/// A single-value filter operand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A JSON array, written inline as a literal list.
    List(Vec<SqlValue>),
    /// Any other JSON value, bound to the placeholder.
    Scalar(SqlValue),
}

impl FilterValue {
    fn into_clause_value(self) -> ClauseValue {
        match self {
            Self::List(items) => ClauseValue::list(items),
            Self::Scalar(value) => ClauseValue::Plain(value),
        }
    }
}

/// One guarded clause.
#[derive(Debug, Clone, Deserialize)]
pub struct Filter {
    /// Column or expression the operator applies to.
    pub column: String,
    /// Operator name or symbol, see `op::by_name`.
    pub op: String,
    /// Operand of single-value operators.
    #[serde(default)]
    pub value: Option<FilterValue>,
    /// Operands of two-value operators (`between`, `not_between`).
    #[serde(default)]
    pub values: Option<Vec<SqlValue>>,
    /// Joins the clause with `OR` instead of `AND`.
    #[serde(default)]
    pub or: bool,
}

/// A filter or a parenthesized group of criteria.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Criterion {
    /// Nested criteria, dropped when none of them applies.
    Group {
        /// The grouped criteria.
        group: Vec<Criterion>,
        /// Joins the group with `OR` instead of `AND`.
        #[serde(default)]
        or: bool,
    },
    /// A single clause.
    Filter(Filter),
}

/// Folds criteria into one expression.
///
/// # Errors
///
/// Fails on unknown operators and on operand counts that do not match the
/// operator.
pub fn build_clauses(criteria: &[Criterion]) -> Result<Clauses> {
    criteria.iter().try_fold(Clauses::new(), apply)
}

fn apply(clauses: Clauses, criterion: &Criterion) -> Result<Clauses> {
    match criterion {
        Criterion::Group { group, or } => {
            let inner = build_clauses(group)?;
            Ok(if *or {
                clauses.or_group(&inner)
            } else {
                clauses.and_group(&inner)
            })
        }
        Criterion::Filter(filter) => apply_filter(clauses, filter),
    }
}

fn apply_filter(clauses: Clauses, filter: &Filter) -> Result<Clauses> {
    let maker = op::lookup(&filter.op)?;
    let bool_op = if filter.or { BoolOp::Or } else { BoolOp::And };
    debug!(column = %filter.column, op = %filter.op, "applying filter");

    if op::takes_pair(&filter.op) {
        let Some([first, second]) = filter.values.as_deref() else {
            return Err(DocumentError::PairExpected {
                column: filter.column.clone(),
                op: filter.op.clone(),
            });
        };
        return Ok(clauses.conditional_pair(
            bool_op,
            &filter.column,
            maker,
            first.clone(),
            second.clone(),
            is_valid_value,
        ));
    }

    if filter.values.is_some() {
        return Err(DocumentError::SingleExpected {
            column: filter.column.clone(),
            op: filter.op.clone(),
        });
    }
    let value = filter
        .value
        .clone()
        .map_or(ClauseValue::Plain(SqlValue::Null), FilterValue::into_clause_value);
    Ok(clauses.conditional(bool_op, &filter.column, maker, value, is_valid_value))
}

/// One `ORDER BY` element.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBy {
    /// Column or expression.
    pub column: String,
    /// Appends `DESC` (`ASC` otherwise).
    #[serde(default)]
    pub descending: bool,
}

/// Row-numbering function of a window pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// `row_number()`
    #[default]
    RowNumber,
    /// `rank()`
    Rank,
}

impl From<WindowKind> for WindowFunction {
    fn from(kind: WindowKind) -> Self {
        match kind {
            WindowKind::RowNumber => Self::RowNumber,
            WindowKind::Rank => Self::Rank,
        }
    }
}

const fn absent_bound() -> i64 {
    -1
}

/// Window-function pagination.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowSpec {
    /// Row-numbering function.
    #[serde(default)]
    pub function: WindowKind,
    /// Alias of the wrapped statement.
    pub alias: String,
    /// Alias of the row-number column.
    pub row_alias: String,
    /// Ordering of the numbered rows.
    pub order_by: String,
    /// Inclusive lower bound, absent when negative.
    #[serde(default = "absent_bound")]
    pub min: i64,
    /// Exclusive upper bound, absent when negative.
    #[serde(default = "absent_bound")]
    pub max: i64,
}

/// A SELECT statement.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectDocument {
    /// Source table, with optional alias.
    pub table: String,
    /// Writes `SELECT DISTINCT`.
    #[serde(default)]
    pub distinct: bool,
    /// Selected expressions, `*` when empty.
    #[serde(default)]
    pub fields: Vec<String>,
    /// `WHERE` criteria.
    #[serde(default, rename = "where")]
    pub filters: Vec<Criterion>,
    /// `GROUP BY` columns.
    #[serde(default)]
    pub group_by: Vec<String>,
    /// `HAVING` criteria.
    #[serde(default)]
    pub having: Vec<Criterion>,
    /// `ORDER BY` elements.
    #[serde(default)]
    pub order_by: Vec<OrderBy>,
    /// Rows to skip.
    pub offset: Option<u64>,
    /// Rows to return, as `FETCH FIRST`.
    pub fetch: Option<u64>,
    /// Rows to return, as `LIMIT`.
    pub limit: Option<u64>,
    /// Window-function pagination, applied last.
    pub window: Option<WindowSpec>,
}

impl SelectDocument {
    /// Builds the statement.
    ///
    /// # Errors
    ///
    /// Fails on invalid filters and on a window pagination that cannot be
    /// applied.
    pub fn to_builder(&self) -> Result<SelectBuilder> {
        let mut select = if self.distinct {
            select().distinct()
        } else {
            select()
        };
        select = if self.fields.is_empty() {
            select.field("*")
        } else {
            select.fields(&self.fields)
        };
        select = select
            .from(&self.table)
            .where_clause(&build_clauses(&self.filters)?);

        if let Some((first, rest)) = self.group_by.split_first() {
            select = select.group_by(first).fields(rest);
        }
        select = select.having(&build_clauses(&self.having)?);

        for (i, order) in self.order_by.iter().enumerate() {
            select = if i == 0 {
                select.order_by(&order.column)
            } else {
                select.field(&order.column)
            };
            select = if order.descending {
                select.desc()
            } else {
                select.asc()
            };
        }

        select = self.paginate(select);

        if let Some(window) = &self.window {
            select = select.window(
                window.function.into(),
                &window.alias,
                &window.row_alias,
                &window.order_by,
                window.min,
                window.max,
            )?;
        }
        Ok(select)
    }

    fn paginate(&self, mut select: SelectBuilder) -> SelectBuilder {
        if let Some(rows) = self.limit {
            if self.fetch.is_some() {
                warn!("both limit and fetch given, fetch ignored");
            }
            select = select.limit(rows);
            if let Some(rows) = self.offset {
                select = select.plain_offset(rows);
            }
            return select;
        }
        if let Some(rows) = self.offset {
            select = select.offset(rows);
        }
        if let Some(rows) = self.fetch {
            select = select.fetch(rows);
        }
        select
    }

    /// Builds and snapshots the statement.
    ///
    /// # Errors
    ///
    /// See [`to_builder`](Self::to_builder).
    pub fn to_query(&self) -> Result<Query> {
        Ok(self.to_builder()?.build())
    }
}

/// One `SET` assignment. A `null` value sets the column to `NULL`.
#[derive(Debug, Clone, Deserialize)]
pub struct Assignment {
    /// Updated column.
    pub column: String,
    /// New value.
    pub value: SqlValue,
}

/// An UPDATE statement.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocument {
    /// Updated table.
    pub table: String,
    /// Assignments, in order.
    pub set: Vec<Assignment>,
    /// `WHERE` criteria.
    #[serde(default, rename = "where")]
    pub filters: Vec<Criterion>,
}

impl UpdateDocument {
    /// Builds and snapshots the statement.
    ///
    /// # Errors
    ///
    /// Fails on invalid filters.
    pub fn to_query(&self) -> Result<Query> {
        let update = self
            .set
            .iter()
            .fold(sqlweave_core::update(&self.table), |update, assignment| {
                update.field(&assignment.column, assignment.value.clone())
            });
        Ok(update.where_clause(&build_clauses(&self.filters)?).build())
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteDocument {
    /// Table to delete from.
    pub table: String,
    /// `WHERE` criteria.
    #[serde(default, rename = "where")]
    pub filters: Vec<Criterion>,
}

impl DeleteDocument {
    /// Builds and snapshots the statement.
    ///
    /// # Errors
    ///
    /// Fails on invalid filters.
    pub fn to_query(&self) -> Result<Query> {
        Ok(sqlweave_core::delete(&self.table)
            .where_clause(&build_clauses(&self.filters)?)
            .build())
    }
}
