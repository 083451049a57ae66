//! Parameterized SQL builders.
//!
//! Statements are assembled by chaining calls on a [`SelectBuilder`],
//! [`UpdateBuilder`] or [`DeleteBuilder`]. Predicates are built separately as
//! [`Clauses`] and merged at `WHERE`, `HAVING` or `ON`, where they are copied:
//! the same expression can feed several statements.
//!
//! # Example
//!
//! ```rust
//! use sqlweave_core::builder::{op, Clauses, SelectBuilder, SqlValue};
//!
//! let name: Option<&str> = None;
//! let query = SelectBuilder::new()
//!     .field("id")
//!     .field("name")
//!     .from("heroes")
//!     .where_clause(
//!         &Clauses::when("name", op::like, name).and_if("age", op::gt_eq, 30),
//!     )
//!     .build();
//!
//! assert_eq!(query.sql(), "SELECT id,name FROM heroes WHERE age >= ?");
//! assert_eq!(query.values(), &[SqlValue::Int(30)]);
//! ```

mod candidate;
mod clauses;
mod delete;
mod fields;
mod from;
pub mod literal;
pub mod op;
mod query;
mod select;
mod update;
pub mod value;

pub use candidate::{is_valid_value, ClauseValue, IntoClauseValue};
pub use clauses::{BoolOp, Clauses, ClausesProvider};
pub use delete::DeleteBuilder;
pub use from::JoinKind;
pub use query::{Query, SqlFragment};
pub use select::{SelectBuilder, WindowFunction};
pub use update::UpdateBuilder;
pub use value::{SqlValue, ToSqlValue};

use tracing::trace;

/// Appends ` <keyword> <clauses>` and the clause values, unless `clauses` is
/// empty. Returns whether anything was written.
pub(crate) fn append_predicate(
    sql: &mut String,
    values: &mut Vec<SqlValue>,
    keyword: &str,
    clauses: &Clauses,
) -> bool {
    if clauses.is_empty() {
        trace!(keyword, "skipping empty predicate");
        return false;
    }
    sql.push(' ');
    sql.push_str(keyword);
    sql.push(' ');
    sql.push_str(clauses.sql());
    values.extend_from_slice(clauses.values());
    true
}

/// Appends `(<subquery>)` and the subquery values.
pub(crate) fn append_subquery(
    sql: &mut String,
    values: &mut Vec<SqlValue>,
    subquery: &impl SqlFragment,
) {
    sql.push('(');
    sql.push_str(subquery.sql());
    sql.push(')');
    values.extend_from_slice(subquery.values());
}

/// Starts a `SELECT` statement.
#[must_use]
pub fn select() -> SelectBuilder {
    SelectBuilder::new()
}

/// Starts a `SELECT DISTINCT` statement.
#[must_use]
pub fn select_distinct() -> SelectBuilder {
    SelectBuilder::new().distinct()
}

/// Starts an `UPDATE` statement on `table`.
#[must_use]
pub fn update(table: &str) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Starts a `DELETE` statement on `table`.
#[must_use]
pub fn delete(table: &str) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

/// Starts an empty predicate expression.
#[must_use]
pub const fn clauses() -> Clauses {
    Clauses::new()
}
