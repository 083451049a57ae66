//! Operator catalog.
//!
//! Every operator is a plain function from a column name to the clause text,
//! placeholders included. Any `Fn(&str) -> String` works wherever a clause
//! maker is expected, so custom operators need no registration:
//!
//! ```rust
//! use sqlweave_core::{op, Clauses};
//!
//! let clauses = Clauses::when("name", |c: &str| format!("{c} ILIKE ?"), "%lara%")
//!     .and_if("age", op::gt_eq, 18);
//! assert_eq!(clauses.sql(), "name ILIKE ? AND age >= ?");
//! ```

use crate::error::{QueryError, Result};

/// A clause maker stored as a plain function pointer.
pub type ClauseMaker = fn(&str) -> String;

/// `column = ?`
#[must_use]
pub fn eq(column: &str) -> String {
    format!("{column} = ?")
}

/// `column <> ?`
#[must_use]
pub fn not_eq(column: &str) -> String {
    format!("{column} <> ?")
}

/// `column > ?`
#[must_use]
pub fn gt(column: &str) -> String {
    format!("{column} > ?")
}

/// `column >= ?`
#[must_use]
pub fn gt_eq(column: &str) -> String {
    format!("{column} >= ?")
}

/// `column < ?`
#[must_use]
pub fn lt(column: &str) -> String {
    format!("{column} < ?")
}

/// `column <= ?`
#[must_use]
pub fn lt_eq(column: &str) -> String {
    format!("{column} <= ?")
}

/// `column LIKE ?`
#[must_use]
pub fn like(column: &str) -> String {
    format!("{column} LIKE ?")
}

/// `column NOT LIKE ?`
#[must_use]
pub fn not_like(column: &str) -> String {
    format!("{column} NOT LIKE ?")
}

/// `column BETWEEN ? AND ?`, for two-value clauses.
#[must_use]
pub fn between(column: &str) -> String {
    format!("{column} BETWEEN ? AND ?")
}

/// `column NOT BETWEEN ? AND ?`, for two-value clauses.
#[must_use]
pub fn not_between(column: &str) -> String {
    format!("{column} NOT BETWEEN ? AND ?")
}

/// `column IN `, followed by a literal list or a subquery.
#[must_use]
pub fn in_list(column: &str) -> String {
    format!("{column} IN ")
}

/// `column NOT IN `, followed by a literal list or a subquery.
#[must_use]
pub fn not_in_list(column: &str) -> String {
    format!("{column} NOT IN ")
}

/// `EXISTS`, followed by a subquery. The column is ignored.
#[must_use]
pub fn exists(_column: &str) -> String {
    String::from("EXISTS")
}

/// `NOT EXISTS`, followed by a subquery. The column is ignored.
#[must_use]
pub fn not_exists(_column: &str) -> String {
    String::from("NOT EXISTS")
}

macro_rules! array_comparisons {
    ($($name:ident => $op:literal, $quantifier:literal;)*) => {
        $(
            #[doc = concat!("`column ", $op, " ", $quantifier, "(?)`, comparing against a bound array.")]
            #[must_use]
            pub fn $name(column: &str) -> String {
                format!(concat!("{} ", $op, " ", $quantifier, "(?)"), column)
            }
        )*
    };
}

array_comparisons! {
    eq_any => "=", "ANY";
    eq_all => "=", "ALL";
    not_eq_any => "<>", "ANY";
    not_eq_all => "<>", "ALL";
    gt_any => ">", "ANY";
    gt_all => ">", "ALL";
    gt_eq_any => ">=", "ANY";
    gt_eq_all => ">=", "ALL";
    lt_any => "<", "ANY";
    lt_all => "<", "ALL";
    lt_eq_any => "<=", "ANY";
    lt_eq_all => "<=", "ALL";
}

/// Looks an operator up by name or by its SQL symbol.
///
/// Used by callers that describe clauses as data (configuration files,
/// request parameters).
#[must_use]
pub fn by_name(name: &str) -> Option<ClauseMaker> {
    let maker: ClauseMaker = match name.trim().to_ascii_lowercase().as_str() {
        "eq" | "=" => eq,
        "not_eq" | "ne" | "<>" | "!=" => not_eq,
        "gt" | ">" => gt,
        "gt_eq" | "gte" | ">=" => gt_eq,
        "lt" | "<" => lt,
        "lt_eq" | "lte" | "<=" => lt_eq,
        "like" => like,
        "not_like" => not_like,
        "between" => between,
        "not_between" => not_between,
        "in" | "in_list" => in_list,
        "not_in" | "not_in_list" => not_in_list,
        "exists" => exists,
        "not_exists" => not_exists,
        "eq_any" => eq_any,
        "eq_all" => eq_all,
        "not_eq_any" => not_eq_any,
        "not_eq_all" => not_eq_all,
        "gt_any" => gt_any,
        "gt_all" => gt_all,
        "gt_eq_any" => gt_eq_any,
        "gt_eq_all" => gt_eq_all,
        "lt_any" => lt_any,
        "lt_all" => lt_all,
        "lt_eq_any" => lt_eq_any,
        "lt_eq_all" => lt_eq_all,
        _ => return None,
    };
    Some(maker)
}

/// Like [`by_name`], failing with [`QueryError::UnknownOperator`].
///
/// # Errors
///
/// Returns an error when no operator has this name.
pub fn lookup(name: &str) -> Result<ClauseMaker> {
    by_name(name).ok_or_else(|| QueryError::UnknownOperator(String::from(name)))
}

/// Returns `true` for operators whose clause binds two values.
#[must_use]
pub fn takes_pair(name: &str) -> bool {
    matches!(
        name.trim().to_ascii_lowercase().as_str(),
        "between" | "not_between"
    )
}
