//! # sqlweave-core
//!
//! A fluent builder for parameterized SQL statements whose predicate clauses
//! vanish when their value is not meaningful.
//!
//! This crate provides:
//! - [`Clauses`], a boolean expression builder where each guarded clause is
//!   written only when its value passes a checker (by default: not null, not
//!   empty, not `None`)
//! - SELECT, UPDATE and DELETE builders that merge those expressions at
//!   `WHERE`, `HAVING` and `ON`
//! - A [`Query`] result whose values line up with its `?` placeholders
//!
//! ## Optional search criteria
//!
//! ```rust
//! use sqlweave_core::{op, select, Clauses, SqlValue};
//!
//! struct Search<'a> {
//!     name: Option<&'a str>,
//!     city: &'a str,
//!     min_age: Option<i64>,
//! }
//!
//! let search = Search { name: None, city: "", min_age: Some(30) };
//! let query = select()
//!     .field("h.id")
//!     .field("h.name")
//!     .from("heroes h")
//!     .where_clause(
//!         &Clauses::when("h.name", op::like, search.name)
//!             .and_if("h.city", op::eq, search.city)
//!             .and_if("h.age", op::gt_eq, search.min_age),
//!     )
//!     .build();
//!
//! assert_eq!(query.sql(), "SELECT h.id,h.name FROM heroes h WHERE h.age >= ?");
//! assert_eq!(query.values(), &[SqlValue::Int(30)]);
//! ```
//!
//! ## SQL Injection
//!
//! Clause values are always bound through placeholders. Literal `IN` lists
//! and raw fragments (`field`, table names, aliases) are written into the
//! text as given: quote list elements with [`builder::literal::quote_all`] and
//! never pass untrusted input as raw text.

pub mod builder;
pub mod error;

pub use builder::{
    clauses, delete, is_valid_value, op, select, select_distinct, update, BoolOp, ClauseValue,
    Clauses, ClausesProvider, DeleteBuilder, IntoClauseValue, JoinKind, Query, SelectBuilder,
    SqlFragment, SqlValue, ToSqlValue, UpdateBuilder, WindowFunction,
};
pub use error::{QueryError, Result};
