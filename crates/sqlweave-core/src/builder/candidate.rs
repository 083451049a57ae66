//! Candidate values for guarded clauses.
//!
//! A guarded clause is only written when its value is meaningful. The value
//! also decides how it is written: bound as a placeholder value, inlined as a
//! literal list, or embedded as a subquery.

use std::fmt::Display;

use super::query::{Query, SqlFragment};
use super::select::SelectBuilder;
use super::value::{SqlValue, ToSqlValue};

/// The shape of a value attached to a guarded clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// A value bound to the clause placeholder.
    Plain(SqlValue),
    /// An optional value, bound when present.
    Optional(Option<SqlValue>),
    /// Literal list elements, written inline as `(a,b,c)`.
    ///
    /// Lists never use placeholders, so drivers' bound-parameter limits do not
    /// apply. Elements are written verbatim; quote text with
    /// [`literal::quote_all`](super::literal::quote_all).
    List(Vec<String>),
    /// A subquery, written inline as `(<sql>)` with its values appended.
    Subquery(Query),
}

impl ClauseValue {
    /// Creates a literal list from any collection of displayable elements.
    #[must_use]
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self::List(items.into_iter().map(|item| item.to_string()).collect())
    }

    /// Creates a subquery value from a statement or a finished query.
    #[must_use]
    pub fn subquery(fragment: &impl SqlFragment) -> Self {
        Self::Subquery(Query::new(fragment.sql(), fragment.values().to_vec()))
    }

    /// Returns whether the value is meaningful enough to emit its clause.
    ///
    /// Null, empty text, an empty list and an absent optional are not.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Plain(value) => sql_value_present(value),
            Self::Optional(value) => value.is_some(),
            Self::List(items) => !items.is_empty(),
            Self::Subquery(_) => true,
        }
    }
}

fn sql_value_present(value: &SqlValue) -> bool {
    match value {
        SqlValue::Null => false,
        SqlValue::Text(text) => !text.is_empty(),
        _ => true,
    }
}

/// Conversion into a [`ClauseValue`], with the presence test used by the
/// default checker.
pub trait IntoClauseValue {
    /// Returns whether the value should cause its clause to be emitted.
    fn is_present(&self) -> bool;

    /// Converts the value.
    fn into_clause_value(self) -> ClauseValue;
}

/// The default value checker.
///
/// Rejects null, empty text, empty collections and `None`; accepts anything
/// else. Any `Fn(&T) -> bool` can be used as a checker in its place.
#[must_use]
pub fn is_valid_value<T: IntoClauseValue + ?Sized>(value: &T) -> bool {
    value.is_present()
}

impl IntoClauseValue for ClauseValue {
    fn is_present(&self) -> bool {
        Self::is_present(self)
    }

    fn into_clause_value(self) -> ClauseValue {
        self
    }
}

impl IntoClauseValue for SqlValue {
    fn is_present(&self) -> bool {
        sql_value_present(self)
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::Plain(self)
    }
}

macro_rules! always_present {
    ($($ty:ty),*) => {
        $(
            impl IntoClauseValue for $ty {
                fn is_present(&self) -> bool {
                    true
                }

                fn into_clause_value(self) -> ClauseValue {
                    ClauseValue::Plain(self.to_sql_value())
                }
            }
        )*
    };
}

always_present!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl IntoClauseValue for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::Plain(SqlValue::Text(self))
    }
}

impl IntoClauseValue for &String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::Plain(SqlValue::Text(self.clone()))
    }
}

impl IntoClauseValue for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::Plain(SqlValue::Text(String::from(self)))
    }
}

impl<T: ToSqlValue> IntoClauseValue for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::Optional(self.map(ToSqlValue::to_sql_value))
    }
}

impl<T: Display> IntoClauseValue for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::list(self)
    }
}

impl<T: Display> IntoClauseValue for &[T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::list(self)
    }
}

impl<T: Display, const N: usize> IntoClauseValue for [T; N] {
    fn is_present(&self) -> bool {
        N > 0
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::list(self)
    }
}

impl IntoClauseValue for Query {
    fn is_present(&self) -> bool {
        true
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::Subquery(self)
    }
}

impl IntoClauseValue for &Query {
    fn is_present(&self) -> bool {
        true
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::Subquery(self.clone())
    }
}

impl IntoClauseValue for &SelectBuilder {
    fn is_present(&self) -> bool {
        true
    }

    fn into_clause_value(self) -> ClauseValue {
        ClauseValue::subquery(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_checker_rejects_absent_values() {
        assert!(!is_valid_value(&SqlValue::Null));
        assert!(!is_valid_value(&""));
        assert!(!is_valid_value(&String::new()));
        assert!(!is_valid_value(&None::<i32>));
        assert!(!is_valid_value(&Vec::<i32>::new()));
        assert!(!is_valid_value(&ClauseValue::List(vec![])));
    }

    #[test]
    fn test_default_checker_accepts_meaningful_values() {
        assert!(is_valid_value(&0_i32));
        assert!(is_valid_value(&false));
        assert!(is_valid_value(&"titi"));
        assert!(is_valid_value(&Some("")));
        assert!(is_valid_value(&vec![1, 2]));
        assert!(is_valid_value(&Query::new("SELECT 1", vec![])));
    }

    #[test]
    fn test_conversions_pick_the_right_shape() {
        assert_eq!(
            "b".into_clause_value(),
            ClauseValue::Plain(SqlValue::Text(String::from("b")))
        );
        assert_eq!(
            Some(3_i64).into_clause_value(),
            ClauseValue::Optional(Some(SqlValue::Int(3)))
        );
        assert_eq!(
            vec!["'plip'", "'plop'"].into_clause_value(),
            ClauseValue::List(vec![String::from("'plip'"), String::from("'plop'")])
        );
        assert_eq!(
            [1, 2, 3].into_clause_value(),
            ClauseValue::List(vec![
                String::from("1"),
                String::from("2"),
                String::from("3")
            ])
        );
    }

    #[test]
    fn test_subquery_from_select_copies_values() {
        let select = SelectBuilder::new().field("id").from("t");
        match (&select).into_clause_value() {
            ClauseValue::Subquery(query) => {
                assert_eq!(query.sql(), "SELECT id FROM t");
                assert!(query.values().is_empty());
            }
            other => panic!("expected subquery, got {other:?}"),
        }
    }
}
