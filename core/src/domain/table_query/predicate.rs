use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Right-hand side of a column comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Literal {
    Text(String),
    Number(f64),
    Timestamp(DateTime<Utc>),
}

impl Literal {
    fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Text(s) => s.trim().parse().ok(),
            Literal::Timestamp(_) => None,
        }
    }

    fn to_text(&self) -> String {
        match self {
            Literal::Text(s) => s.clone(),
            Literal::Number(n) => n.to_string(),
            Literal::Timestamp(t) => t.to_rfc3339(),
        }
    }

    fn compare(&self, other: &Literal) -> Option<Ordering> {
        match (self, other) {
            (Literal::Timestamp(a), Literal::Timestamp(b)) => Some(a.cmp(b)),
            (Literal::Text(a), Literal::Text(b)) => Some(a.cmp(b)),
            (Literal::Timestamp(_), _) | (_, Literal::Timestamp(_)) => None,
            (a, b) => a.as_number()?.partial_cmp(&b.as_number()?),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Text(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(value: DateTime<Utc>) -> Self {
        Literal::Timestamp(value)
    }
}

/// Boolean expression tree over column comparisons.
///
/// The tree is independent of any query builder; the persistence layer
/// translates it into its own condition type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum Predicate<C> {
    Equals { column: C, value: Literal },
    /// Case-insensitive substring match.
    Contains { column: C, needle: String },
    GreaterEq { column: C, value: Literal },
    LessEq { column: C, value: Literal },
    And(Vec<Predicate<C>>),
    Or(Vec<Predicate<C>>),
}

/// A row the predicate can be evaluated against.
pub trait RowSource<C> {
    fn value(&self, column: &C) -> Option<Literal>;
}

impl<C> Predicate<C> {
    pub fn equals(column: C, value: impl Into<Literal>) -> Self {
        Predicate::Equals {
            column,
            value: value.into(),
        }
    }

    pub fn contains(column: C, needle: impl Into<String>) -> Self {
        Predicate::Contains {
            column,
            needle: needle.into(),
        }
    }

    pub fn greater_eq(column: C, value: impl Into<Literal>) -> Self {
        Predicate::GreaterEq {
            column,
            value: value.into(),
        }
    }

    pub fn less_eq(column: C, value: impl Into<Literal>) -> Self {
        Predicate::LessEq {
            column,
            value: value.into(),
        }
    }

    /// AND of the given predicates. `None` when empty, the sole member when
    /// there is only one.
    pub fn all(predicates: Vec<Predicate<C>>) -> Option<Self> {
        Self::group(predicates, Predicate::And)
    }

    /// OR of the given predicates, collapsed like [`Predicate::all`].
    pub fn any(predicates: Vec<Predicate<C>>) -> Option<Self> {
        Self::group(predicates, Predicate::Or)
    }

    fn group(
        mut predicates: Vec<Predicate<C>>,
        wrap: fn(Vec<Predicate<C>>) -> Predicate<C>,
    ) -> Option<Self> {
        match predicates.len() {
            0 => None,
            1 => predicates.pop(),
            _ => Some(wrap(predicates)),
        }
    }

    pub fn matches<R: RowSource<C>>(&self, row: &R) -> bool {
        match self {
            Predicate::Equals { column, value } => row
                .value(column)
                .and_then(|v| v.compare(value))
                .is_some_and(Ordering::is_eq),
            Predicate::Contains { column, needle } => row.value(column).is_some_and(|v| {
                v.to_text()
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            }),
            Predicate::GreaterEq { column, value } => row
                .value(column)
                .and_then(|v| v.compare(value))
                .is_some_and(Ordering::is_ge),
            Predicate::LessEq { column, value } => row
                .value(column)
                .and_then(|v| v.compare(value))
                .is_some_and(Ordering::is_le),
            Predicate::And(predicates) => predicates.iter().all(|p| p.matches(row)),
            Predicate::Or(predicates) => predicates.iter().any(|p| p.matches(row)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::TimeZone;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    enum Col {
        Name,
        Price,
        CreatedAt,
    }

    struct Row(HashMap<Col, Literal>);

    impl RowSource<Col> for Row {
        fn value(&self, column: &Col) -> Option<Literal> {
            self.0.get(column).cloned()
        }
    }

    fn named(name: &str) -> Row {
        Row(HashMap::from([(Col::Name, Literal::from(name))]))
    }

    #[test]
    fn test_group_collapses_single_member() {
        let single = Predicate::all(vec![Predicate::contains(Col::Name, "phone")]);
        assert_eq!(single, Some(Predicate::contains(Col::Name, "phone")));
        assert_eq!(Predicate::<Col>::any(vec![]), None);
    }

    #[test]
    fn test_multi_term_contains_requires_every_term() {
        let predicate = Predicate::And(vec![
            Predicate::contains(Col::Name, "blue"),
            Predicate::contains(Col::Name, "phone"),
        ]);

        assert!(predicate.matches(&named("Blue Corded Phone")));
        assert!(predicate.matches(&named("Blue Headphones")));
        assert!(!predicate.matches(&named("Red Phone")));
    }

    #[test]
    fn test_numeric_bounds_coerce_text() {
        let predicate = Predicate::And(vec![
            Predicate::greater_eq(Col::Price, 10.0),
            Predicate::less_eq(Col::Price, 50.0),
        ]);
        let row = |price: &str| Row(HashMap::from([(Col::Price, Literal::from(price))]));

        assert!(predicate.matches(&row("10.00")));
        assert!(predicate.matches(&row("49.99")));
        assert!(!predicate.matches(&row("50.01")));
        assert!(!predicate.matches(&row("n/a")));
    }

    #[test]
    fn test_timestamp_comparison_and_missing_column() {
        let day = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let predicate = Predicate::greater_eq(Col::CreatedAt, day);
        let row = Row(HashMap::from([(
            Col::CreatedAt,
            Literal::from(Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()),
        )]));

        assert!(predicate.matches(&row));
        assert!(!predicate.matches(&named("no timestamp")));
    }

    #[test]
    fn test_serializes_as_tagged_tree() {
        let predicate = Predicate::Or(vec![
            Predicate::equals(Col::Price, 5.0),
            Predicate::contains(Col::Name, "red"),
        ]);
        let json = serde_json::to_value(&predicate).unwrap();

        assert_eq!(json["op"], "or");
        assert_eq!(json["args"][0]["op"], "equals");
        assert_eq!(json["args"][1]["args"]["needle"], "red");

        let back: Predicate<Col> = serde_json::from_value(json).unwrap();
        assert_eq!(back, predicate);
    }
}
