use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::predicate::Predicate;

/// Filter semantics assigned to a logical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKind {
    #[default]
    Text,
    Date,
    DateRange,
    Range,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub id: String,
    pub desc: bool,
}

impl SortSpec {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }
}

/// A single filter operand as sent by the table UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterScalar {
    Number(f64),
    Text(String),
}

impl FilterScalar {
    /// Numeric reading of the operand. Blank or non-finite values yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterScalar::Number(n) if n.is_finite() => Some(*n),
            FilterScalar::Number(_) => None,
            FilterScalar::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Textual reading of the operand, numbers without a trailing `.0`.
    pub fn as_text(&self) -> String {
        match self {
            FilterScalar::Text(s) => s.clone(),
            FilterScalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            FilterScalar::Number(n) => n.to_string(),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            FilterScalar::Text(s) => s.is_empty(),
            FilterScalar::Number(n) => *n == 0.0 || n.is_nan(),
        }
    }
}

impl From<&str> for FilterScalar {
    fn from(value: &str) -> Self {
        FilterScalar::Text(value.to_string())
    }
}

impl From<String> for FilterScalar {
    fn from(value: String) -> Self {
        FilterScalar::Text(value)
    }
}

impl From<f64> for FilterScalar {
    fn from(value: f64) -> Self {
        FilterScalar::Number(value)
    }
}

impl From<i64> for FilterScalar {
    fn from(value: i64) -> Self {
        FilterScalar::Number(value as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Many(Vec<FilterScalar>),
    One(FilterScalar),
}

impl FilterValue {
    /// Empty strings, zero and NaN carry no filter. Sequences always pass
    /// through; each kind decides what an empty sequence means.
    pub fn is_blank(&self) -> bool {
        match self {
            FilterValue::One(scalar) => scalar.is_blank(),
            FilterValue::Many(_) => false,
        }
    }
}

impl From<FilterScalar> for FilterValue {
    fn from(value: FilterScalar) -> Self {
        FilterValue::One(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::One(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::One(value.into())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::One(value.into())
    }
}

impl<T: Into<FilterScalar>> FromIterator<T> for FilterValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FilterValue::Many(iter.into_iter().map(Into::into).collect())
    }
}

/// Validated table request: 1-based page, page size, sort list and filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQueryInput {
    pub page: u64,
    pub limit: u64,
    #[serde(default)]
    pub sorting: Vec<SortSpec>,
    #[serde(default)]
    pub filters: BTreeMap<String, FilterValue>,
}

impl Default for TableQueryInput {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sorting: Vec::new(),
            filters: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterColumn<C> {
    pub column: C,
    pub kind: ColumnKind,
}

/// Per-entity mapping from logical column ids to executor column handles.
#[derive(Debug, Clone)]
pub struct TableQueryConfig<C> {
    sort_columns: HashMap<String, C>,
    filter_columns: HashMap<String, FilterColumn<C>>,
}

impl<C> Default for TableQueryConfig<C> {
    fn default() -> Self {
        Self {
            sort_columns: HashMap::new(),
            filter_columns: HashMap::new(),
        }
    }
}

impl<C: Copy> TableQueryConfig<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sortable(mut self, id: impl Into<String>, column: C) -> Self {
        self.sort_columns.insert(id.into(), column);
        self
    }

    /// Registers a filter column with the default text semantics.
    pub fn filterable(self, id: impl Into<String>, column: C) -> Self {
        self.filterable_as(id, column, ColumnKind::Text)
    }

    pub fn filterable_as(mut self, id: impl Into<String>, column: C, kind: ColumnKind) -> Self {
        self.filter_columns
            .insert(id.into(), FilterColumn { column, kind });
        self
    }

    pub fn sort_column(&self, id: &str) -> Option<C> {
        self.sort_columns.get(id).copied()
    }

    pub fn filter_column(&self, id: &str) -> Option<FilterColumn<C>> {
        self.filter_columns.get(id).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingEntry<C> {
    pub column: C,
    pub direction: SortDirection,
}

/// Backend-agnostic query built once per table request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor<C> {
    pub predicate: Option<Predicate<C>>,
    pub ordering: Vec<OrderingEntry<C>>,
    pub limit: u64,
    pub offset: u64,
}
