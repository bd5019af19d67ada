use std::collections::BTreeMap;

use backoffice_core::domain::table_query::entities::{
    FilterScalar, FilterValue, SortSpec, TableQueryInput,
};
use thiserror::Error;
use validator::Validate;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParamsError {
    #[error("{field} must be an integer, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },
}

/// Table query parsed from the query string, before validation.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct TableQueryParams {
    #[validate(range(min = 1, message = "page must be >= 1"))]
    pub page: i64,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,

    pub sorting: Vec<SortSpec>,

    pub filters: BTreeMap<String, FilterValue>,
}

impl Default for TableQueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sorting: Vec::new(),
            filters: BTreeMap::new(),
        }
    }
}

/// Parse sort string like "field1,-field2,field3"
pub fn parse_sort(s: &str) -> Vec<SortSpec> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.strip_prefix('-') {
            Some(field) => SortSpec::desc(field),
            None => SortSpec::asc(part),
        })
        .collect()
}

/// Splits `filter[field]` / `filter[field][]` keys. The flag tells whether
/// the value always belongs to a sequence.
fn filter_key(key: &str) -> Option<(&str, bool)> {
    let rest = key.strip_prefix("filter[")?;
    let end_bracket = rest.find(']')?;
    let field = &rest[..end_bracket];
    if field.is_empty() {
        return None;
    }

    match &rest[end_bracket + 1..] {
        "" => Some((field, false)),
        "[]" => Some((field, true)),
        _ => None,
    }
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, QueryParamsError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| QueryParamsError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

impl TableQueryParams {
    /// Parse from decoded query string pairs
    /// Handles formats like:
    /// - page=2, limit=20
    /// - sort=field or sort=-field,other
    /// - filter[field]=value
    /// - filter[field]=a&filter[field]=b or filter[field][]=a (sequence)
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, QueryParamsError> {
        let mut params = Self::default();
        let mut raw_filters: BTreeMap<String, (Vec<String>, bool)> = BTreeMap::new();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => params.page = parse_integer("page", value)?,
                "limit" => params.limit = parse_integer("limit", value)?,
                "sort" => params.sorting = parse_sort(value),
                _ => {
                    if let Some((field, sequence)) = filter_key(key) {
                        let entry = raw_filters.entry(field.to_string()).or_default();
                        entry.0.push(value.clone());
                        entry.1 |= sequence;
                    }
                }
            }
        }

        params.filters = raw_filters
            .into_iter()
            .map(|(field, (mut values, sequence))| {
                let value = if sequence || values.len() > 1 {
                    values.into_iter().collect()
                } else {
                    FilterValue::One(FilterScalar::Text(values.pop().unwrap_or_default()))
                };
                (field, value)
            })
            .collect();

        Ok(params)
    }
}

impl From<TableQueryParams> for TableQueryInput {
    fn from(params: TableQueryParams) -> Self {
        Self {
            page: params.page.max(1) as u64,
            limit: params.limit.max(1) as u64,
            sorting: params.sorting,
            filters: params.filters,
        }
    }
}
