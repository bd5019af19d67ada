use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rows of one page plus the number of rows matching the predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<T> {
    pub rows: Vec<T>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TableQueryResult<T> {
    pub data: Vec<T>,
    pub page_count: u64,
}
