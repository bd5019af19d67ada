use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::debug;

use super::{
    entities::{
        ColumnKind, FilterScalar, FilterValue, OrderingEntry, QueryDescriptor, SortDirection,
        SortSpec, TableQueryConfig, TableQueryInput,
    },
    predicate::Predicate,
};

type PredicateBuilder<C> = fn(C, &FilterValue) -> Option<Predicate<C>>;

impl ColumnKind {
    fn predicate_builder<C: Copy>(self) -> PredicateBuilder<C> {
        match self {
            ColumnKind::Number => number_predicate::<C>,
            ColumnKind::Date | ColumnKind::DateRange => date_predicate::<C>,
            ColumnKind::Range => range_predicate::<C>,
            ColumnKind::Text => text_predicate::<C>,
        }
    }
}

/// Maps the requested sort list onto sortable columns, keeping input order.
/// Unknown column ids are dropped.
pub fn build_sorting_clause<C: Copy>(
    sorting: &[SortSpec],
    config: &TableQueryConfig<C>,
) -> Vec<OrderingEntry<C>> {
    sorting
        .iter()
        .filter_map(|sort| {
            let column = config.sort_column(&sort.id)?;
            let direction = if sort.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            Some(OrderingEntry { column, direction })
        })
        .collect()
}

/// Builds one predicate per filtered column. Values that cannot be turned
/// into a predicate are skipped.
pub fn build_filter_conditions<C: Copy>(
    filters: &BTreeMap<String, FilterValue>,
    config: &TableQueryConfig<C>,
) -> Vec<Predicate<C>> {
    filters
        .iter()
        .filter_map(|(key, value)| {
            let filter_column = config.filter_column(key)?;
            if value.is_blank() {
                return None;
            }

            let build: PredicateBuilder<C> = filter_column.kind.predicate_builder();
            let predicate = build(filter_column.column, value);
            if predicate.is_none() {
                debug!(column = %key, kind = ?filter_column.kind, "filter value produced no predicate");
            }
            predicate
        })
        .collect()
}

/// Largest limit or offset a SQL backend accepts (signed 64-bit).
pub const MAX_ROW_BOUND: u64 = i64::MAX as u64;

/// Limit and offset are clamped to [`MAX_ROW_BOUND`].
pub fn build_query_params<C: Copy>(
    input: &TableQueryInput,
    config: &TableQueryConfig<C>,
) -> QueryDescriptor<C> {
    let limit = input.limit.min(MAX_ROW_BOUND);
    let offset = input
        .page
        .saturating_sub(1)
        .saturating_mul(limit)
        .min(MAX_ROW_BOUND);

    QueryDescriptor {
        predicate: Predicate::all(build_filter_conditions(&input.filters, config)),
        ordering: build_sorting_clause(&input.sorting, config),
        limit,
        offset,
    }
}

/// Number of pages needed to show `total` rows, `limit` rows per page.
pub fn page_count(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

fn number_predicate<C: Copy>(column: C, value: &FilterValue) -> Option<Predicate<C>> {
    match value {
        FilterValue::One(scalar) => scalar
            .as_number()
            .map(|n| Predicate::equals(column, n)),
        FilterValue::Many(values) => Predicate::any(
            values
                .iter()
                .filter_map(FilterScalar::as_number)
                .map(|n| Predicate::equals(column, n))
                .collect(),
        ),
    }
}

// Single dates cover the whole UTC day; multiple dates only lower-bound.
fn date_predicate<C: Copy>(column: C, value: &FilterValue) -> Option<Predicate<C>> {
    match value {
        FilterValue::One(scalar) => {
            let date = parse_date(scalar)?.date_naive();
            let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
            let end = Utc.from_utc_datetime(&date.and_hms_milli_opt(23, 59, 59, 999)?);
            Predicate::all(vec![
                Predicate::greater_eq(column, start),
                Predicate::less_eq(column, end),
            ])
        }
        FilterValue::Many(values) => Predicate::any(
            values
                .iter()
                .filter_map(parse_date)
                .map(|date| Predicate::greater_eq(column, date))
                .collect(),
        ),
    }
}

// A lone range value is a lower bound, never an exact match.
fn range_predicate<C: Copy>(column: C, value: &FilterValue) -> Option<Predicate<C>> {
    match value {
        FilterValue::Many(values) if values.len() == 2 => {
            let min = values[0].as_number()?;
            let max = values[1].as_number()?;
            Predicate::all(vec![
                Predicate::greater_eq(column, min),
                Predicate::less_eq(column, max),
            ])
        }
        FilterValue::Many(values) if values.len() == 1 => values[0]
            .as_number()
            .map(|min| Predicate::greater_eq(column, min)),
        FilterValue::Many(_) => None,
        FilterValue::One(scalar) => scalar
            .as_number()
            .map(|min| Predicate::greater_eq(column, min)),
    }
}

fn text_predicate<C: Copy>(column: C, value: &FilterValue) -> Option<Predicate<C>> {
    match value {
        FilterValue::Many(values) => Predicate::any(
            values
                .iter()
                .map(|v| Predicate::contains(column, v.as_text()))
                .collect(),
        ),
        FilterValue::One(scalar) => Predicate::all(
            scalar
                .as_text()
                .split_whitespace()
                .map(|term| Predicate::contains(column, term))
                .collect(),
        ),
    }
}

/// Numbers and all-digit strings are epoch milliseconds. Other strings may be
/// RFC 3339, RFC 2822, ISO-like (`2024-01-15`, `2024-01-15 10:30`), slashed
/// (`2024/01/15`, `01/15/2024`) or written-out (`Jan 15 2024`,
/// `Mon Jan 15 2024 10:30:00`); zone-less values are read as UTC.
/// `None` when nothing matches.
pub fn parse_date(value: &FilterScalar) -> Option<DateTime<Utc>> {
    match value {
        FilterScalar::Number(ms) if ms.is_finite() => {
            Utc.timestamp_millis_opt(ms.trunc() as i64).single()
        }
        FilterScalar::Number(_) => None,
        FilterScalar::Text(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            Utc.timestamp_millis_opt(s.parse().ok()?).single()
        }
        FilterScalar::Text(s) => parse_date_str(s.trim()),
    }
}

const NAIVE_DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%a %B %d %Y",
];

const NAIVE_DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%B %d %Y %H:%M:%S",
    "%a %B %d %Y %H:%M:%S",
];

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(date) = NAIVE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
    {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|dt| Utc.from_utc_datetime(&dt))
}
