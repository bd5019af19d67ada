//! Translation of table query descriptors into sea-orm queries.
//!
//! Domain column handles reach the database through `From<C>` conversions
//! into the entity's `Column` enum; nothing above this module knows about
//! sea-orm columns.

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, IntoSimpleExpr, Order, QueryFilter, QueryOrder,
    QuerySelect, Select, Value,
    sea_query::{Expr, Func},
};

use crate::domain::table_query::{
    entities::{QueryDescriptor, SortDirection},
    predicate::{Literal, Predicate},
};

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Text(s) => Value::from(s.clone()),
            Literal::Number(n) => Value::from(*n),
            // columns are `timestamp` holding UTC wall time
            Literal::Timestamp(t) => Value::from(t.naive_utc()),
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

pub fn predicate_to_condition<C, Col>(predicate: &Predicate<C>) -> Condition
where
    C: Copy,
    Col: ColumnTrait + From<C>,
{
    match predicate {
        Predicate::Equals { column, value } => {
            Condition::all().add(Col::from(*column).eq(Value::from(value)))
        }
        Predicate::Contains { column, needle } => Condition::all().add(
            Expr::expr(Func::lower(Col::from(*column).into_simple_expr()))
                .like(like_contains(&needle.to_lowercase())),
        ),
        Predicate::GreaterEq { column, value } => {
            Condition::all().add(Col::from(*column).gte(Value::from(value)))
        }
        Predicate::LessEq { column, value } => {
            Condition::all().add(Col::from(*column).lte(Value::from(value)))
        }
        Predicate::And(predicates) => predicates.iter().fold(Condition::all(), |cond, p| {
            cond.add(predicate_to_condition::<C, Col>(p))
        }),
        Predicate::Or(predicates) => predicates.iter().fold(Condition::any(), |cond, p| {
            cond.add(predicate_to_condition::<C, Col>(p))
        }),
    }
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}

pub trait TableQueryExt<C>: Sized {
    /// Filters by the predicate only, for count queries.
    fn apply_predicate(self, predicate: Option<&Predicate<C>>) -> Self;

    /// Applies predicate, ordering, limit and offset.
    fn apply_table_query(self, descriptor: &QueryDescriptor<C>) -> Self;
}

impl<E, C> TableQueryExt<C> for Select<E>
where
    E: EntityTrait,
    E::Column: From<C>,
    C: Copy,
{
    fn apply_predicate(self, predicate: Option<&Predicate<C>>) -> Self {
        match predicate {
            Some(predicate) => self.filter(predicate_to_condition::<C, E::Column>(predicate)),
            None => self,
        }
    }

    fn apply_table_query(self, descriptor: &QueryDescriptor<C>) -> Self {
        descriptor
            .ordering
            .iter()
            .fold(
                self.apply_predicate(descriptor.predicate.as_ref()),
                |query, entry| {
                    query.order_by(E::Column::from(entry.column), Order::from(entry.direction))
                },
            )
            .limit(descriptor.limit)
            .offset(descriptor.offset)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::{
        domain::{
            product::{entities::ProductColumn, value_objects::product_table_config},
            table_query::{
                entities::{OrderingEntry, SortSpec, TableQueryInput},
                services::build_query_params,
            },
        },
        entity::product::Entity,
    };

    fn sql(descriptor: &QueryDescriptor<ProductColumn>) -> String {
        Entity::find()
            .apply_table_query(descriptor)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_like_escape() {
        assert_eq!(like_contains("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn test_contains_is_case_insensitive_like() {
        let descriptor = build_query_params(
            &TableQueryInput {
                page: 3,
                limit: 10,
                sorting: vec![SortSpec::desc("createdAt")],
                filters: [("name".to_string(), "Widget".into())].into(),
            },
            &product_table_config(),
        );
        let sql = sql(&descriptor);

        assert!(sql.contains(r#"LOWER("product"."name") LIKE '%widget%'"#), "{sql}");
        assert!(sql.contains(r#"ORDER BY "product"."created_at" DESC"#), "{sql}");
        assert!(sql.contains("LIMIT 10 OFFSET 20"), "{sql}");
    }

    #[test]
    fn test_nested_groups_render_and_or() {
        let descriptor = QueryDescriptor {
            predicate: Some(Predicate::And(vec![
                Predicate::Or(vec![
                    Predicate::contains(ProductColumn::Sku, "ab"),
                    Predicate::contains(ProductColumn::Sku, "cd"),
                ]),
                Predicate::greater_eq(ProductColumn::Price, 10.0),
                Predicate::less_eq(ProductColumn::Price, 50.0),
            ])),
            ordering: vec![OrderingEntry {
                column: ProductColumn::Price,
                direction: SortDirection::Asc,
            }],
            limit: 5,
            offset: 0,
        };
        let sql = sql(&descriptor);

        assert!(sql.contains(" OR "), "{sql}");
        assert!(sql.contains(r#""product"."price" >="#), "{sql}");
        assert!(sql.contains(r#""product"."price" <="#), "{sql}");
        assert!(sql.contains(r#"ORDER BY "product"."price" ASC"#), "{sql}");
    }

    #[test]
    fn test_huge_page_renders_signed_offset() {
        let descriptor = build_query_params(
            &TableQueryInput {
                page: i64::MAX as u64,
                limit: 100,
                ..Default::default()
            },
            &product_table_config(),
        );
        let statement = Entity::find()
            .apply_table_query(&descriptor)
            .build(DbBackend::Postgres);
        let values = statement.values.map(|values| values.0).unwrap_or_default();

        assert!(values.iter().all(|value| match value {
            Value::BigUnsigned(Some(n)) => i64::try_from(*n).is_ok(),
            _ => true,
        }));
        assert!(sql(&descriptor).contains(&format!("OFFSET {}", i64::MAX)));
    }

    #[test]
    fn test_no_predicate_means_no_where_clause() {
        let descriptor =
            build_query_params(&TableQueryInput::default(), &product_table_config());

        assert!(!sql(&descriptor).contains("WHERE"));
    }
}
