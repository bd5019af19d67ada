use tracing::instrument;

use crate::domain::{
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    product::{
        entities::Product,
        ports::{ProductRepository, ProductService},
        value_objects::{DeleteProductInput, product_table_config},
    },
    product_category::ports::ProductCategoryRepository,
    table_query::{
        entities::TableQueryInput,
        services::{build_query_params, page_count},
        value_objects::TableQueryResult,
    },
    user::ports::UserRepository,
};

impl<P, U, CA, PC> ProductService for Service<P, U, CA, PC>
where
    P: ProductRepository,
    U: UserRepository,
    CA: CategoryRepository,
    PC: ProductCategoryRepository,
{
    #[instrument(skip(self, input), fields(page = input.page, limit = input.limit))]
    async fn get_table_products(
        &self,
        input: TableQueryInput,
    ) -> Result<TableQueryResult<Product>, CoreError> {
        let descriptor = build_query_params(&input, &product_table_config());
        let limit = descriptor.limit;

        let page = self.product_repository.fetch_products(descriptor).await?;

        Ok(TableQueryResult {
            data: page.rows,
            page_count: page_count(page.total, limit),
        })
    }

    #[instrument(skip(self), fields(product_id = input.product_id))]
    async fn delete_product(&self, input: DeleteProductInput) -> Result<(), CoreError> {
        self.product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.product_repository
            .delete_product(input.product_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        category::ports::MockCategoryRepository,
        product::{entities::ProductColumn, ports::MockProductRepository},
        product_category::ports::MockProductCategoryRepository,
        table_query::{
            entities::{FilterValue, OrderingEntry, SortDirection, SortSpec},
            predicate::Predicate,
            value_objects::TablePage,
        },
        user::ports::MockUserRepository,
    };

    fn product(id: i32, name: &str, price: i64) -> Product {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        Product {
            id,
            name: name.to_string(),
            description: None,
            sku: format!("SKU-{id}"),
            price: Decimal::new(price, 2),
            published: true,
            created_at,
            updated_at: created_at,
        }
    }

    fn service(
        products: MockProductRepository,
    ) -> Service<
        MockProductRepository,
        MockUserRepository,
        MockCategoryRepository,
        MockProductCategoryRepository,
    > {
        Service::new(
            products,
            MockUserRepository::new(),
            MockCategoryRepository::new(),
            MockProductCategoryRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_get_table_products_builds_descriptor_and_page_count() {
        let mut products = MockProductRepository::new();
        products
            .expect_fetch_products()
            .withf(|descriptor| {
                descriptor.predicate == Some(Predicate::contains(ProductColumn::Name, "widget"))
                    && descriptor.ordering
                        == vec![OrderingEntry {
                            column: ProductColumn::CreatedAt,
                            direction: SortDirection::Desc,
                        }]
                    && descriptor.limit == 10
                    && descriptor.offset == 0
            })
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(TablePage {
                        rows: vec![product(1, "Blue widget", 1999)],
                        total: 23,
                    })
                })
            });

        let input = TableQueryInput {
            page: 1,
            limit: 10,
            sorting: vec![SortSpec::desc("createdAt")],
            filters: BTreeMap::from([("name".to_string(), FilterValue::from("widget"))]),
        };

        let result = service(products).get_table_products(input).await.unwrap();

        assert_eq!(result.data.len(), 1);
        assert_eq!(result.page_count, 3);
    }

    #[tokio::test]
    async fn test_get_table_products_propagates_repository_errors() {
        let mut products = MockProductRepository::new();
        products
            .expect_fetch_products()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let result = service(products)
            .get_table_products(TableQueryInput::default())
            .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        products.expect_delete_product().never();

        let result = service(products)
            .delete_product(DeleteProductInput { product_id: 42 })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .withf(|id| *id == 7)
            .returning(|id| Box::pin(async move { Ok(Some(product(id, "Lamp", 500))) }));
        products
            .expect_delete_product()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let result = service(products)
            .delete_product(DeleteProductInput { product_id: 7 })
            .await;

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_multi_term_name_filter_against_products() {
        let input = TableQueryInput {
            filters: BTreeMap::from([("name".to_string(), FilterValue::from("blue phone"))]),
            ..Default::default()
        };
        let predicate = build_query_params(&input, &product_table_config())
            .predicate
            .unwrap();

        assert!(predicate.matches(&product(1, "Blue Corded Phone", 2500)));
        assert!(predicate.matches(&product(2, "Blue Headphones", 8900)));
        assert!(!predicate.matches(&product(3, "Red Phone", 2500)));
    }

    #[test]
    fn test_price_range_against_products() {
        let input = TableQueryInput {
            filters: BTreeMap::from([(
                "price".to_string(),
                [10_i64, 50].into_iter().collect::<FilterValue>(),
            )]),
            ..Default::default()
        };
        let predicate = build_query_params(&input, &product_table_config())
            .predicate
            .unwrap();

        assert!(predicate.matches(&product(1, "Mug", 1000)));
        assert!(predicate.matches(&product(2, "Teapot", 5000)));
        assert!(!predicate.matches(&product(3, "Kettle", 5001)));
    }
}
