use tracing::instrument;

use crate::domain::{
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    product::ports::ProductRepository,
    product_category::{
        entities::ProductCategory,
        ports::{ProductCategoryRepository, ProductCategoryService},
        value_objects::{CreateProductCategoryInput, DeleteProductCategoryInput},
    },
    user::ports::UserRepository,
};

impl<P, U, CA, PC> ProductCategoryService for Service<P, U, CA, PC>
where
    P: ProductRepository,
    U: UserRepository,
    CA: CategoryRepository,
    PC: ProductCategoryRepository,
{
    #[instrument(skip(self))]
    async fn get_product_categories(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductCategory>, CoreError> {
        self.product_category_repository
            .fetch_by_product(product_id)
            .await
    }

    #[instrument(skip(self), fields(product_id = input.product_id, category_id = input.category_id))]
    async fn create_product_category(
        &self,
        input: CreateProductCategoryInput,
    ) -> Result<i32, CoreError> {
        self.product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.product_category_repository.create(input).await
    }

    #[instrument(skip(self), fields(id = input.id, product_id = input.product_id))]
    async fn delete_product_category(
        &self,
        input: DeleteProductCategoryInput,
    ) -> Result<(), CoreError> {
        if !self.product_category_repository.exists(input).await? {
            return Err(CoreError::NotFound);
        }

        self.product_category_repository.delete(input).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        category::ports::MockCategoryRepository,
        product::{entities::Product, ports::MockProductRepository},
        product_category::ports::MockProductCategoryRepository,
        user::ports::MockUserRepository,
    };

    type TestService = Service<
        MockProductRepository,
        MockUserRepository,
        MockCategoryRepository,
        MockProductCategoryRepository,
    >;

    fn service(
        products: MockProductRepository,
        links: MockProductCategoryRepository,
    ) -> TestService {
        Service::new(
            products,
            MockUserRepository::new(),
            MockCategoryRepository::new(),
            links,
        )
    }

    fn product(id: i32) -> Product {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        Product {
            id,
            name: "Desk lamp".to_string(),
            description: None,
            sku: "LAMP-1".to_string(),
            price: Decimal::new(2500, 2),
            published: true,
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_get_product_categories_lists_links_of_product() {
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let mut links = MockProductCategoryRepository::new();
        links
            .expect_fetch_by_product()
            .withf(|product_id| *product_id == 3)
            .times(1)
            .returning(move |product_id| {
                Box::pin(async move {
                    Ok(vec![ProductCategory {
                        id: 11,
                        category_id: 2,
                        product_id,
                        name: "Lighting".to_string(),
                        created_at: at,
                        updated_at: at,
                    }])
                })
            });

        let categories = service(MockProductRepository::new(), links)
            .get_product_categories(3)
            .await
            .unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Lighting");
        assert_eq!(categories[0].product_id, 3);
    }

    #[tokio::test]
    async fn test_create_for_missing_product_is_not_found() {
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let mut links = MockProductCategoryRepository::new();
        links.expect_create().never();

        let result = service(products, links)
            .create_product_category(CreateProductCategoryInput {
                product_id: 9,
                category_id: 2,
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_create_for_existing_product_returns_link_id() {
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .withf(|id| *id == 4)
            .returning(|id| Box::pin(async move { Ok(Some(product(id))) }));
        let mut links = MockProductCategoryRepository::new();
        links
            .expect_create()
            .withf(|input| input.product_id == 4 && input.category_id == 2)
            .times(1)
            .returning(|_| Box::pin(async { Ok(21) }));

        let result = service(products, links)
            .create_product_category(CreateProductCategoryInput {
                product_id: 4,
                category_id: 2,
            })
            .await;

        assert_eq!(result, Ok(21));
    }

    #[tokio::test]
    async fn test_create_duplicate_link_is_conflict() {
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(product(id))) }));
        let mut links = MockProductCategoryRepository::new();
        links
            .expect_create()
            .returning(|_| Box::pin(async { Err(CoreError::Conflict) }));

        let result = service(products, links)
            .create_product_category(CreateProductCategoryInput {
                product_id: 4,
                category_id: 2,
            })
            .await;

        assert_eq!(result, Err(CoreError::Conflict));
    }

    #[tokio::test]
    async fn test_delete_link_of_other_product_is_not_found() {
        let mut links = MockProductCategoryRepository::new();
        links
            .expect_exists()
            .withf(|input| input.id == 11 && input.product_id == 5)
            .returning(|_| Box::pin(async { Ok(false) }));
        links.expect_delete().never();

        let result = service(MockProductRepository::new(), links)
            .delete_product_category(DeleteProductCategoryInput {
                id: 11,
                product_id: 5,
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_existing_link() {
        let mut links = MockProductCategoryRepository::new();
        links
            .expect_exists()
            .returning(|_| Box::pin(async { Ok(true) }));
        links
            .expect_delete()
            .withf(|input| input.id == 11 && input.product_id == 3)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let result = service(MockProductRepository::new(), links)
            .delete_product_category(DeleteProductCategoryInput {
                id: 11,
                product_id: 3,
            })
            .await;

        assert_eq!(result, Ok(()));
    }
}
