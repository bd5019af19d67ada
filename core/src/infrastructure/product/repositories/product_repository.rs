use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{
            entities::{Product, ProductColumn},
            ports::ProductRepository,
        },
        table_query::{entities::QueryDescriptor, value_objects::TablePage},
    },
    entity::product::Entity,
    infrastructure::table_query::condition::TableQueryExt,
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn fetch_products(
        &self,
        descriptor: QueryDescriptor<ProductColumn>,
    ) -> Result<TablePage<Product>, CoreError> {
        let rows_query = Entity::find().apply_table_query(&descriptor);
        let count_query = Entity::find().apply_predicate(descriptor.predicate.as_ref());

        let (models, total) =
            futures::try_join!(rows_query.all(&self.db), count_query.count(&self.db)).map_err(
                |e| {
                    error!("Failed to fetch products: {}", e);
                    CoreError::InternalServerError
                },
            )?;

        Ok(TablePage {
            rows: models.iter().map(Product::from).collect(),
            total,
        })
    }

    async fn get_by_id(&self, product_id: i32) -> Result<Option<Product>, CoreError> {
        let model = Entity::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Product::from))
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), CoreError> {
        Entity::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
