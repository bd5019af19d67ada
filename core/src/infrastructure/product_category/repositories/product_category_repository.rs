use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product_category::{
            entities::ProductCategory,
            ports::ProductCategoryRepository,
            value_objects::{CreateProductCategoryInput, DeleteProductCategoryInput},
        },
    },
    entity::{
        category,
        product_category::{ActiveModel, Column, Entity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProductCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::Conflict,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => CoreError::NotFound,
        _ => {
            error!("Failed to create product category: {}", e);
            CoreError::InternalServerError
        }
    }
}

impl ProductCategoryRepository for PostgresProductCategoryRepository {
    async fn fetch_by_product(&self, product_id: i32) -> Result<Vec<ProductCategory>, CoreError> {
        let rows = Entity::find()
            .filter(Column::ProductId.eq(product_id))
            .find_also_related(category::Entity)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product categories: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, category)| category.map(|category| (link, category).into()))
            .collect())
    }

    async fn create(&self, input: CreateProductCategoryInput) -> Result<i32, CoreError> {
        let link = ActiveModel {
            product_id: Set(input.product_id),
            category_id: Set(input.category_id),
            ..Default::default()
        };

        let result = Entity::insert(link)
            .exec(&self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(result.last_insert_id)
    }

    async fn exists(&self, input: DeleteProductCategoryInput) -> Result<bool, CoreError> {
        let count = Entity::find()
            .filter(Column::Id.eq(input.id))
            .filter(Column::ProductId.eq(input.product_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn delete(&self, input: DeleteProductCategoryInput) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(input.id))
            .filter(Column::ProductId.eq(input.product_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
