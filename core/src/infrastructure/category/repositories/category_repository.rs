use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        category::{entities::SelectOption, ports::CategoryRepository},
        common::entities::app_errors::CoreError,
    },
    entity::category::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn fetch_select_options(&self) -> Result<Vec<SelectOption>, CoreError> {
        let categories = Entity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get categories: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(categories
            .into_iter()
            .map(|category| SelectOption {
                value: category.id.to_string(),
                label: category.name,
            })
            .collect())
    }
}
