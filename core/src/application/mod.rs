use crate::{
    domain::common::{BackofficeConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        category::PostgresCategoryRepository,
        db::postgres::{Postgres, PostgresConfig},
        product::PostgresProductRepository,
        product_category::PostgresProductCategoryRepository,
        user::PostgresUserRepository,
    },
};

pub type BackofficeService = Service<
    PostgresProductRepository,
    PostgresUserRepository,
    PostgresCategoryRepository,
    PostgresProductCategoryRepository,
>;

pub async fn create_service(config: BackofficeConfig) -> Result<BackofficeService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await
    .map_err(|e| CoreError::DatabaseConnection(e.to_string()))?;

    Ok(Service::new(
        PostgresProductRepository::new(postgres.get_db()),
        PostgresUserRepository::new(postgres.get_db()),
        PostgresCategoryRepository::new(postgres.get_db()),
        PostgresProductCategoryRepository::new(postgres.get_db()),
    ))
}
