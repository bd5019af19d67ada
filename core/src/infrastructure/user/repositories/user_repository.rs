use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        table_query::{entities::QueryDescriptor, value_objects::TablePage},
        user::{
            entities::{User, UserColumn},
            ports::UserRepository,
        },
    },
    entity::user::Entity,
    infrastructure::table_query::condition::TableQueryExt,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn fetch_users(
        &self,
        descriptor: QueryDescriptor<UserColumn>,
    ) -> Result<TablePage<User>, CoreError> {
        let rows_query = Entity::find().apply_table_query(&descriptor);
        let count_query = Entity::find().apply_predicate(descriptor.predicate.as_ref());

        let (models, total) =
            futures::try_join!(rows_query.all(&self.db), count_query.count(&self.db)).map_err(
                |e| {
                    error!("Failed to fetch users: {}", e);
                    CoreError::InternalServerError
                },
            )?;

        Ok(TablePage {
            rows: models.iter().map(User::from).collect(),
            total,
        })
    }
}
