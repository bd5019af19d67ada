use tracing::instrument;

use crate::domain::{
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    product::ports::ProductRepository,
    product_category::ports::ProductCategoryRepository,
    table_query::{
        entities::TableQueryInput,
        services::{build_query_params, page_count},
        value_objects::TableQueryResult,
    },
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::user_table_config,
    },
};

impl<P, U, CA, PC> UserService for Service<P, U, CA, PC>
where
    P: ProductRepository,
    U: UserRepository,
    CA: CategoryRepository,
    PC: ProductCategoryRepository,
{
    #[instrument(skip(self, input), fields(page = input.page, limit = input.limit))]
    async fn get_table_users(
        &self,
        input: TableQueryInput,
    ) -> Result<TableQueryResult<User>, CoreError> {
        let descriptor = build_query_params(&input, &user_table_config());
        let limit = descriptor.limit;

        let page = self.user_repository.fetch_users(descriptor).await?;

        Ok(TableQueryResult {
            data: page.rows,
            page_count: page_count(page.total, limit),
        })
    }
}
