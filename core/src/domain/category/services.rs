use tracing::instrument;

use crate::domain::{
    category::{
        entities::SelectOption,
        ports::{CategoryRepository, CategoryService},
    },
    common::{entities::app_errors::CoreError, services::Service},
    product::ports::ProductRepository,
    product_category::ports::ProductCategoryRepository,
    user::ports::UserRepository,
};

impl<P, U, CA, PC> CategoryService for Service<P, U, CA, PC>
where
    P: ProductRepository,
    U: UserRepository,
    CA: CategoryRepository,
    PC: ProductCategoryRepository,
{
    #[instrument(skip(self))]
    async fn get_select_categories(&self) -> Result<Vec<SelectOption>, CoreError> {
        self.category_repository.fetch_select_options().await
    }
}
