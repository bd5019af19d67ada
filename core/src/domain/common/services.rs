use crate::domain::{
    category::ports::CategoryRepository, product::ports::ProductRepository,
    product_category::ports::ProductCategoryRepository, user::ports::UserRepository,
};

/// Entry point of the domain: every service trait is implemented on this
/// struct, generic over the repositories it talks to.
#[derive(Clone)]
pub struct Service<P, U, CA, PC>
where
    P: ProductRepository,
    U: UserRepository,
    CA: CategoryRepository,
    PC: ProductCategoryRepository,
{
    pub(crate) product_repository: P,
    pub(crate) user_repository: U,
    pub(crate) category_repository: CA,
    pub(crate) product_category_repository: PC,
}

impl<P, U, CA, PC> Service<P, U, CA, PC>
where
    P: ProductRepository,
    U: UserRepository,
    CA: CategoryRepository,
    PC: ProductCategoryRepository,
{
    pub fn new(
        product_repository: P,
        user_repository: U,
        category_repository: CA,
        product_category_repository: PC,
    ) -> Self {
        Self {
            product_repository,
            user_repository,
            category_repository,
            product_category_repository,
        }
    }
}
