use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_category::{
        entities::ProductCategory,
        value_objects::{CreateProductCategoryInput, DeleteProductCategoryInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductCategoryService: Send + Sync {
    fn get_product_categories(
        &self,
        product_id: i32,
    ) -> impl Future<Output = Result<Vec<ProductCategory>, CoreError>> + Send;

    /// Returns the id of the new link.
    fn create_product_category(
        &self,
        input: CreateProductCategoryInput,
    ) -> impl Future<Output = Result<i32, CoreError>> + Send;

    fn delete_product_category(
        &self,
        input: DeleteProductCategoryInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductCategoryRepository: Send + Sync {
    fn fetch_by_product(
        &self,
        product_id: i32,
    ) -> impl Future<Output = Result<Vec<ProductCategory>, CoreError>> + Send;

    /// `Conflict` when the pair already exists, `NotFound` when the category
    /// does not.
    fn create(
        &self,
        input: CreateProductCategoryInput,
    ) -> impl Future<Output = Result<i32, CoreError>> + Send;

    fn exists(
        &self,
        input: DeleteProductCategoryInput,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn delete(
        &self,
        input: DeleteProductCategoryInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
