use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::{Product, ProductColumn},
        value_objects::DeleteProductInput,
    },
    table_query::{
        entities::{QueryDescriptor, TableQueryInput},
        value_objects::{TablePage, TableQueryResult},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    fn get_table_products(
        &self,
        input: TableQueryInput,
    ) -> impl Future<Output = Result<TableQueryResult<Product>, CoreError>> + Send;

    fn delete_product(
        &self,
        input: DeleteProductInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Runs the page query and the count query for the same predicate.
    fn fetch_products(
        &self,
        descriptor: QueryDescriptor<ProductColumn>,
    ) -> impl Future<Output = Result<TablePage<Product>, CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: i32,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn delete_product(&self, product_id: i32)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
