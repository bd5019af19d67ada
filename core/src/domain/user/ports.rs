use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    table_query::{
        entities::{QueryDescriptor, TableQueryInput},
        value_objects::{TablePage, TableQueryResult},
    },
    user::entities::{User, UserColumn},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_table_users(
        &self,
        input: TableQueryInput,
    ) -> impl Future<Output = Result<TableQueryResult<User>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn fetch_users(
        &self,
        descriptor: QueryDescriptor<UserColumn>,
    ) -> impl Future<Output = Result<TablePage<User>, CoreError>> + Send;
}
