use std::future::Future;

use crate::domain::{category::entities::SelectOption, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait CategoryService: Send + Sync {
    fn get_select_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<SelectOption>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name.
    fn fetch_select_options(
        &self,
    ) -> impl Future<Output = Result<Vec<SelectOption>, CoreError>> + Send;
}
