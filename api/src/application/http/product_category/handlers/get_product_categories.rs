use axum::extract::{Path, State};
use backoffice_core::domain::product_category::{
    entities::ProductCategory, ports::ProductCategoryService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductCategoriesResponse {
    pub data: Vec<ProductCategory>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product-category",
    summary = "Get product categories",
    description = "Lists the categories attached to a product, with the category name.",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = GetProductCategoriesResponse)
    ),
)]
pub async fn get_product_categories(
    Path(product_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<GetProductCategoriesResponse>, ApiError> {
    let categories = state
        .service
        .get_product_categories(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductCategoriesResponse { data: categories }))
}
