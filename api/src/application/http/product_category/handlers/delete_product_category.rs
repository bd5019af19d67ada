use axum::extract::{Path, State};
use backoffice_core::domain::product_category::{
    ports::ProductCategoryService, value_objects::DeleteProductCategoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProductCategoryResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "product-category",
    summary = "Detach category from product",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
        ("id" = i32, Path, description = "Product category link ID"),
    ),
    responses(
        (status = 200, body = DeleteProductCategoryResponse),
        (status = 404, description = "Link not found for this product"),
    ),
)]
pub async fn delete_product_category(
    Path((product_id, id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProductCategoryResponse>, ApiError> {
    state
        .service
        .delete_product_category(DeleteProductCategoryInput { id, product_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProductCategoryResponse { success: true }))
}
