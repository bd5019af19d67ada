use axum::extract::{Path, State};
use backoffice_core::domain::product::{ports::ProductService, value_objects::DeleteProductInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProductResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Delete product",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = DeleteProductResponse),
        (status = 404, description = "Product not found"),
    ),
)]
pub async fn delete_product(
    Path(product_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProductResponse>, ApiError> {
    state
        .service
        .delete_product(DeleteProductInput { product_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProductResponse { success: true }))
}
