use axum::extract::{Path, State};
use backoffice_core::domain::product_category::{
    ports::ProductCategoryService, value_objects::CreateProductCategoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product_category::validators::CreateProductCategoryValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProductCategoryResponse {
    pub id: i32,
}

#[utoipa::path(
    post,
    path = "",
    tag = "product-category",
    summary = "Attach category to product",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    request_body = CreateProductCategoryValidator,
    responses(
        (status = 201, body = CreateProductCategoryResponse),
        (status = 404, description = "Product or category not found"),
        (status = 409, description = "Category already attached"),
    ),
)]
pub async fn create_product_category(
    Path(product_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProductCategoryValidator>,
) -> Result<Response<CreateProductCategoryResponse>, ApiError> {
    let id = state
        .service
        .create_product_category(CreateProductCategoryInput {
            product_id,
            category_id: payload.category_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateProductCategoryResponse { id }))
}
