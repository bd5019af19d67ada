use axum::extract::State;
use backoffice_core::domain::product::{entities::Product, ports::ProductService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::TableQueryExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTableProductsResponse {
    pub data: Vec<Product>,
    pub page_count: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "Get products table",
    description = "Returns one page of products. Supports `page`, `limit`, `sort=price,-createdAt` and `filter[column]=value` on name, sku, price, createdAt and updatedAt.",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1"),
        ("limit" = Option<u64>, Query, description = "Rows per page (1 to 100), defaults to 10"),
        ("sort" = Option<String>, Query, description = "Comma separated columns, `-` prefix for descending"),
    ),
    responses(
        (status = 200, body = GetTableProductsResponse),
        (status = 400, description = "Invalid pagination parameters"),
    ),
)]
pub async fn get_table_products(
    State(state): State<AppState>,
    TableQueryExtractor(input): TableQueryExtractor,
) -> Result<Response<GetTableProductsResponse>, ApiError> {
    let result = state
        .service
        .get_table_products(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTableProductsResponse {
        data: result.data,
        page_count: result.page_count,
    }))
}
