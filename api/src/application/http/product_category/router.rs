use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    create_product_category::{__path_create_product_category, create_product_category},
    delete_product_category::{__path_delete_product_category, delete_product_category},
    get_product_categories::{__path_get_product_categories, get_product_categories},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_product_categories,
    create_product_category,
    delete_product_category
))]
pub struct ProductCategoryApiDoc;

pub fn product_category_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/products/{{product_id}}/categories",
                state.args.server.root_path
            ),
            get(get_product_categories).post(create_product_category),
        )
        .route(
            &format!(
                "{}/products/{{product_id}}/categories/{{id}}",
                state.args.server.root_path
            ),
            delete(delete_product_category),
        )
}
