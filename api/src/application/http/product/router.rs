use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    delete_product::{__path_delete_product, delete_product},
    get_table_products::{__path_get_table_products, get_table_products},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_table_products, delete_product))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/products", state.args.server.root_path),
            get(get_table_products),
        )
        .route(
            &format!("{}/products/{{product_id}}", state.args.server.root_path),
            delete(delete_product),
        )
}
