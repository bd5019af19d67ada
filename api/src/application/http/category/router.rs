use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_select_categories::{__path_get_select_categories, get_select_categories};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_select_categories))]
pub struct CategoryApiDoc;

pub fn category_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/categories/select", state.args.server.root_path),
        get(get_select_categories),
    )
}
