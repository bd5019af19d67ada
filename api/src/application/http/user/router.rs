use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_table_users::{__path_get_table_users, get_table_users};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_table_users))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/users", state.args.server.root_path),
        get(get_table_users),
    )
}
