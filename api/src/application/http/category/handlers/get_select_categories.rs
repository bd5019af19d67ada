use axum::extract::State;
use backoffice_core::domain::category::{entities::SelectOption, ports::CategoryService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/select",
    tag = "category",
    summary = "Get category options",
    description = "Lists every category as a value/label pair, ordered by name.",
    responses(
        (status = 200, body = Vec<SelectOption>)
    ),
)]
pub async fn get_select_categories(
    State(state): State<AppState>,
) -> Result<Response<Vec<SelectOption>>, ApiError> {
    let options = state
        .service
        .get_select_categories()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(options))
}
