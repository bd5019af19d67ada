use axum::extract::State;
use backoffice_core::domain::user::{entities::User, ports::UserService};
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
pub struct GetTableUsersResponse {
    pub data: Vec<User>,
    pub page_count: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "Get users table",
    description = "Returns one page of users, sortable by createdAt and updatedAt, filterable on id, name and createdAt.",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1"),
        ("limit" = Option<u64>, Query, description = "Rows per page (1 to 100), defaults to 10"),
        ("sort" = Option<String>, Query, description = "Comma separated columns, `-` prefix for descending"),
    ),
    responses(
        (status = 200, body = GetTableUsersResponse),
        (status = 400, description = "Invalid pagination parameters"),
    ),
)]
pub async fn get_table_users(
    State(state): State<AppState>,
    TableQueryExtractor(input): TableQueryExtractor,
) -> Result<Response<GetTableUsersResponse>, ApiError> {
    let result = state
        .service
        .get_table_users(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTableUsersResponse {
        data: result.data,
        page_count: result.page_count,
    }))
}
