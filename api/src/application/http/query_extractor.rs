use axum::{extract::FromRequestParts, http::request::Parts};
use backoffice_core::domain::table_query::entities::TableQueryInput;
use validator::Validate;

use super::{query_params::TableQueryParams, server::api_entities::api_error::ApiError};

/// Extractor for table queries: pagination, sorting and column filters.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     TableQueryExtractor(input): TableQueryExtractor,
/// ) -> Result<Response<Rows>, ApiError> {
///     // input.page, input.limit, input.sorting, input.filters
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TableQueryExtractor(pub TableQueryInput);

impl<S> FromRequestParts<S> for TableQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {e}")))?;

        let params = TableQueryParams::from_query_pairs(&pairs)?;
        params.validate()?;

        Ok(TableQueryExtractor(params.into()))
    }
}
