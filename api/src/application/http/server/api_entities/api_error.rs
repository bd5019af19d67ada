use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use backoffice_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::application::http::query_params::QueryParamsError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Conflict => ApiError::Conflict(error.to_string()),
            CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
            CoreError::DatabaseConnection(_) => ApiError::ServiceUnavailable(error.to_string()),
        }
    }
}

impl From<QueryParamsError> for ApiError {
    fn from(error: QueryParamsError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        ApiError::BadRequest(message)
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        value.validate()?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::application::http::server::api_entities::response::Response as ApiResponse;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(range(min = 1, message = "id must be positive"))]
        id: i32,
    }

    async fn create(
        ValidateJson(payload): ValidateJson<Payload>,
    ) -> Result<ApiResponse<i32>, ApiError> {
        Ok(ApiResponse::Created(payload.id))
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/items", post(create))).unwrap()
    }

    #[tokio::test]
    async fn test_validate_json_accepts_valid_body() {
        let response = server().post("/items").json(&json!({ "id": 4 })).await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<i32>(), 4);
    }

    #[tokio::test]
    async fn test_validate_json_rejects_rule_violation() {
        let response = server().post("/items").json(&json!({ "id": 0 })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<serde_json::Value>()["message"],
            "id must be positive"
        );
    }

    #[tokio::test]
    async fn test_validate_json_rejects_malformed_body() {
        let response = server().post("/items").json(&json!({ "id": "four" })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        assert_eq!(
            ApiError::from(CoreError::Conflict).status_and_code().0,
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_core_errors_map_to_http_statuses() {
        assert_eq!(
            ApiError::from(CoreError::NotFound).status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::InternalServerError)
                .status_and_code()
                .0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(CoreError::DatabaseConnection("refused".to_string()))
                .status_and_code()
                .0,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::BadRequest("limit must be between 1 and 100".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
