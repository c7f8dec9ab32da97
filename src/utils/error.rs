use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified API error type for HTTP boundary.
///
/// An `Invalid` verdict is not an error; these cover requests that could not
/// be checked at all.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

// Convert anyhow::Error to ApiError
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Internal error: {:?}", err);
        ApiError::Internal(err.to_string())
    }
}

// Body extraction failures: oversized bodies keep their 413, everything else is a 400
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

// Query strings that do not fit the expected shape, e.g. a repeated key
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn extract_error_json(response: Response) -> serde_json::Value {
        let body = response.into_body();
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let error = ApiError::BadRequest("Invalid request!".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = extract_error_json(response).await;
        assert_eq!(json["error"], "bad_request");
        assert_eq!(json["message"], "Bad request: Invalid request!");
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let error = ApiError::NotFound("No route for /nope".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = extract_error_json(response).await;
        assert_eq!(json["error"], "not_found");
    }

    #[tokio::test]
    async fn test_payload_too_large_response() {
        let error = ApiError::PayloadTooLarge("body exceeds limit".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let json = extract_error_json(response).await;
        assert_eq!(json["error"], "payload_too_large");
    }

    #[tokio::test]
    async fn test_method_not_allowed_response() {
        let error = ApiError::MethodNotAllowed("GET /api/check/email".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let json = extract_error_json(response).await;
        assert_eq!(json["error"], "method_not_allowed");
        assert_eq!(json["message"], "Method not allowed: GET /api/check/email");
    }

    #[tokio::test]
    async fn test_internal_error_response() {
        let error = ApiError::Internal("listener closed".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = extract_error_json(response).await;
        assert_eq!(json["error"], "internal_error");
    }

    #[test]
    fn test_from_anyhow_error() {
        let anyhow_err = anyhow::anyhow!("Something went wrong");
        let api_error: ApiError = anyhow_err.into();

        match api_error {
            ApiError::Internal(msg) => assert!(msg.contains("Something went wrong")),
            _ => panic!("Expected Internal error"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::NotFound("Resource not found".to_string());
        assert_eq!(error.to_string(), "Not found: Resource not found");

        let error = ApiError::BadRequest("Invalid request!".to_string());
        assert_eq!(error.to_string(), "Bad request: Invalid request!");
    }
}
