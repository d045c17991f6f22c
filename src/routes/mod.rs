// Route exports
pub mod addresses;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;

pub use addresses::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(addresses::configure);
}

/// Extractor failure rendered with the standard [`ErrorResponse`] body
#[derive(Debug)]
pub struct ApiError(pub ErrorResponse);

impl ApiError {
    pub fn bad_request(error: &str, message: String) -> Self {
        Self(ErrorResponse {
            error: error.to_string(),
            message,
            status_code: 400,
        })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for ApiError {}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::bad_request("invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::bad_request("invalid_query", format!("Invalid query: {}", err)).into()
}

/// Handle path parameter errors, e.g. a non-numeric address id
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ApiError::bad_request("invalid_path", format!("Invalid path parameter: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_api_error_uses_embedded_status() {
        let err = ApiError::bad_request("invalid_query", "Invalid query: missing field".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid_query: Invalid query: missing field");
    }
}
