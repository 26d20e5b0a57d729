use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use crate::models::ErrorResponse;

pub const VALIDATION_MESSAGE: &str = "Year and branch are required fields";
pub const INTERNAL_MESSAGE: &str = "Failed to process your request. Please try again.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed. Use POST to submit match requests.";

/// Errors surfaced by the match endpoint
///
/// Only the fixed message of each variant reaches the client. The inner
/// cause of `InvalidPayload` and `Internal` is for server logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required field")]
    MissingRequiredFields,

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn client_message(&self) -> &'static str {
        match self {
            ApiError::MissingRequiredFields => VALIDATION_MESSAGE,
            ApiError::InvalidPayload(_) | ApiError::Internal(_) => INTERNAL_MESSAGE,
            ApiError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE,
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingRequiredFields => StatusCode::BAD_REQUEST,
            ApiError::InvalidPayload(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.client_message().to_string(),
        })
    }
}

/// Handle JSON payload errors
///
/// A body that cannot be read as a match request is treated like any other
/// processing failure: logged here, generic message to the client.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::error!("Error processing match request on {}: {}", req.path(), err);
    ApiError::InvalidPayload(err.to_string()).into()
}
