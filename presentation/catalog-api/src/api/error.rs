use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body of every non-2xx response.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind: ValidationError, NotFound, Conflict or InternalError
    pub error: String,
    /// Code-style identifier, e.g. `product.not_found`
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }

    pub fn validation(message: &str) -> Json<Self> {
        Json(Self::new("ValidationError", message))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Converts a request parsing failure (malformed JSON, missing field, wrong
/// type) into the structured body instead of poem's plain-text default.
pub fn bad_request_body(err: &poem::Error) -> Json<ErrorResponse> {
    tracing::debug!(error = %err, "rejected malformed request");
    ErrorResponse::validation("request.malformed")
}
