use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty
            | ProductError::PriceNotPositive
            | ProductError::PriceTooPrecise
            | ProductError::PriceTooLarge
            | ProductError::StockNegative => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::NameConflict => (StatusCode::CONFLICT, "Conflict"),
            ProductError::Internal(source) => {
                tracing::debug!(error = ?source, "product operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        // Display of ProductError is already a code, never store text.
        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
