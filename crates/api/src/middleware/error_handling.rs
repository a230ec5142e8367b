//! # Error Handling Middleware
//!
//! Maps [`BookingError`] values to HTTP status codes and `{"error": ...}`
//! JSON bodies so every handler reports failures the same way.
//!
//! Unresolvable bookings are not errors and never reach this module; only
//! store failures and malformed requests do.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booking_core::errors::BookingError;
use serde_json::json;
use tracing::error;

/// Wraps a [`BookingError`] so handlers can return it with `?`.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use booking_api::middleware::error_handling::AppError;
/// use booking_core::errors::BookingError;
///
/// async fn handler(slug: String) -> Result<Json<String>, AppError> {
///     if slug.is_empty() {
///         return Err(AppError(BookingError::Validation("slug is empty".to_string())));
///     }
///     Ok(Json(slug))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Store failures reported as bare `eyre::Report` values count as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

/// Maps a [`BookingError`] straight to a response.
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
