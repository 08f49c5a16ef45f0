//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! JSON endpoint fails the same way. HTML pages pick their status with
//! [`status_for`] and render their own view instead of the JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use schedulesync_core::errors::ScheduleError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use schedulesync_api::middleware::error_handling::AppError;
/// use schedulesync_core::errors::ScheduleError;
///
/// async fn handler(title: String) -> Result<Json<String>, AppError> {
///     if title.trim().is_empty() {
///         return Err(AppError(ScheduleError::Validation("Event title must not be empty".into())));
///     }
///     Ok(Json(title))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

/// HTTP status for a domain error.
pub fn status_for(err: &ScheduleError) -> StatusCode {
    match err {
        ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
        ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
        ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Wraps an eyre error in [`ScheduleError::Database`].
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}

/// Maps a ScheduleError straight to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
