use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Recoverable validation outcomes of the booking operations. None of these
/// is fatal; callers translate them into user-facing messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    #[error("requested date is outside the booking window")]
    OutOfWindow,
    #[error("no lesson is offered at the requested date and time")]
    SlotNotOffered,
    #[error("the requested time slot is fully booked")]
    SlotFull,
    #[error("missing or invalid {0}")]
    MissingField(&'static str),
    #[error("availability start time must be before end time")]
    InvalidWindow,
    #[error("no booking with the given id")]
    NotFound,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            BookingError::SlotFull => StatusCode::CONFLICT,
            BookingError::NotFound => StatusCode::NOT_FOUND,
            BookingError::OutOfWindow
            | BookingError::SlotNotOffered
            | BookingError::MissingField(_)
            | BookingError::InvalidWindow => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
