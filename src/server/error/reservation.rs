use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::ReservationStatus;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Violations of the reservation rules.
///
/// Unlike internal errors, the message of every variant is safe to return to the client.
#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Event '{0}' not found")]
    EventNotFound(String),

    #[error("Ticket category {0} not found for this event")]
    CategoryNotFound(i32),

    #[error("Ticket category {0} is not on sale")]
    CategoryNotOnSale(i32),

    #[error("Ticket category {0} requires a valid access code")]
    AccessCodeRequired(i32),

    #[error("At least one ticket must be requested, got {0}")]
    InvalidQuantity(i32),

    #[error("Requested {requested} tickets of category {category_id} but only {available} are available")]
    NotEnoughTickets {
        category_id: i32,
        requested: i32,
        available: i32,
    },

    #[error("Reservation '{0}' not found")]
    ReservationNotFound(String),

    #[error("Reservation '{0}' belongs to another user")]
    NotOwner(String),

    #[error("Reservation '{0}' has expired")]
    ReservationExpired(String),

    #[error("Reservation '{id}' is {status:?}")]
    InvalidStatus {
        id: String,
        status: ReservationStatus,
    },
}

/// Converts reservation errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Category not on sale, missing access code, invalid quantity
/// - 403 Forbidden - Reservation of another user
/// - 404 Not Found - Unknown event, category or reservation
/// - 409 Conflict - Not enough tickets, reservation in the wrong status
/// - 410 Gone - Reservation expired
impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::CategoryNotOnSale(_) | Self::AccessCodeRequired(_) | Self::InvalidQuantity(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotOwner(_) => StatusCode::FORBIDDEN,
            Self::EventNotFound(_) | Self::CategoryNotFound(_) | Self::ReservationNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::NotEnoughTickets { .. } | Self::InvalidStatus { .. } => StatusCode::CONFLICT,
            Self::ReservationExpired(_) => StatusCode::GONE,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
