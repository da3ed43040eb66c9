use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use tower_sessions::Session;

use crate::{
    model::reservation::ConfirmReservationDto,
    server::{
        error::AppError, middleware::session::AuthSession,
        model::reservation::ConfirmReservationParam, service::reservation::ReservationService,
        state::AppState,
    },
};

/// GET /api/v2/public/reservation/{id} - Get a reservation with its tickets
///
/// The reservation ID is an unguessable UUID and acts as the credential.
///
/// # Returns
/// - `200 OK`: JSON ReservationDto
/// - `404 Not Found`: No reservation with that ID
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(
        &state.db,
        state.clock.as_ref(),
        state.reservation_timeout,
    )
    .get(&id)
    .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// DELETE /api/v2/public/reservation/{id} - Cancel a pending reservation
///
/// A reservation made by a signed-in user can only be cancelled from that user's session.
///
/// # Returns
/// - `204 No Content`: Reservation cancelled and its tickets released
/// - `403 Forbidden`: Reservation belongs to another user
/// - `404 Not Found`: No reservation with that ID
/// - `409 Conflict`: Reservation is already complete
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthSession::new(&session).get_user_id().await?;

    ReservationService::new(&state.db, state.clock.as_ref(), state.reservation_timeout)
        .cancel(&id, requester)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v2/public/reservation/{id}/confirm - Complete a pending reservation
///
/// A reservation made by a signed-in user can only be confirmed from that user's session.
///
/// # Returns
/// - `200 OK`: JSON ReservationDto of the completed reservation
/// - `400 Bad Request`: Missing contact data
/// - `403 Forbidden`: Reservation belongs to another user
/// - `404 Not Found`: No reservation with that ID
/// - `409 Conflict`: Reservation is already complete
/// - `410 Gone`: Reservation expired
pub async fn confirm_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    session: Session,
    Json(payload): Json<ConfirmReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.first_name.trim().is_empty()
        || payload.last_name.trim().is_empty()
        || !payload.email_address.contains('@')
    {
        return Err(AppError::BadRequest(
            "First name, last name and a valid email address are required".to_string(),
        ));
    }

    let requester = AuthSession::new(&session).get_user_id().await?;

    let reservation = ReservationService::new(
        &state.db,
        state.clock.as_ref(),
        state.reservation_timeout,
    )
    .confirm(
        &id,
        requester,
        ConfirmReservationParam {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email_address: payload.email_address,
        },
    )
    .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}
