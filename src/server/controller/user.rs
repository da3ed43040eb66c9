use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::reservation::ReservationService,
    state::AppState,
};

/// GET /api/v2/public/user/reservations - Reservation history of the signed-in public user
///
/// # Authentication
/// Requires public login to be enabled and an enabled public user in the session
///
/// # Returns
/// - `200 OK`: JSON array of ReservationSummaryDto
/// - `401 Unauthorized`: No user in session
/// - `403 Forbidden`: Public login disabled or session user is not a public user
pub async fn get_user_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard
        .require(&[Permission::PublicLogin, Permission::PublicUser])
        .await?;

    let reservations = ReservationService::new(
        &state.db,
        state.clock.as_ref(),
        state.reservation_timeout,
    )
    .get_user_reservations(user.id)
    .await?;

    let reservations_dto: Vec<_> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}
