use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{event::CategoryQuery, reservation::ReserveTicketsDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::ReserveTicketsParam,
        service::{event::EventService, reservation::ReservationService},
        state::AppState,
    },
};

/// GET /api/v2/public/event/{short_name}/ticket-categories - List public ticket categories
///
/// Hidden categories are only listed when the `code` query parameter matches their
/// access code.
///
/// # Returns
/// - `200 OK`: JSON array of TicketCategoryDto
/// - `404 Not Found`: No event with that short name
pub async fn get_ticket_categories(
    State(state): State<AppState>,
    Path(short_name): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let categories = EventService::new(&state.db)
        .get_public_categories(&short_name, query.code.as_deref())
        .await?;

    let categories_dto: Vec<_> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(categories_dto)))
}

/// POST /api/v2/public/event/{short_name}/reserve-tickets - Reserve tickets of a category
///
/// Open to anonymous visitors. When the session belongs to a public user, the
/// reservation is attached to that user and shows up in their reservation history.
///
/// # Returns
/// - `201 Created`: JSON ReservationDto of the pending reservation
/// - `400 Bad Request`: Invalid quantity, category not on sale or access code missing
/// - `404 Not Found`: Unknown event or category
/// - `409 Conflict`: Not enough free tickets
pub async fn reserve_tickets(
    State(state): State<AppState>,
    Path(short_name): Path<String>,
    session: Session,
    Json(payload): Json<ReserveTicketsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).optional().await?;
    let user_id = user.filter(|user| user.is_public()).map(|user| user.id);

    let reservation = ReservationService::new(
        &state.db,
        state.clock.as_ref(),
        state.reservation_timeout,
    )
    .reserve(ReserveTicketsParam {
        event_short_name: short_name,
        category_id: payload.category_id,
        quantity: payload.quantity,
        code: payload.code,
        user_id,
    })
    .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}
