use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        event::{get_ticket_categories, reserve_tickets},
        reservation::{cancel_reservation, confirm_reservation, get_reservation},
        user::get_user_reservations,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v2/public/event/{short_name}/ticket-categories",
            get(get_ticket_categories),
        )
        .route(
            "/api/v2/public/event/{short_name}/reserve-tickets",
            post(reserve_tickets),
        )
        .route(
            "/api/v2/public/reservation/{id}",
            get(get_reservation).delete(cancel_reservation),
        )
        .route(
            "/api/v2/public/reservation/{id}/confirm",
            post(confirm_reservation),
        )
        .route("/api/v2/public/user/reservations", get(get_user_reservations))
}
