//! Shared reservation flow.
//!
//! `test_basic_flow` walks through browse, reserve, cancel and confirm against the public
//! handlers. Each `ReservationFlow` implementation prepares the environment (`init`), builds
//! the event and the buyer (`create_context`) and adds its own checks once the flow is done
//! (`perform_additional_tests`).

mod authenticated_user;

use axum::{
    body::to_bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::TicketStatus;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

use crate::{
    model::{
        event::{CategoryQuery, TicketCategoryDto},
        reservation::{ConfirmReservationDto, ReservationDto, ReserveTicketsDto},
    },
    server::{
        controller::{event, reservation},
        data::ticket::TicketRepository,
        error::AppError,
        model::event::Event,
        state::AppState,
    },
};

/// Access code of the hidden category.
pub const URL_CODE_HIDDEN: &str = "HIDDEN";

/// Everything the flow needs to know about the prepared event and buyer.
#[derive(Debug, Clone)]
pub struct ReservationFlowContext {
    pub event: Event,
    /// Organizer owning the event.
    pub user_id: String,
    pub check_in_steward_id: Option<String>,
    pub api_key: Option<String>,
    pub public_username: String,
    pub public_user_id: i32,
    /// Whether the flow reserves as the signed-in public user instead of anonymously.
    pub check_authenticated: bool,
}

pub trait ReservationFlow {
    fn state(&self) -> &AppState;

    /// Prepares the environment before the context is built.
    async fn init(&mut self) -> Result<(), AppError>;

    /// Creates the event, its categories and the buyer.
    async fn create_context(&mut self) -> Result<ReservationFlowContext, AppError>;

    /// A fresh session nobody is signed in to.
    async fn anonymous_session(&mut self) -> Result<Session, AppError>;

    /// A fresh session signed in as the context's public user.
    async fn public_session(
        &mut self,
        context: &ReservationFlowContext,
    ) -> Result<Session, AppError>;

    /// Checks run after the flow completed.
    async fn perform_additional_tests(
        &mut self,
        context: &ReservationFlowContext,
    ) -> Result<(), AppError>;
}

/// Runs the purchase flow against the flow's event and finishes with its own checks.
pub async fn test_basic_flow<F: ReservationFlow>(flow: &mut F) -> Result<(), AppError> {
    flow.init().await?;
    let context = flow.create_context().await?;
    let state = flow.state().clone();
    let short_name = context.event.short_name.as_str();

    // Hidden categories only show up with their code
    let listed: Vec<TicketCategoryDto> =
        read_json(list_categories(&state, short_name, None).await).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "default");

    let listed: Vec<TicketCategoryDto> =
        read_json(list_categories(&state, short_name, Some(URL_CODE_HIDDEN)).await).await;
    assert_eq!(listed.len(), 2);
    let default_category = category_named(&listed, "default");
    let hidden_category = category_named(&listed, "hidden");
    assert!(hidden_category.access_restricted);

    let ticket_repo = TicketRepository::new(&state.db);
    let total_free = ticket_repo
        .count_by_status(context.event.id, TicketStatus::Free)
        .await?;

    // Restricted category cannot be reserved without its code
    let anonymous = flow.anonymous_session().await?;
    let response = reserve(&state, &anonymous, short_name, hidden_category.id, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        ticket_repo
            .count_by_status(context.event.id, TicketStatus::Free)
            .await?,
        total_free
    );

    // Anonymous purchase of a hidden ticket
    let response = reserve(
        &state,
        &anonymous,
        short_name,
        hidden_category.id,
        Some(URL_CODE_HIDDEN),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let hidden_reservation: ReservationDto = read_json(response).await;
    let response = confirm(&state, &anonymous, &hidden_reservation.id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let hidden_reservation: ReservationDto = read_json(response).await;
    assert_eq!(hidden_reservation.status, "COMPLETE");

    let session = if context.check_authenticated {
        flow.public_session(&context).await?
    } else {
        anonymous.clone()
    };

    // Reserve and cancel
    let response = reserve(&state, &session, short_name, default_category.id, None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let cancelled: ReservationDto = read_json(response).await;
    assert_eq!(cancelled.tickets.len(), 1);

    let response = cancel(&state, &session, &cancelled.id).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(&state, &cancelled.id).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        ticket_repo
            .count_by_status(context.event.id, TicketStatus::Free)
            .await?,
        total_free - 1
    );

    // Reserve, read back and confirm
    let response = reserve(&state, &session, short_name, default_category.id, None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let reserved: ReservationDto = read_json(response).await;

    let response = get(&state, &reserved.id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let pending: ReservationDto = read_json(response).await;
    assert_eq!(pending.status, "PENDING");
    assert_eq!(pending.event_short_name, context.event.short_name);
    assert_eq!(pending.total_price_cts, default_category.price_cts);
    assert_eq!(pending.tickets.len(), 1);
    assert_eq!(pending.tickets[0].status, "PENDING");

    let response = confirm(&state, &session, &reserved.id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let completed: ReservationDto = read_json(response).await;
    assert_eq!(completed.status, "COMPLETE");
    assert_eq!(completed.email_address.as_deref(), Some("email@example.org"));
    assert!(completed.confirmation_ts.is_some());
    assert!(completed.tickets.iter().all(|ticket| ticket.status == "ACQUIRED"
        && ticket.full_name.as_deref() == Some("First Last")));

    flow.perform_additional_tests(&context).await
}

/// Reads a JSON response body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn category_named<'a>(categories: &'a [TicketCategoryDto], name: &str) -> &'a TicketCategoryDto {
    categories
        .iter()
        .find(|category| category.name == name)
        .unwrap_or_else(|| panic!("category '{}' not listed", name))
}

async fn list_categories(state: &AppState, short_name: &str, code: Option<&str>) -> Response {
    event::get_ticket_categories(
        State(state.clone()),
        Path(short_name.to_string()),
        Query(CategoryQuery {
            code: code.map(str::to_string),
        }),
    )
    .await
    .into_response()
}

pub async fn reserve(
    state: &AppState,
    session: &Session,
    short_name: &str,
    category_id: i32,
    code: Option<&str>,
) -> Response {
    event::reserve_tickets(
        State(state.clone()),
        Path(short_name.to_string()),
        session.clone(),
        Json(ReserveTicketsDto {
            category_id,
            quantity: 1,
            code: code.map(str::to_string),
        }),
    )
    .await
    .into_response()
}

async fn get(state: &AppState, id: &str) -> Response {
    reservation::get_reservation(State(state.clone()), Path(id.to_string()))
        .await
        .into_response()
}

pub async fn cancel(state: &AppState, session: &Session, id: &str) -> Response {
    reservation::cancel_reservation(State(state.clone()), Path(id.to_string()), session.clone())
        .await
        .into_response()
}

pub async fn confirm(state: &AppState, session: &Session, id: &str) -> Response {
    reservation::confirm_reservation(
        State(state.clone()),
        Path(id.to_string()),
        session.clone(),
        Json(ConfirmReservationDto {
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            email_address: "email@example.org".to_string(),
        }),
    )
    .await
    .into_response()
}
