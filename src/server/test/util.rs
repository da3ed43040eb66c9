use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::server::{
    data::organization::OrganizationRepository,
    error::AppError,
    model::{
        event::{CreateEventParam, Event},
        organization::CreateOrganizationParam,
        ticket_category::CreateTicketCategoryParam,
        user::CreateOrganizerParam,
    },
    service::{event::EventService, user::UserService},
    state::AppState,
    util::clock::{Clock, FixedClock},
};

/// Seats of every event created by `init_event`.
pub const AVAILABLE_SEATS: i32 = 20;

/// Instant the test clock starts at.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 3, 15, 10, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Builds the application state over a test database with a pinned clock.
pub fn test_state(db: &DatabaseConnection, clock: Arc<FixedClock>) -> AppState {
    AppState::new(db.clone(), clock, Duration::minutes(25))
}

/// Creates an organization, an organizer linked to it and an event with the categories.
///
/// The event starts two days after the state's current time and lasts two days.
///
/// # Returns
/// - `Ok((Event, String))` - The event and the organizer's username
pub async fn init_event(
    state: &AppState,
    categories: Vec<CreateTicketCategoryParam>,
) -> Result<(Event, String), AppError> {
    let suffix = Uuid::new_v4().simple().to_string();

    let organization = OrganizationRepository::new(&state.db)
        .create(CreateOrganizationParam {
            name: format!("org-{}", suffix),
            description: "org".to_string(),
            email: "email@example.org".to_string(),
        })
        .await?;

    let organizer = UserService::new(&state.db)
        .insert_user(CreateOrganizerParam {
            organization_id: organization.id,
            username: format!("organizer-{}", suffix),
            first_name: "Organizer".to_string(),
            last_name: "Test".to_string(),
            email_address: "organizer@example.org".to_string(),
        })
        .await?;

    let begin = state.clock.now() + Duration::days(2);
    let event = EventService::new(&state.db)
        .create_event(CreateEventParam {
            organization_id: organization.id,
            short_name: format!("event-{}", suffix),
            display_name: "Test event".to_string(),
            currency: "CHF".to_string(),
            available_seats: AVAILABLE_SEATS,
            begin,
            end: begin + Duration::days(2),
            categories,
        })
        .await?;

    Ok((event, organizer.username))
}
