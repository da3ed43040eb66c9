use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::TicketAccessType;
use sea_orm::DatabaseConnection;
use test_utils::factory;

use crate::server::{
    error::AppError,
    model::{
        event::{CreateEventParam, DateTimeModification, Event},
        ticket_category::CreateTicketCategoryParam,
    },
    service::event::EventService,
};


const HIDDEN_CODE: &str = "SECRET";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 3, 15, 10, 30, 0).unwrap()
}

fn category(name: &str, max_tickets: i32) -> CreateTicketCategoryParam {
    CreateTicketCategoryParam {
        name: name.to_string(),
        access_type: TicketAccessType::Inherit,
        max_tickets,
        inception: DateTimeModification::from_utc(now() - Duration::days(1)),
        expiration: DateTimeModification::from_utc(now() + Duration::days(1)),
        price_cts: 1000,
        hidden: false,
        access_restricted: false,
        code: None,
    }
}

fn hidden_category(name: &str, max_tickets: i32) -> CreateTicketCategoryParam {
    CreateTicketCategoryParam {
        price_cts: 100,
        hidden: true,
        access_restricted: true,
        code: Some(HIDDEN_CODE.to_string()),
        ..category(name, max_tickets)
    }
}

fn event_param(
    organization_id: i32,
    categories: Vec<CreateTicketCategoryParam>,
) -> CreateEventParam {
    CreateEventParam {
        organization_id,
        short_name: "event".to_string(),
        display_name: "Event".to_string(),
        currency: "CHF".to_string(),
        available_seats: 20,
        begin: now() + Duration::days(2),
        end: now() + Duration::days(3),
        categories,
    }
}

/// Creates an event with a visible category of 20 seats and a hidden one of 2 seats.
async fn create_event(db: &DatabaseConnection) -> Result<Event, AppError> {
    let organization = factory::create_organization(db).await?;

    EventService::new(db)
        .create_event(event_param(
            organization.id,
            vec![category("default", 20), hidden_category("hidden", 2)],
        ))
        .await
}
