//! Event domain models and parameters.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::server::model::ticket_category::CreateTicketCategoryParam;

/// Event organized by an organization and sold through its ticket categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    /// Unique, URL-safe identifier used by the public API.
    pub short_name: String,
    pub display_name: String,
    pub organization_id: i32,
    pub currency: String,
    /// Total number of seats across all categories.
    pub available_seats: i32,
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            short_name: entity.short_name,
            display_name: entity.display_name,
            organization_id: entity.organization_id,
            currency: entity.currency,
            available_seats: entity.available_seats,
            begin: entity.begin_ts,
            end: entity.end_ts,
        }
    }
}

/// A calendar date paired with a wall-clock time, interpreted as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeModification {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl DateTimeModification {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Splits an instant into its UTC date and time.
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self {
            date: instant.date_naive(),
            time: instant.time(),
        }
    }

    /// The instant this modification denotes in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(self.time))
    }
}

/// Parameters for creating an event together with its ticket categories.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub organization_id: i32,
    pub short_name: String,
    pub display_name: String,
    pub currency: String,
    pub available_seats: i32,
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub categories: Vec<CreateTicketCategoryParam>,
}
