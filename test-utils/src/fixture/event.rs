//! Event fixtures for creating in-memory test data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::event;

/// Default test event short name.
pub const DEFAULT_SHORT_NAME: &str = "test-event";

/// Default test event display name.
pub const DEFAULT_DISPLAY_NAME: &str = "Test Event";

/// Default currency for test events.
pub const DEFAULT_CURRENCY: &str = "CHF";

/// Default number of seats of a test event.
pub const DEFAULT_AVAILABLE_SEATS: i32 = 20;

/// Fixed instant the default event begins at.
pub fn default_begin() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 1, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates an event entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - short_name: `"test-event"`
/// - organization_id: `1`
/// - currency: `"CHF"`
/// - available_seats: `20`
/// - begin_ts: 2030-06-01 18:00 UTC, end_ts: two hours later
pub fn entity() -> event::Model {
    entity_builder().build()
}

/// Creates an event entity builder for customization.
pub fn entity_builder() -> EventEntityBuilder {
    EventEntityBuilder::default()
}

/// Builder for creating customized event entity models.
pub struct EventEntityBuilder {
    id: i32,
    short_name: String,
    organization_id: i32,
    available_seats: i32,
    begin_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
}

impl Default for EventEntityBuilder {
    fn default() -> Self {
        let begin = default_begin();
        Self {
            id: 1,
            short_name: DEFAULT_SHORT_NAME.to_string(),
            organization_id: 1,
            available_seats: DEFAULT_AVAILABLE_SEATS,
            begin_ts: begin,
            end_ts: begin + Duration::hours(2),
        }
    }
}

impl EventEntityBuilder {
    /// Sets the event ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the unique short name.
    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Sets the owning organization.
    pub fn organization_id(mut self, organization_id: i32) -> Self {
        self.organization_id = organization_id;
        self
    }

    /// Sets the number of seats.
    pub fn available_seats(mut self, available_seats: i32) -> Self {
        self.available_seats = available_seats;
        self
    }

    /// Sets the begin and end of the event.
    pub fn window(mut self, begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.begin_ts = begin;
        self.end_ts = end;
        self
    }

    /// Builds and returns the event entity model.
    pub fn build(self) -> event::Model {
        event::Model {
            id: self.id,
            short_name: self.short_name,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            organization_id: self.organization_id,
            currency: DEFAULT_CURRENCY.to_string(),
            available_seats: self.available_seats,
            begin_ts: self.begin_ts,
            end_ts: self.end_ts,
        }
    }
}
