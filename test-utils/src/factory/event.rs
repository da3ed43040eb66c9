//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, organization.id)
///     .available_seats(50)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::event::Model,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values from fixture.
    ///
    /// The short name gets a unique counter suffix since short names are unique.
    pub fn new(db: &'a DatabaseConnection, organization_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::event::entity_builder()
            .organization_id(organization_id)
            .short_name(format!("event-{}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the short name.
    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.entity.short_name = short_name.into();
        self
    }

    /// Sets the number of seats.
    pub fn available_seats(mut self, available_seats: i32) -> Self {
        self.entity.available_seats = available_seats;
        self
    }

    /// Sets the begin and end of the event.
    pub fn window(mut self, begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.entity.begin_ts = begin;
        self.entity.end_ts = end;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            short_name: ActiveValue::Set(self.entity.short_name),
            display_name: ActiveValue::Set(self.entity.display_name),
            organization_id: ActiveValue::Set(self.entity.organization_id),
            currency: ActiveValue::Set(self.entity.currency),
            available_seats: ActiveValue::Set(self.entity.available_seats),
            begin_ts: ActiveValue::Set(self.entity.begin_ts),
            end_ts: ActiveValue::Set(self.entity.end_ts),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the given organization.
pub async fn create_event(
    db: &DatabaseConnection,
    organization_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, organization_id).build().await
}
