//! Ticket category factory for creating test ticket category entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ticket categories with customizable fields.
///
/// Default values are sourced from the ticket_category fixture.
///
/// # Example
///
/// ```rust,ignore
/// let category = TicketCategoryFactory::new(&db, event.id)
///     .name("hidden")
///     .max_tickets(2)
///     .hidden(true)
///     .build()
///     .await?;
/// ```
pub struct TicketCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::ticket_category::Model,
}

impl<'a> TicketCategoryFactory<'a> {
    /// Creates a new TicketCategoryFactory for the given event.
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::ticket_category::entity_builder()
            .event_id(event_id)
            .name(format!("Category {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the number of tickets.
    pub fn max_tickets(mut self, max_tickets: i32) -> Self {
        self.entity.max_tickets = max_tickets;
        self
    }

    /// Sets the sale window.
    pub fn sale_window(mut self, inception: DateTime<Utc>, expiration: DateTime<Utc>) -> Self {
        self.entity.inception = inception;
        self.entity.expiration = expiration;
        self
    }

    /// Sets the price in cents.
    pub fn price_cts(mut self, price_cts: i32) -> Self {
        self.entity.price_cts = price_cts;
        self
    }

    /// Sets whether the category is hidden.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.entity.hidden = hidden;
        self
    }

    /// Sets whether the category requires its access code.
    pub fn access_restricted(mut self, access_restricted: bool) -> Self {
        self.entity.access_restricted = access_restricted;
        self
    }

    /// Sets the access code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.entity.code = Some(code.into());
        self
    }

    /// Builds and inserts the ticket category entity into the database.
    ///
    /// Does not create tickets; use `factory::ticket::create_tickets` for that.
    pub async fn build(self) -> Result<entity::ticket_category::Model, DbErr> {
        entity::ticket_category::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.entity.event_id),
            name: ActiveValue::Set(self.entity.name),
            access_type: ActiveValue::Set(self.entity.access_type),
            max_tickets: ActiveValue::Set(self.entity.max_tickets),
            inception: ActiveValue::Set(self.entity.inception),
            expiration: ActiveValue::Set(self.entity.expiration),
            price_cts: ActiveValue::Set(self.entity.price_cts),
            hidden: ActiveValue::Set(self.entity.hidden),
            access_restricted: ActiveValue::Set(self.entity.access_restricted),
            code: ActiveValue::Set(self.entity.code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket category with default values for the given event.
pub async fn create_category(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::ticket_category::Model, DbErr> {
    TicketCategoryFactory::new(db, event_id).build().await
}
