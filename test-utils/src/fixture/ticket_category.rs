//! Ticket category fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating ticket category entity models without database
//! insertion. The default category is public, unrestricted and on sale around the default
//! event's begin date.

use chrono::{DateTime, Duration, Utc};
use entity::{sea_orm_active_enums::TicketAccessType, ticket_category};

use crate::fixture::event::default_begin;

/// Default test category name.
pub const DEFAULT_NAME: &str = "default";

/// Default number of tickets of a category.
pub const DEFAULT_MAX_TICKETS: i32 = 10;

/// Default price in cents (10.00).
pub const DEFAULT_PRICE_CTS: i32 = 1000;

/// Creates a ticket category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - event_id: `1`
/// - name: `"default"`
/// - access_type: `TicketAccessType::Inherit`
/// - max_tickets: `10`
/// - sale window: the 30 days before the default event begins
/// - price_cts: `1000`
/// - hidden / access_restricted: `false`
/// - code: `None`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let category = fixture::ticket_category::entity();
/// assert!(!category.hidden);
/// ```
pub fn entity() -> ticket_category::Model {
    entity_builder().build()
}

/// Creates a ticket category entity builder for customization.
pub fn entity_builder() -> TicketCategoryEntityBuilder {
    TicketCategoryEntityBuilder::default()
}

/// Builder for creating customized ticket category entity models.
pub struct TicketCategoryEntityBuilder {
    id: i32,
    event_id: i32,
    name: String,
    max_tickets: i32,
    inception: DateTime<Utc>,
    expiration: DateTime<Utc>,
    price_cts: i32,
    hidden: bool,
    access_restricted: bool,
    code: Option<String>,
}

impl Default for TicketCategoryEntityBuilder {
    fn default() -> Self {
        let begin = default_begin();
        Self {
            id: 1,
            event_id: 1,
            name: DEFAULT_NAME.to_string(),
            max_tickets: DEFAULT_MAX_TICKETS,
            inception: begin - Duration::days(30),
            expiration: begin,
            price_cts: DEFAULT_PRICE_CTS,
            hidden: false,
            access_restricted: false,
            code: None,
        }
    }
}

impl TicketCategoryEntityBuilder {
    /// Sets the category ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the event the category belongs to.
    pub fn event_id(mut self, event_id: i32) -> Self {
        self.event_id = event_id;
        self
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of tickets of the category.
    pub fn max_tickets(mut self, max_tickets: i32) -> Self {
        self.max_tickets = max_tickets;
        self
    }

    /// Sets the sale window.
    pub fn sale_window(mut self, inception: DateTime<Utc>, expiration: DateTime<Utc>) -> Self {
        self.inception = inception;
        self.expiration = expiration;
        self
    }

    /// Sets the price in cents.
    pub fn price_cts(mut self, price_cts: i32) -> Self {
        self.price_cts = price_cts;
        self
    }

    /// Sets whether the category is hidden from the public listing.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Sets whether reserving the category requires the access code.
    pub fn access_restricted(mut self, access_restricted: bool) -> Self {
        self.access_restricted = access_restricted;
        self
    }

    /// Sets the access code.
    pub fn code(mut self, code: Option<&str>) -> Self {
        self.code = code.map(str::to_string);
        self
    }

    /// Builds and returns the ticket category entity model.
    pub fn build(self) -> ticket_category::Model {
        ticket_category::Model {
            id: self.id,
            event_id: self.event_id,
            name: self.name,
            access_type: TicketAccessType::Inherit,
            max_tickets: self.max_tickets,
            inception: self.inception,
            expiration: self.expiration,
            price_cts: self.price_cts,
            hidden: self.hidden,
            access_restricted: self.access_restricted,
            code: self.code,
        }
    }
}
