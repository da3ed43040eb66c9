//! Ticket category domain models.
//!
//! A category groups the tickets of an event that share a price and a sale window.
//! Hidden categories are left out of public listings, access-restricted categories can
//! only be reserved with their access code. The two usually go together.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TicketAccessType;

use crate::{model::event::TicketCategoryDto, server::model::event::DateTimeModification};

#[derive(Debug, Clone, PartialEq)]
pub struct TicketCategory {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub access_type: TicketAccessType,
    /// Number of tickets generated for the category.
    pub max_tickets: i32,
    /// Start of the sale window.
    pub inception: DateTime<Utc>,
    /// End of the sale window.
    pub expiration: DateTime<Utc>,
    pub price_cts: i32,
    pub hidden: bool,
    pub access_restricted: bool,
    pub code: Option<String>,
}

impl TicketCategory {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::ticket_category::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            name: entity.name,
            access_type: entity.access_type,
            max_tickets: entity.max_tickets,
            inception: entity.inception,
            expiration: entity.expiration,
            price_cts: entity.price_cts,
            hidden: entity.hidden,
            access_restricted: entity.access_restricted,
            code: entity.code,
        }
    }

    /// Converts the category to its public DTO. The access code is never exposed.
    pub fn into_dto(self) -> TicketCategoryDto {
        TicketCategoryDto {
            id: self.id,
            name: self.name,
            price_cts: self.price_cts,
            max_tickets: self.max_tickets,
            inception: self.inception,
            expiration: self.expiration,
            access_restricted: self.access_restricted,
        }
    }

    /// Whether `now` lies inside the sale window. Both bounds are inclusive.
    pub fn is_on_sale(&self, now: DateTime<Utc>) -> bool {
        self.inception <= now && now <= self.expiration
    }

    /// Whether `code` is the access code of this category.
    pub fn code_matches(&self, code: Option<&str>) -> bool {
        match (self.code.as_deref(), code) {
            (Some(expected), Some(given)) => expected == given,
            _ => false,
        }
    }

    /// Whether the category appears in a public listing requested with `code`.
    pub fn visible_with(&self, code: Option<&str>) -> bool {
        !self.hidden || self.code_matches(code)
    }

    /// Whether a reservation carrying `code` may take tickets of this category.
    pub fn accessible_with(&self, code: Option<&str>) -> bool {
        !self.access_restricted || self.code_matches(code)
    }
}

/// Parameters describing a ticket category to create with its event.
#[derive(Debug, Clone)]
pub struct CreateTicketCategoryParam {
    pub name: String,
    pub access_type: TicketAccessType,
    pub max_tickets: i32,
    pub inception: DateTimeModification,
    pub expiration: DateTimeModification,
    pub price_cts: i32,
    pub hidden: bool,
    pub access_restricted: bool,
    pub code: Option<String>,
}
