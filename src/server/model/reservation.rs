//! Reservation domain models and parameters.
//!
//! A reservation holds tickets of one event. It starts `PENDING` with an expiry (`validity`)
//! and becomes `COMPLETE` once the buyer confirms it with their contact data. Its tickets
//! follow along, from `PENDING` to `ACQUIRED`.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ReservationStatus, TicketStatus};
use sea_orm::ActiveEnum;

use crate::model::reservation::{ReservationDto, ReservationSummaryDto, TicketDto};

/// Single seat of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub uuid: String,
    pub category_id: i32,
    pub status: TicketStatus,
    pub reservation_id: Option<String>,
    pub full_name: Option<String>,
    pub email_address: Option<String>,
}

impl Ticket {
    /// Converts an entity model to a ticket domain model at the repository boundary.
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            uuid: entity.uuid,
            category_id: entity.category_id,
            status: entity.status,
            reservation_id: entity.reservation_id,
            full_name: entity.full_name,
            email_address: entity.email_address,
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            uuid: self.uuid,
            category_id: self.category_id,
            status: self.status.to_value(),
            full_name: self.full_name,
            email_address: self.email_address,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Random UUID, the only handle an anonymous buyer has on the reservation.
    pub id: String,
    pub event_id: i32,
    pub event_short_name: String,
    /// Public user who made the reservation, `None` for anonymous visitors.
    pub user_id: Option<i32>,
    pub status: ReservationStatus,
    /// Instant after which a pending reservation can no longer be confirmed.
    pub validity: DateTime<Utc>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub confirmation_ts: Option<DateTime<Utc>>,
    pub total_price_cts: i32,
    pub tickets: Vec<Ticket>,
}

impl Reservation {
    /// Converts an entity model and its loaded relations to a reservation domain model.
    ///
    /// # Arguments
    /// - `entity` - The reservation entity model
    /// - `event_short_name` - Short name of the reservation's event
    /// - `tickets` - Tickets currently attached to the reservation
    pub fn from_entity(
        entity: entity::tickets_reservation::Model,
        event_short_name: String,
        tickets: Vec<entity::ticket::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            event_short_name,
            user_id: entity.user_id,
            status: entity.status,
            validity: entity.validity,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email_address: entity.email_address,
            confirmation_ts: entity.confirmation_ts,
            total_price_cts: entity.total_price_cts,
            tickets: tickets.into_iter().map(Ticket::from_entity).collect(),
        }
    }

    /// Whether a pending reservation ran past its validity at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == ReservationStatus::Pending && now > self.validity
    }

    /// Whether `requester` may act on the reservation.
    ///
    /// Anonymous reservations are held by whoever knows their ID.
    pub fn is_held_by(&self, requester: Option<i32>) -> bool {
        match self.user_id {
            Some(owner) => requester == Some(owner),
            None => true,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            event_short_name: self.event_short_name,
            status: self.status.to_value(),
            validity: self.validity,
            total_price_cts: self.total_price_cts,
            first_name: self.first_name,
            last_name: self.last_name,
            email_address: self.email_address,
            confirmation_ts: self.confirmation_ts,
            tickets: self.tickets.into_iter().map(Ticket::into_dto).collect(),
        }
    }
}

/// Entry of a public user's reservation history.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationSummary {
    pub id: String,
    pub event_short_name: String,
    pub status: ReservationStatus,
    pub ticket_count: u64,
    pub total_price_cts: i32,
    pub confirmation_ts: Option<DateTime<Utc>>,
}

impl ReservationSummary {
    pub fn into_dto(self) -> ReservationSummaryDto {
        ReservationSummaryDto {
            id: self.id,
            event_short_name: self.event_short_name,
            status: self.status.to_value(),
            ticket_count: self.ticket_count,
            total_price_cts: self.total_price_cts,
            confirmation_ts: self.confirmation_ts,
        }
    }
}

/// Parameters for reserving tickets of one category.
#[derive(Debug, Clone)]
pub struct ReserveTicketsParam {
    pub event_short_name: String,
    pub category_id: i32,
    pub quantity: i32,
    /// Access code sent along by the visitor.
    pub code: Option<String>,
    /// Authenticated public user making the reservation.
    pub user_id: Option<i32>,
}

/// Values written by the repository when a reservation is created.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub event_id: i32,
    pub user_id: Option<i32>,
    pub validity: DateTime<Utc>,
    pub total_price_cts: i32,
}

/// Contact data completing a reservation.
#[derive(Debug, Clone)]
pub struct ConfirmReservationParam {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl ConfirmReservationParam {
    /// Name printed on the tickets of the reservation.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pending(validity: DateTime<Utc>) -> Reservation {
        Reservation {
            id: "r".to_string(),
            event_id: 1,
            event_short_name: "e".to_string(),
            user_id: None,
            status: ReservationStatus::Pending,
            validity,
            first_name: None,
            last_name: None,
            email_address: None,
            confirmation_ts: None,
            total_price_cts: 0,
            tickets: Vec::new(),
        }
    }

    #[test]
    fn expires_after_validity() {
        let now = Utc::now();
        let reservation = pending(now);

        assert!(!reservation.is_expired(now));
        assert!(reservation.is_expired(now + Duration::seconds(1)));
    }

    #[test]
    fn complete_reservation_never_expires() {
        let now = Utc::now();
        let mut reservation = pending(now);
        reservation.status = ReservationStatus::Complete;

        assert!(!reservation.is_expired(now + Duration::days(1)));
    }

    #[test]
    fn owned_reservation_is_held_by_owner_only() {
        let mut reservation = pending(Utc::now());
        assert!(reservation.is_held_by(None));
        assert!(reservation.is_held_by(Some(7)));

        reservation.user_id = Some(7);
        assert!(reservation.is_held_by(Some(7)));
        assert!(!reservation.is_held_by(Some(8)));
        assert!(!reservation.is_held_by(None));
    }

    #[test]
    fn dto_uses_stored_status_names() {
        let dto = pending(Utc::now()).into_dto();

        assert_eq!(dto.status, "PENDING");
    }
}
