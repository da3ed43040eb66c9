//! Reservation service.
//!
//! Implements the public purchase flow: reserve tickets of a category, read the pending
//! reservation, then either cancel it or confirm it with the buyer's contact data. All rules
//! depending on the current time read it from the injected `Clock`.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{ReservationStatus, TicketStatus};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{
        event::EventRepository, reservation::ReservationRepository, ticket::TicketRepository,
        ticket_category::TicketCategoryRepository,
    },
    error::{reservation::ReservationError, AppError},
    model::reservation::{
        ConfirmReservationParam, CreateReservationParam, Reservation, ReservationSummary,
        ReserveTicketsParam,
    },
    util::clock::Clock,
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
    /// How long a pending reservation holds its tickets.
    timeout: Duration,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock, timeout: Duration) -> Self {
        Self { db, clock, timeout }
    }

    /// Reserves tickets of one category.
    ///
    /// Takes the free tickets with the lowest IDs, marks them pending and attaches them to a
    /// new pending reservation valid for the configured timeout. Tickets held by expired
    /// pending reservations of the category are freed first. Ticket selection and all
    /// writes happen in one transaction.
    ///
    /// # Arguments
    /// - `param` - Event, category, quantity, access code and reserving user
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The pending reservation with its tickets
    /// - `Err(ReservationError::InvalidQuantity)` - Quantity below one
    /// - `Err(ReservationError::EventNotFound | CategoryNotFound)` - Unknown event or category
    /// - `Err(ReservationError::CategoryNotOnSale)` - Outside the category's sale window
    /// - `Err(ReservationError::AccessCodeRequired)` - Restricted category without its code
    /// - `Err(ReservationError::NotEnoughTickets)` - Fewer free tickets than requested
    /// - `Err(AppError::InternalError)` - Timeout pushes the validity out of range
    pub async fn reserve(&self, param: ReserveTicketsParam) -> Result<Reservation, AppError> {
        if param.quantity < 1 {
            return Err(ReservationError::InvalidQuantity(param.quantity).into());
        }

        let now = self.clock.now();

        let event = EventRepository::new(self.db)
            .find_by_short_name(&param.event_short_name)
            .await?
            .ok_or_else(|| ReservationError::EventNotFound(param.event_short_name.clone()))?;

        let category = TicketCategoryRepository::new(self.db)
            .find_by_id(event.id, param.category_id)
            .await?
            .ok_or(ReservationError::CategoryNotFound(param.category_id))?;

        if !category.is_on_sale(now) {
            return Err(ReservationError::CategoryNotOnSale(category.id).into());
        }
        if !category.accessible_with(param.code.as_deref()) {
            return Err(ReservationError::AccessCodeRequired(category.id).into());
        }

        let validity = now.checked_add_signed(self.timeout).ok_or_else(|| {
            AppError::InternalError(format!(
                "Reservation timeout of {} overflows the validity of a reservation made at {}",
                self.timeout, now
            ))
        })?;

        let txn = self.db.begin().await?;
        let ticket_repo = TicketRepository::new(&txn);
        let reservation_repo = ReservationRepository::new(&txn);

        self.release_expired(&txn, category.id, now).await?;

        let free = ticket_repo
            .find_free_by_category(category.id, param.quantity as u64)
            .await?;
        if free.len() < param.quantity as usize {
            txn.rollback().await?;
            return Err(ReservationError::NotEnoughTickets {
                category_id: category.id,
                requested: param.quantity,
                available: free.len() as i32,
            }
            .into());
        }

        let reservation_id = reservation_repo
            .create(CreateReservationParam {
                event_id: event.id,
                user_id: param.user_id,
                validity,
                total_price_cts: category.price_cts * param.quantity,
            })
            .await?;

        let ticket_ids: Vec<i32> = free.iter().map(|ticket| ticket.id).collect();
        let taken = ticket_repo.reserve(&ticket_ids, &reservation_id).await?;
        if taken != ticket_ids.len() as u64 {
            txn.rollback().await?;
            return Err(ReservationError::NotEnoughTickets {
                category_id: category.id,
                requested: param.quantity,
                available: taken as i32,
            }
            .into());
        }

        let reservation = reservation_repo
            .find_by_id(&reservation_id)
            .await?
            .ok_or_else(|| ReservationError::ReservationNotFound(reservation_id.clone()))?;

        txn.commit().await?;

        tracing::info!(
            "Reserved {} tickets of category {} for event {} as {}",
            param.quantity,
            category.id,
            event.short_name,
            reservation.id
        );

        Ok(reservation)
    }

    /// Frees the tickets of pending reservations in the category whose validity has ended
    /// and deletes those reservations.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tickets returned to the free pool
    /// - `Err(DbErr)` - Database error during lookup, update or delete
    async fn release_expired(
        &self,
        txn: &DatabaseTransaction,
        category_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let ticket_repo = TicketRepository::new(txn);
        let reservation_repo = ReservationRepository::new(txn);

        let holders = ticket_repo
            .find_reservation_ids_by_category(category_id, TicketStatus::Pending)
            .await?;
        let expired = reservation_repo.find_expired_ids(&holders, now).await?;

        let mut released = 0;
        for id in &expired {
            released += ticket_repo.release_by_reservation(id).await?;
            reservation_repo.delete(id).await?;
        }

        if !expired.is_empty() {
            tracing::info!(
                "Released {} tickets of category {} held by {} expired reservations",
                released,
                category_id,
                expired.len()
            );
        }

        Ok(released)
    }

    /// Retrieves a reservation with its tickets.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation found
    /// - `Err(ReservationError::ReservationNotFound)` - No reservation with that ID
    pub async fn get(&self, id: &str) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| ReservationError::ReservationNotFound(id.to_string()).into())
    }

    /// Cancels a pending reservation.
    ///
    /// Its tickets return to the free pool and the reservation row is deleted.
    ///
    /// # Arguments
    /// - `id` - Reservation to cancel
    /// - `requester` - Signed-in user making the request, if any
    ///
    /// # Returns
    /// - `Ok(())` - Reservation cancelled
    /// - `Err(ReservationError::ReservationNotFound)` - No reservation with that ID
    /// - `Err(ReservationError::NotOwner)` - Reservation belongs to another user
    /// - `Err(ReservationError::InvalidStatus)` - Reservation is already complete
    pub async fn cancel(&self, id: &str, requester: Option<i32>) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let reservation = reservation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ReservationError::ReservationNotFound(id.to_string()))?;

        if !reservation.is_held_by(requester) {
            return Err(ReservationError::NotOwner(reservation.id).into());
        }
        if reservation.status != ReservationStatus::Pending {
            return Err(ReservationError::InvalidStatus {
                id: reservation.id,
                status: reservation.status,
            }
            .into());
        }

        let released = TicketRepository::new(&txn)
            .release_by_reservation(id)
            .await?;
        reservation_repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Cancelled reservation {}, released {} tickets", id, released);

        Ok(())
    }

    /// Completes a pending reservation with the buyer's contact data.
    ///
    /// The tickets become acquired and carry the buyer's full name and email address.
    ///
    /// # Arguments
    /// - `id` - Reservation to confirm
    /// - `requester` - Signed-in user making the request, if any
    /// - `param` - Buyer's contact data
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The completed reservation
    /// - `Err(ReservationError::ReservationNotFound)` - No reservation with that ID
    /// - `Err(ReservationError::NotOwner)` - Reservation belongs to another user
    /// - `Err(ReservationError::InvalidStatus)` - Reservation is already complete
    /// - `Err(ReservationError::ReservationExpired)` - Validity has passed
    pub async fn confirm(
        &self,
        id: &str,
        requester: Option<i32>,
        param: ConfirmReservationParam,
    ) -> Result<Reservation, AppError> {
        let now = self.clock.now();

        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let reservation = reservation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ReservationError::ReservationNotFound(id.to_string()))?;

        if !reservation.is_held_by(requester) {
            return Err(ReservationError::NotOwner(reservation.id).into());
        }
        if reservation.status != ReservationStatus::Pending {
            return Err(ReservationError::InvalidStatus {
                id: reservation.id,
                status: reservation.status,
            }
            .into());
        }
        if reservation.is_expired(now) {
            return Err(ReservationError::ReservationExpired(reservation.id).into());
        }

        reservation_repo.confirm(id, &param, now).await?;
        TicketRepository::new(&txn)
            .acquire_by_reservation(id, &param.full_name(), &param.email_address)
            .await?;

        let confirmed = reservation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ReservationError::ReservationNotFound(id.to_string()))?;

        txn.commit().await?;

        tracing::info!("Confirmed reservation {}", id);

        Ok(confirmed)
    }

    /// Lists the reservation history of a user.
    pub async fn get_user_reservations(
        &self,
        user_id: i32,
    ) -> Result<Vec<ReservationSummary>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .find_summaries_by_user(user_id)
            .await?)
    }
}
