//! Ticket data repository.
//!
//! Tickets are generated up front, one per seat, and move between `FREE`, `PENDING` and
//! `ACQUIRED` as reservations take, release and complete them.

use entity::sea_orm_active_enums::TicketStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::reservation::Ticket;

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Generates `count` free tickets for a category.
    ///
    /// # Returns
    /// - `Ok(())` - Tickets inserted (nothing happens for a count of zero)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_free_tickets(
        &self,
        event_id: i32,
        category_id: i32,
        count: i32,
    ) -> Result<(), DbErr> {
        if count <= 0 {
            return Ok(());
        }

        let tickets = (0..count).map(|_| entity::ticket::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
            event_id: ActiveValue::Set(event_id),
            category_id: ActiveValue::Set(category_id),
            status: ActiveValue::Set(TicketStatus::Free),
            reservation_id: ActiveValue::Set(None),
            full_name: ActiveValue::Set(None),
            email_address: ActiveValue::Set(None),
            ..Default::default()
        });

        entity::prelude::Ticket::insert_many(tickets)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Returns up to `limit` free tickets of the category, lowest ID first.
    pub async fn find_free_by_category(
        &self,
        category_id: i32,
        limit: u64,
    ) -> Result<Vec<Ticket>, DbErr> {
        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::CategoryId.eq(category_id))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Free))
            .order_by_asc(entity::ticket::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }

    /// Returns the distinct reservations holding tickets of the category in `status`.
    pub async fn find_reservation_ids_by_category(
        &self,
        category_id: i32,
        status: TicketStatus,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::ReservationId)
            .distinct()
            .filter(entity::ticket::Column::CategoryId.eq(category_id))
            .filter(entity::ticket::Column::Status.eq(status))
            .filter(entity::ticket::Column::ReservationId.is_not_null())
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Counts the tickets of an event that are in `status`.
    pub async fn count_by_status(&self, event_id: i32, status: TicketStatus) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::EventId.eq(event_id))
            .filter(entity::ticket::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Attaches the tickets to a reservation and marks them pending.
    ///
    /// Only tickets that are still free are touched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tickets that were taken
    /// - `Err(DbErr)` - Database error during update
    pub async fn reserve(&self, ticket_ids: &[i32], reservation_id: &str) -> Result<u64, DbErr> {
        if ticket_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Ticket::update_many()
            .set(entity::ticket::ActiveModel {
                status: ActiveValue::Set(TicketStatus::Pending),
                reservation_id: ActiveValue::Set(Some(reservation_id.to_string())),
                ..Default::default()
            })
            .filter(entity::ticket::Column::Id.is_in(ticket_ids.iter().copied()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Free))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns the reservation's tickets to the free pool.
    pub async fn release_by_reservation(&self, reservation_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Ticket::update_many()
            .set(entity::ticket::ActiveModel {
                status: ActiveValue::Set(TicketStatus::Free),
                reservation_id: ActiveValue::Set(None),
                full_name: ActiveValue::Set(None),
                email_address: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::ticket::Column::ReservationId.eq(reservation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks the reservation's tickets as acquired by the given holder.
    pub async fn acquire_by_reservation(
        &self,
        reservation_id: &str,
        full_name: &str,
        email_address: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Ticket::update_many()
            .set(entity::ticket::ActiveModel {
                status: ActiveValue::Set(TicketStatus::Acquired),
                full_name: ActiveValue::Set(Some(full_name.to_string())),
                email_address: ActiveValue::Set(Some(email_address.to_string())),
                ..Default::default()
            })
            .filter(entity::ticket::Column::ReservationId.eq(reservation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns the tickets attached to a reservation, ordered by ID.
    pub async fn find_by_reservation(&self, reservation_id: &str) -> Result<Vec<Ticket>, DbErr> {
        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ReservationId.eq(reservation_id))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }
}
