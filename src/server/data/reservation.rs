//! Reservation data repository.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::reservation::{
    ConfirmReservationParam, CreateReservationParam, Reservation, ReservationSummary,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending reservation under a fresh UUID.
    ///
    /// # Returns
    /// - `Ok(String)` - ID of the created reservation
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateReservationParam) -> Result<String, DbErr> {
        let entity = entity::tickets_reservation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            event_id: ActiveValue::Set(param.event_id),
            user_id: ActiveValue::Set(param.user_id),
            status: ActiveValue::Set(ReservationStatus::Pending),
            validity: ActiveValue::Set(param.validity),
            first_name: ActiveValue::Set(None),
            last_name: ActiveValue::Set(None),
            email_address: ActiveValue::Set(None),
            confirmation_ts: ActiveValue::Set(None),
            total_price_cts: ActiveValue::Set(param.total_price_cts),
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Finds a reservation with its event short name and tickets.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation found
    /// - `Ok(None)` - No reservation with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, DbErr> {
        let Some((reservation, event)) = entity::prelude::TicketsReservation::find_by_id(id)
            .find_also_related(entity::prelude::Event)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ReservationId.eq(id))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        let event_short_name = event.map(|e| e.short_name).unwrap_or_default();

        Ok(Some(Reservation::from_entity(
            reservation,
            event_short_name,
            tickets,
        )))
    }

    /// Deletes the reservation row. Its tickets must have been released before.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation deleted
    /// - `Ok(false)` - No reservation with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::TicketsReservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns the IDs among `ids` of pending reservations whose validity ended before `now`.
    pub async fn find_expired_ids(
        &self,
        ids: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<String>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TicketsReservation::find()
            .select_only()
            .column(entity::tickets_reservation::Column::Id)
            .filter(entity::tickets_reservation::Column::Id.is_in(ids.iter().cloned()))
            .filter(entity::tickets_reservation::Column::Status.eq(ReservationStatus::Pending))
            .filter(entity::tickets_reservation::Column::Validity.lt(now))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Completes the reservation with the buyer's contact data.
    pub async fn confirm(
        &self,
        id: &str,
        param: &ConfirmReservationParam,
        confirmation_ts: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::tickets_reservation::ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            status: ActiveValue::Set(ReservationStatus::Complete),
            first_name: ActiveValue::Set(Some(param.first_name.clone())),
            last_name: ActiveValue::Set(Some(param.last_name.clone())),
            email_address: ActiveValue::Set(Some(param.email_address.clone())),
            confirmation_ts: ActiveValue::Set(Some(confirmation_ts)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Returns the reservation history of a user.
    ///
    /// Ordered by confirmation time, pending reservations (not yet confirmed) first.
    pub async fn find_summaries_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<ReservationSummary>, DbErr> {
        let reservations = entity::prelude::TicketsReservation::find()
            .filter(entity::tickets_reservation::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Event)
            .order_by_asc(entity::tickets_reservation::Column::ConfirmationTs)
            .order_by_asc(entity::tickets_reservation::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<String> = reservations
            .iter()
            .map(|(reservation, _)| reservation.id.clone())
            .collect();
        let ticket_counts: HashMap<String, i64> = if ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Ticket::find()
                .select_only()
                .column(entity::ticket::Column::ReservationId)
                .column_as(entity::ticket::Column::Id.count(), "ticket_count")
                .filter(entity::ticket::Column::ReservationId.is_in(ids))
                .group_by(entity::ticket::Column::ReservationId)
                .into_tuple::<(String, i64)>()
                .all(self.db)
                .await?
                .into_iter()
                .collect()
        };

        let summaries = reservations
            .into_iter()
            .map(|(reservation, event)| ReservationSummary {
                ticket_count: ticket_counts
                    .get(&reservation.id)
                    .copied()
                    .unwrap_or_default() as u64,
                id: reservation.id,
                event_short_name: event.map(|e| e.short_name).unwrap_or_default(),
                status: reservation.status,
                total_price_cts: reservation.total_price_cts,
                confirmation_ts: reservation.confirmation_ts,
            })
            .collect();

        Ok(summaries)
    }
}
