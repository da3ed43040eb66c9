//! Reservation factory for creating test reservation entities.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test reservations with customizable fields.
///
/// Defaults to an anonymous pending reservation valid for 25 minutes from now, with no
/// tickets attached.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: Option<i32>,
    status: ReservationStatus,
    validity: DateTime<Utc>,
    total_price_cts: i32,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory for the given event.
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        Self {
            db,
            event_id,
            user_id: None,
            status: ReservationStatus::Pending,
            validity: Utc::now() + Duration::minutes(25),
            total_price_cts: 0,
        }
    }

    /// Sets the user owning the reservation.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the reservation status.
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets when a pending reservation expires.
    pub fn validity(mut self, validity: DateTime<Utc>) -> Self {
        self.validity = validity;
        self
    }

    /// Sets the total price in cents.
    pub fn total_price_cts(mut self, total_price_cts: i32) -> Self {
        self.total_price_cts = total_price_cts;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::tickets_reservation::Model, DbErr> {
        let confirmation_ts = match self.status {
            ReservationStatus::Complete => Some(Utc::now()),
            ReservationStatus::Pending => None,
        };

        entity::tickets_reservation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            validity: ActiveValue::Set(self.validity),
            first_name: ActiveValue::Set(None),
            last_name: ActiveValue::Set(None),
            email_address: ActiveValue::Set(None),
            confirmation_ts: ActiveValue::Set(confirmation_ts),
            total_price_cts: ActiveValue::Set(self.total_price_cts),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an anonymous pending reservation for the given event.
pub async fn create_reservation(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::tickets_reservation::Model, DbErr> {
    ReservationFactory::new(db, event_id).build().await
}
