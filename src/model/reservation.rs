use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReserveTicketsDto {
    pub category_id: i32,
    pub quantity: i32,
    /// Access code unlocking a restricted category.
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ConfirmReservationDto {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TicketDto {
    pub uuid: String,
    pub category_id: i32,
    pub status: String,
    pub full_name: Option<String>,
    pub email_address: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReservationDto {
    pub id: String,
    pub event_short_name: String,
    pub status: String,
    pub validity: DateTime<Utc>,
    pub total_price_cts: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub confirmation_ts: Option<DateTime<Utc>>,
    pub tickets: Vec<TicketDto>,
}

/// One line of the reservation history of a public user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReservationSummaryDto {
    pub id: String,
    pub event_short_name: String,
    pub status: String,
    pub ticket_count: u64,
    pub total_price_cts: i32,
    pub confirmation_ts: Option<DateTime<Utc>>,
}
