use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticket category as shown to public visitors of an event page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TicketCategoryDto {
    pub id: i32,
    pub name: String,
    pub price_cts: i32,
    pub max_tickets: i32,
    pub inception: DateTime<Utc>,
    pub expiration: DateTime<Utc>,
    pub access_restricted: bool,
}

/// Query string accepted by the public category listing.
#[derive(Deserialize, Debug, Default)]
pub struct CategoryQuery {
    pub code: Option<String>,
}
