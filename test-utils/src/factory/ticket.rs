//! Ticket factory for creating the free tickets of a category.

use entity::sea_orm_active_enums::TicketStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates one free ticket per seat of the category.
///
/// # Arguments
/// - `db` - Database connection
/// - `category` - Category whose `max_tickets` determines how many tickets are created
///
/// # Returns
/// - `Ok(Vec<entity::ticket::Model>)` - Created tickets, in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tickets(
    db: &DatabaseConnection,
    category: &entity::ticket_category::Model,
) -> Result<Vec<entity::ticket::Model>, DbErr> {
    let mut tickets = Vec::with_capacity(category.max_tickets.max(0) as usize);

    for _ in 0..category.max_tickets {
        let ticket = entity::ticket::ActiveModel {
            id: ActiveValue::NotSet,
            uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
            event_id: ActiveValue::Set(category.event_id),
            category_id: ActiveValue::Set(category.id),
            status: ActiveValue::Set(TicketStatus::Free),
            reservation_id: ActiveValue::Set(None),
            full_name: ActiveValue::Set(None),
            email_address: ActiveValue::Set(None),
        }
        .insert(db)
        .await?;
        tickets.push(ticket);
    }

    Ok(tickets)
}
