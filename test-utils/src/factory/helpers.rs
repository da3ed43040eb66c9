//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an organization and an event owned by it.
///
/// # Returns
/// - `Ok((organization, event))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::organization::Model, entity::event::Model), DbErr> {
    let organization = crate::factory::organization::create_organization(db).await?;
    let event = crate::factory::event::create_event(db, organization.id).await?;

    Ok((organization, event))
}

/// Creates a complete event hierarchy with one on-sale category and its tickets.
///
/// This is a convenience method that creates:
/// 1. Organization
/// 2. Event
/// 3. Ticket category (defaults from the fixture)
/// 4. One free ticket per seat of the category
///
/// # Returns
/// - `Ok((organization, event, category, tickets))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_category_with_tickets(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::organization::Model,
        entity::event::Model,
        entity::ticket_category::Model,
        Vec<entity::ticket::Model>,
    ),
    DbErr,
> {
    let (organization, event) = create_event_with_dependencies(db).await?;
    let category = crate::factory::ticket_category::create_category(db, event.id).await?;
    let tickets = crate::factory::ticket::create_tickets(db, &category).await?;

    Ok((organization, event, category, tickets))
}
