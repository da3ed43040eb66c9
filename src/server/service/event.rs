//! Event service for creating events and listing their public categories.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        event::EventRepository, ticket::TicketRepository,
        ticket_category::TicketCategoryRepository,
    },
    error::{reservation::ReservationError, AppError},
    model::{event::CreateEventParam, event::Event, ticket_category::TicketCategory},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event with its categories and one free ticket per category seat.
    ///
    /// All rows are written in one transaction; a failure leaves nothing behind.
    ///
    /// # Arguments
    /// - `param` - Event data and the categories to create with it
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::BadRequest)` - The event or one of its categories is invalid
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate short name
    pub async fn create_event(&self, param: CreateEventParam) -> Result<Event, AppError> {
        validate_event(&param)?;

        let txn = self.db.begin().await?;

        let event = EventRepository::new(&txn).create(&param).await?;

        let category_repo = TicketCategoryRepository::new(&txn);
        let ticket_repo = TicketRepository::new(&txn);
        for category_param in &param.categories {
            let category = category_repo.create(event.id, category_param).await?;
            ticket_repo
                .create_free_tickets(event.id, category.id, category.max_tickets)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Created event {} with {} categories",
            event.short_name,
            param.categories.len()
        );

        Ok(event)
    }

    /// Lists the categories a visitor of the event page may see.
    ///
    /// Hidden categories are only included when `code` matches their access code.
    ///
    /// # Returns
    /// - `Ok(Vec<TicketCategory>)` - Visible categories ordered by ID
    /// - `Err(ReservationError::EventNotFound)` - No event with that short name
    pub async fn get_public_categories(
        &self,
        short_name: &str,
        code: Option<&str>,
    ) -> Result<Vec<TicketCategory>, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_short_name(short_name)
            .await?
            .ok_or_else(|| ReservationError::EventNotFound(short_name.to_string()))?;

        let categories = TicketCategoryRepository::new(self.db)
            .find_by_event(event.id)
            .await?;

        Ok(categories
            .into_iter()
            .filter(|category| category.visible_with(code))
            .collect())
    }
}

fn validate_event(param: &CreateEventParam) -> Result<(), AppError> {
    if param.short_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Event short name must not be empty".to_string(),
        ));
    }
    if param.begin >= param.end {
        return Err(AppError::BadRequest(
            "Event must begin before it ends".to_string(),
        ));
    }
    if param.categories.is_empty() {
        return Err(AppError::BadRequest(
            "Event needs at least one ticket category".to_string(),
        ));
    }

    for category in &param.categories {
        if category.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Ticket category name must not be empty".to_string(),
            ));
        }
        if category.max_tickets <= 0 || category.max_tickets > param.available_seats {
            return Err(AppError::BadRequest(format!(
                "Category '{}' must have between 1 and {} tickets",
                category.name, param.available_seats
            )));
        }
        if category.price_cts < 0 {
            return Err(AppError::BadRequest(format!(
                "Category '{}' has a negative price",
                category.name
            )));
        }

        let inception = category.inception.to_utc();
        let expiration = category.expiration.to_utc();
        if inception >= expiration {
            return Err(AppError::BadRequest(format!(
                "Sale of category '{}' must start before it ends",
                category.name
            )));
        }
        if expiration > param.end {
            return Err(AppError::BadRequest(format!(
                "Sale of category '{}' must end before the event ends",
                category.name
            )));
        }
        if category.access_restricted
            && category.code.as_deref().is_none_or(|code| code.trim().is_empty())
        {
            return Err(AppError::BadRequest(format!(
                "Access-restricted category '{}' needs an access code",
                category.name
            )));
        }
    }

    Ok(())
}
