//! Ticket category data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::ticket_category::{CreateTicketCategoryParam, TicketCategory};

pub struct TicketCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a category of the event, resolving its sale window to UTC instants.
    ///
    /// # Returns
    /// - `Ok(TicketCategory)` - The created category
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        event_id: i32,
        param: &CreateTicketCategoryParam,
    ) -> Result<TicketCategory, DbErr> {
        let entity = entity::ticket_category::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            name: ActiveValue::Set(param.name.clone()),
            access_type: ActiveValue::Set(param.access_type),
            max_tickets: ActiveValue::Set(param.max_tickets),
            inception: ActiveValue::Set(param.inception.to_utc()),
            expiration: ActiveValue::Set(param.expiration.to_utc()),
            price_cts: ActiveValue::Set(param.price_cts),
            hidden: ActiveValue::Set(param.hidden),
            access_restricted: ActiveValue::Set(param.access_restricted),
            code: ActiveValue::Set(param.code.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TicketCategory::from_entity(entity))
    }

    /// Finds a category of the given event.
    ///
    /// # Returns
    /// - `Ok(Some(TicketCategory))` - Category exists and belongs to the event
    /// - `Ok(None)` - No such category, or it belongs to another event
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        event_id: i32,
        category_id: i32,
    ) -> Result<Option<TicketCategory>, DbErr> {
        let entity = entity::prelude::TicketCategory::find_by_id(category_id)
            .filter(entity::ticket_category::Column::EventId.eq(event_id))
            .one(self.db)
            .await?;

        Ok(entity.map(TicketCategory::from_entity))
    }

    /// Returns all categories of the event, ordered by ID.
    pub async fn find_by_event(&self, event_id: i32) -> Result<Vec<TicketCategory>, DbErr> {
        let entities = entity::prelude::TicketCategory::find()
            .filter(entity::ticket_category::Column::EventId.eq(event_id))
            .order_by_asc(entity::ticket_category::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(TicketCategory::from_entity)
            .collect())
    }
}
