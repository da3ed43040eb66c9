//! Event data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::event::{CreateEventParam, Event};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the event row. The categories of `param` are left to
    /// `TicketCategoryRepository`.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(DbErr)` - Database error, including a duplicate short name
    pub async fn create(&self, param: &CreateEventParam) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            short_name: ActiveValue::Set(param.short_name.clone()),
            display_name: ActiveValue::Set(param.display_name.clone()),
            organization_id: ActiveValue::Set(param.organization_id),
            currency: ActiveValue::Set(param.currency.clone()),
            available_seats: ActiveValue::Set(param.available_seats),
            begin_ts: ActiveValue::Set(param.begin),
            end_ts: ActiveValue::Set(param.end),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Finds an event by the short name used in public URLs.
    pub async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find()
            .filter(entity::event::Column::ShortName.eq(short_name))
            .one(self.db)
            .await?;

        Ok(entity.map(Event::from_entity))
    }
}
