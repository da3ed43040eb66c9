//! Configuration data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::configuration::{Configuration, ConfigurationKey};

pub struct ConfigurationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConfigurationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a configuration entry.
    ///
    /// Keys are unique, inserting an existing key fails instead of overwriting it.
    ///
    /// # Returns
    /// - `Ok(Configuration)` - The stored entry
    /// - `Err(DbErr)` - Database error, including a duplicate key
    pub async fn insert(
        &self,
        key: ConfigurationKey,
        value: &str,
        description: &str,
    ) -> Result<Configuration, DbErr> {
        let entity = entity::configuration::ActiveModel {
            key: ActiveValue::Set(key.as_str().to_string()),
            value: ActiveValue::Set(value.to_string()),
            description: ActiveValue::Set(description.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Configuration::from_entity(entity))
    }

    /// Finds the entry stored under `key`.
    pub async fn find_by_key(&self, key: ConfigurationKey) -> Result<Option<Configuration>, DbErr> {
        let entity = entity::prelude::Configuration::find()
            .filter(entity::configuration::Column::Key.eq(key.as_str()))
            .one(self.db)
            .await?;

        Ok(entity.map(Configuration::from_entity))
    }
}
