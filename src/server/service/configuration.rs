//! Configuration flags read at request time.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::configuration::ConfigurationRepository, error::AppError,
    model::configuration::ConfigurationKey,
};

pub struct ConfigurationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConfigurationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether the flag stored under `key` is set to `"true"`.
    ///
    /// A missing entry counts as disabled.
    pub async fn is_enabled(&self, key: ConfigurationKey) -> Result<bool, AppError> {
        let entry = ConfigurationRepository::new(self.db).find_by_key(key).await?;

        Ok(entry.is_some_and(|entry| entry.is_true()))
    }
}
