//! Configuration factory for creating configuration entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a configuration entry with an empty description.
///
/// # Returns
/// - `Ok(entity::configuration::Model)` - Created entry
/// - `Err(DbErr)` - Database error, including a duplicate key
pub async fn create_configuration(
    db: &DatabaseConnection,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::configuration::Model, DbErr> {
    entity::configuration::ActiveModel {
        id: ActiveValue::NotSet,
        key: ActiveValue::Set(key.into()),
        value: ActiveValue::Set(value.into()),
        description: ActiveValue::Set(String::new()),
    }
    .insert(db)
    .await
}
