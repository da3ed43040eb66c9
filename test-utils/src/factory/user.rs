//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::fixture;
use entity::sea_orm_active_enums::UserType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// Defaults come from `fixture::user`, except the username and password which are
/// random UUIDs so repeated calls never collide.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let organizer = UserFactory::new(&db)
///     .username("organizer")
///     .user_type(UserType::Internal)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: random UUID
    /// - password: random UUID
    /// - user_type: `UserType::Public`
    /// - enabled: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let mut entity = fixture::user::entity_builder()
            .username(Uuid::new_v4().to_string())
            .build();
        entity.password = Uuid::new_v4().to_string();

        Self { db, entity }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.entity.username = username.into();
        self
    }

    /// Sets the user type.
    pub fn user_type(mut self, user_type: UserType) -> Self {
        self.entity.user_type = user_type;
        self
    }

    /// Sets whether the user is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.entity.enabled = enabled;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.entity.username),
            password: ActiveValue::Set(self.entity.password),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            email_address: ActiveValue::Set(self.entity.email_address),
            enabled: ActiveValue::Set(self.entity.enabled),
            user_type: ActiveValue::Set(self.entity.user_type),
            valid_to: ActiveValue::Set(self.entity.valid_to),
            description: ActiveValue::Set(self.entity.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an enabled user of the given type.
pub async fn create_user_with_type(
    db: &DatabaseConnection,
    user_type: UserType,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).user_type(user_type).build().await
}
