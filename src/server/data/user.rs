//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their
//! membership in organizations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Account data including the opaque password and the user type
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the created user
    /// - `Err(DbErr)` - Database error, including a duplicate username
    pub async fn create(&self, param: CreateUserParam) -> Result<i32, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password: ActiveValue::Set(param.password),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email_address: ActiveValue::Set(param.email_address),
            enabled: ActiveValue::Set(param.enabled),
            user_type: ActiveValue::Set(param.user_type),
            valid_to: ActiveValue::Set(param.valid_to),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their unique username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Makes the user a member of the organization.
    pub async fn link_to_organization(
        &self,
        user_id: i32,
        organization_id: i32,
    ) -> Result<(), DbErr> {
        entity::user_organization::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            organization_id: ActiveValue::Set(organization_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Returns the IDs of the organizations the user is a member of.
    pub async fn find_organization_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let memberships = entity::prelude::UserOrganization::find()
            .filter(entity::user_organization::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(memberships
            .into_iter()
            .map(|membership| membership.organization_id)
            .collect())
    }
}
