//! User service for business logic.
//!
//! This module provides the `UserService` for creating organizers and resolving users
//! while working with domain models rather than DTOs.

use entity::sea_orm_active_enums::UserType;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{organization::OrganizationRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateOrganizerParam, CreateUserParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an organizer and makes it a member of its organization.
    ///
    /// The organizer gets a random password; signing in as an organizer is handled outside
    /// of this backend. Both rows are written in one transaction.
    ///
    /// # Arguments
    /// - `param` - Organization and personal data of the organizer
    ///
    /// # Returns
    /// - `Ok(User)` - The created organizer
    /// - `Err(AppError::NotFound)` - Organization does not exist
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate username
    pub async fn insert_user(&self, param: CreateOrganizerParam) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        if OrganizationRepository::new(&txn)
            .find_by_id(param.organization_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Organization {} not found",
                param.organization_id
            )));
        }

        let user_repo = UserRepository::new(&txn);
        let user_id = user_repo
            .create(CreateUserParam {
                username: param.username,
                password: Uuid::new_v4().to_string(),
                first_name: param.first_name,
                last_name: param.last_name,
                email_address: param.email_address,
                user_type: UserType::Internal,
                enabled: true,
                valid_to: None,
                description: String::new(),
            })
            .await?;
        user_repo
            .link_to_organization(user_id, param.organization_id)
            .await?;

        let user = user_repo.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::InternalError(format!("User {} not found after creation", user_id))
        })?;

        txn.commit().await?;

        tracing::info!(
            "Created organizer {} for organization {}",
            user.username,
            param.organization_id
        );

        Ok(user)
    }

    /// Retrieves a user by ID.
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}
