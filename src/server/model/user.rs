//! User domain models and parameters.
//!
//! Users are either organizers (`INTERNAL`), machine clients (`API_KEY`) or customers who
//! signed in through the public login (`PUBLIC`). Only the latter may read their own
//! reservation history.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserType;

/// Application user without its credential.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    /// Whether the user may sign in.
    pub enabled: bool,
    pub user_type: UserType,
    /// Instant after which the account is no longer valid, if any.
    pub valid_to: Option<DateTime<Utc>>,
    pub description: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The stored password is dropped and never leaves the data layer.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email_address: entity.email_address,
            enabled: entity.enabled,
            user_type: entity.user_type,
            valid_to: entity.valid_to,
            description: entity.description,
        }
    }

    /// Whether this is an enabled customer account from the public login.
    pub fn is_public(&self) -> bool {
        self.enabled && self.user_type == UserType::Public
    }
}

/// Parameters for creating a user of any type.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Unique login name.
    pub username: String,
    /// Opaque credential stored as given.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub user_type: UserType,
    pub enabled: bool,
    pub valid_to: Option<DateTime<Utc>>,
    pub description: String,
}

/// Parameters for creating an organizer of an organization.
#[derive(Debug, Clone)]
pub struct CreateOrganizerParam {
    pub organization_id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}
