//! User fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating user entity models without database insertion.
//! The defaults describe an enabled public (customer) user, which is what most reservation
//! tests act as.

use entity::{sea_orm_active_enums::UserType, user};

/// Default test username.
pub const DEFAULT_USERNAME: &str = "test-user";

/// Default test password token.
pub const DEFAULT_PASSWORD: &str = "test-password";

/// Default first name.
pub const DEFAULT_FIRST_NAME: &str = "First";

/// Default last name.
pub const DEFAULT_LAST_NAME: &str = "Last";

/// Default email address.
pub const DEFAULT_EMAIL: &str = "email@example.org";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"test-user"`
/// - first_name / last_name: `"First"` / `"Last"`
/// - email_address: `"email@example.org"`
/// - enabled: `true`
/// - user_type: `UserType::Public`
/// - valid_to: `None`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let user = fixture::user::entity();
/// assert_eq!(user.user_type, UserType::Public);
/// ```
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    username: String,
    enabled: bool,
    user_type: UserType,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            username: DEFAULT_USERNAME.to_string(),
            enabled: true,
            user_type: UserType::Public,
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets whether the user is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the user type.
    pub fn user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            username: self.username,
            password: DEFAULT_PASSWORD.to_string(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            email_address: DEFAULT_EMAIL.to_string(),
            enabled: self.enabled,
            user_type: self.user_type,
            valid_to: None,
            description: String::new(),
        }
    }
}
