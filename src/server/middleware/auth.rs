use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{configuration::ConfigurationKey, user::User},
    service::configuration::ConfigurationService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// The public (customer) login is enabled.
    PublicLogin,
    /// The session user is an enabled `PUBLIC` user.
    PublicUser,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every permission.
    ///
    /// Configuration permissions are checked before the session, so a disabled feature is
    /// reported as such even to anonymous visitors.
    ///
    /// # Returns
    /// - `Ok(User)` - Signed-in user satisfying all permissions
    /// - `Err(AuthError::PublicLoginDisabled)` - Public login is not enabled
    /// - `Err(AuthError::UserNotInSession)` - Nobody is signed in
    /// - `Err(AuthError::UserNotInDatabase)` - The session user no longer exists
    /// - `Err(AuthError::NotPublicUser)` - The session user is not an enabled public user
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        if permissions.contains(&Permission::PublicLogin)
            && !ConfigurationService::new(self.db)
                .is_enabled(ConfigurationKey::OpenIdPublicEnabled)
                .await?
        {
            return Err(AuthError::PublicLoginDisabled.into());
        }

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::PublicLogin => {}
                Permission::PublicUser => {
                    if !user.is_public() {
                        return Err(AuthError::NotPublicUser(user_id).into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the session user, if any, without requiring one.
    ///
    /// A session pointing at a deleted user counts as anonymous.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}
