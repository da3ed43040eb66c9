use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Public (customer) login is not enabled by configuration.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Public user login is disabled")]
    PublicLoginDisabled,

    /// The session user is not an enabled public user.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is not an enabled public user")]
    NotPublicUser(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - No user in session
/// - 403 Forbidden - Public login disabled or user is not a public user
/// - 404 Not Found - Session user missing from database
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::PublicLoginDisabled | Self::NotPublicUser(_) => {
                (StatusCode::FORBIDDEN, "Access denied")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
