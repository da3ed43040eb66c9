//! Request-scoped helpers built on the session.
//!
//! - `session` - Typed access to the values stored in the session
//! - `auth` - `AuthGuard` resolving the session user and checking permissions

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
