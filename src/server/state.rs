//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use chrono::Duration;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::util::clock::Clock;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn Clock>` is a reference-counted pointer
/// - `Duration` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Time source for every time-dependent rule (sale windows, reservation expiry).
    ///
    /// Handlers and services never read the system time directly, which lets tests pin
    /// or advance the current instant.
    pub clock: Arc<dyn Clock>,

    /// How long a pending reservation holds its tickets.
    pub reservation_timeout: Duration,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `clock` - Time source
    /// - `reservation_timeout` - Validity of pending reservations
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, clock: Arc<dyn Clock>, reservation_timeout: Duration) -> Self {
        Self {
            db,
            clock,
            reservation_timeout,
        }
    }
}
