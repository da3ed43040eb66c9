//! Serializable data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod event;
pub mod reservation;
