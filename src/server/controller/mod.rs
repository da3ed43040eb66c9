//! HTTP request handlers.
//!
//! Controllers resolve access through `AuthGuard`, convert DTOs into parameter types,
//! call the service layer and convert the resulting domain models back into DTOs.

pub mod event;
pub mod reservation;
pub mod user;
