//! Service layer for business logic orchestration.
//!
//! This module contains service structs that implement business logic and orchestrate
//! operations between controllers and the data layer. Services work with domain models
//! and parameter types, validate business rules and run multi-step writes inside one
//! database transaction.

pub mod configuration;
pub mod event;
pub mod reservation;
pub mod user;

#[cfg(test)]
mod test;
