//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait` so the services can run several of
//! them inside one `DatabaseTransaction`.

pub mod configuration;
pub mod event;
pub mod organization;
pub mod reservation;
pub mod ticket;
pub mod ticket_category;
pub mod user;

#[cfg(test)]
mod test;
