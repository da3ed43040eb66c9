//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test business logic without database overhead
//! - **Default values**: Provide consistent defaults for factory builders
//! - **Conversion tests**: Test entity to domain model conversion without persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let user = fixture::user::entity();
//!
//! // Create with custom fields
//! let hidden = fixture::ticket_category::entity_builder()
//!     .hidden(true)
//!     .code(Some("SECRET"))
//!     .build();
//! ```

pub mod event;
pub mod organization;
pub mod ticket_category;
pub mod user;

pub use event::{entity as event_entity, entity_builder as event_entity_builder};
pub use organization::entity as organization_entity;
pub use ticket_category::{
    entity as ticket_category_entity, entity_builder as ticket_category_entity_builder,
};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
