//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through the entity models, so
//! they can prepare state for any layer without going through the server's repositories.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let organization = factory::organization::create_organization(&db).await?;
//!
//!     // Create with all dependencies
//!     let (organization, event, category, tickets) =
//!         factory::helpers::create_category_with_tickets(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let hidden = factory::ticket_category::TicketCategoryFactory::new(&db, event.id)
//!     .name("hidden")
//!     .hidden(true)
//!     .access_restricted(true)
//!     .code("SECRET")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `organization` - Create organization entities
//! - `user` - Create user entities
//! - `event` - Create event entities
//! - `ticket_category` - Create ticket category entities
//! - `ticket` - Create free tickets for a category
//! - `reservation` - Create reservation entities
//! - `configuration` - Create configuration entries
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod configuration;
pub mod event;
pub mod helpers;
pub mod organization;
pub mod reservation;
pub mod ticket;
pub mod ticket_category;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use configuration::create_configuration;
pub use event::create_event;
pub use organization::create_organization;
pub use reservation::create_reservation;
pub use ticket::create_tickets;
pub use ticket_category::create_category;
pub use user::create_user;
