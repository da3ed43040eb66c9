//! Boxoffice Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the boxoffice
//! reservation server. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the database connection and session
//! - **fixture / factory**: In-memory models and database-backed entity factories
//! - **TestError**: Error types that can occur during test setup
//!
//! Every `TestContext` owns its own in-memory database. Dropping the context discards all data
//! written during the test, on every exit path including a failed assertion, so tests never
//! need explicit cleanup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_reservation_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_reservation_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
