//! Room Escape Test Utils
//!
//! Shared testing utilities for the room escape backend. Provides a builder for
//! test contexts backed by an in-memory SQLite database, plus factories that
//! insert members, themes, time slots, reservations and waiting entries with
//! sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_slot() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_reservation_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
