//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*`
//! shorthand using defaults. Factories insert directly through SeaORM and return
//! entity models, bypassing the application's services.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::member::create_member(&db).await?;
//! let theme = factory::theme::create_theme(&db).await?;
//! let time_slot = factory::time_slot::create_time_slot(&db).await?;
//!
//! let reservation = factory::reservation::ReservationFactory::new(&db, &member, &theme, &time_slot)
//!     .date(tomorrow)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Members with a role and a stored password hash
//! - `theme` - Themes with unique names
//! - `time_slot` - Time slots with unique times
//! - `reservation` - Booked slots with payment info
//! - `waiting` - Queued requests with a submission timestamp
//! - `helpers` - Shared ID counter and dependency bundles

pub mod helpers;
pub mod member;
pub mod reservation;
pub mod theme;
pub mod time_slot;
pub mod waiting;

pub use member::{create_admin, create_member};
pub use reservation::create_reservation;
pub use theme::create_theme;
pub use time_slot::create_time_slot;
pub use waiting::create_waiting;
