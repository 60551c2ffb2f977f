//! SeaORM entity models for the room escape schema.
//!
//! Tables mirror the migrations in the `migration` crate. Reservations and
//! waiting entries reference members, themes and time slots by id.

pub mod prelude;

pub mod member;
pub mod reservation;
pub mod theme;
pub mod time_slot;
pub mod waiting;
