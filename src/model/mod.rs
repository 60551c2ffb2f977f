//! Request and response DTOs of the HTTP API.
//!
//! These are the serde shapes exchanged with clients. Controllers convert them to
//! and from the server-side domain models in `server::model`.

pub mod api;
pub mod member;
pub mod reservation;
pub mod theme;
pub mod time_slot;
