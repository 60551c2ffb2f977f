//! HTTP handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into service
//! parameters, call a service and convert the result back into a DTO.

pub mod auth;
pub mod member;
pub mod reservation;
pub mod theme;
pub mod time_slot;
pub mod waiting;
