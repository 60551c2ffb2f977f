//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Booking rules, ownership checks and uniqueness validation
//! - **Orchestration**: Coordinating repositories and the payment gateway
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running each booking and cancellation atomically

pub mod member;
pub mod payment;
pub mod reservation;
pub mod theme;
pub mod time_slot;

#[cfg(test)]
mod test;
