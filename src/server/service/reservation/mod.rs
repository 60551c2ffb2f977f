//! Reservation orchestrator.
//!
//! Turns booking requests into confirmed reservations or waiting list entries,
//! and promotes waiters when a reservation is cancelled. Every creation and
//! cancellation runs in one serializable transaction; the payment gateway is
//! called inside it and voided when the transaction cannot be committed.
//!
//! The service is organized into separate modules by concern:
//! - `create` - Booking requests
//! - `cancel` - Reservation and waiter cancellation, promotion
//! - `list` - Member history and admin listings

pub mod cancel;
pub mod create;
pub mod list;

use sea_orm::DatabaseConnection;

use crate::server::{model::payment::PaymentInfo, service::payment::PaymentClient};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    /// Gateway used to confirm new bookings and promoted waiters
    payment: &'a dyn PaymentClient,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `payment` - Payment gateway client
    pub fn new(db: &'a DatabaseConnection, payment: &'a dyn PaymentClient) -> Self {
        Self { db, payment }
    }

    /// Voids a confirmed payment whose booking could not be stored.
    ///
    /// A failed void is logged and otherwise ignored; the caller reports the
    /// original failure.
    async fn void_payment(&self, payment: &PaymentInfo) {
        if let Err(err) = self
            .payment
            .cancel(&payment.payment_key, "Reservation could not be stored")
            .await
        {
            tracing::error!(
                "Failed to void payment {} (order {}): {}",
                payment.payment_key,
                payment.order_id,
                err
            );
        }
    }
}
