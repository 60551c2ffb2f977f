//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::payment::PaymentClient;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn PaymentClient>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Payment gateway used to confirm bookings and promoted waiters.
    pub payment_client: Arc<dyn PaymentClient>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, payment_client: Arc<dyn PaymentClient>) -> Self {
        Self { db, payment_client }
    }
}
