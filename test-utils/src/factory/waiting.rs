//! Waiting factory for creating queued requests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Local, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test waiting entries.
///
/// `created_at` defaults to now; set it explicitly when a test depends on queue order.
pub struct WaitingFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    time_slot_id: i32,
    theme_id: i32,
    member_id: i32,
    payment_key: String,
    order_id: String,
    amount: i64,
    created_at: DateTime<Utc>,
}

impl<'a> WaitingFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        member: &entity::member::Model,
        theme: &entity::theme::Model,
        time_slot: &entity::time_slot::Model,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            date: Local::now().date_naive(),
            time_slot_id: time_slot.id,
            theme_id: theme.id,
            member_id: member.id,
            payment_key: format!("waiting_payment_key_{}", id),
            order_id: format!("waiting_order_{}", id),
            amount: 1000,
            created_at: Utc::now(),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn payment_key(mut self, payment_key: impl Into<String>) -> Self {
        self.payment_key = payment_key.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the waiting entity into the database.
    pub async fn build(self) -> Result<entity::waiting::Model, DbErr> {
        entity::waiting::ActiveModel {
            date: ActiveValue::Set(self.date),
            time_slot_id: ActiveValue::Set(self.time_slot_id),
            theme_id: ActiveValue::Set(self.theme_id),
            member_id: ActiveValue::Set(self.member_id),
            payment_key: ActiveValue::Set(self.payment_key),
            order_id: ActiveValue::Set(self.order_id),
            amount: ActiveValue::Set(self.amount),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a waiting entry for the given references on `date`.
pub async fn create_waiting(
    db: &DatabaseConnection,
    member: &entity::member::Model,
    theme: &entity::theme::Model,
    time_slot: &entity::time_slot::Model,
    date: NaiveDate,
) -> Result<entity::waiting::Model, DbErr> {
    WaitingFactory::new(db, member, theme, time_slot)
        .date(date)
        .build()
        .await
}
