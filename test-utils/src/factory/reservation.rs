//! Reservation factory for creating booked slots directly in the ledger.

use crate::factory::helpers::next_id;
use chrono::{Local, NaiveDate};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations.
///
/// Requires the member, theme and time slot the reservation references. The date
/// defaults to today and the payment fields to unique placeholder values.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    time_slot_id: i32,
    theme_id: i32,
    member_id: i32,
    payment_key: String,
    order_id: String,
    amount: i64,
}

impl<'a> ReservationFactory<'a> {
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
            payment_key: format!("payment_key_{}", id),
            order_id: format!("order_{}", id),
            amount: 1000,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            date: ActiveValue::Set(self.date),
            time_slot_id: ActiveValue::Set(self.time_slot_id),
            theme_id: ActiveValue::Set(self.theme_id),
            member_id: ActiveValue::Set(self.member_id),
            payment_key: ActiveValue::Set(self.payment_key),
            order_id: ActiveValue::Set(self.order_id),
            amount: ActiveValue::Set(self.amount),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation for the given references on `date`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    member: &entity::member::Model,
    theme: &entity::theme::Model,
    time_slot: &entity::time_slot::Model,
    date: NaiveDate,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, member, theme, time_slot)
        .date(date)
        .build()
        .await
}
