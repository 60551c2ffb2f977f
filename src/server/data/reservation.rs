//! Reservation ledger repository.
//!
//! Holds confirmed bookings. The `(date, time_slot_id, theme_id)` unique index
//! guarantees at most one row per slot key even when two transactions race past
//! the service-level availability check.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::reservation::{
    CreateReservationParam, Reservation, ReservationFilter, SlotKey,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation carrying confirmed payment info.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The stored reservation
    /// - `Err(DbErr)` - Database error, including a unique violation when the slot
    ///   key was booked concurrently
    pub async fn create(&self, param: CreateReservationParam) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            date: ActiveValue::Set(param.slot_key.date),
            time_slot_id: ActiveValue::Set(param.slot_key.time_slot_id),
            theme_id: ActiveValue::Set(param.slot_key.theme_id),
            member_id: ActiveValue::Set(param.member_id),
            payment_key: ActiveValue::Set(param.payment.payment_key),
            order_id: ActiveValue::Set(param.payment.order_id),
            amount: ActiveValue::Set(param.payment.amount),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Finds the reservation booking a slot key, if any.
    pub async fn find_by_slot_key(&self, slot_key: SlotKey) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Date.eq(slot_key.date))
            .filter(entity::reservation::Column::TimeSlotId.eq(slot_key.time_slot_id))
            .filter(entity::reservation::Column::ThemeId.eq(slot_key.theme_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Checks whether `member_id` holds the reservation for `slot_key`.
    pub async fn exists_for_member(&self, slot_key: SlotKey, member_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Date.eq(slot_key.date))
            .filter(entity::reservation::Column::TimeSlotId.eq(slot_key.time_slot_id))
            .filter(entity::reservation::Column::ThemeId.eq(slot_key.theme_id))
            .filter(entity::reservation::Column::MemberId.eq(member_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a member's reservations ordered by date.
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::MemberId.eq(member_id))
            .order_by_asc(entity::reservation::Column::Date)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Searches the ledger; every unset filter field matches all rows.
    ///
    /// Results are ordered by date, then id.
    pub async fn search(&self, filter: ReservationFilter) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(theme_id) = filter.theme_id {
            query = query.filter(entity::reservation::Column::ThemeId.eq(theme_id));
        }
        if let Some(member_id) = filter.member_id {
            query = query.filter(entity::reservation::Column::MemberId.eq(member_id));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(entity::reservation::Column::Date.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(entity::reservation::Column::Date.lte(date_to));
        }

        let entities = query
            .order_by_asc(entity::reservation::Column::Date)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets the ids of time slots already booked for a theme on a date.
    pub async fn get_booked_time_slot_ids(
        &self,
        date: NaiveDate,
        theme_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::TimeSlotId)
            .filter(entity::reservation::Column::Date.eq(date))
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the theme id of every reservation dated within `[from, to]`.
    ///
    /// One entry per reservation, so a theme appears as often as it was booked.
    pub async fn get_theme_ids_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::ThemeId)
            .filter(entity::reservation::Column::Date.between(from, to))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn count_by_theme(&self, theme_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_time_slot(&self, time_slot_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TimeSlotId.eq(time_slot_id))
            .count(self.db)
            .await
    }

    /// Deletes a reservation, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
