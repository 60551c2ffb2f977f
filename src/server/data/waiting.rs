//! Waiting list repository.
//!
//! Queue order within a slot key is `created_at` ascending, then `id` ascending.
//! The auto-increment id acts as the insertion sequence when two requests share a
//! timestamp.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::reservation::{CreateWaiterParam, SlotKey, Waiter};

pub struct WaitingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaitingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a waiter to the queue of its slot key.
    pub async fn create(&self, param: CreateWaiterParam) -> Result<Waiter, DbErr> {
        let entity = entity::waiting::ActiveModel {
            date: ActiveValue::Set(param.slot_key.date),
            time_slot_id: ActiveValue::Set(param.slot_key.time_slot_id),
            theme_id: ActiveValue::Set(param.slot_key.theme_id),
            member_id: ActiveValue::Set(param.member_id),
            payment_key: ActiveValue::Set(param.payment.payment_key),
            order_id: ActiveValue::Set(param.payment.order_id),
            amount: ActiveValue::Set(param.payment.amount),
            created_at: ActiveValue::Set(param.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Waiter::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Waiter>, DbErr> {
        let entity = entity::prelude::Waiting::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Waiter::from_entity))
    }

    /// Checks whether `member_id` is queued for `slot_key`.
    pub async fn exists_for_member(&self, slot_key: SlotKey, member_id: i32) -> Result<bool, DbErr> {
        let count = by_slot_key(slot_key)
            .filter(entity::waiting::Column::MemberId.eq(member_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the queue of a slot key, earliest first.
    pub async fn get_queue(&self, slot_key: SlotKey) -> Result<Vec<Waiter>, DbErr> {
        let entities = queue_order(by_slot_key(slot_key)).all(self.db).await?;

        Ok(entities.into_iter().map(Waiter::from_entity).collect())
    }

    /// 1-based rank of a waiter within its slot key's queue.
    ///
    /// Counts the waiters ahead of it: earlier `created_at`, or the same
    /// `created_at` with a lower id.
    pub async fn position_of(&self, waiter: &Waiter) -> Result<u64, DbErr> {
        let ahead = by_slot_key(waiter.slot_key)
            .filter(
                Condition::any()
                    .add(entity::waiting::Column::CreatedAt.lt(waiter.created_at))
                    .add(
                        Condition::all()
                            .add(entity::waiting::Column::CreatedAt.eq(waiter.created_at))
                            .add(entity::waiting::Column::Id.lt(waiter.id)),
                    ),
            )
            .count(self.db)
            .await?;

        Ok(ahead + 1)
    }

    /// 1-based rank of a member's entry for `slot_key`, if the member is queued.
    pub async fn position_of_member(
        &self,
        slot_key: SlotKey,
        member_id: i32,
    ) -> Result<Option<u64>, DbErr> {
        let entity = by_slot_key(slot_key)
            .filter(entity::waiting::Column::MemberId.eq(member_id))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(self.position_of(&Waiter::from_entity(entity)).await?)),
            None => Ok(None),
        }
    }

    /// Removes and returns the earliest waiter of a slot key.
    pub async fn pop_earliest(&self, slot_key: SlotKey) -> Result<Option<Waiter>, DbErr> {
        let Some(entity) = queue_order(by_slot_key(slot_key)).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Waiting::delete_by_id(entity.id)
            .exec(self.db)
            .await?;

        Ok(Some(Waiter::from_entity(entity)))
    }

    /// Gets a member's waiting entries ordered by date.
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<Waiter>, DbErr> {
        let entities = entity::prelude::Waiting::find()
            .filter(entity::waiting::Column::MemberId.eq(member_id))
            .order_by_asc(entity::waiting::Column::Date)
            .order_by_asc(entity::waiting::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Waiter::from_entity).collect())
    }

    /// Gets every waiter grouped by slot key, each group in queue order.
    pub async fn get_all(&self) -> Result<Vec<Waiter>, DbErr> {
        let query = entity::prelude::Waiting::find()
            .order_by_asc(entity::waiting::Column::Date)
            .order_by_asc(entity::waiting::Column::TimeSlotId)
            .order_by_asc(entity::waiting::Column::ThemeId);

        let entities = queue_order(query).all(self.db).await?;

        Ok(entities.into_iter().map(Waiter::from_entity).collect())
    }

    /// Deletes a waiter, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Waiting::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn by_slot_key(slot_key: SlotKey) -> Select<entity::prelude::Waiting> {
    entity::prelude::Waiting::find()
        .filter(entity::waiting::Column::Date.eq(slot_key.date))
        .filter(entity::waiting::Column::TimeSlotId.eq(slot_key.time_slot_id))
        .filter(entity::waiting::Column::ThemeId.eq(slot_key.theme_id))
}

fn queue_order(query: Select<entity::prelude::Waiting>) -> Select<entity::prelude::Waiting> {
    query
        .order_by_asc(entity::waiting::Column::CreatedAt)
        .order_by_asc(entity::waiting::Column::Id)
}
