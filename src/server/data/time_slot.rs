//! Time slot data repository for database operations.

use chrono::NaiveTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::time_slot::TimeSlot;

pub struct TimeSlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeSlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, time: NaiveTime) -> Result<TimeSlot, DbErr> {
        let entity = entity::time_slot::ActiveModel {
            time: ActiveValue::Set(time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TimeSlot::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TimeSlot>, DbErr> {
        let entity = entity::prelude::TimeSlot::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TimeSlot::from_entity))
    }

    pub async fn exists_by_time(&self, time: NaiveTime) -> Result<bool, DbErr> {
        let count = entity::prelude::TimeSlot::find()
            .filter(entity::time_slot::Column::Time.eq(time))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every time slot ordered by time of day.
    pub async fn get_all(&self) -> Result<Vec<TimeSlot>, DbErr> {
        let entities = entity::prelude::TimeSlot::find()
            .order_by_asc(entity::time_slot::Column::Time)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TimeSlot::from_entity).collect())
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<TimeSlot>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::TimeSlot::find()
            .filter(entity::time_slot::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TimeSlot::from_entity).collect())
    }

    /// Deletes a time slot, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TimeSlot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
