//! Time slot factory for creating test time slot entities.

use crate::factory::helpers::next_id;
use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test time slots.
///
/// The default time is derived from the shared counter so that slots created in
/// the same test never collide on the unique `time` column.
pub struct TimeSlotFactory<'a> {
    db: &'a DatabaseConnection,
    time: NaiveTime,
}

impl<'a> TimeSlotFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let seconds = (next_id() % 86_400) as u32;
        Self {
            db,
            time: NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
                .unwrap_or(NaiveTime::MIN),
        }
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Builds and inserts the time slot entity into the database.
    pub async fn build(self) -> Result<entity::time_slot::Model, DbErr> {
        entity::time_slot::ActiveModel {
            time: ActiveValue::Set(self.time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a time slot with a unique default time.
pub async fn create_time_slot(db: &DatabaseConnection) -> Result<entity::time_slot::Model, DbErr> {
    TimeSlotFactory::new(db).build().await
}
