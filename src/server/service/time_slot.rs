use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        reservation::ReservationRepository, theme::ThemeRepository,
        time_slot::TimeSlotRepository,
    },
    error::AppError,
    model::time_slot::{AvailableTime, TimeSlot},
    util::db::conflict_on_unique,
};

pub struct TimeSlotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeSlotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a time slot; `Conflict` when a slot already starts at `time`.
    pub async fn create(&self, time: NaiveTime) -> Result<TimeSlot, AppError> {
        let repo = TimeSlotRepository::new(self.db);

        if repo.exists_by_time(time).await? {
            return Err(AppError::Conflict(format!(
                "Time slot {} already exists",
                time.format("%H:%M")
            )));
        }

        let slot = repo
            .create(time)
            .await
            .map_err(|e| conflict_on_unique(e, "Time slot already exists"))?;

        Ok(slot)
    }

    pub async fn list(&self) -> Result<Vec<TimeSlot>, AppError> {
        Ok(TimeSlotRepository::new(self.db).get_all().await?)
    }

    /// Deletes a time slot that no reservation references.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TimeSlotRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Time slot {} not found", id)));
        }

        let reservations = ReservationRepository::new(self.db)
            .count_by_time_slot(id)
            .await?;
        if reservations > 0 {
            return Err(AppError::Conflict(format!(
                "Time slot {} is referenced by {} reservation(s)",
                id, reservations
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Lists every time slot with whether `theme_id` is booked at it on `date`.
    ///
    /// # Returns
    /// - `Ok(Vec<AvailableTime>)` - One entry per time slot, ordered by time
    /// - `Err(AppError::NotFound)` - Theme does not exist
    pub async fn available_times(
        &self,
        date: NaiveDate,
        theme_id: i32,
    ) -> Result<Vec<AvailableTime>, AppError> {
        if ThemeRepository::new(self.db)
            .find_by_id(theme_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Theme {} not found", theme_id)));
        }

        let booked: HashSet<i32> = ReservationRepository::new(self.db)
            .get_booked_time_slot_ids(date, theme_id)
            .await?
            .into_iter()
            .collect();

        let slots = TimeSlotRepository::new(self.db).get_all().await?;

        Ok(slots
            .into_iter()
            .map(|time_slot| AvailableTime {
                booked: booked.contains(&time_slot.id),
                time_slot,
            })
            .collect())
    }
}
